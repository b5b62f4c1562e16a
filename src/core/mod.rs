pub mod cook_agent;
pub mod flow;
pub mod imaging;
pub mod menu_agent;
