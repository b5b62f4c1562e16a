// Domain layer: menu data, conversation messages and the ports the agents talk through.

pub mod catalog;
pub mod model;
pub mod ports;
