pub mod order_app;

pub use order_app::{run_order, run_order_with, write_transcript};
