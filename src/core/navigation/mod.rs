pub mod batch;
pub mod command;
pub mod viewport;
