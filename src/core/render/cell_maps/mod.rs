pub mod channel;
pub mod factory;
pub mod number;
pub mod palette;
