pub mod generate_styled_frame;
pub mod ports;
