//! Interactive controller for terminal fractal exploration.
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: a `CommandSource` yielding one line of navigation keys at a time
//! - **Output**: a `FramePresenter` receiving rendered frames and recoverable errors
//! - **Core**: domain actions from `core/` do the sampling and rendering

mod controller;
pub mod errors;
pub mod ports;

pub use controller::{InteractiveController, LoopState};
pub use errors::ControllerError;
pub use ports::{CommandSource, FramePresenter};
