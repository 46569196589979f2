//! Port definitions for the interactive controller.
//!
//! The controller reads command batches from a [`CommandSource`] and hands finished frames to a
//! [`FramePresenter`]; neither knows about terminals.

pub mod command_source;
pub mod frame_presenter;

pub use command_source::CommandSource;
pub use frame_presenter::FramePresenter;
