pub mod core;

mod config;
mod controllers;
mod input;
mod logging;
mod presenters;

pub use config::{ConfigError, ConfigOptions, ExplorerConfig};
pub use controllers::interactive::{
    CommandSource, ControllerError, FramePresenter, InteractiveController, LoopState,
};
pub use crate::core::render::errors::RenderError;
pub use crate::core::render::rendered_frame::RenderedFrame;
pub use input::cli::{Cli, normalize_args};
pub use input::stdin::LineCommandSource;
pub use logging::init_logging;
pub use presenters::terminal::TerminalPresenter;
