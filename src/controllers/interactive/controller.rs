use crate::config::ExplorerConfig;
use crate::controllers::interactive::errors::ControllerError;
use crate::controllers::interactive::ports::{CommandSource, FramePresenter};
use crate::core::actions::sample_grid::sample_grid;
use crate::core::navigation::batch::apply_batch;
use crate::core::navigation::viewport::Viewport;
use crate::core::render::frame_renderer::render_frame;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    AwaitingFirstFrame,
    AwaitingCommand,
    Terminated,
}

/// Drives the explore loop: render, wait for a command batch, apply it, render again if the
/// viewport changed.
pub struct InteractiveController<S, P> {
    config: ExplorerConfig,
    source: S,
    presenter: P,
    state: LoopState,
    grids_sampled: u64,
    frames_rendered: u64,
}

impl<S: CommandSource, P: FramePresenter> InteractiveController<S, P> {
    pub fn new(config: ExplorerConfig, source: S, presenter: P) -> Self {
        Self {
            config,
            source,
            presenter,
            state: LoopState::AwaitingFirstFrame,
            grids_sampled: 0,
            frames_rendered: 0,
        }
    }

    /// Runs until a quit command, end of input, or a fixed frame has been shown.
    pub fn run(&mut self) -> Result<(), ControllerError> {
        while self.step()? != LoopState::Terminated {}

        Ok(())
    }

    /// Advances the loop by one transition and returns the new state.
    pub fn step(&mut self) -> Result<LoopState, ControllerError> {
        self.state = match self.state {
            LoopState::AwaitingFirstFrame => {
                self.render()?;

                if self.config.fixed_frame {
                    LoopState::Terminated
                } else {
                    LoopState::AwaitingCommand
                }
            }
            LoopState::AwaitingCommand => self.handle_next_batch()?,
            LoopState::Terminated => LoopState::Terminated,
        };

        Ok(self.state)
    }

    fn handle_next_batch(&mut self) -> Result<LoopState, ControllerError> {
        let Some(batch) = self.source.next_batch().map_err(ControllerError::Input)? else {
            debug!("command input exhausted");
            return Ok(LoopState::Terminated);
        };

        let outcome = apply_batch(&mut self.config.viewport, &batch);

        if outcome.quit {
            debug!("quit requested");
            return Ok(LoopState::Terminated);
        }

        if outcome.dirty {
            self.render()?;
        }

        Ok(LoopState::AwaitingCommand)
    }

    fn render(&mut self) -> Result<(), ControllerError> {
        if let Err(err) = self.config.render.mode.resolve() {
            error!(error = %err, "frame not rendered");
            return self
                .presenter
                .report(&err)
                .map_err(ControllerError::Present);
        }

        let grid = sample_grid(&self.config.viewport, self.config.mode)?;
        self.grids_sampled += 1;

        let frame = render_frame(&grid, &self.config.render).map_err(ControllerError::Render)?;

        self.presenter
            .present(&frame)
            .map_err(ControllerError::Present)?;
        self.frames_rendered += 1;

        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.config.viewport
    }

    #[must_use]
    pub fn grids_sampled(&self) -> u64 {
        self.grids_sampled
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::render::errors::RenderError;
    use crate::core::render::render_mode::ModeSelection;
    use crate::core::render::rendered_frame::RenderedFrame;
    use std::collections::VecDeque;
    use std::io;

    struct ScriptedSource {
        batches: VecDeque<String>,
        reads: usize,
    }

    impl ScriptedSource {
        fn new(batches: &[&str]) -> Self {
            Self {
                batches: batches.iter().map(|b| b.to_string()).collect(),
                reads: 0,
            }
        }
    }

    impl CommandSource for ScriptedSource {
        fn next_batch(&mut self) -> io::Result<Option<String>> {
            self.reads += 1;
            Ok(self.batches.pop_front())
        }
    }

    struct FailingSource;

    impl CommandSource for FailingSource {
        fn next_batch(&mut self) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[derive(Default)]
    struct RecordingPresenter {
        frames: Vec<RenderedFrame>,
        errors: Vec<String>,
    }

    impl FramePresenter for RecordingPresenter {
        fn present(&mut self, frame: &RenderedFrame) -> io::Result<()> {
            self.frames.push(frame.clone());
            Ok(())
        }

        fn report(&mut self, error: &RenderError) -> io::Result<()> {
            self.errors.push(error.to_string());
            Ok(())
        }
    }

    fn small_config() -> ExplorerConfig {
        let region = ComplexRect::from_bounds(-2.0, 2.0, -1.0, 1.0).unwrap();

        ExplorerConfig {
            viewport: Viewport::new(region, 1, 0.5, 20).unwrap(),
            ..ExplorerConfig::default()
        }
    }

    fn controller(
        config: ExplorerConfig,
        batches: &[&str],
    ) -> InteractiveController<ScriptedSource, RecordingPresenter> {
        InteractiveController::new(
            config,
            ScriptedSource::new(batches),
            RecordingPresenter::default(),
        )
    }

    #[test]
    fn fixed_frame_renders_once_without_reading() {
        let config = ExplorerConfig {
            fixed_frame: true,
            ..small_config()
        };
        let mut controller = controller(config, &["wasd"]);

        controller.run().unwrap();

        assert_eq!(controller.state(), LoopState::Terminated);
        assert_eq!(controller.frames_rendered(), 1);
        assert_eq!(controller.source.reads, 0);
    }

    #[test]
    fn first_step_renders_before_reading() {
        let mut controller = controller(small_config(), &["x"]);

        assert_eq!(controller.step().unwrap(), LoopState::AwaitingCommand);
        assert_eq!(controller.frames_rendered(), 1);
        assert_eq!(controller.source.reads, 0);
    }

    #[test]
    fn dirty_batches_rerender_and_clean_batches_do_not() {
        let mut controller = controller(small_config(), &["d", "???", "rf"]);

        controller.run().unwrap();

        assert_eq!(controller.grids_sampled(), 3);
        assert_eq!(controller.frames_rendered(), 3);
        assert_eq!(controller.presenter().frames.len(), 3);
    }

    #[test]
    fn quit_skips_pending_render() {
        let mut controller = controller(small_config(), &["dx"]);

        controller.run().unwrap();

        assert_eq!(controller.frames_rendered(), 1);
        assert_eq!(controller.viewport().xmin(), -1.5);
    }

    #[test]
    fn end_of_input_terminates() {
        let mut controller = controller(small_config(), &[]);

        controller.run().unwrap();

        assert_eq!(controller.state(), LoopState::Terminated);
        assert_eq!(controller.source.reads, 1);
    }

    #[test]
    fn unknown_mode_is_reported_and_loop_continues() {
        let mut config = small_config();
        config.render.mode = ModeSelection::parse("sepia");
        let mut controller = controller(config, &["e", "x"]);

        controller.run().unwrap();

        assert_eq!(controller.grids_sampled(), 0);
        assert_eq!(controller.frames_rendered(), 0);
        assert_eq!(
            controller.presenter().errors,
            [
                "sepia is an invalid render mode!",
                "sepia is an invalid render mode!"
            ]
        );
        assert_eq!(controller.viewport().iteration_limit(), 120);
    }

    #[test]
    fn input_errors_end_the_loop() {
        let mut controller =
            InteractiveController::new(small_config(), FailingSource, RecordingPresenter::default());

        let result = controller.run();

        assert!(matches!(result, Err(ControllerError::Input(_))));
        assert_eq!(controller.frames_rendered(), 1);
    }

    #[test]
    fn terminated_is_absorbing() {
        let mut controller = controller(small_config(), &["x"]);

        controller.run().unwrap();

        assert_eq!(controller.step().unwrap(), LoopState::Terminated);
        assert_eq!(controller.frames_rendered(), 1);
    }
}
