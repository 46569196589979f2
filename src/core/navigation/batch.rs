use crate::core::navigation::command::NavigationCommand;
use crate::core::navigation::viewport::{Transition, Viewport};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchOutcome {
    /// The viewport changed and the next frame must be resampled.
    pub dirty: bool,
    pub quit: bool,
    /// Recognised commands processed, including a final quit.
    pub recognised: usize,
}

/// Applies every recognised command in `input`, left to right.
///
/// Unrecognised characters are skipped. A quit command stops the batch at once; commands
/// after it are not applied.
pub fn apply_batch(viewport: &mut Viewport, input: &str) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for command in input.chars().filter_map(NavigationCommand::from_key) {
        let transition = viewport.apply(command);
        outcome.recognised += 1;

        debug!(key = %command.key(), ?transition, "applied navigation command");

        match transition {
            Transition::Quit => {
                outcome.quit = true;
                return outcome;
            }
            Transition::Clamped(warning) => {
                warn!(command = command.display_name(), ?warning, "navigation value clamped");
            }
            Transition::Rejected(warning) => {
                warn!(command = command.display_name(), ?warning, "navigation command rejected");
            }
            Transition::Applied => {}
        }

        outcome.dirty |= transition.marks_dirty();
    }

    outcome
}
