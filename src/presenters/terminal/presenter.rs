use crate::controllers::interactive::ports::FramePresenter;
use crate::core::render::errors::RenderError;
use crate::core::render::rendered_frame::RenderedFrame;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Writes frames as ANSI text to any byte sink, normally standard output.
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalPresenter<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> FramePresenter for TerminalPresenter<W> {
    fn present(&mut self, frame: &RenderedFrame) -> io::Result<()> {
        if frame.clear_first {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        for line in &frame.lines {
            writeln!(self.out, "{}", line)?;
        }

        self.out.flush()
    }

    fn report(&mut self, error: &RenderError) -> io::Result<()> {
        writeln!(self.out, "{}", error)?;

        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(clear_first: bool) -> RenderedFrame {
        RenderedFrame {
            clear_first,
            lines: vec!["ab".to_string(), "\u{1b}[0m".to_string()],
        }
    }

    fn written(presenter: TerminalPresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn lines_are_newline_terminated() {
        let mut presenter = TerminalPresenter::new(Vec::new());

        presenter.present(&frame(false)).unwrap();

        assert_eq!(written(presenter), "ab\n\u{1b}[0m\n");
    }

    #[test]
    fn clear_first_clears_and_homes_cursor() {
        let mut presenter = TerminalPresenter::new(Vec::new());

        presenter.present(&frame(true)).unwrap();

        assert_eq!(written(presenter), "\u{1b}[2J\u{1b}[1;1Hab\n\u{1b}[0m\n");
    }

    #[test]
    fn report_prints_error_message() {
        let mut presenter = TerminalPresenter::new(Vec::new());
        let error = RenderError::UnknownMode {
            name: "sepia".to_string(),
        };

        presenter.report(&error).unwrap();

        assert_eq!(written(presenter), "sepia is an invalid render mode!\n");
    }
}
