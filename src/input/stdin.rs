use crate::controllers::interactive::ports::CommandSource;
use std::io::{self, BufRead};

/// Reads one command batch per input line.
pub struct LineCommandSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineCommandSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineCommandSource<io::StdinLock<'static>> {
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> CommandSource for LineCommandSource<R> {
    fn next_batch(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();

        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);

        Ok(Some(line))
    }
}
