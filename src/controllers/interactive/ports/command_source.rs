use std::io;

pub trait CommandSource {
    /// Blocks until the next line of command characters is available.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn next_batch(&mut self) -> io::Result<Option<String>>;
}
