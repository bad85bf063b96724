use std::io::{self, Write};

/// A line-oriented destination for `print` statements.
///
/// The executor calls [`OutputSink::write_line`] once per executed `print`,
/// in execution order, with the stringified value. How lines are terminated
/// is up to the sink.
pub trait OutputSink {
    /// Writes one printed value.
    ///
    /// # Errors
    /// Returns an I/O error if the value could not be written.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Writes each printed value to standard output, followed by a newline.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")
    }
}

/// Collects printed values in memory, one entry per `print`.
///
/// # Example
/// ```
/// use impish::interpreter::output::OutputSink;
///
/// let mut lines: Vec<String> = Vec::new();
/// lines.write_line("20").unwrap();
///
/// assert_eq!(lines, vec!["20".to_string()]);
/// ```
impl OutputSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}
