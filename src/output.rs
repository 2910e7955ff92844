//! Output writing for the resolved correlation id
//!
//! The correlation id is the only thing ever written to stdout, as a
//! single line, so pipeline consumers capturing stdout see nothing else.

use std::io::Write;

use crate::error::{Result, SlipfindError};

/// Destination for the resolved correlation id
pub trait OutputSink {
    /// Write a single line to the output
    fn write_line(&mut self, text: &str) -> Result<()>;
}

/// Writes lines to standard output
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}").map_err(|e| SlipfindError::OutputWriteFailed {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BufferSink {
        lines: Vec<String>,
    }

    impl OutputSink for BufferSink {
        fn write_line(&mut self, text: &str) -> Result<()> {
            self.lines.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_sink_receives_single_line() {
        let mut sink = BufferSink { lines: Vec::new() };
        sink.write_line("corr-123").unwrap();
        assert_eq!(sink.lines, vec!["corr-123"]);
    }
}
