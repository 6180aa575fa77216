//! Console sink: the only place checkout output touches a terminal.

use std::io::{self, Write};

use storefront_core::sink::MessageSink;
use storefront_core::{CoreError, CoreResult};

/// Which standard stream a [`ConsoleSink`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Writes each line to stdout or stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    stream: Stream,
}

impl ConsoleSink {
    pub fn new(stream: Stream) -> Self {
        ConsoleSink { stream }
    }
}

impl MessageSink for ConsoleSink {
    fn emit(&self, line: &str) -> CoreResult<()> {
        let result = match self.stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{}", line),
            Stream::Stderr => writeln!(io::stderr().lock(), "{}", line),
        };
        result.map_err(|e| CoreError::Sink(e.to_string()))
    }
}
