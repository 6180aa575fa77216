//! # Message Sinks
//!
//! The output channel observers and payment processors write to.
//!
//! ```text
//! EmailObserver ──┐
//! LogObserver ────┼──► Arc<dyn MessageSink> ──► stdout (CLI) / memory (tests)
//! PixProcessor ───┘
//! ```
//!
//! The core never prints. Whatever owns the process decides where lines go
//! by choosing the sink.

use std::sync::{Arc, Mutex};

use crate::error::{CoreError, CoreResult};

/// A line-oriented output channel.
pub trait MessageSink: Send + Sync {
    /// Writes one line. A failure here aborts the notification or payment
    /// that produced the line.
    fn emit(&self, line: &str) -> CoreResult<()>;
}

/// Sink that records every line in memory.
///
/// Clones share the same buffer, so a test can keep one handle and give the
/// other to an observer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far, in order.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Wraps a clone of this sink for injection.
    pub fn shared(&self) -> Arc<dyn MessageSink> {
        Arc::new(self.clone())
    }
}

impl MessageSink for MemorySink {
    fn emit(&self, line: &str) -> CoreResult<()> {
        self.lines
            .lock()
            .map_err(|_| CoreError::Sink("memory sink lock poisoned".to_string()))?
            .push(line.to_string());
        Ok(())
    }
}
