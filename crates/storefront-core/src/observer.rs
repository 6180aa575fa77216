//! # Order Observers
//!
//! Listeners the order notifies on every lifecycle event.
//!
//! ## Notification Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  order.add_item(..) / order.process_order(..)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  notify_observers(message)                                              │
//! │       │                                                                 │
//! │       ├──► observers[0].update(message)  ── Err? stop here, propagate   │
//! │       ├──► observers[1].update(message)                                 │
//! │       └──► ...                       (registration order)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no per-observer error isolation. An observer that fails keeps
//! every observer registered after it from hearing about the event.

use std::sync::Arc;

use crate::error::CoreResult;
use crate::sink::MessageSink;

/// Receives textual order notifications.
pub trait OrderObserver: Send + Sync {
    fn update(&self, message: &str) -> CoreResult<()>;
}

/// Delivers every notification over the email channel.
#[derive(Clone)]
pub struct EmailObserver {
    sink: Arc<dyn MessageSink>,
}

impl EmailObserver {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        EmailObserver { sink }
    }
}

impl OrderObserver for EmailObserver {
    fn update(&self, message: &str) -> CoreResult<()> {
        self.sink.emit(&format!("[Email] {}", message))
    }
}

/// Writes every notification to the order log.
#[derive(Clone)]
pub struct LogObserver {
    sink: Arc<dyn MessageSink>,
}

impl LogObserver {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        LogObserver { sink }
    }
}

impl OrderObserver for LogObserver {
    fn update(&self, message: &str) -> CoreResult<()> {
        self.sink.emit(&format!("[Log] {}", message))
    }
}
