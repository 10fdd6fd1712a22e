use std::sync::Arc;

use media_types::{OnEvent, PlaybackEvent};
use parking_lot::Mutex;

/// Macro to initialize tracing for tests
///
/// Usage:
/// - `init_test_tracing!()` - uses DEBUG level (default)
/// - `init_test_tracing!(INFO)` - uses specified level
#[macro_export]
macro_rules! init_test_tracing {
    () => {
        init_test_tracing!(DEBUG);
    };
    ($level:ident) => {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::$level)
            .with_test_writer()
            .try_init();
    };
}

/// Collects every event reported through its observer.
#[derive(Clone, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<PlaybackEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// An observer that appends to this recorder.
    pub fn observer(&self) -> OnEvent {
        let events = self.events.clone();
        Arc::new(move |event: PlaybackEvent| events.lock().push(event))
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<PlaybackEvent> {
        self.events.lock().clone()
    }
}

// Re-export the macro
pub use crate::init_test_tracing;
