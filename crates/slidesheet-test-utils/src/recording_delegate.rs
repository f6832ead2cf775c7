//! Delegate double that records notifications.

use std::sync::Arc;

use parking_lot::Mutex;
use slidesheet::{Progress, SheetDelegate, SheetEvent};

/// Records every delegate notification in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingDelegate {
    events: Arc<Mutex<Vec<SheetEvent>>>,
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notifications received so far.
    pub fn events(&self) -> Vec<SheetEvent> {
        self.events.lock().clone()
    }

    /// Progress values reported through `on_progress_changed`, in order.
    pub fn progress_values(&self) -> Vec<f32> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                SheetEvent::ProgressChanged(progress) => Some(progress.value()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: SheetEvent) -> usize {
        self.events.lock().iter().filter(|e| **e == wanted).count()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl SheetDelegate for RecordingDelegate {
    fn on_collapsed(&mut self) {
        self.events.lock().push(SheetEvent::Collapsed);
    }

    fn on_expanded(&mut self) {
        self.events.lock().push(SheetEvent::Expanded);
    }

    fn on_progress_changed(&mut self, progress: Progress) {
        self.events.lock().push(SheetEvent::ProgressChanged(progress));
    }
}
