//! Observer notifications from the sheet to its host.

use crate::state::Progress;

/// Host callbacks.
///
/// `on_collapsed` and `on_expanded` fire when a settle is *requested*, before
/// its animation completes. `on_progress_changed` fires once for every drag
/// update, as it is applied or when a detach or programmatic transition
/// drops it from the queue.
pub trait SheetDelegate {
    fn on_collapsed(&mut self) {}

    fn on_expanded(&mut self) {}

    fn on_progress_changed(&mut self, _progress: Progress) {}
}

/// A delegate notification as a value, for hosts that forward into a channel
/// or log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetEvent {
    Collapsed,
    Expanded,
    ProgressChanged(Progress),
}

impl SheetEvent {
    /// Deliver this event to `delegate`.
    pub fn dispatch(self, delegate: &mut dyn SheetDelegate) {
        match self {
            SheetEvent::Collapsed => delegate.on_collapsed(),
            SheetEvent::Expanded => delegate.on_expanded(),
            SheetEvent::ProgressChanged(progress) => delegate.on_progress_changed(progress),
        }
    }
}
