//! Drag gesture handling.
//!
//! The host delivers the *cumulative* translation since the gesture began on
//! every `Changed` sample. Progress is recomputed from the drag baseline each
//! time instead of integrating per-frame deltas, so a dropped or reordered
//! sample self-corrects on the next one.

use slidesheet_core::math::Vec2;

use crate::state::{Progress, SettledState, SheetModel};

/// Height ratio (current / maximum) at or above which a release expands.
pub const SETTLE_RATIO: f32 = 0.5;

/// Phase of a host pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    Possible,
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

/// One sample from the host's pan gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    /// Translation since the gesture began, in points. Negative `y` is up.
    pub translation: Vec2,
}

impl GestureSample {
    pub fn new(phase: GesturePhase, translation: Vec2) -> Self {
        Self { phase, translation }
    }

    pub fn began() -> Self {
        Self::new(GesturePhase::Began, Vec2::ZERO)
    }

    pub fn changed(translation_y: f32) -> Self {
        Self::new(GesturePhase::Changed, Vec2::new(0.0, translation_y))
    }

    pub fn ended(translation_y: f32) -> Self {
        Self::new(GesturePhase::Ended, Vec2::new(0.0, translation_y))
    }
}

/// What a gesture sample did to the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Started { baseline: Progress },
    Moved { progress: Progress },
    Settled { target: SettledState, ratio: f32 },
}

/// Progress after dragging `translation_y` points from `baseline`.
///
/// Dragging up (negative `y`) grows the sheet. A non-positive `travel`
/// leaves the baseline unchanged.
pub fn progress_for_translation(baseline: Progress, translation_y: f32, travel: f32) -> Progress {
    if travel.is_nan() || travel <= 0.0 {
        return baseline;
    }
    let y_progress = -translation_y / travel;
    Progress::new(baseline.value() + y_progress)
}

/// Settle decision for a sheet released at `height`.
///
/// This compares the height against the maximum height, not progress
/// against 0.5. With a non-zero minimum height the effective progress
/// threshold is `(0.5 * max - min) / (max - min)`, which sits below 0.5.
pub fn settle_target(height: f32, maximum_height: f32) -> (SettledState, f32) {
    let ratio = height / maximum_height;
    let target = if ratio < SETTLE_RATIO {
        SettledState::Collapsed
    } else {
        SettledState::Expanded
    };
    (target, ratio)
}

/// Converts gesture samples into progress updates and settle decisions.
///
/// Owns all progress mutation while a drag is in flight.
#[derive(Debug, Default)]
pub struct DragController {
    baseline: Option<Progress>,
}

impl DragController {
    pub fn new() -> Self {
        Self { baseline: None }
    }

    pub fn is_active(&self) -> bool {
        self.baseline.is_some()
    }

    /// Progress recorded when the current drag began.
    pub fn baseline(&self) -> Option<Progress> {
        self.baseline
    }

    /// Record the current progress as the baseline and enter `Dragging`.
    pub fn on_drag_start(&mut self, model: &mut SheetModel) -> DragEvent {
        let baseline = model.progress();
        self.baseline = Some(baseline);
        model.begin_drag();
        tracing::debug!(baseline = baseline.value(), state = ?model.state(), "sheet drag started");
        DragEvent::Started { baseline }
    }

    /// Track the cumulative translation `delta_y` since the drag began.
    ///
    /// Starts a drag implicitly if the host never reported `Began`.
    pub fn on_drag_changed(&mut self, model: &mut SheetModel, delta_y: f32) -> DragEvent {
        let baseline = match self.baseline {
            Some(baseline) => baseline,
            None => {
                self.on_drag_start(model);
                model.progress()
            }
        };

        let progress = progress_for_translation(baseline, delta_y, model.config().travel());
        model.track(progress);
        tracing::trace!(
            delta_y,
            progress = progress.value(),
            height = model.current_height(),
            "sheet drag moved"
        );
        DragEvent::Moved { progress }
    }

    /// Decide which state to rest in and settle the model there.
    pub fn on_drag_end(&mut self, model: &mut SheetModel) -> DragEvent {
        self.baseline = None;
        let (target, ratio) =
            settle_target(model.current_height(), model.config().maximum_height());
        tracing::debug!(
            height = model.current_height(),
            ratio,
            target = ?target,
            "sheet drag released"
        );
        model.settle(target);
        DragEvent::Settled { target, ratio }
    }

    /// Route a host gesture sample.
    ///
    /// `Possible`, `Cancelled` and `Failed` are ignored.
    pub fn handle(&mut self, model: &mut SheetModel, sample: GestureSample) -> Option<DragEvent> {
        match sample.phase {
            GesturePhase::Began => Some(self.on_drag_start(model)),
            GesturePhase::Changed => Some(self.on_drag_changed(model, sample.translation.y)),
            GesturePhase::Ended => Some(self.on_drag_end(model)),
            GesturePhase::Possible | GesturePhase::Cancelled | GesturePhase::Failed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SheetConfig;
    use crate::state::SheetState;

    fn model() -> SheetModel {
        SheetModel::new(
            SheetConfig::new()
                .with_minimum_height(72.0)
                .with_maximum_height(270.0)
                .with_minimum_inset(0.0)
                .with_maximum_inset(16.0),
        )
    }

    #[test]
    fn test_drag_half_way_up() {
        let mut model = model();
        let mut drag = DragController::new();

        drag.on_drag_start(&mut model);
        assert!(model.state().is_dragging());

        let event = drag.on_drag_changed(&mut model, -99.0);
        assert_eq!(event, DragEvent::Moved { progress: Progress::new(0.5) });
        assert!((model.current_height() - 171.0).abs() < 1e-4);
        assert!((model.current_inset() - 8.0).abs() < 1e-4);

        let DragEvent::Settled { target, ratio } = drag.on_drag_end(&mut model) else {
            panic!("expected settle");
        };
        assert_eq!(target, SettledState::Expanded);
        assert!((ratio - 171.0 / 270.0).abs() < 1e-4);
        assert_eq!(model.state(), SheetState::Expanded);
        assert_eq!(model.current_height(), 270.0);
    }

    #[test]
    fn test_translation_is_cumulative() {
        let mut model = model();
        let mut drag = DragController::new();
        drag.on_drag_start(&mut model);

        drag.on_drag_changed(&mut model, -50.0);
        drag.on_drag_changed(&mut model, -99.0);
        // Second sample replaces the first rather than adding to it.
        assert!((model.progress().value() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_progress_clamped_past_bounds() {
        let mut model = model();
        let mut drag = DragController::new();
        drag.on_drag_start(&mut model);

        drag.on_drag_changed(&mut model, -1000.0);
        assert_eq!(model.progress(), Progress::EXPANDED);
        assert_eq!(model.current_height(), 270.0);

        drag.on_drag_changed(&mut model, 1000.0);
        assert_eq!(model.progress(), Progress::COLLAPSED);
        assert_eq!(model.current_height(), 72.0);
    }

    #[test]
    fn test_zero_travel_keeps_baseline() {
        let baseline = Progress::new(0.3);
        assert_eq!(progress_for_translation(baseline, -50.0, 0.0), baseline);
        assert_eq!(progress_for_translation(baseline, 50.0, -1.0), baseline);
        assert_eq!(progress_for_translation(baseline, 50.0, f32::NAN), baseline);
    }

    #[test]
    fn test_drag_at_large_heights() {
        let mut model = SheetModel::new(SheetConfig::new().with_minimum_height(1.0e8));
        let mut drag = DragController::new();
        drag.on_drag_start(&mut model);

        drag.on_drag_changed(&mut model, -4.0);
        let progress = model.progress().value();
        assert!(progress > 0.0 && progress <= 1.0);
        assert!(model.current_height() <= model.config().maximum_height());
    }

    #[test]
    fn test_drag_down_from_expanded() {
        let mut model = model();
        model.settle(SettledState::Expanded);
        let mut drag = DragController::new();

        drag.on_drag_start(&mut model);
        assert_eq!(drag.baseline(), Some(Progress::EXPANDED));
        drag.on_drag_changed(&mut model, 99.0);
        assert!((model.progress().value() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_settle_uses_height_ratio() {
        // 150 / 270 = 0.556
        assert_eq!(settle_target(150.0, 270.0).0, SettledState::Expanded);
        // 100 / 270 = 0.370
        assert_eq!(settle_target(100.0, 270.0).0, SettledState::Collapsed);
        // Exactly half expands.
        assert_eq!(settle_target(135.0, 270.0).0, SettledState::Expanded);
    }

    #[test]
    fn test_settle_threshold_below_half_progress() {
        let mut model = model();
        let mut drag = DragController::new();

        // Effective threshold: (135 - 72) / 198 ~= 0.318 progress.
        drag.on_drag_start(&mut model);
        drag.on_drag_changed(&mut model, -0.35 * 198.0);
        assert!(model.progress().value() < 0.5);
        let event = drag.on_drag_end(&mut model);
        assert!(matches!(
            event,
            DragEvent::Settled {
                target: SettledState::Expanded,
                ..
            }
        ));
    }

    #[test]
    fn test_changed_without_began_starts_drag() {
        let mut model = model();
        let mut drag = DragController::new();

        drag.handle(&mut model, GestureSample::changed(-99.0));
        assert!(drag.is_active());
        assert!(model.state().is_dragging());
        assert!((model.progress().value() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_other_phases_ignored() {
        let mut model = model();
        let mut drag = DragController::new();

        for phase in [GesturePhase::Possible, GesturePhase::Cancelled, GesturePhase::Failed] {
            let sample = GestureSample::new(phase, Vec2::new(0.0, -50.0));
            assert_eq!(drag.handle(&mut model, sample), None);
        }
        assert_eq!(model.state(), SheetState::Collapsed);
        assert_eq!(model.progress(), Progress::COLLAPSED);
    }
}
