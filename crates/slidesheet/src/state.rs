//! Sheet model: configuration, discrete state, and the geometry curves.
//!
//! All geometry is a linear interpolation between the collapsed endpoint
//! (progress 0) and the expanded endpoint (progress 1).

use slidesheet_core::math::lerp;

use crate::config::SheetConfig;
use crate::dirty::SheetDirty;

/// Opacity of the dim layer when the sheet is fully expanded.
pub const MAX_OVERLAY_ALPHA: f32 = 0.5;

/// Interpolation position between collapsed (0) and expanded (1).
///
/// Always within `[0, 1]`; construction clamps and maps NaN to 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f32);

impl Progress {
    pub const COLLAPSED: Progress = Progress(0.0);
    pub const EXPANDED: Progress = Progress(1.0);

    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            Progress(0.0)
        } else {
            Progress(value.clamp(0.0, 1.0))
        }
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for Progress {
    fn from(value: f32) -> Self {
        Progress::new(value)
    }
}

/// Discrete sheet state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetState {
    Collapsed,
    Expanded,
    /// A drag is in flight; `from` is the state it started in.
    Dragging { from: SettledState },
}

/// The two states a sheet can rest in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettledState {
    Collapsed,
    Expanded,
}

impl SettledState {
    /// Progress of this state's endpoint.
    pub fn progress(self) -> Progress {
        match self {
            SettledState::Collapsed => Progress::COLLAPSED,
            SettledState::Expanded => Progress::EXPANDED,
        }
    }
}

impl From<SettledState> for SheetState {
    fn from(state: SettledState) -> Self {
        match state {
            SettledState::Collapsed => SheetState::Collapsed,
            SettledState::Expanded => SheetState::Expanded,
        }
    }
}

impl SheetState {
    pub fn is_dragging(self) -> bool {
        matches!(self, SheetState::Dragging { .. })
    }

    /// The settled state, if the sheet is resting.
    pub fn settled(self) -> Option<SettledState> {
        match self {
            SheetState::Collapsed => Some(SettledState::Collapsed),
            SheetState::Expanded => Some(SettledState::Expanded),
            SheetState::Dragging { .. } => None,
        }
    }
}

/// Height for `progress`, within `[minimum_height, maximum_height]`.
pub fn height(config: &SheetConfig, progress: Progress) -> f32 {
    // Rounding mid-range can land an ulp past either bound.
    lerp(config.minimum_height(), config.maximum_height(), progress.value())
        .clamp(config.minimum_height(), config.maximum_height())
}

/// Inset for `progress`; shrinks from `maximum_inset` to `minimum_inset`.
pub fn inset(config: &SheetConfig, progress: Progress) -> f32 {
    let (from, to) = (config.maximum_inset(), config.minimum_inset());
    lerp(from, to, progress.value()).clamp(from.min(to), from.max(to))
}

/// Dim layer opacity for `progress`, reaching [`MAX_OVERLAY_ALPHA`] when expanded.
pub fn overlay_alpha(progress: Progress) -> f32 {
    progress.value() * MAX_OVERLAY_ALPHA
}

pub fn collapsed_content_alpha(progress: Progress) -> f32 {
    1.0 - progress.value()
}

pub fn expanded_content_alpha(progress: Progress) -> f32 {
    progress.value()
}

/// Configuration plus current state of one sheet.
///
/// `current_height` is tracked separately from `progress`: programmatic
/// collapse/expand compare against it, and bound changes re-snap it.
#[derive(Debug, Clone)]
pub struct SheetModel {
    config: SheetConfig,
    state: SheetState,
    progress: Progress,
    current_height: f32,
}

impl SheetModel {
    /// New model resting in the collapsed state.
    pub fn new(config: SheetConfig) -> Self {
        let current_height = config.minimum_height();
        Self {
            config,
            state: SheetState::Collapsed,
            progress: Progress::COLLAPSED,
            current_height,
        }
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn state(&self) -> SheetState {
        self.state
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn current_height(&self) -> f32 {
        self.current_height
    }

    /// Current inset derived from progress.
    pub fn current_inset(&self) -> f32 {
        inset(&self.config, self.progress)
    }

    /// Mutate the configuration and re-snap the tracked height.
    ///
    /// A resting sheet snaps to the bound for its state; a dragging sheet
    /// keeps its progress and re-derives height from it.
    pub fn update_config(&mut self, f: impl FnOnce(&mut SheetConfig)) {
        f(&mut self.config);
        self.resnap();
    }

    /// Drain the configuration changes accumulated since the last call.
    pub fn take_dirty(&mut self) -> SheetDirty {
        self.config.take_dirty()
    }

    fn resnap(&mut self) {
        self.current_height = match self.state {
            SheetState::Collapsed => self.config.minimum_height(),
            SheetState::Expanded => self.config.maximum_height(),
            SheetState::Dragging { .. } => height(&self.config, self.progress),
        };
    }

    /// Enter the dragging state, remembering where it started.
    pub(crate) fn begin_drag(&mut self) {
        let from = match self.state {
            SheetState::Collapsed => SettledState::Collapsed,
            SheetState::Expanded => SettledState::Expanded,
            SheetState::Dragging { from } => from,
        };
        self.state = SheetState::Dragging { from };
    }

    /// Move to `progress` while tracking a finger.
    pub(crate) fn track(&mut self, progress: Progress) {
        self.progress = progress;
        self.current_height = height(&self.config, progress);
    }

    /// Rest in `target`, snapping progress and height to its endpoint.
    pub(crate) fn settle(&mut self, target: SettledState) {
        self.state = target.into();
        self.progress = target.progress();
        self.current_height = match target {
            SettledState::Collapsed => self.config.minimum_height(),
            SettledState::Expanded => self.config.maximum_height(),
        };
    }

    /// Whether the tracked height already equals the bound for `target`.
    pub fn is_at(&self, target: SettledState) -> bool {
        let bound = match target {
            SettledState::Collapsed => self.config.minimum_height(),
            SettledState::Expanded => self.config.maximum_height(),
        };
        self.current_height == bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SheetConfig {
        SheetConfig::new()
            .with_minimum_height(72.0)
            .with_maximum_height(270.0)
            .with_minimum_inset(0.0)
            .with_maximum_inset(16.0)
    }

    #[test]
    fn test_progress_clamped() {
        assert_eq!(Progress::new(-0.5).value(), 0.0);
        assert_eq!(Progress::new(1.5).value(), 1.0);
        assert_eq!(Progress::new(f32::NAN).value(), 0.0);
        assert_eq!(Progress::from(0.25).value(), 0.25);
    }

    #[test]
    fn test_geometry_midpoint() {
        let config = config();
        let half = Progress::new(0.5);
        assert!((height(&config, half) - 171.0).abs() < 1e-4);
        assert!((inset(&config, half) - 8.0).abs() < 1e-4);
        assert!((overlay_alpha(half) - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_height_and_inset_bounds_monotonic() {
        let config = config();
        let mut last_height = f32::MIN;
        let mut last_inset = f32::MAX;
        for step in 0..=100 {
            let p = Progress::new(step as f32 / 100.0);
            let h = height(&config, p);
            let i = inset(&config, p);
            assert!(h >= config.minimum_height() && h <= config.maximum_height());
            assert!(i >= config.minimum_inset() && i <= config.maximum_inset());
            assert!(h >= last_height - 1e-4);
            assert!(i <= last_inset + 1e-4);
            last_height = h;
            last_inset = i;
        }
    }

    #[test]
    fn test_height_and_inset_stay_in_bounds_for_any_config() {
        let mut configs = vec![
            SheetConfig::new()
                .with_minimum_height(495.37225)
                .with_maximum_height(1520.0098),
        ];
        // Deterministic spread of awkward bounds.
        let mut seed: u32 = 0x9e37_79b9;
        for _ in 0..2000 {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let min = 10.0 + (seed >> 8) as f32 / 1024.0;
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let max = min + 1.0 + (seed >> 8) as f32 / 512.0;
            let inset = (seed & 0xff) as f32 / 7.0;
            configs.push(
                SheetConfig::new()
                    .with_minimum_height(min)
                    .with_maximum_height(max)
                    .with_maximum_inset(inset)
                    .with_minimum_inset(inset / 3.0),
            );
        }

        for config in &configs {
            for step in 0..=16 {
                let p = Progress::new(step as f32 / 16.0);
                let h = height(config, p);
                let i = inset(config, p);
                assert!(h >= config.minimum_height(), "{h} below {config:?}");
                assert!(h <= config.maximum_height(), "{h} above {config:?}");
                assert!(i >= config.minimum_inset() && i <= config.maximum_inset());
            }
            assert_eq!(height(config, Progress::EXPANDED), config.maximum_height());
            assert_eq!(inset(config, Progress::EXPANDED), config.minimum_inset());
        }
    }

    #[test]
    fn test_cross_fade_sums_to_one() {
        for step in 0..=20 {
            let p = Progress::new(step as f32 / 20.0);
            let sum = collapsed_content_alpha(p) + expanded_content_alpha(p);
            assert!((sum - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_model_starts_collapsed() {
        let model = SheetModel::new(config());
        assert_eq!(model.state(), SheetState::Collapsed);
        assert_eq!(model.current_height(), 72.0);
        assert!(model.is_at(SettledState::Collapsed));
    }

    #[test]
    fn test_bound_change_resnaps_height() {
        let mut model = SheetModel::new(config());
        model.update_config(|c| c.set_minimum_height(90.0));
        assert_eq!(model.current_height(), 90.0);

        model.settle(SettledState::Expanded);
        model.update_config(|c| c.set_maximum_height(320.0));
        assert_eq!(model.current_height(), 320.0);
        assert!(model.is_at(SettledState::Expanded));
    }

    #[test]
    fn test_drag_remembers_origin() {
        let mut model = SheetModel::new(config());
        model.settle(SettledState::Expanded);
        model.begin_drag();
        assert_eq!(
            model.state(),
            SheetState::Dragging {
                from: SettledState::Expanded
            }
        );
        model.track(Progress::new(0.5));
        assert!((model.current_height() - 171.0).abs() < 1e-4);
        assert!((model.current_inset() - 8.0).abs() < 1e-4);
    }
}
