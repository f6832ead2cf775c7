//! Geometry derivation and the push to the surface.
//!
//! [`LayoutApplier`] holds no sheet state. Given the configuration and either
//! a progress value (tracking) or a settled target, it derives a
//! [`SheetGeometry`] and hands it to the surface.

use crate::animation::EasingFunction;
use crate::config::SheetConfig;
use crate::state::{
    self, MAX_OVERLAY_ALPHA, Progress, SettledState, collapsed_content_alpha,
    expanded_content_alpha, overlay_alpha,
};
use crate::surface::{ContentAlpha, ContentLayout, SheetGeometry, Surface, Transition};

/// Duration of the settle animation in seconds.
pub const SETTLE_DURATION: f32 = 0.2;

/// Curve used by the settle animation.
pub const SETTLE_EASING: EasingFunction = EasingFunction::EaseInOut;

fn content_alpha(layout: ContentLayout, progress: Progress) -> ContentAlpha {
    match layout {
        ContentLayout::Single => ContentAlpha::Single,
        ContentLayout::Dual => ContentAlpha::CrossFade {
            collapsed: collapsed_content_alpha(progress),
            expanded: expanded_content_alpha(progress),
        },
    }
}

fn dimmed(config: &SheetConfig, alpha: f32) -> f32 {
    if config.dims_background() { alpha } else { 0.0 }
}

/// Geometry while tracking a finger at `progress`.
pub fn geometry_for_progress(
    config: &SheetConfig,
    progress: Progress,
    layout: ContentLayout,
) -> SheetGeometry {
    SheetGeometry {
        height: state::height(config, progress),
        inset: state::inset(config, progress),
        overlay_alpha: dimmed(config, overlay_alpha(progress)),
        content: content_alpha(layout, progress),
    }
}

/// Geometry of a resting state.
///
/// The overlay uses the fixed endpoint alpha rather than the progress at
/// which the gesture was released.
pub fn geometry_for_state(
    config: &SheetConfig,
    target: SettledState,
    layout: ContentLayout,
) -> SheetGeometry {
    let progress = target.progress();
    let overlay = match target {
        SettledState::Collapsed => 0.0,
        SettledState::Expanded => MAX_OVERLAY_ALPHA,
    };
    let height = match target {
        SettledState::Collapsed => config.minimum_height(),
        SettledState::Expanded => config.maximum_height(),
    };
    let inset = match target {
        SettledState::Collapsed => config.maximum_inset(),
        SettledState::Expanded => config.minimum_inset(),
    };

    SheetGeometry {
        height,
        inset,
        overlay_alpha: dimmed(config, overlay),
        content: content_alpha(layout, progress),
    }
}

/// Pushes derived geometry to a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutApplier {
    settle_duration: f32,
    settle_easing: EasingFunction,
}

impl Default for LayoutApplier {
    fn default() -> Self {
        Self {
            settle_duration: SETTLE_DURATION,
            settle_easing: SETTLE_EASING,
        }
    }
}

impl LayoutApplier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settle_transition(&self) -> Transition {
        Transition::Animated {
            duration: self.settle_duration,
            easing: self.settle_easing,
        }
    }

    /// Apply tracking geometry immediately.
    pub fn track<S: Surface>(
        &self,
        surface: &mut S,
        config: &SheetConfig,
        progress: Progress,
        layout: ContentLayout,
    ) -> SheetGeometry {
        let geometry = geometry_for_progress(config, progress, layout);
        surface.apply_geometry(&geometry, Transition::Immediate);
        geometry
    }

    /// Animate to the geometry of `target`.
    pub fn settle<S: Surface>(
        &self,
        surface: &mut S,
        config: &SheetConfig,
        target: SettledState,
        layout: ContentLayout,
    ) -> SheetGeometry {
        let geometry = geometry_for_state(config, target, layout);
        surface.apply_geometry(&geometry, self.settle_transition());
        geometry
    }

    /// Apply the geometry of `target` without animation.
    pub fn snap<S: Surface>(
        &self,
        surface: &mut S,
        config: &SheetConfig,
        target: SettledState,
        layout: ContentLayout,
    ) -> SheetGeometry {
        let geometry = geometry_for_state(config, target, layout);
        surface.apply_geometry(&geometry, Transition::Immediate);
        geometry
    }
}
