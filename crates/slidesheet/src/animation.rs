//! Easing and geometry tweens for settle transitions.
//!
//! Surfaces that animate natively only need [`EasingFunction`] to pick a
//! matching curve. Surfaces that redraw every frame can wrap themselves in a
//! [`TweenSurface`], which turns animated requests into immediate updates
//! driven by [`TweenSurface::tick`].
//!
//! # Example
//!
//! ```ignore
//! let mut surface = TweenSurface::new(my_surface);
//! let mut sheet = BottomSheet::new(SheetConfig::default(), surface);
//!
//! // In the frame loop:
//! sheet.surface_mut().tick(delta_time);
//! ```

use slidesheet_core::math::lerp;

use crate::config::SheetStyle;
use crate::surface::{ContentAlpha, SheetContent, SheetGeometry, Surface, Transition};

/// Easing functions for settle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EasingFunction {
    /// Linear interpolation
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Cubic ease out
    CubicOut,
    /// Cubic ease in-out
    CubicInOut,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => t * (2.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            EasingFunction::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            EasingFunction::CubicInOut => {
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * t * t * t
                } else {
                    let t = t - 2.0;
                    0.5 * (t * t * t + 2.0)
                }
            }
        }
    }
}

/// Tween state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenState {
    Running,
    Completed,
}

/// Interpolates every field of a [`SheetGeometry`] over a fixed duration.
#[derive(Debug, Clone)]
pub struct GeometryTween {
    from: SheetGeometry,
    to: SheetGeometry,
    /// Duration in seconds
    duration: f32,
    elapsed: f32,
    easing: EasingFunction,
    state: TweenState,
}

impl GeometryTween {
    pub fn new(
        from: SheetGeometry,
        to: SheetGeometry,
        duration: f32,
        easing: EasingFunction,
    ) -> Self {
        let state = if duration > 0.0 {
            TweenState::Running
        } else {
            TweenState::Completed
        };
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
            state,
        }
    }

    pub fn target(&self) -> SheetGeometry {
        self.to
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    /// Geometry at the current point of the tween.
    pub fn value(&self) -> SheetGeometry {
        if self.state == TweenState::Completed {
            return self.to;
        }

        let t = self.easing.apply(self.elapsed / self.duration);
        let content = match (self.from.content, self.to.content) {
            (
                ContentAlpha::CrossFade {
                    collapsed: c0,
                    expanded: e0,
                },
                ContentAlpha::CrossFade {
                    collapsed: c1,
                    expanded: e1,
                },
            ) => ContentAlpha::CrossFade {
                collapsed: lerp(c0, c1, t),
                expanded: lerp(e0, e1, t),
            },
            (_, to) => to,
        };

        SheetGeometry {
            height: lerp(self.from.height, self.to.height, t),
            inset: lerp(self.from.inset, self.to.inset, t),
            overlay_alpha: lerp(self.from.overlay_alpha, self.to.overlay_alpha, t),
            content,
        }
    }

    /// Advance by `delta_time` seconds.
    ///
    /// Returns true while the tween is still running.
    pub fn update(&mut self, delta_time: f32) -> bool {
        if self.state == TweenState::Completed {
            return false;
        }

        self.elapsed += delta_time;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.state = TweenState::Completed;
            return false;
        }
        true
    }
}

/// Adapter that runs animated transitions for a surface that can only apply
/// geometry immediately.
pub struct TweenSurface<S> {
    inner: S,
    current: Option<SheetGeometry>,
    tween: Option<GeometryTween>,
}

impl<S: Surface> TweenSurface<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            current: None,
            tween: None,
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Last geometry forwarded to the inner surface.
    pub fn current(&self) -> Option<SheetGeometry> {
        self.current
    }

    /// Advance the running tween and forward the interpolated geometry.
    ///
    /// Returns true if another frame is needed.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };

        let running = tween.update(delta_time);
        let geometry = tween.value();
        if !running {
            self.tween = None;
        }
        self.forward(geometry);
        running
    }

    fn forward(&mut self, geometry: SheetGeometry) {
        self.current = Some(geometry);
        self.inner.apply_geometry(&geometry, Transition::Immediate);
    }
}

impl<S: Surface> Surface for TweenSurface<S> {
    type Container = S::Container;
    type View = S::View;

    fn attach(&mut self, container: &Self::Container, content: &SheetContent<Self::View>) {
        self.inner.attach(container, content);
    }

    fn detach(&mut self) {
        self.tween = None;
        self.current = None;
        self.inner.detach();
    }

    fn apply_geometry(&mut self, geometry: &SheetGeometry, transition: Transition) {
        match (transition, self.current) {
            (Transition::Animated { duration, easing }, Some(from)) if duration > 0.0 => {
                // Retargeting mid-flight starts from what is on screen now.
                self.tween = Some(GeometryTween::new(from, *geometry, duration, easing));
            }
            _ => {
                self.tween = None;
                self.forward(*geometry);
            }
        }
    }

    fn apply_style(&mut self, style: &SheetStyle) {
        self.inner.apply_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(height: f32, inset: f32, overlay: f32) -> SheetGeometry {
        SheetGeometry {
            height,
            inset,
            overlay_alpha: overlay,
            content: ContentAlpha::CrossFade {
                collapsed: 1.0 - overlay * 2.0,
                expanded: overlay * 2.0,
            },
        }
    }

    #[test]
    fn test_linear_easing() {
        let easing = EasingFunction::Linear;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(0.5), 0.5);
        assert_eq!(easing.apply(1.0), 1.0);
    }

    #[test]
    fn test_easings_hit_endpoints() {
        for easing in [
            EasingFunction::EaseIn,
            EasingFunction::EaseOut,
            EasingFunction::EaseInOut,
            EasingFunction::CubicOut,
            EasingFunction::CubicInOut,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn test_tween_update() {
        let mut tween = GeometryTween::new(
            geometry(72.0, 16.0, 0.0),
            geometry(270.0, 0.0, 0.5),
            0.2,
            EasingFunction::Linear,
        );

        assert_eq!(tween.value().height, 72.0);

        assert!(tween.update(0.1));
        let mid = tween.value();
        assert!((mid.height - 171.0).abs() < 0.01);
        assert!((mid.inset - 8.0).abs() < 0.01);
        assert!((mid.overlay_alpha - 0.25).abs() < 0.01);

        assert!(!tween.update(0.1));
        assert_eq!(tween.state(), TweenState::Completed);
        assert_eq!(tween.value(), geometry(270.0, 0.0, 0.5));
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let tween = GeometryTween::new(
            geometry(72.0, 16.0, 0.0),
            geometry(270.0, 0.0, 0.5),
            0.0,
            EasingFunction::EaseInOut,
        );
        assert_eq!(tween.state(), TweenState::Completed);
        assert_eq!(tween.value().height, 270.0);
    }
}
