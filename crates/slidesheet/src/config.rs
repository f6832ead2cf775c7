//! Sheet configuration.
//!
//! Every setter clamps instead of rejecting: the bounds are cosmetic and a
//! slightly-off value is more useful to the host than an error.

use crate::color::Color;
use crate::dirty::SheetDirty;

/// Smallest allowed collapsed height.
pub const MIN_HEIGHT_FLOOR: f32 = 10.0;

/// Minimum gap kept between the collapsed and expanded heights.
pub const MIN_TRAVEL: f32 = 1.0;

/// Geometry and appearance settings for a bottom sheet.
///
/// Invariants held by every setter:
/// - `minimum_height >= MIN_HEIGHT_FLOOR`
/// - `maximum_height > minimum_height`, at least [`MIN_TRAVEL`] apart where
///   `f32` can represent the gap
/// - insets and corner radius are `>= 0`
///
/// Equality compares the settings only, not pending [`dirty`](Self::dirty)
/// changes.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    minimum_height: f32,
    maximum_height: f32,
    minimum_inset: f32,
    maximum_inset: f32,
    horizontal_margin: f32,
    bottom_margin: f32,
    corner_radius: f32,
    show_overlay: bool,
    dims_background: bool,
    background_color: Color,
    dirty: SheetDirty,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            minimum_height: 72.0,
            maximum_height: 270.0,
            minimum_inset: 0.0,
            maximum_inset: 16.0,
            horizontal_margin: 16.0,
            bottom_margin: 16.0,
            corner_radius: 12.0,
            show_overlay: true,
            dims_background: true,
            background_color: Color::WHITE,
            dirty: SheetDirty::all(),
        }
    }
}

impl PartialEq for SheetConfig {
    fn eq(&self, other: &Self) -> bool {
        self.minimum_height == other.minimum_height
            && self.maximum_height == other.maximum_height
            && self.minimum_inset == other.minimum_inset
            && self.maximum_inset == other.maximum_inset
            && self.horizontal_margin == other.horizontal_margin
            && self.bottom_margin == other.bottom_margin
            && self.corner_radius == other.corner_radius
            && self.show_overlay == other.show_overlay
            && self.dims_background == other.dims_background
            && self.background_color == other.background_color
    }
}

/// Cosmetic state pushed to the surface alongside geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetStyle {
    pub corner_radius: f32,
    pub background_color: Color,
    pub horizontal_margin: f32,
    pub bottom_margin: f32,
    pub show_overlay: bool,
    pub dims_background: bool,
}

fn finite_or_keep(name: &str, value: f32, current: f32) -> Option<f32> {
    if value.is_finite() {
        Some(value)
    } else {
        tracing::warn!(field = name, value, current, "ignoring non-finite sheet config value");
        None
    }
}

/// Smallest expanded height allowed above `minimum`.
///
/// Past 2^24 adding [`MIN_TRAVEL`] rounds back to `minimum`, so fall back to
/// the next representable value.
fn travel_floor(minimum: f32) -> f32 {
    (minimum + MIN_TRAVEL).max(minimum.next_up())
}

fn clamp_min(name: &str, value: f32, floor: f32) -> f32 {
    if value < floor {
        tracing::warn!(field = name, value, clamped = floor, "sheet config value clamped");
        floor
    } else {
        value
    }
}

impl SheetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minimum_height(&self) -> f32 {
        self.minimum_height
    }

    pub fn maximum_height(&self) -> f32 {
        self.maximum_height
    }

    /// Distance the sheet travels between collapsed and expanded heights.
    pub fn travel(&self) -> f32 {
        self.maximum_height - self.minimum_height
    }

    pub fn minimum_inset(&self) -> f32 {
        self.minimum_inset
    }

    pub fn maximum_inset(&self) -> f32 {
        self.maximum_inset
    }

    pub fn horizontal_margin(&self) -> f32 {
        self.horizontal_margin
    }

    pub fn bottom_margin(&self) -> f32 {
        self.bottom_margin
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn show_overlay(&self) -> bool {
        self.show_overlay
    }

    pub fn dims_background(&self) -> bool {
        self.dims_background
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn style(&self) -> SheetStyle {
        SheetStyle {
            corner_radius: self.corner_radius,
            background_color: self.background_color,
            horizontal_margin: self.horizontal_margin,
            bottom_margin: self.bottom_margin,
            show_overlay: self.show_overlay,
            dims_background: self.dims_background,
        }
    }

    /// Changes accumulated since the last [`take_dirty`](Self::take_dirty).
    pub fn dirty(&self) -> SheetDirty {
        self.dirty
    }

    /// Return and clear the accumulated changes.
    pub fn take_dirty(&mut self) -> SheetDirty {
        std::mem::take(&mut self.dirty)
    }

    fn update_f32(field: &mut f32, value: f32, dirty: &mut SheetDirty, flag: SheetDirty) {
        if *field != value {
            *field = value;
            dirty.insert(flag);
        }
    }

    /// Set the collapsed height, clamped to at least [`MIN_HEIGHT_FLOOR`].
    ///
    /// If the new minimum reaches the maximum, the maximum is pushed up to
    /// keep [`MIN_TRAVEL`] between them.
    pub fn set_minimum_height(&mut self, value: f32) {
        let Some(value) = finite_or_keep("minimum_height", value, self.minimum_height) else {
            return;
        };
        // Leave room for a finite maximum above it.
        let value = clamp_min("minimum_height", value, MIN_HEIGHT_FLOOR).min(f32::MAX.next_down());
        Self::update_f32(&mut self.minimum_height, value, &mut self.dirty, SheetDirty::GEOMETRY);

        let floor = travel_floor(value);
        if self.maximum_height < floor {
            tracing::warn!(
                minimum_height = value,
                maximum_height = self.maximum_height,
                "raising maximum_height above minimum_height"
            );
            let dirty = &mut self.dirty;
            Self::update_f32(&mut self.maximum_height, floor, dirty, SheetDirty::GEOMETRY);
        }
    }

    /// Set the expanded height, clamped to stay above the collapsed height.
    pub fn set_maximum_height(&mut self, value: f32) {
        let Some(value) = finite_or_keep("maximum_height", value, self.maximum_height) else {
            return;
        };
        let value = clamp_min("maximum_height", value, travel_floor(self.minimum_height));
        Self::update_f32(&mut self.maximum_height, value, &mut self.dirty, SheetDirty::GEOMETRY);
    }

    /// Inset used when expanded, clamped to `>= 0`.
    pub fn set_minimum_inset(&mut self, value: f32) {
        let Some(value) = finite_or_keep("minimum_inset", value, self.minimum_inset) else {
            return;
        };
        let value = clamp_min("minimum_inset", value, 0.0);
        Self::update_f32(&mut self.minimum_inset, value, &mut self.dirty, SheetDirty::GEOMETRY);
    }

    /// Inset used when collapsed, clamped to `>= 0`.
    pub fn set_maximum_inset(&mut self, value: f32) {
        let Some(value) = finite_or_keep("maximum_inset", value, self.maximum_inset) else {
            return;
        };
        let value = clamp_min("maximum_inset", value, 0.0);
        Self::update_f32(&mut self.maximum_inset, value, &mut self.dirty, SheetDirty::GEOMETRY);
    }

    pub fn set_horizontal_margin(&mut self, value: f32) {
        let Some(value) = finite_or_keep("horizontal_margin", value, self.horizontal_margin) else {
            return;
        };
        Self::update_f32(&mut self.horizontal_margin, value, &mut self.dirty, SheetDirty::STYLE);
    }

    pub fn set_bottom_margin(&mut self, value: f32) {
        let Some(value) = finite_or_keep("bottom_margin", value, self.bottom_margin) else {
            return;
        };
        Self::update_f32(&mut self.bottom_margin, value, &mut self.dirty, SheetDirty::STYLE);
    }

    /// Corner radius, clamped to `>= 0`.
    pub fn set_corner_radius(&mut self, value: f32) {
        let Some(value) = finite_or_keep("corner_radius", value, self.corner_radius) else {
            return;
        };
        let value = clamp_min("corner_radius", value, 0.0);
        Self::update_f32(&mut self.corner_radius, value, &mut self.dirty, SheetDirty::STYLE);
    }

    pub fn set_show_overlay(&mut self, show: bool) {
        if self.show_overlay != show {
            self.show_overlay = show;
            self.dirty.insert(SheetDirty::OVERLAY);
        }
    }

    pub fn set_dims_background(&mut self, dims: bool) {
        if self.dims_background != dims {
            self.dims_background = dims;
            self.dirty.insert(SheetDirty::OVERLAY);
        }
    }

    pub fn set_background_color(&mut self, color: Color) {
        if self.background_color != color {
            self.background_color = color;
            self.dirty.insert(SheetDirty::STYLE);
        }
    }

    pub fn with_minimum_height(mut self, value: f32) -> Self {
        self.set_minimum_height(value);
        self
    }

    pub fn with_maximum_height(mut self, value: f32) -> Self {
        self.set_maximum_height(value);
        self
    }

    pub fn with_minimum_inset(mut self, value: f32) -> Self {
        self.set_minimum_inset(value);
        self
    }

    pub fn with_maximum_inset(mut self, value: f32) -> Self {
        self.set_maximum_inset(value);
        self
    }

    pub fn with_horizontal_margin(mut self, value: f32) -> Self {
        self.set_horizontal_margin(value);
        self
    }

    pub fn with_bottom_margin(mut self, value: f32) -> Self {
        self.set_bottom_margin(value);
        self
    }

    pub fn with_corner_radius(mut self, value: f32) -> Self {
        self.set_corner_radius(value);
        self
    }

    pub fn with_show_overlay(mut self, show: bool) -> Self {
        self.set_show_overlay(show);
        self
    }

    pub fn with_dims_background(mut self, dims: bool) -> Self {
        self.set_dims_background(dims);
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.set_background_color(color);
        self
    }
}
