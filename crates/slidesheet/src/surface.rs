//! The boundary between the sheet engine and the host UI toolkit.
//!
//! The engine never touches a view tree. It computes a [`SheetGeometry`] and
//! asks a [`Surface`] to apply it, either immediately (while tracking a
//! finger) or through an eased transition (when settling).

use slidesheet_core::geometry::{Rect, Size};

use crate::animation::EasingFunction;
use crate::color::Color;
use crate::config::SheetStyle;

/// Content views hosted by a sheet.
///
/// A sheet with a single view never cross-fades; a sheet with two fades the
/// collapsed view out as the expanded view fades in.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetContent<V> {
    Single(V),
    Dual { collapsed: V, expanded: V },
}

/// Whether a sheet shows one content view or cross-fades between two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentLayout {
    Single,
    Dual,
}

impl<V> SheetContent<V> {
    pub fn layout(&self) -> ContentLayout {
        match self {
            SheetContent::Single(_) => ContentLayout::Single,
            SheetContent::Dual { .. } => ContentLayout::Dual,
        }
    }

    /// The view shown while collapsed (the only view for `Single`).
    pub fn collapsed(&self) -> &V {
        match self {
            SheetContent::Single(view) => view,
            SheetContent::Dual { collapsed, .. } => collapsed,
        }
    }

    pub fn expanded(&self) -> Option<&V> {
        match self {
            SheetContent::Single(_) => None,
            SheetContent::Dual { expanded, .. } => Some(expanded),
        }
    }
}

/// Content opacity for a geometry snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentAlpha {
    /// Only one view; it is always fully visible.
    Single,
    /// Two views cross-fading; `collapsed + expanded == 1`.
    CrossFade { collapsed: f32, expanded: f32 },
}

/// Everything the surface needs to lay out the sheet for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    pub height: f32,
    pub inset: f32,
    pub overlay_alpha: f32,
    pub content: ContentAlpha,
}

impl SheetGeometry {
    /// Sheet rectangle inside a container of the given size.
    ///
    /// The sheet spans the container width minus the inset on both sides and
    /// sits `inset` above the bottom edge.
    pub fn frame(&self, container: Size<f32>) -> Rect<f32> {
        let width = (container.width - 2.0 * self.inset).max(0.0);
        Rect::new(
            self.inset,
            container.height - self.inset - self.height,
            width,
            self.height,
        )
    }

    /// Area left for content once the style's margins are applied.
    pub fn content_frame(&self, container: Size<f32>, style: &SheetStyle) -> Rect<f32> {
        self.frame(container)
            .shrink(style.horizontal_margin, style.bottom_margin)
    }

    /// Color of the dim layer behind the sheet.
    pub fn overlay_color(&self) -> Color {
        Color::BLACK.with_alpha(self.overlay_alpha)
    }

    pub fn collapsed_alpha(&self) -> f32 {
        match self.content {
            ContentAlpha::Single => 1.0,
            ContentAlpha::CrossFade { collapsed, .. } => collapsed,
        }
    }

    /// Opacity of the expanded view, `None` when there is no such view.
    pub fn expanded_alpha(&self) -> Option<f32> {
        match self.content {
            ContentAlpha::Single => None,
            ContentAlpha::CrossFade { expanded, .. } => Some(expanded),
        }
    }
}

/// How a geometry change should reach the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Apply on this frame; used while tracking a finger.
    Immediate,
    /// Animate over `duration` seconds.
    Animated {
        duration: f32,
        easing: EasingFunction,
    },
}

impl Transition {
    pub fn is_animated(&self) -> bool {
        matches!(self, Transition::Animated { .. })
    }

    pub fn duration(&self) -> Option<f32> {
        match self {
            Transition::Immediate => None,
            Transition::Animated { duration, .. } => Some(*duration),
        }
    }
}

/// Host-side rendering of a sheet.
///
/// Implemented by the UI layer (a retained scene graph, a DOM adapter, an
/// immediate-mode redraw...). Called only from the thread that owns the sheet.
pub trait Surface {
    /// Host container the sheet is attached into.
    type Container: ?Sized;
    /// Host view handle used for sheet content.
    type View;

    /// Insert the sheet and its content into `container`.
    fn attach(&mut self, container: &Self::Container, content: &SheetContent<Self::View>);

    /// Remove the sheet from its container.
    fn detach(&mut self);

    /// Lay the sheet out with `geometry`.
    fn apply_geometry(&mut self, geometry: &SheetGeometry, transition: Transition);

    /// Update cosmetic properties (corner radius, colors, margins, overlay flags).
    fn apply_style(&mut self, style: &SheetStyle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_variants() {
        let single = SheetContent::Single("peek");
        assert_eq!(single.layout(), ContentLayout::Single);
        assert_eq!(*single.collapsed(), "peek");
        assert!(single.expanded().is_none());

        let dual = SheetContent::Dual {
            collapsed: "peek",
            expanded: "detail",
        };
        assert_eq!(dual.layout(), ContentLayout::Dual);
        assert_eq!(dual.expanded(), Some(&"detail"));
    }

    #[test]
    fn test_frame_in_container() {
        let geometry = SheetGeometry {
            height: 171.0,
            inset: 8.0,
            overlay_alpha: 0.25,
            content: ContentAlpha::Single,
        };
        let frame = geometry.frame(Size::new(320.0, 640.0));
        assert_eq!(frame, Rect::new(8.0, 461.0, 304.0, 171.0));
        assert_eq!(frame.bottom(), 632.0);
        assert_eq!(geometry.overlay_color(), Color::rgba(0.0, 0.0, 0.0, 0.25));
    }

    #[test]
    fn test_single_content_alpha() {
        let geometry = SheetGeometry {
            height: 72.0,
            inset: 16.0,
            overlay_alpha: 0.0,
            content: ContentAlpha::Single,
        };
        assert_eq!(geometry.collapsed_alpha(), 1.0);
        assert_eq!(geometry.expanded_alpha(), None);
    }
}
