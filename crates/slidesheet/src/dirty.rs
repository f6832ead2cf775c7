//! Change tracking between configuration setters and the surface.

use bitflags::bitflags;

bitflags! {
    /// What a configuration change invalidated.
    ///
    /// Setters on [`SheetConfig`](crate::SheetConfig) accumulate these; the
    /// sheet drains them and pushes only the affected state to its surface.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SheetDirty: u8 {
        /// Height or inset bounds changed; geometry must be re-derived.
        const GEOMETRY = 1 << 0;
        /// Corner radius, background color or margins changed.
        const STYLE    = 1 << 1;
        /// Overlay visibility or dimming changed.
        const OVERLAY  = 1 << 2;
    }
}

impl SheetDirty {
    /// Changes that require a fresh geometry snapshot.
    pub const NEEDS_GEOMETRY: Self = Self::GEOMETRY.union(Self::OVERLAY);

    /// Changes that require a fresh style snapshot.
    pub const NEEDS_STYLE: Self = Self::STYLE.union(Self::OVERLAY);

    pub fn needs_geometry(self) -> bool {
        self.intersects(Self::NEEDS_GEOMETRY)
    }

    pub fn needs_style(self) -> bool {
        self.intersects(Self::NEEDS_STYLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_touches_both() {
        let dirty = SheetDirty::OVERLAY;
        assert!(dirty.needs_geometry());
        assert!(dirty.needs_style());
    }

    #[test]
    fn test_style_only() {
        let dirty = SheetDirty::STYLE;
        assert!(!dirty.needs_geometry());
        assert!(dirty.needs_style());
        assert!(!SheetDirty::empty().needs_style());
    }
}
