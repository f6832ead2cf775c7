//! Surface double that records calls instead of laying out views.

use std::sync::Arc;

use parking_lot::Mutex;
use slidesheet::{ContentLayout, SheetContent, SheetGeometry, SheetStyle, Surface, Transition};

/// Records a surface call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Attach {
        container: String,
        layout: ContentLayout,
    },
    Detach,
    Geometry {
        geometry: SheetGeometry,
        transition: Transition,
    },
    Style(SheetStyle),
}

/// Surface double for sheets hosted in a named container.
///
/// # Interior Mutability
///
/// The call log sits behind `Arc<parking_lot::Mutex<_>>` so clones handed
/// to a sheet and kept by the test observe the same calls.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Arc<Mutex<Vec<SurfaceCall>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    /// Every geometry pushed, with its transition.
    pub fn geometries(&self) -> Vec<(SheetGeometry, Transition)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Geometry {
                    geometry,
                    transition,
                } => Some((*geometry, *transition)),
                _ => None,
            })
            .collect()
    }

    pub fn last_geometry(&self) -> Option<(SheetGeometry, Transition)> {
        self.geometries().pop()
    }

    pub fn last_style(&self) -> Option<SheetStyle> {
        self.calls.lock().iter().rev().find_map(|call| match call {
            SurfaceCall::Style(style) => Some(*style),
            _ => None,
        })
    }

    pub fn count_animated(&self) -> usize {
        self.geometries()
            .iter()
            .filter(|(_, transition)| transition.is_animated())
            .count()
    }

    pub fn count_immediate(&self) -> usize {
        self.geometries()
            .iter()
            .filter(|(_, transition)| !transition.is_animated())
            .count()
    }

    pub fn count_styles(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, SurfaceCall::Style(_)))
            .count()
    }

    pub fn count_attaches(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, SurfaceCall::Attach { .. }))
            .count()
    }

    pub fn count_detaches(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, SurfaceCall::Detach))
            .count()
    }
}

impl Surface for RecordingSurface {
    type Container = str;
    type View = &'static str;

    fn attach(&mut self, container: &str, content: &SheetContent<&'static str>) {
        self.calls.lock().push(SurfaceCall::Attach {
            container: container.to_string(),
            layout: content.layout(),
        });
    }

    fn detach(&mut self) {
        self.calls.lock().push(SurfaceCall::Detach);
    }

    fn apply_geometry(&mut self, geometry: &SheetGeometry, transition: Transition) {
        self.calls.lock().push(SurfaceCall::Geometry {
            geometry: *geometry,
            transition,
        });
    }

    fn apply_style(&mut self, style: &SheetStyle) {
        self.calls.lock().push(SurfaceCall::Style(*style));
    }
}
