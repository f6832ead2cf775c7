//! Slidesheet - a gesture-driven bottom sheet engine
//!
//! A bottom sheet is a panel anchored to the bottom of a container that the
//! user drags between a collapsed and an expanded state. This crate owns the
//! part that is independent of any UI toolkit:
//! - Clamped configuration with change tracking
//! - Drag gesture to progress conversion and the release settle decision
//! - Interpolated height, inset, dim overlay and content cross-fade
//! - Deferred, ordered application of tracking updates
//!
//! Rendering is delegated to a host-implemented [`Surface`].
//!
//! ## Quick Start
//!
//! ```rust
//! use slidesheet::{
//!     BottomSheet, SheetConfig, SheetContent, SheetGeometry, SheetStyle, Surface, Transition,
//! };
//!
//! struct NullSurface;
//!
//! impl Surface for NullSurface {
//!     type Container = ();
//!     type View = &'static str;
//!
//!     fn attach(&mut self, _container: &(), _content: &SheetContent<&'static str>) {}
//!     fn detach(&mut self) {}
//!     fn apply_geometry(&mut self, _geometry: &SheetGeometry, _transition: Transition) {}
//!     fn apply_style(&mut self, _style: &SheetStyle) {}
//! }
//!
//! let mut sheet = BottomSheet::new(SheetConfig::default(), NullSurface)
//!     .with_content(SheetContent::Single("now playing"));
//! sheet.attach(&()).unwrap();
//!
//! sheet.on_drag_start();
//! sheet.on_drag_changed(-99.0);
//! sheet.run_pending();
//! sheet.on_drag_end();
//!
//! assert_eq!(sheet.current_height(), 270.0);
//! ```

pub mod animation;
pub mod color;
pub mod config;
pub mod delegate;
pub mod dirty;
pub mod dispatch;
pub mod drag;
pub mod error;
pub mod layout;
pub mod sheet;
pub mod state;
pub mod surface;

pub use animation::{EasingFunction, GeometryTween, TweenState, TweenSurface};
pub use color::Color;
pub use config::{MIN_HEIGHT_FLOOR, SheetConfig, SheetStyle};
pub use delegate::{SheetDelegate, SheetEvent};
pub use dirty::SheetDirty;
pub use dispatch::{MainQueue, PendingUpdate};
pub use drag::{DragController, DragEvent, GesturePhase, GestureSample, SETTLE_RATIO, settle_target};
pub use error::{SheetError, SheetResult};
pub use layout::{LayoutApplier, SETTLE_DURATION, geometry_for_progress, geometry_for_state};
pub use sheet::BottomSheet;
pub use state::{Progress, SettledState, SheetModel, SheetState};
pub use surface::{ContentAlpha, ContentLayout, SheetContent, SheetGeometry, Surface, Transition};

static_assertions::assert_impl_all!(SheetGeometry: Copy, Send, Sync);
static_assertions::assert_impl_all!(SheetConfig: Clone, Send, Sync);
