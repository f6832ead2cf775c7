//! Test utilities for slidesheet hosts.
//!
//! This crate provides recording doubles for the two seams a sheet talks
//! through:
//!
//! - [`RecordingSurface`] - a [`Surface`](slidesheet::Surface) that records
//!   every call instead of touching a view tree
//! - [`RecordingDelegate`] - a [`SheetDelegate`](slidesheet::SheetDelegate)
//!   that records every notification
//!
//! Both are cheap to clone; clones share one log, so a test can keep a handle
//! after moving the double into a sheet.
//!
//! # Example
//!
//! ```rust
//! use slidesheet::{BottomSheet, SheetConfig, SheetContent, SheetEvent};
//! use slidesheet_test_utils::{RecordingDelegate, RecordingSurface};
//!
//! let surface = RecordingSurface::new();
//! let delegate = RecordingDelegate::new();
//! let mut sheet = BottomSheet::new(SheetConfig::default(), surface.clone())
//!     .with_content(SheetContent::Single("peek"))
//!     .with_delegate(delegate.clone());
//!
//! sheet.attach("root").unwrap();
//! assert!(sheet.expand());
//!
//! assert_eq!(surface.count_animated(), 1);
//! assert_eq!(delegate.events(), vec![SheetEvent::Expanded]);
//! ```

pub mod recording_delegate;
pub mod recording_surface;

pub use recording_delegate::*;
pub use recording_surface::*;
