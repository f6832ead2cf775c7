//! Slidesheet Core
//!
//! Shared utilities for the slidesheet crates: logging bootstrap, profiling
//! hooks, math re-exports and small geometry types.

pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
