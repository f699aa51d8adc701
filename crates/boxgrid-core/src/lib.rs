#![forbid(unsafe_code)]

//! Core: pixel geometry, cell addressing, and the view-host seam for BoxGrid.
//!
//! # Role in BoxGrid
//! `boxgrid-core` defines the value types the layout engine computes with
//! (`Rect`, `Size`, `Insets`, `CellIndex`) and the [`ViewHost`] trait, the
//! only seam through which the layout crate touches the outside world.
//!
//! # How it fits in the system
//! The layout crate (`boxgrid-layout`) partitions a container rectangle into
//! cells and drives a `ViewHost` to position externally owned views. Nothing
//! in this crate performs I/O; everything is plain arithmetic over `f32`
//! pixel coordinates.

pub mod cell;
pub mod geometry;
pub mod host;

pub use cell::CellIndex;
pub use geometry::{Insets, Point, Rect, Size};
pub use host::{ViewHost, ViewId};

#[cfg(any(test, feature = "test-helpers"))]
pub use host::{HostEvent, RecordingHost};
