#![forbid(unsafe_code)]

//! Fixed-grid layout for BoxGrid: equal-cell geometry plus a registry of
//! externally owned views spanning one or more cells.
//!
//! # Role in BoxGrid
//! This crate is the layout core. [`GridSpec`] describes a grid (counts,
//! spacing, insets), [`GridGeometry`] turns it into cached pixel rectangles,
//! and [`BoxRegistry`] keeps externally owned views positioned over cell
//! spans. [`GridView`] composes all three with a
//! [`ViewHost`](boxgrid_core::ViewHost) backend into a self-contained
//! container.
//!
//! # Example
//!
//! ```
//! use boxgrid_core::{CellIndex, Insets, Rect};
//! use boxgrid_layout::{GridGeometry, GridSpec};
//!
//! let spec = GridSpec::new(10, 5)
//!     .insets(Insets::new(10.0, 20.0, 30.0, 40.0))
//!     .v_space(10.0)
//!     .h_space(20.0);
//! let mut geometry = GridGeometry::with_bounds(spec, Rect::new(0.0, 0.0, 375.0, 667.0));
//!
//! let first = geometry.cell_rect(CellIndex::new(0, 0)).unwrap();
//! assert_eq!((first.x, first.y), (20.0, 10.0));
//! ```

pub mod grid;
pub mod grid_view;
pub mod managed;
pub mod vfl;

pub use grid::{GridGeometry, GridSpec};
pub use grid_view::GridView;
pub use managed::{BoxRegistry, ManagedBox};
