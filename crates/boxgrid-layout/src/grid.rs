//! Equal-cell grid geometry with a lazily populated rectangle cache.
//!
//! A grid partitions the container's content frame (bounds minus insets)
//! into `rows × columns` equal cells separated by fixed spacing. All cells
//! share one derived cell size; per-cell rectangles and the cell size are
//! memoized until [`GridGeometry::invalidate`] runs.
//!
//! Degenerate geometry is deliberate: when spacing or insets exceed the
//! available space, cell sizes go zero or negative and flow through to the
//! produced rectangles. Callers treat those as "render nothing", never as
//! errors.

use boxgrid_core::{CellIndex, Insets, Rect, Size};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::trace;

/// Immutable description of a fixed grid: counts, spacing, and insets.
///
/// Row and column counts are clamped to at least 1 at construction so the
/// derived cell size is always defined. Spacing is clamped to be
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    rows: i32,
    columns: i32,
    insets: Insets,
    v_spacing: f32,
    h_spacing: f32,
}

impl GridSpec {
    /// Create a spec with the given counts, zero insets, and zero spacing.
    #[must_use]
    pub fn new(rows: i32, columns: i32) -> Self {
        Self {
            rows: rows.max(1),
            columns: columns.max(1),
            insets: Insets::ZERO,
            v_spacing: 0.0,
            h_spacing: 0.0,
        }
    }

    /// Set the content insets.
    #[must_use]
    pub fn insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Set the vertical spacing between rows.
    #[must_use]
    pub fn v_space(mut self, spacing: f32) -> Self {
        self.v_spacing = spacing.max(0.0);
        self
    }

    /// Set the horizontal spacing between columns.
    #[must_use]
    pub fn h_space(mut self, spacing: f32) -> Self {
        self.h_spacing = spacing.max(0.0);
        self
    }

    /// Set uniform spacing for both axes.
    #[must_use]
    pub fn space(self, spacing: f32) -> Self {
        self.v_space(spacing).h_space(spacing)
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> i32 {
        self.columns
    }

    #[inline]
    #[must_use]
    pub fn content_insets(&self) -> Insets {
        self.insets
    }

    #[inline]
    #[must_use]
    pub fn v_spacing(&self) -> f32 {
        self.v_spacing
    }

    #[inline]
    #[must_use]
    pub fn h_spacing(&self) -> f32 {
        self.h_spacing
    }

    /// Whether `index` addresses a cell inside this grid.
    #[inline]
    #[must_use]
    pub fn contains(&self, index: CellIndex) -> bool {
        (0..self.columns).contains(&index.column) && (0..self.rows).contains(&index.row)
    }
}

/// The grid geometry engine: spec + container bounds + rectangle cache.
///
/// Single-threaded by contract: the hosting container drives it from its
/// layout pass, so memoization uses plain `&mut self` with no interior
/// mutability or locking.
#[derive(Debug, Clone)]
pub struct GridGeometry {
    spec: GridSpec,
    bounds: Rect,
    cell_size: Option<Size>,
    rects: FxHashMap<CellIndex, Rect>,
}

impl GridGeometry {
    /// Create an engine with zero bounds; call [`set_bounds`](Self::set_bounds)
    /// (or go through [`GridView::layout`](crate::GridView::layout)) before
    /// asking for rectangles.
    #[must_use]
    pub fn new(spec: GridSpec) -> Self {
        Self::with_bounds(spec, Rect::ZERO)
    }

    /// Create an engine for a container with the given bounds.
    #[must_use]
    pub fn with_bounds(spec: GridSpec, bounds: Rect) -> Self {
        Self {
            spec,
            bounds,
            cell_size: None,
            rects: FxHashMap::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Update the container bounds, invalidating cached geometry if they
    /// changed.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if bounds != self.bounds {
            self.bounds = bounds;
            self.invalidate();
        }
    }

    /// Replace the spec, invalidating cached geometry.
    pub fn set_spec(&mut self, spec: GridSpec) {
        self.spec = spec;
        self.invalidate();
    }

    /// The container bounds shrunk by the content insets.
    ///
    /// Extents are not clamped; over-large insets yield a degenerate frame.
    #[must_use]
    pub fn content_frame(&self) -> Rect {
        self.bounds.inset_by(self.spec.insets)
    }

    /// The size shared by every cell, memoized until invalidated.
    ///
    /// May be zero or negative when spacing exceeds the available space.
    pub fn cell_size(&mut self) -> Size {
        if let Some(size) = self.cell_size {
            return size;
        }
        let content = self.content_frame().size();
        let columns = self.spec.columns as f32;
        let rows = self.spec.rows as f32;
        let size = Size::new(
            (content.width - self.spec.h_spacing * (columns - 1.0)) / columns,
            (content.height - self.spec.v_spacing * (rows - 1.0)) / rows,
        );
        self.cell_size = Some(size);
        size
    }

    /// Whether `index` addresses a cell inside the configured grid.
    #[inline]
    #[must_use]
    pub fn is_valid(&self, index: CellIndex) -> bool {
        self.spec.contains(index)
    }

    /// The rectangle of a single cell, or `None` for an out-of-range index.
    ///
    /// Memoized per index until invalidated.
    pub fn cell_rect(&mut self, index: CellIndex) -> Option<Rect> {
        if let Some(rect) = self.rects.get(&index) {
            return Some(*rect);
        }
        if !self.is_valid(index) {
            return None;
        }

        let content = self.content_frame();
        let size = self.cell_size();
        let x = content.x + (size.width + self.spec.h_spacing) * index.column as f32;
        let y = content.y + (size.height + self.spec.v_spacing) * index.row as f32;
        let rect = Rect::new(x, y, size.width, size.height);
        self.rects.insert(index, rect);
        Some(rect)
    }

    /// The rectangle covering a span from `from` to `to` (`to` defaults to
    /// `from`), or `None` if either endpoint is out of range.
    ///
    /// Contract: the result is the axis-aligned union of exactly the two
    /// endpoint cell rectangles. When `from` and `to` are opposite corners
    /// of the intended span this covers the whole span; for other pairs it
    /// covers only those two cells. Callers are expected to pass corner
    /// pairs.
    pub fn span_rect(&mut self, from: CellIndex, to: Option<CellIndex>) -> Option<Rect> {
        let to = to.unwrap_or(from);
        let from_rect = self.cell_rect(from)?;
        let to_rect = self.cell_rect(to)?;
        Some(from_rect.union(to_rect))
    }

    /// Drop the cached cell size and every cached cell rectangle.
    ///
    /// Must run whenever the container bounds or the spec change;
    /// [`set_bounds`](Self::set_bounds) and [`set_spec`](Self::set_spec) do
    /// this automatically.
    pub fn invalidate(&mut self) {
        #[cfg(feature = "tracing")]
        trace!(cached_rects = self.rects.len(), "grid geometry invalidated");
        self.cell_size = None;
        self.rects.clear();
    }
}
