//! Self-contained grid container: engine + registry + host backend.
//!
//! Two integration shapes share one core: use [`GridGeometry`] +
//! [`BoxRegistry`] directly as a standalone helper, or [`GridView`] as a
//! self-contained container. The container owns all three parts, so they
//! are torn down together with it.

use boxgrid_core::{CellIndex, Rect, Size, ViewHost, ViewId};

use crate::grid::{GridGeometry, GridSpec};
use crate::managed::{BoxRegistry, ManagedBox};

/// A grid container generic over its view-host backend.
#[derive(Debug)]
pub struct GridView<H: ViewHost> {
    host: H,
    geometry: GridGeometry,
    boxes: BoxRegistry,
}

impl<H: ViewHost> GridView<H> {
    /// Create a container with zero bounds; the first [`layout`](Self::layout)
    /// call establishes real geometry.
    #[must_use]
    pub fn new(host: H, spec: GridSpec) -> Self {
        Self {
            host,
            geometry: GridGeometry::new(spec),
            boxes: BoxRegistry::new(),
        }
    }

    /// The layout-pass entry point: record the new bounds (invalidating
    /// cached geometry when they changed) and reframe every managed box.
    ///
    /// The hosting environment calls this whenever the container's bounds
    /// change (resize, rotation). Boxes whose span the grid no longer covers
    /// are framed to [`Rect::ZERO`]. Spec changes invalidate through
    /// [`GridGeometry::set_spec`], so an unchanged-bounds pass can reuse the
    /// cache safely.
    pub fn layout(&mut self, bounds: Rect) {
        self.geometry.set_bounds(bounds);
        self.boxes.relayout_all(&mut self.host, &mut self.geometry);
    }

    /// Register `view` over a single cell. See [`BoxRegistry::add`].
    pub fn add_managed(&mut self, view: ViewId, from: CellIndex) -> bool {
        self.boxes
            .add(&mut self.host, &mut self.geometry, view, from, None)
    }

    /// Register `view` over the span between two corner cells.
    pub fn add_managed_span(&mut self, view: ViewId, from: CellIndex, to: CellIndex) -> bool {
        self.boxes
            .add(&mut self.host, &mut self.geometry, view, from, Some(to))
    }

    /// Unregister `view`, detaching it from the host.
    pub fn remove_managed(&mut self, view: ViewId) -> bool {
        self.boxes.remove(&mut self.host, view)
    }

    /// Unregister every managed view in registration order.
    pub fn clear_managed(&mut self) {
        self.boxes.clear(&mut self.host);
    }

    #[must_use]
    pub fn is_managed(&self, view: ViewId) -> bool {
        self.boxes.is_managed(view)
    }

    /// Managed boxes in registration order.
    #[must_use]
    pub fn managed_boxes(&self) -> &[ManagedBox] {
        self.boxes.boxes()
    }

    pub fn cell_rect(&mut self, index: CellIndex) -> Option<Rect> {
        self.geometry.cell_rect(index)
    }

    pub fn span_rect(&mut self, from: CellIndex, to: Option<CellIndex>) -> Option<Rect> {
        self.geometry.span_rect(from, to)
    }

    pub fn cell_size(&mut self) -> Size {
        self.geometry.cell_size()
    }

    #[must_use]
    pub fn content_frame(&self) -> Rect {
        self.geometry.content_frame()
    }

    #[must_use]
    pub fn spec(&self) -> &GridSpec {
        self.geometry.spec()
    }

    #[must_use]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Tear the container apart, handing the host backend back.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }
}
