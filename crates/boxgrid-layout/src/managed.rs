//! Managed-box registry: which external views occupy which cell spans.
//!
//! The registry holds non-owning [`ViewId`] handles only; view lifetime
//! belongs entirely to the host. Every mutation reports success as a bool
//! (duplicate add and unknown remove are ordinary recoverable failures, per
//! the layout contract), and a failed mutation performs no host calls.

use boxgrid_core::{CellIndex, Rect, ViewHost, ViewId};

use crate::grid::GridGeometry;

#[cfg(feature = "tracing")]
use tracing::trace;

/// One view's occupancy of a cell span.
///
/// `from` and `to` are the two corner indices given at registration; they
/// persist across relayout, only the pixel rectangle is recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagedBox {
    pub view: ViewId,
    pub from: CellIndex,
    pub to: CellIndex,
}

/// Flat list of managed boxes, at most one per view handle.
///
/// Registration order is preserved and drives the deterministic processing
/// order of [`clear`](Self::clear) and [`relayout_all`](Self::relayout_all).
#[derive(Debug, Default, Clone)]
pub struct BoxRegistry {
    boxes: Vec<ManagedBox>,
}

impl BoxRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity membership test over the current boxes.
    #[must_use]
    pub fn is_managed(&self, view: ViewId) -> bool {
        self.boxes.iter().any(|b| b.view == view)
    }

    /// Registered boxes in registration order.
    #[must_use]
    pub fn boxes(&self) -> &[ManagedBox] {
        &self.boxes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Register `view` over the span `from..=to` (`to` defaults to `from`).
    ///
    /// Returns false without touching the host when the view is already
    /// managed or the span is out of range. On success the view is attached
    /// and framed to the span rectangle.
    pub fn add(
        &mut self,
        host: &mut impl ViewHost,
        geometry: &mut GridGeometry,
        view: ViewId,
        from: CellIndex,
        to: Option<CellIndex>,
    ) -> bool {
        if self.is_managed(view) {
            return false;
        }
        let Some(frame) = geometry.span_rect(from, to) else {
            return false;
        };
        let to = to.unwrap_or(from);

        host.attach(view);
        host.set_frame(view, frame);
        self.boxes.push(ManagedBox { view, from, to });
        #[cfg(feature = "tracing")]
        trace!(view = view.raw(), ?from, ?to, "managed box added");
        true
    }

    /// Unregister `view`, detaching it from the host.
    ///
    /// Returns false if the view is not currently managed.
    pub fn remove(&mut self, host: &mut impl ViewHost, view: ViewId) -> bool {
        let Some(position) = self.boxes.iter().position(|b| b.view == view) else {
            return false;
        };
        host.detach(view);
        self.boxes.remove(position);
        #[cfg(feature = "tracing")]
        trace!(view = view.raw(), "managed box removed");
        true
    }

    /// Unregister every box in registration order, with the same detach
    /// semantics as [`remove`](Self::remove).
    pub fn clear(&mut self, host: &mut impl ViewHost) {
        for managed in self.boxes.drain(..) {
            host.detach(managed.view);
        }
        #[cfg(feature = "tracing")]
        trace!("managed boxes cleared");
    }

    /// Reframe every box from freshly computed geometry.
    ///
    /// Boxes whose span is no longer valid (the grid shrank under them) are
    /// framed to [`Rect::ZERO`] rather than left stale.
    pub fn relayout_all(&self, host: &mut impl ViewHost, geometry: &mut GridGeometry) {
        #[cfg(feature = "tracing")]
        trace!(boxes = self.boxes.len(), "relayout pass");
        for managed in &self.boxes {
            let frame = geometry
                .span_rect(managed.from, Some(managed.to))
                .unwrap_or(Rect::ZERO);
            host.set_frame(managed.view, frame);
        }
    }
}
