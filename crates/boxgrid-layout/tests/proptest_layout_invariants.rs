//! Property-based invariant tests for the boxgrid-layout geometry engine.
//!
//! These verify structural invariants that must hold for **any** grid spec
//! and container bounds:
//!
//! 1. Packing round trip: cells plus spacing exactly tile the content frame.
//! 2. Out-of-range and negative indices are absent.
//! 3. A degenerate span equals its single cell.
//! 4. Span union is symmetric in its endpoints.
//! 5. Geometry is deterministic.
//! 6. Invalidation across a spec change never serves stale rectangles.
//! 7. Cells stay inside the content frame (when geometry is non-degenerate).
//! 8. The registry holds at most one box per view, whatever the add order.

use boxgrid_core::{CellIndex, Insets, Rect, RecordingHost, ViewId};
use boxgrid_layout::{BoxRegistry, GridGeometry, GridSpec};
use proptest::prelude::*;

// Tolerance for accumulated f32 rounding over one multiply/divide chain.
const EPS: f32 = 1e-2;

// ── Helpers ─────────────────────────────────────────────────────────────

fn insets_strategy() -> impl Strategy<Value = Insets> {
    (0.0f32..=50.0, 0.0f32..=50.0, 0.0f32..=50.0, 0.0f32..=50.0)
        .prop_map(|(top, left, bottom, right)| Insets::new(top, left, bottom, right))
}

fn spec_strategy() -> impl Strategy<Value = GridSpec> {
    (1i32..=12, 1i32..=12, insets_strategy(), 0.0f32..=30.0, 0.0f32..=30.0).prop_map(
        |(rows, columns, insets, v, h)| {
            GridSpec::new(rows, columns)
                .insets(insets)
                .v_space(v)
                .h_space(h)
        },
    )
}

fn bounds_strategy() -> impl Strategy<Value = Rect> {
    (0.0f32..=100.0, 0.0f32..=100.0, 200.0f32..=1000.0, 200.0f32..=1000.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Packing round trip: cell * count + spacing * (count - 1) == content
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cells_and_spacing_tile_the_content_frame(
        spec in spec_strategy(),
        bounds in bounds_strategy(),
    ) {
        let mut geometry = GridGeometry::with_bounds(spec, bounds);
        let content = geometry.content_frame();
        let size = geometry.cell_size();

        let packed_w = size.width * spec.columns() as f32
            + spec.h_spacing() * (spec.columns() - 1) as f32;
        let packed_h = size.height * spec.rows() as f32
            + spec.v_spacing() * (spec.rows() - 1) as f32;

        prop_assert!(
            (packed_w - content.width).abs() <= EPS,
            "width packing broke: {} vs {}", packed_w, content.width
        );
        prop_assert!(
            (packed_h - content.height).abs() <= EPS,
            "height packing broke: {} vs {}", packed_h, content.height
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Out-of-range and negative indices are absent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn out_of_range_indices_are_absent(
        spec in spec_strategy(),
        bounds in bounds_strategy(),
        overshoot in 0i32..=5,
        undershoot in 1i32..=5,
    ) {
        let mut geometry = GridGeometry::with_bounds(spec, bounds);

        prop_assert!(geometry.cell_rect(CellIndex::new(spec.columns() + overshoot, 0)).is_none());
        prop_assert!(geometry.cell_rect(CellIndex::new(0, spec.rows() + overshoot)).is_none());
        prop_assert!(geometry.cell_rect(CellIndex::new(-undershoot, 0)).is_none());
        prop_assert!(geometry.cell_rect(CellIndex::new(0, -undershoot)).is_none());

        // One bad endpoint poisons the span.
        prop_assert!(
            geometry
                .span_rect(CellIndex::new(0, 0), Some(CellIndex::new(-undershoot, 0)))
                .is_none()
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Degenerate span equals its single cell
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn single_cell_span_equals_cell_rect(
        (spec, bounds) in (spec_strategy(), bounds_strategy()),
    ) {
        let mut geometry = GridGeometry::with_bounds(spec, bounds);
        let index = CellIndex::new(spec.columns() - 1, spec.rows() - 1);

        let cell = geometry.cell_rect(index).unwrap();
        let implicit = geometry.span_rect(index, None).unwrap();
        let explicit = geometry.span_rect(index, Some(index)).unwrap();

        prop_assert_eq!(implicit, explicit);
        // Union standardizes, so compare against the standardized cell; for
        // non-degenerate cells that is the cell itself.
        prop_assert_eq!(implicit, cell.standardized());
        if !cell.is_empty() {
            prop_assert_eq!(implicit, cell);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Span union is symmetric
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn span_is_symmetric(
        (spec, bounds) in (spec_strategy(), bounds_strategy()),
        seed in any::<u64>(),
    ) {
        let mut geometry = GridGeometry::with_bounds(spec, bounds);

        // Derive two in-range indices from the seed.
        let a = CellIndex::new(
            (seed % spec.columns() as u64) as i32,
            ((seed >> 8) % spec.rows() as u64) as i32,
        );
        let b = CellIndex::new(
            ((seed >> 16) % spec.columns() as u64) as i32,
            ((seed >> 24) % spec.rows() as u64) as i32,
        );

        prop_assert_eq!(
            geometry.span_rect(a, Some(b)),
            geometry.span_rect(b, Some(a))
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn geometry_is_deterministic(
        spec in spec_strategy(),
        bounds in bounds_strategy(),
    ) {
        let mut first = GridGeometry::with_bounds(spec, bounds);
        let mut second = GridGeometry::with_bounds(spec, bounds);

        for row in 0..spec.rows() {
            for column in 0..spec.columns() {
                let index = CellIndex::new(column, row);
                prop_assert_eq!(first.cell_rect(index), second.cell_rect(index));
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Invalidation across spec changes never serves stale rects
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn spec_change_is_never_stale(
        before in spec_strategy(),
        after in spec_strategy(),
        bounds in bounds_strategy(),
    ) {
        let mut geometry = GridGeometry::with_bounds(before, bounds);
        // Populate the cache under the old spec.
        let _ = geometry.cell_rect(CellIndex::new(0, 0));
        let _ = geometry.cell_size();

        geometry.set_spec(after);

        let mut fresh = GridGeometry::with_bounds(after, bounds);
        for row in 0..after.rows() {
            for column in 0..after.columns() {
                let index = CellIndex::new(column, row);
                prop_assert_eq!(geometry.cell_rect(index), fresh.cell_rect(index));
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Cells stay inside the content frame (non-degenerate geometry)
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cells_stay_inside_content_frame(
        spec in spec_strategy(),
        bounds in bounds_strategy(),
    ) {
        let mut geometry = GridGeometry::with_bounds(spec, bounds);
        if geometry.cell_size().is_degenerate() {
            return Ok(());
        }
        let content = geometry.content_frame();

        for row in 0..spec.rows() {
            for column in 0..spec.columns() {
                let rect = geometry.cell_rect(CellIndex::new(column, row)).unwrap();
                prop_assert!(rect.min_x() >= content.min_x() - EPS);
                prop_assert!(rect.min_y() >= content.min_y() - EPS);
                prop_assert!(rect.max_x() <= content.max_x() + EPS);
                prop_assert!(rect.max_y() <= content.max_y() + EPS);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Registry: at most one box per view, whatever the add order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn registry_holds_at_most_one_box_per_view(
        spec in spec_strategy(),
        bounds in bounds_strategy(),
        ids in proptest::collection::vec(0u64..=7, 1..=24),
    ) {
        let mut geometry = GridGeometry::with_bounds(spec, bounds);
        let mut host = RecordingHost::new();
        let mut registry = BoxRegistry::new();

        let mut expected: Vec<u64> = Vec::new();
        for raw in &ids {
            let index = CellIndex::new(
                (*raw % spec.columns() as u64) as i32,
                (*raw % spec.rows() as u64) as i32,
            );
            let added = registry.add(&mut host, &mut geometry, ViewId::new(*raw), index, None);
            // An add succeeds exactly when the view is not yet managed.
            prop_assert_eq!(added, !expected.contains(raw));
            if added {
                expected.push(*raw);
            }
        }
        prop_assert_eq!(registry.len(), expected.len());

        let mut seen: Vec<ViewId> = registry.boxes().iter().map(|b| b.view).collect();
        let len_before = seen.len();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), len_before, "duplicate view ids in registry");

        registry.clear(&mut host);
        prop_assert!(registry.is_empty());
        for raw in &ids {
            prop_assert!(!host.is_attached(ViewId::new(*raw)));
        }
    }
}
