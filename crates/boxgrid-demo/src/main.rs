#![forbid(unsafe_code)]

//! Demo: a 10x5 grid driven through a logging host.
//!
//! Builds a grid with insets {10, 20, 30, 40}, spacing 10/20, in a 375x667
//! container; fills every cell with a managed box, adds three spanning
//! boxes, then rotates to landscape to show a relayout pass. Host calls are
//! logged via `tracing`; run with `RUST_LOG=trace` to also see the layout
//! core's cache events.

use boxgrid_core::{CellIndex, Insets, Rect, ViewHost, ViewId};
use boxgrid_layout::{GridSpec, GridView, vfl};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Host that logs every outward call instead of touching a real view tree.
struct LoggingHost;

impl ViewHost for LoggingHost {
    fn attach(&mut self, view: ViewId) {
        info!(view = view.raw(), "attach");
    }

    fn detach(&mut self, view: ViewId) {
        info!(view = view.raw(), "detach");
    }

    fn set_frame(&mut self, view: ViewId, frame: Rect) {
        info!(
            view = view.raw(),
            x = frame.x,
            y = frame.y,
            width = frame.width,
            height = frame.height,
            "set_frame"
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let spec = GridSpec::new(10, 5)
        .insets(Insets::new(10.0, 20.0, 30.0, 40.0))
        .v_space(10.0)
        .h_space(20.0);
    let mut grid = GridView::new(LoggingHost, spec);
    grid.layout(Rect::new(0.0, 0.0, 375.0, 667.0));

    let size = grid.cell_size();
    info!(width = size.width, height = size.height, "cell size");

    // One box per cell.
    let mut next = 0u64;
    for column in 0..grid.spec().columns() {
        for row in 0..grid.spec().rows() {
            let view = ViewId::new(next);
            next += 1;
            if !grid.add_managed(view, CellIndex::new(column, row)) {
                info!(view = view.raw(), "add rejected");
            }
        }
    }

    // Three spanning boxes over the single-cell layer.
    for (from, to) in [((0, 0), (0, 3)), ((1, 1), (2, 2)), ((1, 5), (4, 7))] {
        let view = ViewId::new(next);
        next += 1;
        if !grid.add_managed_span(view, CellIndex::from(from), CellIndex::from(to)) {
            info!(view = view.raw(), "span add rejected");
        }
    }

    // Rotate to landscape: one pass reframes all 53 boxes.
    info!("rotating to landscape");
    grid.layout(Rect::new(0.0, 0.0, 667.0, 375.0));

    // Gridline format strings for hosts with a VFL-style constraint system.
    let columns = vfl::column_axis_format(grid.spec());
    info!(format = %columns.format, "column gridline format");
    let rows = vfl::row_axis_format(grid.spec());
    info!(format = %rows.format, "row gridline format");
}
