//! Visual-format strings for fixed-size helper gridlines.
//!
//! An optional convenience for hosts with a declarative, VFL-style
//! constraint system: given a [`GridSpec`], produce the format string,
//! metric values, and view names describing one run of equal boxes along an
//! axis (head inset, box, spacing, ..., trail inset). This module only
//! formats; it never constructs host-toolkit objects.
//!
//! Along the columns axis, `GridSpec::new(1, 3)` yields
//! `"|-head-[box0]-space-[box1(==box0)]-space-[box2(==box0)]-trail-|"` with
//! metrics `head = insets.left`, `space = h_spacing`, `trail = insets.right`.

use crate::grid::GridSpec;

pub const METRIC_HEAD: &str = "head";
pub const METRIC_SPACE: &str = "space";
pub const METRIC_TRAIL: &str = "trail";
pub const VIEW_BOX: &str = "box";

/// Which container axis a format string runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A visual-format string with the metric values and view names it expects.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualFormat {
    pub format: String,
    pub metrics: Vec<(&'static str, f32)>,
    pub view_names: Vec<String>,
}

/// Format for one equal-width box per column along the horizontal axis.
#[must_use]
pub fn column_axis_format(spec: &GridSpec) -> VisualFormat {
    axis_format(
        Axis::Horizontal,
        spec.columns(),
        spec.content_insets().left,
        spec.h_spacing(),
        spec.content_insets().right,
    )
}

/// Format for one equal-height box per row along the vertical axis.
#[must_use]
pub fn row_axis_format(spec: &GridSpec) -> VisualFormat {
    axis_format(
        Axis::Vertical,
        spec.rows(),
        spec.content_insets().top,
        spec.v_spacing(),
        spec.content_insets().bottom,
    )
}

/// The fill-the-other-axis format for a single gridline box.
///
/// A column gridline fills the vertical axis and vice versa.
#[must_use]
pub fn cross_axis_format(axis: Axis) -> &'static str {
    match axis {
        Axis::Horizontal => "V:|-[box]-|",
        Axis::Vertical => "|-[box]-|",
    }
}

fn axis_format(axis: Axis, count: i32, head: f32, space: f32, trail: f32) -> VisualFormat {
    let mut format = String::new();
    if axis == Axis::Vertical {
        format.push_str("V:");
    }
    format.push_str(&format!("|-{METRIC_HEAD}"));

    // Callers pass GridSpec counts, which are clamped to >= 1.
    let mut view_names = Vec::with_capacity(count as usize);
    for slot in 0..count {
        if slot == 0 {
            format.push_str(&format!("-[{VIEW_BOX}0]"));
        } else {
            format.push_str(&format!("-{METRIC_SPACE}-[{VIEW_BOX}{slot}(=={VIEW_BOX}0)]"));
        }
        view_names.push(format!("{VIEW_BOX}{slot}"));
    }
    format.push_str(&format!("-{METRIC_TRAIL}-|"));

    VisualFormat {
        format,
        metrics: vec![
            (METRIC_HEAD, head),
            (METRIC_SPACE, space),
            (METRIC_TRAIL, trail),
        ],
        view_names,
    }
}
