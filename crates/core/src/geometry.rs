//! Plan-space rectangles derived from a plot and its setbacks.
//!
//! Plan space is measured in meters with the origin at the plot's left/front
//! corner and y growing towards the back edge. Validation and both renderers
//! go through these functions so they always agree on where the buildable
//! area is.

use crate::plan::{Plot, Setbacks};
use floorplan_types::Rect;

pub fn plot_rect(plot: &Plot) -> Rect {
    Rect::new(0.0, 0.0, plot.width, plot.height)
}

/// The plot inset by its setbacks. Width or height may be zero or negative
/// when the setbacks consume the plot; validation rejects that case.
pub fn buildable_area(plot: &Plot, setbacks: &Setbacks) -> Rect {
    plot_rect(plot).inset(setbacks.left, setbacks.right, setbacks.front, setbacks.back)
}
