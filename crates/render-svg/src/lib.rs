//! SVG preview renderer.
//!
//! Plan coordinates (meters, y up) are mapped to pixels (y down) by
//! [`PixelMapper`] and written out as a single self-contained `<svg>` document
//! by [`SvgRenderer`].

mod mapper;
mod renderer;
mod writer;

pub use mapper::{PixelMapper, DEFAULT_MARGIN_PX, DEFAULT_PIXELS_PER_METER, MAX_CANVAS_PX};
pub use renderer::SvgRenderer;
pub use writer::{fmt_num, xml_escape};
