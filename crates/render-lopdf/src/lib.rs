//! PDF renderer for floor plans using lopdf.
//!
//! The plot is scaled to fit the page by [`PageMapper`] and drawn onto a
//! single page by [`LopdfRenderer`]. Each render builds and serializes its own
//! `lopdf::Document`; nothing is shared between calls.

mod content;
mod mapper;
mod metrics;
mod renderer;

pub use mapper::PageMapper;
pub use metrics::{helvetica_width, to_win_ansi};
pub use renderer::{LopdfRenderer, DEFAULT_FOOTER_CREDIT};
