pub mod geometry;
pub mod page;
pub mod units;

pub use geometry::{Point, Rect, Size};
pub use page::{PageSettings, PageSize, DEFAULT_HEADER_PT, DEFAULT_PAGE_MARGIN_PT};
pub use units::{meters_to_mm, meters_to_points, mm_to_points, POINTS_PER_MM};
