use floorplan_core::Plot;
use floorplan_render_core::RenderError;
use floorplan_types::{meters_to_points, PageSettings, Point, Rect};

/// Maps plan space (meters, y up) to PDF page space (points, y up).
///
/// The plot is scaled uniformly so that it fits inside the page margins and
/// below the header reservation. PDF user space already grows upwards, so
/// the front edge of the plot stays at the bottom without any flip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMapper {
    page_width: f64,
    page_height: f64,
    margin: f64,
    scale: f64,
}

impl PageMapper {
    pub fn new(plot: &Plot, settings: &PageSettings) -> Result<Self, RenderError> {
        let (page_width, page_height) = settings.size.dimensions_pt();
        let margin = settings.margin_pt;
        let max_width = page_width - 2.0 * margin;
        let max_height = page_height - 2.0 * margin - settings.header_pt;
        if !(max_width > 0.0 && max_height > 0.0) {
            return Err(RenderError::InvalidParameter(format!(
                "page {}x{} pt leaves no drawable area with {} pt margins",
                page_width, page_height, margin
            )));
        }

        let plot_width_pt = meters_to_points(plot.width);
        let plot_height_pt = meters_to_points(plot.height);
        let scale = (max_width / plot_width_pt).min(max_height / plot_height_pt);

        log::debug!(
            "Page mapper: page {:.2}x{:.2} pt, drawable {:.2}x{:.2} pt, scale {:.6}",
            page_width,
            page_height,
            max_width,
            max_height,
            scale
        );

        Ok(Self {
            page_width,
            page_height,
            margin,
            scale,
        })
    }

    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Uniform plan-points to page-points factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn map_point(&self, point: Point) -> Point {
        Point::new(
            meters_to_points(point.x) * self.scale + self.margin,
            meters_to_points(point.y) * self.scale + self.margin,
        )
    }

    /// Maps a plan rectangle to page space through its two opposite corners.
    pub fn map_rect(&self, rect: &Rect) -> Rect {
        let min = self.map_point(Point::new(rect.x, rect.y));
        let max = self.map_point(Point::new(rect.max_x(), rect.max_y()));
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}
