use floorplan_core::Plot;
use floorplan_render_core::RenderError;
use floorplan_types::{Point, Rect};

pub const DEFAULT_PIXELS_PER_METER: u32 = 70;
pub const DEFAULT_MARGIN_PX: u32 = 20;

/// Largest canvas side, in pixels, that f64 still counts exactly.
pub const MAX_CANVAS_PX: u64 = 1 << 53;

/// Distance of the footer baseline above the canvas bottom.
const FOOTER_RISE_PX: i64 = 8;

/// Maps plan space (meters, origin at the left/front plot corner, y up) to
/// pixel space (origin at the canvas top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelMapper {
    pixels_per_meter: u32,
    margin_px: u32,
    plot_height_m: f64,
    canvas_width: u64,
    canvas_height: u64,
}

impl PixelMapper {
    pub fn new(plot: &Plot, pixels_per_meter: u32, margin_px: u32) -> Result<Self, RenderError> {
        if pixels_per_meter == 0 {
            return Err(RenderError::InvalidParameter(
                "pixels per meter must be a positive integer".into(),
            ));
        }
        let mapper = Self {
            pixels_per_meter,
            margin_px,
            plot_height_m: plot.height,
            canvas_width: canvas_extent(plot.width, pixels_per_meter, margin_px)?,
            canvas_height: canvas_extent(plot.height, pixels_per_meter, margin_px)?,
        };
        log::debug!(
            "Pixel mapper: {} px/m, margin {} px, canvas {}x{}",
            pixels_per_meter,
            margin_px,
            mapper.canvas_width,
            mapper.canvas_height
        );
        Ok(mapper)
    }

    pub fn pixels_per_meter(&self) -> u32 {
        self.pixels_per_meter
    }

    pub fn margin_px(&self) -> u32 {
        self.margin_px
    }

    pub fn canvas_width(&self) -> u64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> u64 {
        self.canvas_height
    }

    /// Baseline of the scale footer; negative when the canvas is shorter than the rise.
    pub fn footer_y(&self) -> i64 {
        // canvas_height <= MAX_CANVAS_PX, so the conversion cannot fail.
        i64::try_from(self.canvas_height).unwrap_or(i64::MAX) - FOOTER_RISE_PX
    }

    /// Converts a plan-space length to pixels.
    pub fn length(&self, meters: f64) -> f64 {
        meters * f64::from(self.pixels_per_meter)
    }

    pub fn map_x(&self, x: f64) -> f64 {
        f64::from(self.margin_px) + self.length(x)
    }

    pub fn map_y(&self, y: f64) -> f64 {
        f64::from(self.margin_px) + self.length(self.plot_height_m - y)
    }

    pub fn map_point(&self, point: Point) -> Point {
        Point::new(self.map_x(point.x), self.map_y(point.y))
    }

    /// Maps a plan rectangle to a pixel rectangle anchored at its top-left.
    ///
    /// The plan corner at `(x, y + h)` is the one that ends up top-left once
    /// the vertical axis is flipped.
    pub fn map_rect(&self, rect: &Rect) -> Rect {
        Rect::new(
            self.map_x(rect.x),
            self.map_y(rect.max_y()),
            self.length(rect.width),
            self.length(rect.height),
        )
    }
}

/// `trunc(meters * ppm) + 2 * margin`, rejected when it does not fit a canvas.
fn canvas_extent(meters: f64, pixels_per_meter: u32, margin_px: u32) -> Result<u64, RenderError> {
    let pixels = (meters * f64::from(pixels_per_meter)).trunc() + 2.0 * f64::from(margin_px);
    if !(pixels.is_finite() && pixels >= 0.0 && pixels <= MAX_CANVAS_PX as f64) {
        return Err(RenderError::InvalidParameter(format!(
            "a {} m side at {} px/m exceeds the {} px canvas limit",
            meters, pixels_per_meter, MAX_CANVAS_PX
        )));
    }
    Ok(pixels as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot() -> Plot {
        Plot {
            width: 10.0,
            height: 8.0,
        }
    }

    #[test]
    fn canvas_includes_margins() {
        let mapper = PixelMapper::new(&plot(), 70, 20).unwrap();
        assert_eq!(mapper.canvas_width(), 740);
        assert_eq!(mapper.canvas_height(), 600);
    }

    #[test]
    fn canvas_truncates_fractional_pixels() {
        let plot = Plot {
            width: 2.55,
            height: 1.0,
        };
        // 2.55 * 70 = 178.49999...
        let mapper = PixelMapper::new(&plot, 70, 20).unwrap();
        assert_eq!(mapper.canvas_width(), 178 + 40);
    }

    #[test]
    fn vertical_axis_is_flipped() {
        let mapper = PixelMapper::new(&plot(), 70, 20).unwrap();
        assert_eq!(mapper.map_point(Point::new(0.0, 0.0)), Point::new(20.0, 580.0));
        assert_eq!(mapper.map_point(Point::new(10.0, 8.0)), Point::new(720.0, 20.0));
    }

    #[test]
    fn rect_is_anchored_at_its_plan_top_left() {
        let mapper = PixelMapper::new(&plot(), 70, 20).unwrap();
        let bed = mapper.map_rect(&Rect::new(1.0, 1.0, 4.0, 3.0));
        assert_eq!(bed, Rect::new(90.0, 300.0, 280.0, 210.0));
    }

    #[test]
    fn oversized_plot_is_rejected_instead_of_overflowing() {
        let plot = Plot {
            width: 3e17,
            height: 1.0,
        };
        assert!(matches!(
            PixelMapper::new(&plot, 70, 20),
            Err(RenderError::InvalidParameter(_))
        ));
        let plot = Plot {
            width: 1.0,
            height: f64::MAX,
        };
        assert!(matches!(
            PixelMapper::new(&plot, u32::MAX, u32::MAX),
            Err(RenderError::InvalidParameter(_))
        ));
    }

    #[test]
    fn largest_exact_canvas_is_accepted() {
        // 2^53 - 40 px of plot plus two 20 px margins
        let plot = Plot {
            width: (MAX_CANVAS_PX - 40) as f64,
            height: 1.0,
        };
        let mapper = PixelMapper::new(&plot, 1, 20).unwrap();
        assert_eq!(mapper.canvas_width(), MAX_CANVAS_PX);
    }

    #[test]
    fn footer_sits_above_the_bottom_edge() {
        let mapper = PixelMapper::new(&plot(), 70, 20).unwrap();
        assert_eq!(mapper.footer_y(), 592);
        let tiny = Plot {
            width: 0.01,
            height: 0.01,
        };
        assert_eq!(PixelMapper::new(&tiny, 70, 0).unwrap().footer_y(), -8);
    }

    #[test]
    fn zero_density_is_rejected() {
        assert!(matches!(
            PixelMapper::new(&plot(), 0, 20),
            Err(RenderError::InvalidParameter(_))
        ));
    }
}
