use crate::mapper::{PixelMapper, DEFAULT_MARGIN_PX, DEFAULT_PIXELS_PER_METER};
use crate::writer::{fmt_num, xml_escape};
use floorplan_core::Plan;
use floorplan_render_core::{PlanRenderer, RenderError};
use floorplan_types::Rect;

const FONT_FAMILY: &str = "Inter, Arial";
const TITLE_FONT_SIZE: u32 = 14;
const LABEL_FONT_SIZE: u32 = 12;
const FOOTER_FONT_SIZE: u32 = 11;
const PLOT_STROKE: f64 = 2.0;
const BUILDABLE_STROKE: f64 = 1.0;
const ROOM_STROKE: f64 = 1.5;
const BUILDABLE_DASH: &str = "6 4";

/// Renders a plan as an SVG preview.
///
/// Element order is fixed: title, plot outline, dashed buildable outline,
/// then each room outline followed by its label, then the scale footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgRenderer {
    pixels_per_meter: u32,
    margin_px: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PIXELS_PER_METER)
    }
}

impl SvgRenderer {
    pub fn new(pixels_per_meter: u32) -> Self {
        Self {
            pixels_per_meter,
            margin_px: DEFAULT_MARGIN_PX,
        }
    }

    pub fn with_margin(mut self, margin_px: u32) -> Self {
        self.margin_px = margin_px;
        self
    }

    pub fn pixels_per_meter(&self) -> u32 {
        self.pixels_per_meter
    }

    pub fn render_to_string(&self, plan: &Plan) -> Result<String, RenderError> {
        let mapper = PixelMapper::new(&plan.plot, self.pixels_per_meter, self.margin_px)?;
        let width = mapper.canvas_width();
        let height = mapper.canvas_height();
        let margin = mapper.margin_px();

        let mut lines = Vec::with_capacity(5 + 2 * plan.rooms.len());
        lines.push(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = width,
            h = height,
        ));
        lines.push(format!(
            r#"<text x="{}" y="{}" font-size="{}" font-family="{}">{}</text>"#,
            margin,
            i64::from(margin) - 4,
            TITLE_FONT_SIZE,
            FONT_FAMILY,
            xml_escape(&plan.title),
        ));

        lines.push(rect_element(&mapper.map_rect(&plan.plot_rect()), PLOT_STROKE, None));
        lines.push(rect_element(
            &mapper.map_rect(&plan.buildable_area()),
            BUILDABLE_STROKE,
            Some(BUILDABLE_DASH),
        ));

        for room in &plan.rooms {
            let rect = mapper.map_rect(&room.rect());
            lines.push(rect_element(&rect, ROOM_STROKE, None));
            let center = rect.center();
            lines.push(format!(
                r#"<text x="{}" y="{}" font-size="{}" font-family="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
                fmt_num(center.x),
                fmt_num(center.y),
                LABEL_FONT_SIZE,
                FONT_FAMILY,
                xml_escape(&room.name),
            ));
        }

        lines.push(format!(
            r#"<text x="{}" y="{}" font-size="{}" font-family="{}">Preview scale: {}px ≈ 1m</text>"#,
            margin,
            mapper.footer_y(),
            FOOTER_FONT_SIZE,
            FONT_FAMILY,
            mapper.pixels_per_meter(),
        ));
        lines.push("</svg>".to_string());
        Ok(lines.join("\n"))
    }
}

fn rect_element(rect: &Rect, stroke_width: f64, dash: Option<&str>) -> String {
    let dash_attr = dash
        .map(|pattern| format!(r#" stroke-dasharray="{}""#, pattern))
        .unwrap_or_default();
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="black"{} stroke-width="{}"/>"#,
        fmt_num(rect.x),
        fmt_num(rect.y),
        fmt_num(rect.width),
        fmt_num(rect.height),
        dash_attr,
        fmt_num(stroke_width),
    )
}

impl PlanRenderer for SvgRenderer {
    type Output = String;

    fn name(&self) -> &'static str {
        "svg"
    }

    fn render(&self, plan: &Plan) -> Result<String, RenderError> {
        self.render_to_string(plan)
    }
}
