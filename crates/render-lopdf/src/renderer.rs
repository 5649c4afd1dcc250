use crate::content::{PageContext, FONT_BOLD, FONT_REGULAR};
use crate::mapper::PageMapper;
use floorplan_core::Plan;
use floorplan_render_core::{PlanRenderer, RenderError};
use floorplan_types::PageSettings;
use lopdf::{dictionary, Document, Object, Stream};

pub const DEFAULT_FOOTER_CREDIT: &str = "Generated by floorplan (renderer v1)";

const TITLE_FONT_SIZE: f32 = 14.0;
const TITLE_X: f64 = 24.0;
const TITLE_DROP: f64 = 28.0;
const LABEL_FONT_SIZE: f32 = 10.0;
const FOOTER_FONT_SIZE: f32 = 9.0;
const FOOTER_Y: f64 = 18.0;
const PLOT_STROKE: f32 = 2.0;
const BUILDABLE_STROKE: f32 = 1.0;
const ROOM_STROKE: f32 = 1.5;

/// Renders a plan onto a single PDF page using `lopdf`.
///
/// Every call builds its own in-memory document, serializes it, and drops it
/// before returning; renders never share drawing state.
#[derive(Debug, Clone, PartialEq)]
pub struct LopdfRenderer {
    page: PageSettings,
    footer_credit: String,
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self::new(PageSettings::default())
    }
}

impl LopdfRenderer {
    pub fn new(page: PageSettings) -> Self {
        Self {
            page,
            footer_credit: DEFAULT_FOOTER_CREDIT.to_string(),
        }
    }

    pub fn with_footer_credit(mut self, credit: impl Into<String>) -> Self {
        self.footer_credit = credit.into();
        self
    }

    pub fn page_settings(&self) -> &PageSettings {
        &self.page
    }

    pub fn render_to_bytes(&self, plan: &Plan) -> Result<Vec<u8>, RenderError> {
        let mapper = PageMapper::new(&plan.plot, &self.page)?;
        let content = self.draw_page(plan, &mapper).finish();

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                FONT_REGULAR => regular_id,
                FONT_BOLD => bold_id,
            },
        });

        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                (mapper.page_width() as f32).into(),
                (mapper.page_height() as f32).into(),
            ],
            "Contents" => content_id,
            "Resources" => resources_id,
        });

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(page_id)],
                "Count" => 1_i64,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        Ok(buffer)
    }

    fn draw_page(&self, plan: &Plan, mapper: &PageMapper) -> PageContext {
        let mut page = PageContext::new();

        page.draw_text(
            FONT_BOLD,
            TITLE_FONT_SIZE,
            TITLE_X,
            mapper.page_height() - TITLE_DROP,
            &plan.title,
        );

        page.set_line_width(PLOT_STROKE);
        page.stroke_rect(&mapper.map_rect(&plan.plot_rect()));

        page.set_line_width(BUILDABLE_STROKE);
        page.set_dash(6, 4);
        page.stroke_rect(&mapper.map_rect(&plan.buildable_area()));
        page.clear_dash();

        page.set_line_width(ROOM_STROKE);
        for room in &plan.rooms {
            let rect = mapper.map_rect(&room.rect());
            page.stroke_rect(&rect);
            let center = rect.center();
            page.draw_centered_text(LABEL_FONT_SIZE, center.x, center.y, &room.name);
        }

        page.draw_text(
            FONT_REGULAR,
            FOOTER_FONT_SIZE,
            mapper.margin(),
            FOOTER_Y,
            &self.footer_credit,
        );
        page
    }
}

impl PlanRenderer for LopdfRenderer {
    type Output = Vec<u8>;

    fn name(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, plan: &Plan) -> Result<Vec<u8>, RenderError> {
        self.render_to_bytes(plan)
    }
}
