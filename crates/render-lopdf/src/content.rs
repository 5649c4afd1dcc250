// Page drawing context: accumulates content-stream operations for one page.

use crate::metrics::{helvetica_width, to_win_ansi};
use floorplan_types::Rect;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Resource names of the fonts registered on the page.
pub(crate) const FONT_REGULAR: &str = "F1";
pub(crate) const FONT_BOLD: &str = "F2";

#[derive(Default, Clone, PartialEq)]
struct PageState {
    line_width: Option<f32>,
    dashed: bool,
}

pub(crate) struct PageContext {
    content: Content,
    state: PageState,
}

impl PageContext {
    pub(crate) fn new() -> Self {
        let mut ctx = Self {
            content: Content { operations: vec![] },
            state: PageState::default(),
        };
        // Black strokes and text.
        ctx.push("G", vec![Object::Integer(0)]);
        ctx.push("g", vec![Object::Integer(0)]);
        ctx
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    pub(crate) fn set_line_width(&mut self, width: f32) {
        if self.state.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    /// Sets an on/off dash pattern starting at phase 0.
    pub(crate) fn set_dash(&mut self, on: i64, off: i64) {
        self.push(
            "d",
            vec![
                Object::Array(vec![Object::Integer(on), Object::Integer(off)]),
                Object::Integer(0),
            ],
        );
        self.state.dashed = true;
    }

    /// Back to solid strokes.
    pub(crate) fn clear_dash(&mut self) {
        if self.state.dashed {
            self.push("d", vec![Object::Array(vec![]), Object::Integer(0)]);
            self.state.dashed = false;
        }
    }

    pub(crate) fn stroke_rect(&mut self, rect: &Rect) {
        self.push(
            "re",
            vec![
                (rect.x as f32).into(),
                (rect.y as f32).into(),
                (rect.width as f32).into(),
                (rect.height as f32).into(),
            ],
        );
        self.push("S", vec![]);
    }

    /// Draws a single line of text with its baseline starting at `(x, y)`.
    pub(crate) fn draw_text(&mut self, font: &str, size: f32, x: f64, y: f64, text: &str) {
        self.draw_encoded(font, size, x, y, to_win_ansi(text));
    }

    /// Draws Helvetica text centered horizontally on `center_x`.
    pub(crate) fn draw_centered_text(&mut self, size: f32, center_x: f64, y: f64, text: &str) {
        let encoded = to_win_ansi(text);
        let width = helvetica_width(&encoded, f64::from(size));
        self.draw_encoded(FONT_REGULAR, size, center_x - width / 2.0, y, encoded);
    }

    fn draw_encoded(&mut self, font: &str, size: f32, x: f64, y: f64, encoded: Vec<u8>) {
        if encoded.is_empty() {
            return;
        }
        self.push("BT", vec![]);
        self.push(
            "Tf",
            vec![Object::Name(font.as_bytes().to_vec()), size.into()],
        );
        self.push("Td", vec![(x as f32).into(), (y as f32).into()]);
        self.push("Tj", vec![Object::String(encoded, StringFormat::Literal)]);
        self.push("ET", vec![]);
    }
}
