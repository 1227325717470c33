//! In-memory surface
//!
//! Records every call so drawing can be inspected in tests and counted by the
//! headless runner. Text metrics are a fixed approximation of a proportional
//! font: each glyph is half the font size wide, the ascent is 70% of it.

use super::{Surface, TextMetrics};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Fill(String),
    Font(String),
    Rect { color: String, rect: [f32; 4] },
    Text { text: String, x: f32, y: f32 },
    Translate(f32, f32),
}

#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub calls: Vec<DrawCall>,
    fill: String,
    font_px: f32,
    offset: (f32, f32),
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            font_px: 10.0,
            ..Default::default()
        }
    }

    pub fn metrics_for(text: &str, font_px: f32) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * font_px * 0.5,
            ascent: font_px * 0.7,
        }
    }

    /// Net translation currently applied
    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    /// (color, [x, y, w, h]) of every filled rectangle, in call order
    pub fn rects(&self) -> Vec<(String, [f32; 4])> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Rect { color, rect } => Some((color.clone(), *rect)),
                _ => None,
            })
            .collect()
    }

    /// (text, x, y) of every text draw, in call order
    pub fn texts(&self) -> Vec<(String, f32, f32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, x, y } => Some((text.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

/// Pixel size from a CSS font shorthand like "20px Arial"
fn font_px(font: &str) -> Option<f32> {
    font.split_whitespace()
        .find_map(|part| part.strip_suffix("px"))
        .and_then(|n| n.parse().ok())
}

impl Surface for Recorder {
    fn set_fill(&mut self, color: &str) {
        self.fill = color.to_string();
        self.calls.push(DrawCall::Fill(color.to_string()));
    }

    fn set_font(&mut self, font: &str) {
        if let Some(px) = font_px(font) {
            self.font_px = px;
        }
        self.calls.push(DrawCall::Font(font.to_string()));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(DrawCall::Rect {
            color: self.fill.clone(),
            rect: [x, y, width, height],
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn measure_text(&mut self, text: &str) -> TextMetrics {
        Self::metrics_for(text, self.font_px)
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.offset.0 += x;
        self.offset.1 += y;
        self.calls.push(DrawCall::Translate(x, y));
    }
}
