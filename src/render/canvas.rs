//! Browser canvas backend (Canvas 2D API via web-sys)

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Surface, TextMetrics};
use crate::consts::PIXEL_RATIO;

/// A canvas whose backing store is `PIXEL_RATIO` times its CSS size
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Size the canvas for a `width` x `height` logical play area and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, width: f32, height: f32) -> Result<Self, JsValue> {
        canvas.set_width((width as f64 * PIXEL_RATIO) as u32);
        canvas.set_height((height as f64 * PIXEL_RATIO) as u32);

        let style = canvas.style();
        style.set_property("width", &format!("{}px", width))?;
        style.set_property("height", &format!("{}px", height))?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;
        ctx.scale(PIXEL_RATIO, PIXEL_RATIO)?;

        Ok(Self { ctx })
    }
}

fn warn_on_err(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("{} failed: {:?}", what, e);
    }
}

impl Surface for CanvasSurface {
    fn set_fill(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        warn_on_err("fill_text", self.ctx.fill_text(text, x as f64, y as f64));
    }

    fn measure_text(&mut self, text: &str) -> TextMetrics {
        match self.ctx.measure_text(text) {
            Ok(m) => TextMetrics {
                width: m.width() as f32,
                ascent: m.actual_bounding_box_ascent() as f32,
            },
            Err(e) => {
                log::warn!("measure_text failed: {:?}", e);
                TextMetrics {
                    width: 0.0,
                    ascent: 0.0,
                }
            }
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        warn_on_err("translate", self.ctx.translate(x as f64, y as f64));
    }
}
