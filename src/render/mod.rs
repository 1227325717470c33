//! Rendering
//!
//! The scene is drawn through the [`Surface`] trait so the same drawing code
//! runs against a browser canvas or an in-memory recorder. All coordinates are
//! logical game units; any device-pixel scaling is the surface's business.

pub mod recorder;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recorder::{DrawCall, Recorder};
pub use scene::{clear, draw_game_over, draw_world};

/// Text extents needed for layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    /// Distance from the baseline to the top of the glyphs
    pub ascent: f32,
}

/// A 2D drawing target with canvas-like state (fill style, font, transform)
pub trait Surface {
    fn set_fill(&mut self, color: &str);
    fn set_font(&mut self, font: &str);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    /// Draw text with its baseline's left end at (x, y)
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
    /// Measure `text` in the current font
    fn measure_text(&mut self, text: &str) -> TextMetrics;
    fn translate(&mut self, x: f32, y: f32);
}
