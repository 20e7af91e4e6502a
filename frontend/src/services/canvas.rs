//! Drawing seam between the chart painters and the browser canvas.
//!
//! Painters only talk to [`DrawingContext`] and [`Surface`], so they can be
//! exercised against a recording implementation off the browser.

use shared::{effective_pixel_ratio, LogicalSize, PixelSize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    /// The canvas element is not mounted (yet, or any more)
    #[error("canvas element is not available")]
    SurfaceUnavailable,
    /// The element refused to hand out a 2D context
    #[error("2d drawing context could not be obtained")]
    ContextUnavailable,
    /// The host threw while executing a drawing command
    #[error("canvas call failed: {0}")]
    Host(String),
}

impl SurfaceError {
    /// Transient states during mount/unmount, not faults
    pub fn is_transient(&self) -> bool {
        matches!(self, SurfaceError::SurfaceUnavailable | SurfaceError::ContextUnavailable)
    }
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        SurfaceError::Host(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// The subset of the 2D immediate-mode canvas API the chart needs
pub trait DrawingContext {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn set_fill_style(&mut self, style: &str);
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_shadow_color(&mut self, color: &str);
    fn set_shadow_blur(&mut self, blur: f64);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: &str);
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError>;
    /// Replace the current transform with a uniform scale
    fn set_scale(&mut self, scale: f64) -> Result<(), SurfaceError>;
}

/// A drawable element with a layout box and a resizable backing store
pub trait Surface {
    type Context: DrawingContext;

    /// On-screen size of the element in logical pixels
    fn layout_size(&self) -> LogicalSize;
    fn device_pixel_ratio(&self) -> f64;
    /// Resizing the backing store also resets the context state
    fn set_backing_size(&mut self, size: PixelSize);
    fn context(&mut self) -> &mut Self::Context;
}

impl DrawingContext for CanvasRenderingContext2d {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn close_path(&mut self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.set_fill_style_str(style);
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.set_stroke_style_str(style);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_shadow_color(&mut self, color: &str) {
        CanvasRenderingContext2d::set_shadow_color(self, color);
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        CanvasRenderingContext2d::set_shadow_blur(self, blur);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        CanvasRenderingContext2d::set_global_alpha(self, alpha);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn set_text_align(&mut self, align: &str) {
        CanvasRenderingContext2d::set_text_align(self, align);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError> {
        CanvasRenderingContext2d::fill_text(self, text, x, y)?;
        Ok(())
    }

    fn set_scale(&mut self, scale: f64) -> Result<(), SurfaceError> {
        CanvasRenderingContext2d::set_transform(self, scale, 0.0, 0.0, scale, 0.0, 0.0)?;
        Ok(())
    }
}

/// A mounted `<canvas>` together with its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| SurfaceError::ContextUnavailable)?
            .ok_or(SurfaceError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::ContextUnavailable)?;
        Ok(Self { canvas, context })
    }
}

impl Surface for CanvasSurface {
    type Context = CanvasRenderingContext2d;

    fn layout_size(&self) -> LogicalSize {
        let rect = self.canvas.get_bounding_client_rect();
        LogicalSize::new(rect.width(), rect.height())
    }

    fn device_pixel_ratio(&self) -> f64 {
        let raw = web_sys::window()
            .map(|window| window.device_pixel_ratio())
            .unwrap_or(1.0);
        effective_pixel_ratio(raw)
    }

    fn set_backing_size(&mut self, size: PixelSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    fn context(&mut self) -> &mut Self::Context {
        &mut self.context
    }
}
