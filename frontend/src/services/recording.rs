//! In-memory canvas used by the tests: records every paint call together
//! with the context state it was issued under.

use shared::{LogicalSize, PixelSize};

use super::canvas::{DrawingContext, Surface, SurfaceError};

#[derive(Debug, Clone, PartialEq)]
pub struct PaintState {
    pub fill_style: String,
    pub stroke_style: String,
    pub line_width: f64,
    pub shadow_color: String,
    pub shadow_blur: f64,
    pub global_alpha: f64,
    pub font: String,
    pub text_align: String,
    pub scale: f64,
}

impl Default for PaintState {
    fn default() -> Self {
        // Canvas defaults
        Self {
            fill_style: "#000000".to_string(),
            stroke_style: "#000000".to_string(),
            line_width: 1.0,
            shadow_color: "rgba(0, 0, 0, 0)".to_string(),
            shadow_blur: 0.0,
            global_alpha: 1.0,
            font: "10px sans-serif".to_string(),
            text_align: "start".to_string(),
            scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear { width: f64, height: f64 },
    Stroke { path: Vec<(f64, f64)>, state: PaintState },
    Fill { path: Vec<(f64, f64)>, closed: bool, state: PaintState },
    Text { text: String, x: f64, y: f64, state: PaintState },
    /// The backing store was resized, which wipes pixels and state
    Reset,
}

#[derive(Debug, Default)]
pub struct RecordingContext {
    pub ops: Vec<DrawOp>,
    pub state: PaintState,
    path: Vec<(f64, f64)>,
    path_closed: bool,
}

impl RecordingContext {
    pub fn strokes(&self) -> Vec<&Vec<(f64, f64)>> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Stroke { path, .. } => Some(path),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self) -> Vec<(&Vec<(f64, f64)>, &PaintState)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill { path, state, .. } => Some((path, state)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    fn reset(&mut self) {
        self.state = PaintState::default();
        self.path.clear();
        self.path_closed = false;
        self.ops.push(DrawOp::Reset);
    }
}

impl DrawingContext for RecordingContext {
    fn clear_rect(&mut self, _x: f64, _y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.path_closed = false;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push((x, y));
    }

    fn close_path(&mut self) {
        self.path_closed = true;
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill {
            path: self.path.clone(),
            closed: self.path_closed,
            state: self.state.clone(),
        });
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke {
            path: self.path.clone(),
            state: self.state.clone(),
        });
    }

    fn set_fill_style(&mut self, style: &str) {
        self.state.fill_style = style.to_string();
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.state.stroke_style = style.to_string();
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_shadow_color(&mut self, color: &str) {
        self.state.shadow_color = color.to_string();
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        self.state.shadow_blur = blur;
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.state.global_alpha = alpha;
    }

    fn set_font(&mut self, font: &str) {
        self.state.font = font.to_string();
    }

    fn set_text_align(&mut self, align: &str) {
        self.state.text_align = align.to_string();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            state: self.state.clone(),
        });
        Ok(())
    }

    fn set_scale(&mut self, scale: f64) -> Result<(), SurfaceError> {
        self.state.scale = scale;
        Ok(())
    }
}

/// A fake element with a fixed layout box
#[derive(Debug)]
pub struct RecordingSurface {
    pub layout: LogicalSize,
    pub pixel_ratio: f64,
    pub backing: PixelSize,
    pub context: RecordingContext,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        Self {
            layout: LogicalSize::new(width, height),
            pixel_ratio,
            // Canvas default size before anything sizes it
            backing: PixelSize::new(300, 150),
            context: RecordingContext::default(),
        }
    }
}

impl Surface for RecordingSurface {
    type Context = RecordingContext;

    fn layout_size(&self) -> LogicalSize {
        self.layout
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    fn set_backing_size(&mut self, size: PixelSize) {
        self.backing = size;
        self.context.reset();
    }

    fn context(&mut self) -> &mut Self::Context {
        &mut self.context
    }
}
