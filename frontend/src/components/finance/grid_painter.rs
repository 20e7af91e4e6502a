use shared::{GridStyle, LogicalSize};

use crate::services::canvas::{DrawingContext, SurfaceError};

/// Paints the reference grid and the value labels along the left margin
pub struct GridPainter<'a> {
    style: &'a GridStyle,
    labels: Vec<String>,
}

impl<'a> GridPainter<'a> {
    /// `labels` go on the horizontal gridlines from the bottom up
    pub fn new(style: &'a GridStyle, labels: Vec<String>) -> Self {
        Self { style, labels }
    }

    pub fn paint<C: DrawingContext>(
        &self,
        ctx: &mut C,
        size: LogicalSize,
    ) -> Result<(), SurfaceError> {
        let lines = self.style.lines;
        let intervals = lines.saturating_sub(1).max(1) as f64;
        let LogicalSize { width, height } = size;

        ctx.set_stroke_style(&self.style.stroke);
        ctx.set_line_width(self.style.line_width);

        for i in 0..lines {
            let y = height - i as f64 * height / intervals;
            ctx.begin_path();
            ctx.move_to(0.0, y);
            ctx.line_to(width, y);
            ctx.stroke();
        }

        for i in 0..lines {
            let x = i as f64 * width / intervals;
            ctx.begin_path();
            ctx.move_to(x, 0.0);
            ctx.line_to(x, height);
            ctx.stroke();
        }

        ctx.set_fill_style(&self.style.label_fill);
        ctx.set_font(&self.style.label_font);
        ctx.set_text_align(&self.style.label_align);

        for (i, label) in self.labels.iter().enumerate() {
            let y = height - i as f64 * height / intervals;
            ctx.fill_text(label, self.style.label_x, y - self.style.label_dy)?;
        }

        Ok(())
    }
}
