use shared::{layout_bars, ChartConfig, DetailsType, LogicalSize};

use super::bar_painter::BarPainter;
use super::grid_painter::GridPainter;
use crate::services::canvas::{DrawingContext, SurfaceError};

/// Repaints a whole frame: clear, grid, then the three bars in order.
pub struct Renderer<'a> {
    config: &'a ChartConfig,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a ChartConfig) -> Self {
        Self { config }
    }

    /// `size` is in logical units; the context must already be scaled for the display.
    pub fn render<C: DrawingContext>(
        &self,
        ctx: &mut C,
        size: LogicalSize,
        selection: Option<DetailsType>,
    ) -> Result<(), SurfaceError> {
        ctx.clear_rect(0.0, 0.0, size.width, size.height);
        self.reset_state(ctx);

        GridPainter::new(&self.config.grid, self.config.axis_labels()).paint(ctx, size)?;

        let painter = BarPainter::from_config(self.config);
        for bar in layout_bars(size, selection, self.config).iter() {
            painter.paint(ctx, bar);
        }

        ctx.set_global_alpha(1.0);
        Ok(())
    }

    /// Every frame starts from the same context state, whatever the last one left behind
    fn reset_state<C: DrawingContext>(&self, ctx: &mut C) {
        let grid = &self.config.grid;
        ctx.set_shadow_color("transparent");
        ctx.set_shadow_blur(0.0);
        ctx.set_global_alpha(1.0);
        ctx.set_stroke_style(&grid.stroke);
        ctx.set_line_width(grid.line_width);
        ctx.set_fill_style(&grid.label_fill);
        ctx.set_font(&grid.label_font);
        ctx.set_text_align(&grid.label_align);
    }
}
