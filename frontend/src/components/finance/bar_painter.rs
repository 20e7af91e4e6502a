use shared::{Bar, ChartConfig};

use crate::services::canvas::DrawingContext;

/// Paints a single glowing bar.
///
/// Glow and opacity are reset after every bar so they never bleed into
/// whatever is drawn next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPainter {
    pub width: f64,
    pub glow_blur: f64,
}

impl BarPainter {
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            width: config.bar_width,
            glow_blur: config.glow_blur,
        }
    }

    pub fn paint<C: DrawingContext>(&self, ctx: &mut C, bar: &Bar) {
        ctx.set_shadow_color(&bar.color);
        ctx.set_shadow_blur(self.glow_blur);
        ctx.set_fill_style(&bar.color);
        ctx.set_global_alpha(bar.opacity);

        let top = bar.y - bar.height;
        ctx.begin_path();
        ctx.move_to(bar.x, bar.y);
        ctx.line_to(bar.x + self.width, bar.y);
        ctx.line_to(bar.x + self.width, top);
        ctx.line_to(bar.x, top);
        ctx.close_path();
        ctx.fill();

        ctx.set_shadow_color("transparent");
        ctx.set_shadow_blur(0.0);
        ctx.set_global_alpha(1.0);
    }
}
