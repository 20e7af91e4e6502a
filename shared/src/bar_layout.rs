use crate::chart_config::ChartConfig;
use crate::details_type::{BarKind, DetailsType};
use crate::geometry::LogicalSize;

/// One bar as it will be painted this frame.
///
/// `y` is the shared baseline; the bar extends upward from it by `height`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub kind: BarKind,
    pub x: f64,
    pub y: f64,
    pub height: f64,
    pub color: String,
    pub opacity: f64,
}

/// Opacity of a bar under the current selection
pub fn bar_opacity(kind: BarKind, selection: Option<DetailsType>, config: &ChartConfig) -> f64 {
    if kind.is_emphasized(selection) {
        1.0
    } else {
        config.dimmed_opacity
    }
}

/// Lay out the three bars side by side, left of the horizontal center,
/// standing on a baseline just above the bottom edge.
pub fn layout_bars(
    size: LogicalSize,
    selection: Option<DetailsType>,
    config: &ChartConfig,
) -> [Bar; 3] {
    let left = size.width / 2.0 - config.center_offset;
    let baseline = size.height - config.baseline_offset;

    BarKind::ALL.map(|kind| {
        let spec = config.bar(kind);
        Bar {
            kind,
            x: left + config.bar_width * kind.index() as f64,
            y: baseline,
            height: spec.height,
            color: spec.color.clone(),
            opacity: bar_opacity(kind, selection, config),
        }
    })
}
