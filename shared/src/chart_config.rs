use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::details_type::BarKind;

/// Errors raised while loading a chart configuration document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse chart config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid chart config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Height and color of a single bar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarSpec {
    /// Height in logical (CSS) pixels
    pub height: f64,
    /// Any CSS color string
    pub color: String,
}

impl BarSpec {
    pub fn new(height: f64, color: &str) -> Self {
        Self {
            height,
            color: color.to_string(),
        }
    }
}

/// Appearance of the reference grid and its axis labels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridStyle {
    /// Number of lines drawn in each direction (the outer edges included)
    pub lines: usize,
    pub stroke: String,
    pub line_width: f64,
    pub label_fill: String,
    pub label_font: String,
    pub label_align: String,
    /// Right edge of the label column
    pub label_x: f64,
    /// Distance labels sit above their gridline
    pub label_dy: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            lines: 5,
            stroke: "rgba(68, 255, 136, 0.1)".to_string(),
            line_width: 1.0,
            label_fill: "rgba(255, 255, 255, 0.5)".to_string(),
            label_font: "10px Inter".to_string(),
            label_align: "right".to_string(),
            label_x: 25.0,
            label_dy: 5.0,
        }
    }
}

/// How the value at the top gridline is chosen.
///
/// The axis is a value range spread over the gridlines, which are spaced by
/// the canvas height. Bar heights are fixed logical pixels, so a bar of
/// height 150 only meets the "150" label when the canvas happens to be tall
/// enough; the labels are not a pixel scale for the bars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum AxisScale {
    /// Pick the smallest multiple of `step` per gridline so the highest label
    /// is at least the tallest bar's height value
    Fitted { step: f64 },
    /// Use a fixed value at the top gridline
    Fixed { max: f64 },
}

/// Text format for axis labels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LabelFormat {
    /// Integers without decimals, other values as-is
    Plain,
    Fixed { decimals: usize },
    Currency { symbol: String, decimals: usize },
}

impl LabelFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            LabelFormat::Plain => {
                if value.fract() == 0.0 {
                    format!("{:.0}", value)
                } else {
                    format!("{}", value)
                }
            }
            LabelFormat::Fixed { decimals } => format!("{:.*}", decimals, value),
            LabelFormat::Currency { symbol, decimals } => {
                format!("{}{:.*}", symbol, decimals, value)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AxisConfig {
    pub scale: AxisScale,
    pub format: LabelFormat,
}

impl AxisConfig {
    /// The axis the first version of the widget shipped with: labels
    /// "0", "94", "188", "282" regardless of the bars.
    pub fn legacy() -> Self {
        Self {
            scale: AxisScale::Fixed { max: 376.0 },
            format: LabelFormat::Plain,
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            scale: AxisScale::Fitted { step: 50.0 },
            format: LabelFormat::Plain,
        }
    }
}

/// Everything that shapes how the finance chart is painted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    /// Bars in paint order: money in, money out, balance
    pub bars: [BarSpec; 3],
    pub bar_width: f64,
    pub glow_blur: f64,
    /// Opacity of bars that are not part of the current selection
    pub dimmed_opacity: f64,
    /// Distance from the bottom edge to the bar baseline
    pub baseline_offset: f64,
    /// Distance from the horizontal center to the first bar's left edge
    pub center_offset: f64,
    pub grid: GridStyle,
    pub axis: AxisConfig,
    pub fade_in_ms: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bars: [
                BarSpec::new(150.0, "#4488ff"),
                BarSpec::new(50.0, "#ff4444"),
                BarSpec::new(100.0, "#44ff88"),
            ],
            bar_width: 30.0,
            glow_blur: 15.0,
            dimmed_opacity: 0.3,
            baseline_offset: 30.0,
            center_offset: 45.0,
            grid: GridStyle::default(),
            axis: AxisConfig::default(),
            fade_in_ms: 500,
        }
    }
}

impl ChartConfig {
    /// Parse a (possibly partial) JSON document over the defaults and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ChartConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.dimmed_opacity) {
            return Err(ConfigError::Invalid {
                field: "dimmed_opacity",
                reason: format!("{} is outside 0.0..=1.0", self.dimmed_opacity),
            });
        }
        if self.bar_width <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "bar_width",
                reason: "must be positive".to_string(),
            });
        }
        if self.grid.lines < 2 {
            return Err(ConfigError::Invalid {
                field: "grid.lines",
                reason: format!("need at least 2 lines, got {}", self.grid.lines),
            });
        }
        if let Some(bar) = self.bars.iter().find(|bar| bar.height < 0.0) {
            return Err(ConfigError::Invalid {
                field: "bars",
                reason: format!("negative height {} for {}", bar.height, bar.color),
            });
        }
        match self.axis.scale {
            AxisScale::Fitted { step } if step <= 0.0 => Err(ConfigError::Invalid {
                field: "axis.scale.step",
                reason: "must be positive".to_string(),
            }),
            AxisScale::Fixed { max } if max <= 0.0 => Err(ConfigError::Invalid {
                field: "axis.scale.max",
                reason: "must be positive".to_string(),
            }),
            _ => Ok(()),
        }
    }

    pub fn bar(&self, kind: BarKind) -> &BarSpec {
        &self.bars[kind.index()]
    }

    /// Value represented by the top gridline.
    ///
    /// Derived from the bar values only; the canvas size plays no part.
    pub fn axis_max(&self) -> f64 {
        let intervals = self.grid.lines.saturating_sub(1).max(1) as f64;
        match self.axis.scale {
            AxisScale::Fixed { max } => max,
            AxisScale::Fitted { step } => {
                let tallest = self
                    .bars
                    .iter()
                    .map(|bar| bar.height)
                    .fold(0.0_f64, f64::max);
                // The highest label sits one gridline below the top edge
                let highest_label = (intervals - 1.0).max(1.0);
                let per_line = ((tallest / highest_label) / step).ceil().max(1.0) * step;
                per_line * intervals
            }
        }
    }

    /// Label text for each labelled gridline, bottom to top.
    ///
    /// The top gridline stays unlabelled, so `grid.lines - 1` labels come back.
    pub fn axis_labels(&self) -> Vec<String> {
        let intervals = self.grid.lines.saturating_sub(1);
        if intervals == 0 {
            return Vec::new();
        }
        let max = self.axis_max();
        (0..intervals)
            .map(|i| self.axis.format.format(max * i as f64 / intervals as f64))
            .collect()
    }
}
