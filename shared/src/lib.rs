//! Data model and configuration for the finance visualization widget.
//!
//! Everything here is plain data and pure functions so the host view and the
//! canvas painters agree on what a frame looks like.

pub mod bar_layout;
pub mod chart_config;
pub mod details_type;
pub mod geometry;

pub use bar_layout::{bar_opacity, layout_bars, Bar};
pub use chart_config::{
    AxisConfig, AxisScale, BarSpec, ChartConfig, ConfigError, GridStyle, LabelFormat,
};
pub use details_type::{BarKind, DetailsType};
pub use geometry::{effective_pixel_ratio, LogicalSize, PixelSize};
