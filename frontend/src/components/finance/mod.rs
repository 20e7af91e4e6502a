pub mod bar_painter;
pub mod finance_visualization;
pub mod grid_painter;
pub mod renderer;
pub mod resize_handler;

pub use finance_visualization::FinanceVisualization;
