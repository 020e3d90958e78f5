//! SVG chart rendering for the shared drawing surface.

pub mod axis;
pub mod path;
pub mod scale;

mod frame;
pub use frame::ChartFrame;

mod tooltip;
pub use tooltip::{point_lines, HoverPoints, Tooltip, TooltipState};

mod line;
pub use line::{LineChart, LineGeometry, PeakHighlight, PeakOverlay};

mod scatter;
pub use scatter::{dot_style, label_style, DotStyle, LabelStyle, ScatterGeometry, ScatterPlot};
