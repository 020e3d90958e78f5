//! Step model of the scrollytelling page: which step is active, which chart
//! it draws and how the page is laid out around the sticky surface.

mod dispatcher;
mod layout;
mod scroller;
mod steps;

pub use dispatcher::{ChartView, Dispatcher, LoadOutcome, StepTracker};
pub use layout::Layout;
pub use scroller::{active_step, Direction, Scroller, StepBounds, StepEnter};
pub use steps::Step;
