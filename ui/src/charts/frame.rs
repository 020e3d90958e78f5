use crate::core::Margin;

/// Outer size of the drawing surface plus the margins reserved for axes and
/// titles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl ChartFrame {
    pub fn new(width: f64, height: f64, margin: Margin) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// Transform that moves the plot group inside the margins.
    pub fn plot_transform(&self) -> String {
        format!("translate({},{})", self.margin.left, self.margin.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_size_subtracts_margins() {
        let frame = ChartFrame::new(600.0, 400.0, Margin::default());
        assert_eq!(frame.inner_width(), 510.0);
        assert_eq!(frame.inner_height(), 310.0);
        assert_eq!(frame.plot_transform(), "translate(60,30)");
    }

    #[test]
    fn tiny_surface_never_goes_negative() {
        let frame = ChartFrame::new(40.0, 20.0, Margin::default());
        assert_eq!(frame.inner_width(), 0.0);
        assert_eq!(frame.inner_height(), 0.0);
    }
}
