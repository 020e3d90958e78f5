use crate::charts::ChartFrame;
use crate::core::StoryConfig;

/// Sizes derived from the viewport: step height plus the position and size of
/// the sticky drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub step_height: f64,
    pub surface_width: f64,
    pub surface_height: f64,
    pub surface_top: f64,
    pub frame: ChartFrame,
}

impl Layout {
    pub fn from_viewport(inner_height: f64, surface_width: f64, config: &StoryConfig) -> Self {
        let inner_height = inner_height.max(0.0);
        let surface_width = surface_width.max(0.0);
        let step_height = (inner_height * config.step_height_ratio).floor();
        let surface_height = inner_height * config.surface_height_ratio;
        let surface_top = (inner_height - surface_height) / 2.0;

        Self {
            step_height,
            surface_width,
            surface_height,
            surface_top,
            frame: ChartFrame::new(surface_width, surface_height, config.margin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ratios() {
        let layout = Layout::from_viewport(801.0, 640.0, &StoryConfig::default());
        assert_eq!(layout.step_height, 600.0);
        assert_eq!(layout.surface_height, 400.5);
        assert_eq!(layout.surface_top, 200.25);
        assert_eq!(layout.frame.inner_width(), 550.0);
        assert_eq!(layout.frame.inner_height(), 310.5);
    }

    #[test]
    fn collapsed_viewport_stays_non_negative() {
        let layout = Layout::from_viewport(-10.0, 20.0, &StoryConfig::default());
        assert_eq!(layout.step_height, 0.0);
        assert_eq!(layout.surface_height, 0.0);
        assert_eq!(layout.frame.inner_width(), 0.0);
        assert_eq!(layout.frame.inner_height(), 0.0);
    }
}
