//! Scroll observer: decides which step sits under the trigger line.
//!
//! The story view measures every step with `MountedData::get_client_rect` on
//! scroll and feeds the boxes here; only a change of step is reported.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Down,
    Up,
}

/// Vertical extent of a step, relative to the top of the scroll viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepBounds {
    pub top: f64,
    pub bottom: f64,
}

impl StepBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    fn contains(&self, y: f64) -> bool {
        self.top <= y && y < self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEnter {
    pub index: usize,
    pub direction: Direction,
}

/// Index of the step crossing `offset * viewport_height`, if any.
pub fn active_step(bounds: &[StepBounds], viewport_height: f64, offset: f64) -> Option<usize> {
    let trigger = viewport_height * offset;
    bounds.iter().position(|b| b.contains(trigger))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scroller {
    offset: f64,
    viewport_height: f64,
    /// Step under the trigger line; `None` while the line is in a gap.
    current: Option<usize>,
    /// Last step entered, kept across gaps for the direction.
    previous: Option<usize>,
    /// Whether the trigger line left `previous` through its top edge.
    left_above: bool,
    measure_seq: u64,
}

impl Scroller {
    pub fn new(offset: f64) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            viewport_height: 0.0,
            current: None,
            previous: None,
            left_above: false,
            measure_seq: 0,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn trigger(&self) -> f64 {
        self.viewport_height * self.offset
    }

    /// Record a new viewport height. The active step is kept, so a resize
    /// never re-enters it.
    pub fn resize(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height.max(0.0);
    }

    /// Ticket for a measurement about to start. Measurements finish out of
    /// order; only the newest ticket may update the scroller.
    pub fn begin_measure(&mut self) -> u64 {
        self.measure_seq += 1;
        self.measure_seq
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.measure_seq == ticket
    }

    /// Report a step enter when the step under the trigger line changed.
    /// Leaving every step (intro, outro, margins) reports nothing, but the
    /// step entered next is reported even when it is the one just left.
    pub fn update(&mut self, bounds: &[StepBounds]) -> Option<StepEnter> {
        let Some(index) = active_step(bounds, self.viewport_height, self.offset) else {
            if self.current.take().is_some() {
                let trigger = self.trigger();
                self.left_above = self
                    .previous
                    .and_then(|i| bounds.get(i))
                    .is_some_and(|b| trigger < b.top);
            }
            return None;
        };
        if self.current == Some(index) {
            return None;
        }
        let direction = match self.previous {
            Some(previous) if index < previous => Direction::Up,
            Some(previous) if index == previous && !self.left_above => Direction::Up,
            _ => Direction::Down,
        };
        self.current = Some(index);
        self.previous = Some(index);
        Some(StepEnter { index, direction })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Four 300px steps, the page scrolled by `scrolled` pixels.
    fn steps(scrolled: f64) -> Vec<StepBounds> {
        (0..4)
            .map(|i| {
                let top = i as f64 * 300.0 - scrolled;
                StepBounds::new(top, top + 300.0)
            })
            .collect()
    }

    #[test]
    fn trigger_line_picks_the_step() {
        // trigger at 330px
        assert_eq!(active_step(&steps(0.0), 1000.0, 0.33), Some(1));
        assert_eq!(active_step(&steps(100.0), 1000.0, 0.33), Some(1));
        assert_eq!(active_step(&steps(400.0), 1000.0, 0.33), Some(2));
        assert_eq!(active_step(&steps(5000.0), 1000.0, 0.33), None);
        assert_eq!(active_step(&[], 1000.0, 0.33), None);
    }

    #[test]
    fn update_fires_only_on_change() {
        let mut scroller = Scroller::new(0.33);
        scroller.resize(1000.0);
        assert_eq!(
            scroller.update(&steps(0.0)),
            Some(StepEnter {
                index: 1,
                direction: Direction::Down
            })
        );
        assert_eq!(scroller.update(&steps(10.0)), None);
        assert_eq!(
            scroller.update(&steps(400.0)),
            Some(StepEnter {
                index: 2,
                direction: Direction::Down
            })
        );
        assert_eq!(
            scroller.update(&steps(-200.0)),
            Some(StepEnter {
                index: 0,
                direction: Direction::Up
            })
        );
    }

    #[test]
    fn gaps_report_nothing() {
        let mut scroller = Scroller::new(0.5);
        scroller.resize(200.0);
        let spaced = [StepBounds::new(0.0, 50.0), StepBounds::new(150.0, 300.0)];
        assert_eq!(scroller.update(&spaced), None);
        let shifted = [StepBounds::new(60.0, 110.0), StepBounds::new(210.0, 360.0)];
        assert_eq!(scroller.update(&shifted).map(|e| e.index), Some(0));
        assert_eq!(scroller.update(&spaced), None);
        assert_eq!(scroller.update(&spaced), None);
    }

    #[test]
    fn step_is_re_entered_after_leaving_it() {
        let mut scroller = Scroller::new(0.33);
        scroller.resize(1000.0);
        let in_first = steps(-200.0);
        // Scrolled back up into the intro: the first step starts below 330px.
        let in_intro = steps(-500.0);
        let down = StepEnter {
            index: 0,
            direction: Direction::Down,
        };
        assert_eq!(scroller.update(&in_first), Some(down));
        assert_eq!(scroller.update(&in_intro), None);
        assert_eq!(scroller.update(&in_first), Some(down));

        // Past the last step into the outro, then back up into it.
        let in_last = steps(700.0);
        let in_outro = steps(1000.0);
        assert_eq!(scroller.update(&in_last).map(|e| e.index), Some(3));
        assert_eq!(scroller.update(&in_outro), None);
        assert_eq!(
            scroller.update(&in_last),
            Some(StepEnter {
                index: 3,
                direction: Direction::Up
            })
        );
    }

    #[test]
    fn only_the_newest_measurement_counts() {
        let mut scroller = Scroller::new(0.33);
        let older = scroller.begin_measure();
        let newer = scroller.begin_measure();
        assert!(!scroller.is_latest(older));
        assert!(scroller.is_latest(newer));
    }

    #[test]
    fn resize_moves_the_trigger_without_re_entering() {
        let mut scroller = Scroller::new(0.33);
        scroller.resize(1000.0);
        assert!(scroller.update(&steps(0.0)).is_some());
        scroller.resize(1000.0);
        assert_eq!(scroller.update(&steps(0.0)), None);
        scroller.resize(2000.0);
        // trigger at 660px now falls into the third step
        assert_eq!(scroller.update(&steps(0.0)).map(|e| e.index), Some(2));
    }

    #[test]
    fn offset_is_clamped() {
        assert_eq!(Scroller::new(3.0).offset(), 1.0);
        assert_eq!(Scroller::new(-1.0).offset(), 0.0);
    }
}
