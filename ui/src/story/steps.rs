//! The four narrative steps of the scrollytelling page.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    PropertyTrend,
    ViolentTrend,
    StateScatter,
    HighlightState,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::PropertyTrend,
        Step::ViolentTrend,
        Step::StateScatter,
        Step::HighlightState,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Step::PropertyTrend => 0,
            Step::ViolentTrend => 1,
            Step::StateScatter => 2,
            Step::HighlightState => 3,
        }
    }

    /// The first view waits for the surface to finish fading out before it
    /// draws.
    pub fn waits_for_clear(self) -> bool {
        matches!(self, Step::PropertyTrend)
    }

    /// Year called out once the reveal on a line chart has finished.
    pub fn annotate_year(self) -> Option<&'static str> {
        match self {
            Step::PropertyTrend => Some("1989"),
            Step::ViolentTrend => Some("1990"),
            Step::StateScatter | Step::HighlightState => None,
        }
    }

    pub fn heading(self) -> String {
        match self {
            Step::PropertyTrend => crate::t!("step-property-heading"),
            Step::ViolentTrend => crate::t!("step-violent-heading"),
            Step::StateScatter => crate::t!("step-scatter-heading"),
            Step::HighlightState => crate::t!("step-highlight-heading"),
        }
    }

    pub fn narrative(self) -> String {
        match self {
            Step::PropertyTrend => crate::t!("step-property-body"),
            Step::ViolentTrend => crate::t!("step-violent-body"),
            Step::StateScatter => crate::t!("step-scatter-body"),
            Step::HighlightState => crate::t!("step-highlight-body"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_round_trip_and_out_of_range_is_none() {
        for (idx, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.index(), idx);
            assert_eq!(Step::from_index(idx), Some(*step));
        }
        assert_eq!(Step::from_index(4), None);
        assert_eq!(Step::from_index(usize::MAX), None);
    }

    #[test]
    fn only_the_first_step_waits_for_clear() {
        let waiting: Vec<_> = Step::ALL.iter().filter(|s| s.waits_for_clear()).collect();
        assert_eq!(waiting, vec![&Step::PropertyTrend]);
    }

    #[test]
    fn line_steps_annotate_their_peak_years() {
        assert_eq!(Step::PropertyTrend.annotate_year(), Some("1989"));
        assert_eq!(Step::ViolentTrend.annotate_year(), Some("1990"));
        assert_eq!(Step::StateScatter.annotate_year(), None);
    }

    #[test]
    fn every_step_has_text() {
        crate::i18n::init();
        for step in Step::ALL {
            assert!(!step.heading().is_empty());
            assert!(!step.narrative().is_empty());
        }
    }
}
