//! Maps an entered step to the chart it should draw, and tracks which load is
//! still wanted.

use std::fmt::Display;

use super::scroller::{Direction, StepEnter};
use super::steps::Step;
use crate::charts::PeakHighlight;
use crate::core::StoryConfig;
use crate::data::{rate_by_year, states_for_year, Dataset, Metric, StatePoint, YearValue};

#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    Line {
        series: Vec<YearValue>,
        color: String,
        title: String,
        highlight: Option<PeakHighlight>,
    },
    Scatter {
        points: Vec<StatePoint>,
        title: String,
        highlight: Option<String>,
    },
}

impl ChartView {
    /// Key for the mounted chart. Line charts get a fresh key per load so the
    /// reveal replays; the scatterplot keeps one key so highlight changes
    /// transition in place.
    pub fn surface_key(&self, generation: u64) -> String {
        match self {
            ChartView::Line { .. } => format!("line-{generation}"),
            ChartView::Scatter { .. } => "scatter".to_string(),
        }
    }
}

/// What to do with a dataset load once it finishes.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Another step was entered while loading; leave the surface alone.
    Stale,
    Draw { key: String, view: ChartView },
    Failed(String),
}

pub struct Dispatcher<'a> {
    config: &'a StoryConfig,
}

impl<'a> Dispatcher<'a> {
    pub fn new(config: &'a StoryConfig) -> Self {
        Self { config }
    }

    /// Unknown indexes draw nothing.
    pub fn view_for(&self, index: usize, dataset: &Dataset) -> Option<ChartView> {
        Step::from_index(index).map(|step| self.view_for_step(step, dataset))
    }

    pub fn view_for_step(&self, step: Step, dataset: &Dataset) -> ChartView {
        let config = self.config;
        let state = config.focus_state.as_str();
        match step {
            Step::PropertyTrend => ChartView::Line {
                series: rate_by_year(dataset, state, Metric::Property),
                color: config.line_color.clone(),
                title: crate::t!("chart-title-property", state = state),
                highlight: self.highlight(step),
            },
            Step::ViolentTrend => ChartView::Line {
                series: rate_by_year(dataset, state, Metric::Violent),
                color: config.line_color.clone(),
                title: crate::t!("chart-title-violent", state = state),
                highlight: self.highlight(step),
            },
            Step::StateScatter => self.scatter(dataset, None),
            Step::HighlightState => self.scatter(dataset, Some(config.focus_state.clone())),
        }
    }

    /// Decide what a finished load for `step`, started at `generation`, draws.
    pub fn settle<E: Display>(
        &self,
        tracker: &StepTracker,
        generation: u64,
        step: Step,
        loaded: Result<&Dataset, E>,
    ) -> LoadOutcome {
        if !tracker.is_current(generation) {
            return LoadOutcome::Stale;
        }
        match loaded {
            Ok(dataset) => {
                let view = self.view_for_step(step, dataset);
                LoadOutcome::Draw {
                    key: view.surface_key(generation),
                    view,
                }
            }
            Err(err) => LoadOutcome::Failed(err.to_string()),
        }
    }

    fn highlight(&self, step: Step) -> Option<PeakHighlight> {
        step.annotate_year().map(|year| PeakHighlight {
            annotate_year: year.to_string(),
            reveal_ms: self.config.reveal_ms,
        })
    }

    fn scatter(&self, dataset: &Dataset, highlight: Option<String>) -> ChartView {
        let year = self.config.scatter_year.as_str();
        ChartView::Scatter {
            points: states_for_year(dataset, year, &self.config.national_label),
            title: crate::t!("chart-scatter-title", year = year),
            highlight,
        }
    }
}

/// Active step plus a generation counter bumped on every enter. Async loads
/// capture the generation they were started for and are dropped when it is no
/// longer current.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepTracker {
    active: Option<usize>,
    direction: Direction,
    generation: u64,
}

impl StepTracker {
    pub fn enter(&mut self, enter: StepEnter) -> u64 {
        self.active = Some(enter.index);
        self.direction = enter.direction;
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}
