//! Scrollytelling page: narrative steps scroll past a sticky chart surface and
//! each step entering the trigger line redraws the chart.

use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::future::join_all;
use tracing::{debug, error, info};

use crate::charts::{ChartFrame, LineChart, ScatterPlot, Tooltip, TooltipState};
use crate::core::timing::sleep_ms;
use crate::core::StoryConfig;
use crate::data::DatasetCache;
use crate::story::{
    ChartView, Dispatcher, Layout, LoadOutcome, Scroller, Step, StepBounds, StepEnter,
    StepTracker,
};

/// Used until the scroll container has been measured.
const FALLBACK_VIEWPORT_HEIGHT: f64 = 800.0;
const FALLBACK_SURFACE_WIDTH: f64 = 640.0;

#[derive(Debug, Clone, PartialEq)]
struct ActiveView {
    key: String,
    view: ChartView,
}

/// Signal handles shared by the page's event handlers and load tasks.
#[derive(Clone, Copy)]
struct StoryState {
    config: Signal<StoryConfig>,
    cache: Signal<DatasetCache>,
    tracker: Signal<StepTracker>,
    scroller: Signal<Scroller>,
    viewport_height: Signal<f64>,
    view: Signal<Option<ActiveView>>,
    clearing: Signal<bool>,
    loading: Signal<bool>,
    load_error: Signal<Option<String>>,
    container: Signal<Option<Rc<MountedData>>>,
    steps: Signal<Vec<Option<Rc<MountedData>>>>,
}

fn use_story_state() -> StoryState {
    let config = use_signal(|| try_consume_context::<StoryConfig>().unwrap_or_default());
    let offset = config.peek().trigger_offset;

    StoryState {
        config,
        cache: use_signal(DatasetCache::new),
        tracker: use_signal(StepTracker::default),
        scroller: use_signal(|| Scroller::new(offset)),
        viewport_height: use_signal(|| FALLBACK_VIEWPORT_HEIGHT),
        view: use_signal(|| None),
        clearing: use_signal(|| false),
        loading: use_signal(|| false),
        load_error: use_signal(|| None),
        container: use_signal(|| None),
        steps: use_signal(|| vec![None; Step::ALL.len()]),
    }
}

impl StoryState {
    /// Measure the container and every step, then let the scroller decide
    /// whether a new step was entered.
    async fn measure(mut self) {
        let Some(root) = self.container.peek().clone() else {
            return;
        };
        // Wait until every step has mounted.
        let Some(nodes) = self
            .steps
            .peek()
            .iter()
            .cloned()
            .collect::<Option<Vec<_>>>()
        else {
            return;
        };

        let ticket = self.scroller.with_mut(|scroller| scroller.begin_measure());
        let Ok(root_rect) = root.get_client_rect().await else {
            return;
        };
        let origin = root_rect.origin.y;
        let rects = join_all(nodes.iter().map(|node| node.get_client_rect())).await;
        let Some(bounds) = rects
            .into_iter()
            .map(|rect| {
                rect.ok().map(|r| {
                    let top = r.origin.y - origin;
                    StepBounds::new(top, top + r.size.height)
                })
            })
            .collect::<Option<Vec<_>>>()
        else {
            return;
        };

        if !self.scroller.peek().is_latest(ticket) {
            return;
        }

        let height = root_rect.size.height;
        if self.scroller.peek().viewport_height() != height {
            debug!(height, "story viewport resized");
            self.scroller.with_mut(|scroller| scroller.resize(height));
            self.viewport_height.set(height);
        }

        let entered = self.scroller.with_mut(|scroller| scroller.update(&bounds));
        if let Some(enter) = entered {
            self.enter_step(enter).await;
        }
    }

    async fn enter_step(mut self, enter: StepEnter) {
        let generation = self.tracker.with_mut(|tracker| tracker.enter(enter));
        info!(step = enter.index, direction = ?enter.direction, "step entered");

        let Some(step) = Step::from_index(enter.index) else {
            debug!(step = enter.index, "no view for step");
            return;
        };
        let config = self.config.peek().clone();

        self.loading.set(true);
        if step.waits_for_clear() {
            self.clearing.set(true);
            sleep_ms(config.redraw_delay_ms).await;
        }

        let cache = self.cache.peek().clone();
        let loaded = cache.get_or_load(&config.dataset_location).await;

        let outcome = Dispatcher::new(&config).settle(
            &self.tracker.peek(),
            generation,
            step,
            loaded.as_deref(),
        );
        if outcome == LoadOutcome::Stale {
            debug!(generation, "dropping view for a step that is no longer active");
            return;
        }
        self.loading.set(false);
        self.clearing.set(false);

        match outcome {
            LoadOutcome::Draw { key, view } => {
                self.load_error.set(None);
                self.view.set(Some(ActiveView { key, view }));
            }
            LoadOutcome::Failed(message) => {
                error!(location = %config.dataset_location, "failed to load dataset: {message}");
                self.load_error.set(Some(message));
            }
            LoadOutcome::Stale => {}
        }
    }
}

#[component]
pub fn Story() -> Element {
    // Re-render on language change when the shell provides the signal.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.map(|code| code()).unwrap_or_default();

    let mut state = use_story_state();
    let mut surface_width = use_signal(|| FALLBACK_SURFACE_WIDTH);
    let tooltip = use_signal(TooltipState::default);

    let layout = Layout::from_viewport(
        *state.viewport_height.read(),
        surface_width(),
        &state.config.read(),
    );
    let frame = layout.frame;
    let svg_width = layout.surface_width;
    let svg_height = layout.surface_height;
    let figure_style = format!(
        "top: {}px; height: {}px;",
        layout.surface_top, layout.surface_height
    );
    let step_style = format!("min-height: {}px;", layout.step_height);

    let active = state.tracker.read().active();
    let view = state.view.read().clone();
    let surface_class = if *state.clearing.read() {
        "scrolly__surface scrolly__surface--clearing"
    } else {
        "scrolly__surface"
    };
    let loading = *state.loading.read();
    let load_error = state.load_error.read().clone();

    rsx! {
        div {
            class: "page page-story scrolly",
            onmounted: move |evt: MountedEvent| {
                state.container.set(Some(evt.data()));
                spawn(state.measure());
            },
            onscroll: move |_| {
                spawn(state.measure());
            },
            onresize: move |_| {
                spawn(state.measure());
            },

            header { class: "scrolly__intro",
                h1 { {crate::t!("story-title")} }
                p { {crate::t!("story-intro")} }
                p { class: "scrolly__hint", {crate::t!("story-scroll-hint")} }
            }

            section { class: "scrolly__body",
                figure {
                    class: "scrolly__figure",
                    style: "{figure_style}",
                    onresize: move |evt: ResizeEvent| {
                        if let Ok(size) = evt.data().get_content_box_size() {
                            surface_width.set(size.width);
                        }
                    },
                    svg {
                        class: "{surface_class}",
                        width: "{svg_width}",
                        height: "{svg_height}",
                        for active_view in view {
                            ChartSurface {
                                key: "{active_view.key}",
                                view: active_view.view,
                                frame,
                                tooltip,
                            }
                        }
                    }
                    if let Some(message) = load_error {
                        div { class: "scrolly__status scrolly__status--error", role: "alert",
                            strong { {crate::t!("story-load-error")} }
                            " {message}"
                        }
                    } else if loading {
                        div { class: "scrolly__status", {crate::t!("story-loading")} }
                    }
                }

                article { class: "scrolly__steps",
                    {Step::ALL.into_iter().map(|step| {
                        let idx = step.index();
                        let class = if active == Some(idx) { "step is-active" } else { "step" };
                        let heading = step.heading();
                        let body = step.narrative();
                        let style = step_style.clone();
                        rsx! {
                            div {
                                key: "{idx}",
                                class: "{class}",
                                "data-step": "{idx}",
                                style: "{style}",
                                onmounted: move |evt: MountedEvent| {
                                    state.steps.with_mut(|nodes| {
                                        if let Some(slot) = nodes.get_mut(idx) {
                                            *slot = Some(evt.data());
                                        }
                                    });
                                    spawn(state.measure());
                                },
                                div { class: "step__card",
                                    h2 { "{heading}" }
                                    p { "{body}" }
                                }
                            }
                        }
                    })}
                }
            }

            footer { class: "scrolly__outro",
                p { {crate::t!("story-outro")} }
            }
        }

        Tooltip { state: tooltip() }
    }
}

#[component]
fn ChartSurface(view: ChartView, frame: ChartFrame, tooltip: Signal<TooltipState>) -> Element {
    match view {
        ChartView::Line {
            series,
            color,
            title,
            highlight,
        } => rsx! {
            LineChart { series, color, title, highlight, frame, tooltip }
        },
        ChartView::Scatter {
            points,
            title,
            highlight,
        } => rsx! {
            ScatterPlot { points, title, highlight, frame }
        },
    }
}
