//! Property vs. violent crime scatterplot with a single-state highlight.
//!
//! Dot and label styles go through inline CSS so that switching the highlight
//! on a mounted chart transitions instead of jumping.

use dioxus::prelude::*;

use super::axis::{linear_ticks, AxisBottom, AxisLeft};
use super::frame::ChartFrame;
use super::scale::{extent, LinearScale};
use crate::data::StatePoint;

const BACKGROUND: &str = "#fafafa";
const DOT_FILL: &str = "#69b3a2";
const HIGHLIGHT_FILL: &str = "#ff6347";
const MUTED_FILL: &str = "grey";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotStyle {
    pub radius: f64,
    pub fill: &'static str,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub opacity: f64,
    pub font_size: f64,
}

pub fn dot_style(state: &str, highlight: Option<&str>) -> DotStyle {
    match highlight {
        None => DotStyle {
            radius: 4.0,
            fill: DOT_FILL,
            opacity: 1.0,
        },
        Some(target) if target == state => DotStyle {
            radius: 8.0,
            fill: HIGHLIGHT_FILL,
            opacity: 1.0,
        },
        Some(_) => DotStyle {
            radius: 4.0,
            fill: MUTED_FILL,
            opacity: 0.5,
        },
    }
}

pub fn label_style(state: &str, highlight: Option<&str>) -> LabelStyle {
    match highlight {
        Some(target) if target == state => LabelStyle {
            opacity: 1.0,
            font_size: 16.0,
        },
        Some(_) => LabelStyle {
            opacity: 0.2,
            font_size: 10.0,
        },
        None => LabelStyle {
            opacity: 1.0,
            font_size: 10.0,
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterGeometry {
    pub x: LinearScale,
    pub y: LinearScale,
    pub dots: Vec<(f64, f64, String)>,
}

impl ScatterGeometry {
    pub fn new(points: &[StatePoint], width: f64, height: f64) -> Self {
        let plotted: Vec<&StatePoint> = points
            .iter()
            .filter(|p| p.property_rate.is_finite() && p.violent_rate.is_finite())
            .collect();

        let x_domain = extent(plotted.iter().map(|p| p.property_rate)).unwrap_or((0.0, 1.0));
        let y_domain = extent(plotted.iter().map(|p| p.violent_rate)).unwrap_or((0.0, 1.0));
        let x = LinearScale::new(x_domain, (0.0, width)).nice();
        let y = LinearScale::new(y_domain, (height, 0.0)).nice();

        let dots = plotted
            .into_iter()
            .map(|p| (x.apply(p.property_rate), y.apply(p.violent_rate), p.state.clone()))
            .collect();

        Self { x, y, dots }
    }
}

#[component]
pub fn ScatterPlot(
    points: Vec<StatePoint>,
    title: String,
    highlight: Option<String>,
    frame: ChartFrame,
) -> Element {
    let width = frame.inner_width();
    let height = frame.inner_height();
    let margin = frame.margin;
    let geometry = ScatterGeometry::new(&points, width, height);

    let plot_transform = frame.plot_transform();
    let x_ticks = linear_ticks(&geometry.x, 10);
    let y_ticks = linear_ticks(&geometry.y, 10);
    let x_label_x = width / 2.0;
    let y_label_x = -height / 2.0;
    let title_x = width / 2.0;
    let title_y = -margin.top / 2.0;
    let focus = highlight.as_deref();

    rsx! {
        g { class: "chart chart--scatter", transform: "{plot_transform}",
            rect { class: "chart__background", width: "{width}", height: "{height}", fill: BACKGROUND }

            AxisBottom { ticks: x_ticks, offset: height, length: width }
            AxisLeft { ticks: y_ticks, length: height }

            g { transform: "translate(0,{height})",
                text {
                    class: "chart__axis-label",
                    x: "{x_label_x}",
                    y: "40",
                    text_anchor: "middle",
                    fill: "black",
                    {crate::t!("chart-scatter-x-label")}
                }
            }
            text {
                class: "chart__axis-label",
                transform: "rotate(-90)",
                x: "{y_label_x}",
                y: "-50",
                dy: "1em",
                text_anchor: "middle",
                fill: "black",
                font_size: "10",
                {crate::t!("chart-scatter-y-label")}
            }

            {geometry.dots.iter().enumerate().map(|(i, (cx, cy, state))| {
                let key = mark_key("dot", i, state);
                let dot = dot_style(state, focus);
                let radius = dot.radius;
                let style = format!(
                    "r: {}px; fill: {}; opacity: {};",
                    dot.radius, dot.fill, dot.opacity
                );
                rsx! {
                    circle {
                        key: "{key}",
                        class: "scatter__dot",
                        cx: "{cx}",
                        cy: "{cy}",
                        r: "{radius}",
                        style: "{style}",
                    }
                }
            })}

            {geometry.dots.iter().enumerate().map(|(i, (x, y, state))| {
                let key = mark_key("label", i, state);
                let label = label_style(state, focus);
                let style = format!(
                    "opacity: {}; font-size: {}px;",
                    label.opacity, label.font_size
                );
                rsx! {
                    text {
                        key: "{key}",
                        class: "label scatter__label",
                        x: "{x}",
                        y: "{y}",
                        dx: "5px",
                        dy: "-5px",
                        style: "{style}",
                        "{state}"
                    }
                }
            })}

            text {
                class: "chart__title",
                x: "{title_x}",
                y: "{title_y}",
                text_anchor: "middle",
                font_size: "16px",
                font_weight: "bold",
                "{title}"
            }
        }
    }
}

/// Keys stay stable between the two scatter steps, which plot the same rows
/// in the same order. The index keeps repeated states apart.
fn mark_key(kind: &str, index: usize, state: &str) -> String {
    format!("{kind}-{index}-{state}")
}
