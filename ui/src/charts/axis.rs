//! Bottom and left axes drawn as plain SVG groups.

use dioxus::prelude::*;

use super::scale::LinearScale;
use crate::core::format::format_tick;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Pixel offset along the axis.
    pub position: f64,
    pub label: String,
}

pub fn linear_ticks(scale: &LinearScale, count: usize) -> Vec<Tick> {
    let step = scale.tick_spacing(count);
    scale
        .ticks(count)
        .into_iter()
        .map(|value| Tick {
            position: scale.apply(value),
            label: format_tick(value, step),
        })
        .collect()
}

pub fn year_axis_ticks(scale: &LinearScale, years: &[f64]) -> Vec<Tick> {
    years
        .iter()
        .map(|year| Tick {
            position: scale.apply(*year),
            label: format!("{}", *year as i64),
        })
        .collect()
}

#[component]
pub fn AxisBottom(
    ticks: Vec<Tick>,
    offset: f64,
    length: f64,
    #[props(default)] rotate_labels: bool,
) -> Element {
    let domain = format!("M0,{TICK_SIZE}V0H{length}V{TICK_SIZE}");
    let label_y = TICK_SIZE + TICK_PADDING;

    rsx! {
        g {
            class: "axis axis--bottom",
            transform: "translate(0, {offset})",
            path { class: "axis__domain", d: "{domain}", fill: "none", stroke: "currentColor" }
            {ticks.iter().map(|tick| {
                let transform = format!("translate({},0)", tick.position);
                let label = tick.label.clone();
                rsx! {
                    g { key: "{label}", class: "axis__tick", transform: "{transform}",
                        line { y2: "{TICK_SIZE}", stroke: "currentColor" }
                        if rotate_labels {
                            text {
                                y: "{label_y}",
                                dx: "-.8em",
                                dy: "1em",
                                transform: "rotate(-45)",
                                text_anchor: "end",
                                fill: "currentColor",
                                "{label}"
                            }
                        } else {
                            text {
                                y: "{label_y}",
                                dy: "0.71em",
                                text_anchor: "middle",
                                fill: "currentColor",
                                "{label}"
                            }
                        }
                    }
                }
            })}
        }
    }
}

#[component]
pub fn AxisLeft(ticks: Vec<Tick>, length: f64) -> Element {
    let domain = format!("M-{TICK_SIZE},{length}H0V0H-{TICK_SIZE}");
    let label_x = -(TICK_SIZE + TICK_PADDING);

    rsx! {
        g { class: "axis axis--left",
            path { class: "axis__domain", d: "{domain}", fill: "none", stroke: "currentColor" }
            {ticks.iter().map(|tick| {
                let transform = format!("translate(0,{})", tick.position);
                let label = tick.label.clone();
                rsx! {
                    g { key: "{label}", class: "axis__tick", transform: "{transform}",
                        line { x2: "-{TICK_SIZE}", stroke: "currentColor" }
                        text {
                            x: "{label_x}",
                            dy: "0.32em",
                            text_anchor: "end",
                            fill: "currentColor",
                            "{label}"
                        }
                    }
                }
            })}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_ticks_are_positioned_and_labelled() {
        let scale = LinearScale::new((0.0, 2000.0), (300.0, 0.0));
        let ticks = linear_ticks(&scale, 4);
        let labels: Vec<_> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "500", "1,000", "1,500", "2,000"]);
        assert_eq!(ticks[0].position, 300.0);
        assert_eq!(ticks[4].position, 0.0);
    }

    #[test]
    fn year_ticks_use_four_digit_labels() {
        let scale = LinearScale::new((1988.0, 1990.0), (0.0, 200.0));
        let ticks = year_axis_ticks(&scale, &[1988.0, 1989.0, 1990.0]);
        assert_eq!(ticks[1].label, "1989");
        assert_eq!(ticks[1].position, 100.0);
    }
}
