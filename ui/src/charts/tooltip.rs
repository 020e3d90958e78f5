//! Hover tooltip shared by every chart on the drawing surface.

use dioxus::prelude::*;

use crate::core::format::format_rate;
use crate::data::YearValue;

/// Vertical offset so the tooltip sits above the pointer.
pub const TOOLTIP_OFFSET_Y: f64 = -28.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    pub lines: Vec<String>,
}

impl TooltipState {
    pub fn show(&mut self, x: f64, y: f64, lines: Vec<String>) {
        self.visible = true;
        self.left = x;
        self.top = y + TOOLTIP_OFFSET_Y;
        self.lines = lines;
    }

    /// Hide but keep the content so the fade-out still shows it.
    pub fn hide(&mut self) {
        self.visible = false;
    }
}

pub fn point_lines(point: &YearValue) -> Vec<String> {
    vec![
        format!("{}: {}", crate::t!("chart-year"), point.year),
        format!("{}: {}", crate::t!("chart-rate"), format_rate(point.value)),
    ]
}

/// Invisible markers over a series that drive the tooltip on hover.
#[component]
pub fn HoverPoints(
    points: Vec<(f64, f64, YearValue)>,
    color: String,
    tooltip: Signal<TooltipState>,
) -> Element {
    let mut tooltip = tooltip;

    rsx! {
        for (idx, (cx, cy, point)) in points.into_iter().enumerate() {
            circle {
                key: "{idx}",
                class: "data-point",
                cx: "{cx}",
                cy: "{cy}",
                r: "5",
                fill: "{color}",
                opacity: "0",
                onmouseenter: move |evt: MouseEvent| {
                    let at = evt.client_coordinates();
                    let lines = point_lines(&point);
                    tooltip.with_mut(|state| state.show(at.x, at.y, lines));
                },
                onmouseleave: move |_| tooltip.with_mut(TooltipState::hide),
            }
        }
    }
}

#[component]
pub fn Tooltip(state: TooltipState) -> Element {
    let class = if state.visible {
        "tooltip tooltip--visible"
    } else {
        "tooltip"
    };
    let style = format!("left: {}px; top: {}px;", state.left, state.top);

    rsx! {
        div {
            class: "{class}",
            role: "tooltip",
            style: "{style}",
            for (idx, line) in state.lines.iter().enumerate() {
                div { key: "{idx}", "{line}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_offsets_above_pointer() {
        let mut state = TooltipState::default();
        state.show(120.0, 300.0, vec!["a".into()]);
        assert!(state.visible);
        assert_eq!(state.left, 120.0);
        assert_eq!(state.top, 272.0);
    }

    #[test]
    fn hide_keeps_content_for_fade_out() {
        let mut state = TooltipState::default();
        state.show(0.0, 0.0, vec!["Rate: 1.00".into()]);
        state.hide();
        assert!(!state.visible);
        assert_eq!(state.lines, vec!["Rate: 1.00".to_string()]);
    }
}
