//! Yearly line chart with an optional "rise to the peak" overlay.

use dioxus::prelude::*;

use super::axis::{linear_ticks, year_axis_ticks, AxisBottom, AxisLeft};
use super::frame::ChartFrame;
use super::path::{line_path, polyline_length};
use super::scale::{self, LinearScale};
use super::tooltip::{HoverPoints, TooltipState};
use crate::core::format::format_rate;
use crate::data::{split_at_peak, YearValue};

const BACKGROUND: &str = "#fafafa";
const REVEAL_STROKE: &str = "red";

/// Draws the series up to its maximum in red, revealed over `reveal_ms`, and
/// annotates `annotate_year` once the reveal completes.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakHighlight {
    pub annotate_year: String,
    pub reveal_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineGeometry {
    pub x: LinearScale,
    pub y: LinearScale,
    pub points: Vec<(f64, f64, YearValue)>,
}

impl LineGeometry {
    pub fn new(series: &[YearValue], width: f64, height: f64) -> Self {
        let x = scale::year_scale(series, width);
        let y_max = scale::max(series.iter().map(|p| p.value)).unwrap_or(1.0);
        let y = LinearScale::new((0.0, y_max), (height, 0.0));
        let points = project(series, &x, &y);
        Self { x, y, points }
    }

    pub fn xy(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|(x, y, _)| (*x, *y)).collect()
    }

    pub fn overlay(&self, series: &[YearValue], highlight: &PeakHighlight) -> PeakOverlay {
        let (upto, from) = split_at_peak(series);
        let reveal: Vec<(f64, f64)> = project(&upto, &self.x, &self.y)
            .into_iter()
            .map(|(x, y, _)| (x, y))
            .collect();
        let annotation = self
            .points
            .iter()
            .find(|(_, _, point)| point.year == highlight.annotate_year)
            .cloned();

        PeakOverlay {
            length: polyline_length(&reveal),
            path: line_path(&reveal),
            trailing: project(&from, &self.x, &self.y),
            annotation,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeakOverlay {
    pub path: String,
    pub length: f64,
    /// Hover markers from the peak onward.
    pub trailing: Vec<(f64, f64, YearValue)>,
    pub annotation: Option<(f64, f64, YearValue)>,
}

fn project(series: &[YearValue], x: &LinearScale, y: &LinearScale) -> Vec<(f64, f64, YearValue)> {
    series
        .iter()
        .filter(|point| point.value.is_finite())
        .filter_map(|point| {
            let year = point.year_number()?;
            Some((x.apply(year), y.apply(point.value), point.clone()))
        })
        .collect()
}

#[component]
pub fn LineChart(
    series: Vec<YearValue>,
    color: String,
    title: String,
    highlight: Option<PeakHighlight>,
    frame: ChartFrame,
    tooltip: Signal<TooltipState>,
) -> Element {
    let width = frame.inner_width();
    let height = frame.inner_height();
    let margin = frame.margin;

    let geometry = LineGeometry::new(&series, width, height);
    let x_ticks = year_axis_ticks(&geometry.x, &scale::year_ticks(&series));
    let y_ticks = linear_ticks(&geometry.y, 10);
    let line_d = line_path(&geometry.xy());
    let overlay = highlight
        .as_ref()
        .map(|h| (geometry.overlay(&series, h), h.reveal_ms));

    let y_label_x = -height / 2.0 + 50.0;
    let y_label_y = -margin.left + 20.0;
    let x_label_transform = format!("translate({}, {})", width / 2.0, height + margin.bottom * 0.7);
    let title_x = width / 2.0;
    let title_y = -margin.top / 2.0;
    let year_label = crate::t!("chart-year");
    let plot_transform = frame.plot_transform();

    rsx! {
        g { class: "chart chart--line", transform: "{plot_transform}",
            rect { class: "chart__background", width: "{width}", height: "{height}", fill: BACKGROUND }

            text {
                class: "chart__axis-label",
                text_anchor: "end",
                transform: "rotate(-90)",
                x: "{y_label_x}",
                y: "{y_label_y}",
                font_size: "12px",
                {crate::t!("chart-line-y-label")}
            }

            AxisBottom { ticks: x_ticks, offset: height, length: width, rotate_labels: true }

            text {
                class: "chart__axis-label",
                text_anchor: "middle",
                transform: "{x_label_transform}",
                font_size: "12px",
                "{year_label}"
            }

            text {
                class: "chart__title",
                x: "{title_x}",
                y: "{title_y}",
                text_anchor: "middle",
                font_size: "16px",
                font_weight: "bold",
                "{title}"
            }

            AxisLeft { ticks: y_ticks, length: height }

            path {
                class: "chart__line",
                d: "{line_d}",
                fill: "none",
                stroke: "{color}",
                stroke_width: "2.5",
            }

            HoverPoints { points: geometry.points, color: color.clone(), tooltip }

            if let Some((overlay, reveal_ms)) = overlay {
                PeakOverlayLayer { overlay, reveal_ms, color: color.clone(), tooltip }
            }
        }
    }
}

#[component]
fn PeakOverlayLayer(
    overlay: PeakOverlay,
    reveal_ms: u64,
    color: String,
    tooltip: Signal<TooltipState>,
) -> Element {
    let d = overlay.path.clone();
    let dash = format!("{len} {len}", len = overlay.length);
    let offset = overlay.length.to_string();
    let reveal_style = format!("animation-duration: {reveal_ms}ms;");
    let annotation_style = format!("animation-delay: {reveal_ms}ms;");
    let annotation = overlay.annotation.as_ref().map(|(x, y, point)| {
        (
            *x,
            *y,
            format!("{}: {}", crate::t!("chart-year"), point.year),
            format!("{}: {}", crate::t!("chart-rate"), format_rate(point.value)),
        )
    });

    rsx! {
        path {
            class: "chart__reveal",
            d: "{d}",
            fill: "none",
            stroke: REVEAL_STROKE,
            stroke_width: "2",
            stroke_dasharray: "{dash}",
            stroke_dashoffset: "{offset}",
            style: "{reveal_style}",
        }

        if let Some((ax, ay, year_line, rate_line)) = annotation {
            text {
                class: "chart__annotation",
                x: "{ax}",
                y: "{ay}",
                text_anchor: "middle",
                font_size: "14px",
                fill: "black",
                style: "{annotation_style}",
                tspan { x: "{ax}", dy: "20px", "{year_line}" }
                tspan { x: "{ax}", dy: "20px", "{rate_line}" }
            }
        }

        HoverPoints { points: overlay.trailing.clone(), color, tooltip }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Vec<YearValue> {
        vec![
            YearValue::new("1988", 50.0),
            YearValue::new("1989", 100.0),
            YearValue::new("1990", 75.0),
            YearValue::new("1991", 25.0),
        ]
    }

    #[test]
    fn geometry_spans_the_plot() {
        let geometry = LineGeometry::new(&series(), 300.0, 200.0);
        assert_eq!(geometry.y.domain, (0.0, 100.0));
        let xy = geometry.xy();
        assert_eq!(xy.first(), Some(&(0.0, 100.0)));
        assert_eq!(xy[1], (100.0, 0.0));
        assert_eq!(xy.last(), Some(&(300.0, 150.0)));
    }

    #[test]
    fn overlay_reveals_up_to_peak_and_annotates_year() {
        let geometry = LineGeometry::new(&series(), 300.0, 200.0);
        let overlay = geometry.overlay(
            &series(),
            &PeakHighlight {
                annotate_year: "1990".into(),
                reveal_ms: 2000,
            },
        );
        assert_eq!(overlay.path, "M0,100L100,0");
        assert!((overlay.length - 100.0 * 2f64.sqrt()).abs() < 1e-9);
        assert_eq!(overlay.trailing.len(), 3);
        let (ax, _, point) = overlay.annotation.unwrap();
        assert_eq!(ax, 200.0);
        assert_eq!(point.value, 75.0);
    }

    #[test]
    fn missing_annotation_year_is_skipped() {
        let geometry = LineGeometry::new(&series(), 300.0, 200.0);
        let overlay = geometry.overlay(
            &series(),
            &PeakHighlight {
                annotate_year: "1975".into(),
                reveal_ms: 0,
            },
        );
        assert!(overlay.annotation.is_none());
    }

    #[test]
    fn nan_values_are_not_plotted() {
        let mut data = series();
        data.push(YearValue::new("1992", f64::NAN));
        let geometry = LineGeometry::new(&data, 300.0, 200.0);
        assert_eq!(geometry.points.len(), 4);
    }
}
