//! SVG path data for line series.

use std::fmt::Write;

/// `M x,y L x,y ...` through the given points; empty when there are none.
pub fn line_path(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    for (idx, (x, y)) in points.iter().enumerate() {
        let command = if idx == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{command}{},{}", coord(*x), coord(*y));
    }
    d
}

/// Total length of the polyline, used to size the stroke-dash reveal.
pub fn polyline_length(points: &[(f64, f64)]) -> f64 {
    points
        .windows(2)
        .map(|pair| {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            (x1 - x0).hypot(y1 - y0)
        })
        .sum()
}

fn coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}
