//! Linear scales and tick generation for the SVG charts.

use crate::data::YearValue;

/// Maps a continuous domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Extend the domain outward to round tick boundaries.
    pub fn nice(mut self) -> Self {
        let (d0, d1) = self.domain;
        let reversed = d1 < d0;
        let (mut lo, mut hi) = if reversed { (d1, d0) } else { (d0, d1) };

        let mut previous = None;
        for _ in 0..10 {
            let step = tick_step(lo, hi, 10);
            if !(step.is_finite() && step > 0.0) || previous == Some(step) {
                break;
            }
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
            previous = Some(step);
        }

        self.domain = if reversed { (hi, lo) } else { (lo, hi) };
        self
    }

    /// Roughly `count` evenly spaced round values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let (lo, hi) = if d1 < d0 { (d1, d0) } else { (d0, d1) };
        if !(lo.is_finite() && hi.is_finite()) {
            return Vec::new();
        }
        if lo == hi {
            return vec![lo];
        }

        let step = tick_step(lo, hi, count);
        if !(step.is_finite() && step > 0.0) {
            return Vec::new();
        }

        let start = (lo / step).ceil() as i64;
        let stop = (hi / step).floor() as i64;
        (start..=stop).map(|i| scaled(i, step)).collect()
    }

    /// Spacing between the values returned by `ticks(count)`.
    pub fn tick_spacing(&self, count: usize) -> f64 {
        let (d0, d1) = self.domain;
        tick_step(d0.min(d1), d0.max(d1), count)
    }
}

/// 1-2-5 tick increment for spanning `[start, stop]` with about `count` ticks.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start).abs() / count.max(1) as f64;
    if raw == 0.0 || !raw.is_finite() {
        return f64::NAN;
    }
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    power * factor
}

// Avoid accumulating float error (0.1 * 3) for fractional steps.
fn scaled(index: i64, step: f64) -> f64 {
    if step < 1.0 {
        index as f64 / (1.0 / step).round()
    } else {
        index as f64 * step
    }
}

/// Min and max of the finite values.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

pub fn max(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    extent(values).map(|(_, hi)| hi)
}

/// Horizontal year scale over a series' numeric years.
pub fn year_scale(series: &[YearValue], width: f64) -> LinearScale {
    let (lo, hi) = extent(series.iter().filter_map(YearValue::year_number)).unwrap_or((0.0, 1.0));
    LinearScale::new((lo, hi), (0.0, width))
}

/// One tick per distinct year in the series, in ascending order.
pub fn year_ticks(series: &[YearValue]) -> Vec<f64> {
    let mut years: Vec<f64> = series.iter().filter_map(YearValue::year_number).collect();
    years.sort_by(f64::total_cmp);
    years.dedup();
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_maps_domain_to_range() {
        let scale = LinearScale::new((0.0, 100.0), (300.0, 0.0));
        assert_eq!(scale.apply(0.0), 300.0);
        assert_eq!(scale.apply(100.0), 0.0);
        assert_eq!(scale.apply(25.0), 225.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 200.0));
        assert_eq!(scale.apply(5.0), 100.0);
    }

    #[test]
    fn nice_rounds_outward() {
        let scale = LinearScale::new((0.3, 9.7), (0.0, 1.0)).nice();
        assert_eq!(scale.domain, (0.0, 10.0));

        let scale = LinearScale::new((1834.2, 5120.9), (0.0, 1.0)).nice();
        assert_eq!(scale.domain, (1500.0, 5500.0));
    }

    #[test]
    fn ticks_follow_one_two_five() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 1.0));
        assert_eq!(scale.ticks(5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(scale.tick_spacing(5), 2.0);

        let fractional = LinearScale::new((0.0, 1.0), (0.0, 1.0));
        assert_eq!(fractional.ticks(5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn extent_ignores_nan() {
        assert_eq!(extent([3.0, f64::NAN, -1.0, 7.0]), Some((-1.0, 7.0)));
        assert_eq!(extent([f64::NAN]), None);
        assert_eq!(max([1.0, 4.0]), Some(4.0));
    }

    #[test]
    fn year_ticks_are_sorted_and_unique() {
        let series = vec![
            YearValue::new("1990", 1.0),
            YearValue::new("1988", 2.0),
            YearValue::new("1990", 3.0),
        ];
        assert_eq!(year_ticks(&series), vec![1988.0, 1990.0]);
        let scale = year_scale(&series, 100.0);
        assert_eq!(scale.apply(1989.0), 50.0);
    }
}
