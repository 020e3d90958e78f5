//! Filter + aggregate helpers that turn the dataset into chart-ready series.

use super::dataset::{CrimeRow, Dataset};
use super::rollup::{rollup_mean, YearValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Property,
    Violent,
}

impl Metric {
    pub fn value(self, row: &CrimeRow) -> f64 {
        match self {
            Metric::Property => row.property_rate,
            Metric::Violent => row.violent_rate,
        }
    }
}

/// One state's rates for a single year.
#[derive(Debug, Clone, PartialEq)]
pub struct StatePoint {
    pub state: String,
    pub property_rate: f64,
    pub violent_rate: f64,
}

/// Per-year mean of `metric` for rows belonging to `state`.
pub fn rate_by_year(dataset: &Dataset, state: &str, metric: Metric) -> Vec<YearValue> {
    rollup_mean(
        dataset.rows_for_state(state),
        |row| row.year.clone(),
        |row| metric.value(row),
    )
    .into_iter()
    .map(|(year, value)| YearValue { year, value })
    .collect()
}

/// Every state's rates for `year`, leaving out the `exclude` aggregate row.
pub fn states_for_year(dataset: &Dataset, year: &str, exclude: &str) -> Vec<StatePoint> {
    dataset
        .rows_for_year(year)
        .filter(|row| row.state != exclude)
        .map(|row| StatePoint {
            state: row.state.clone(),
            property_rate: row.property_rate,
            violent_rate: row.violent_rate,
        })
        .collect()
}

/// First point holding the largest value.
pub fn peak(series: &[YearValue]) -> Option<&YearValue> {
    series.iter().fold(None, |best: Option<&YearValue>, point| match best {
        Some(current) if current.value >= point.value => Some(current),
        _ if point.value.is_nan() => best,
        _ => Some(point),
    })
}

/// Split a series at its peak year. The peak belongs to both halves so the
/// highlighted segment and the trailing points meet.
pub fn split_at_peak(series: &[YearValue]) -> (Vec<YearValue>, Vec<YearValue>) {
    let Some(peak_year) = peak(series).and_then(YearValue::year_number) else {
        return (Vec::new(), series.to_vec());
    };

    let upto = series
        .iter()
        .filter(|point| point.year_number().is_some_and(|year| year <= peak_year))
        .cloned()
        .collect();
    let from = series
        .iter()
        .filter(|point| point.year_number().is_some_and(|year| year >= peak_year))
        .cloned()
        .collect();
    (upto, from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::parse(
            &[
                "State,Year,Data.Rates.Property.All,Data.Rates.Violent.All",
                "Georgia,1988,100,10",
                "Georgia,1988,300,30",
                "Georgia,1989,500,50",
                "Georgia,1990,400,60",
                "Ohio,1989,250,25",
                "Ohio,2019,1800,290",
                "Georgia,2019,2500,340",
                "United States,2019,2100,380",
            ]
            .join("\n"),
        )
        .unwrap()
    }

    #[test]
    fn rate_by_year_means_duplicate_years() {
        let series = rate_by_year(&dataset(), "Georgia", Metric::Property);
        assert_eq!(
            series,
            vec![
                YearValue::new("1988", 200.0),
                YearValue::new("1989", 500.0),
                YearValue::new("1990", 400.0),
                YearValue::new("2019", 2500.0),
            ]
        );

        let violent = rate_by_year(&dataset(), "Georgia", Metric::Violent);
        assert_eq!(violent[0], YearValue::new("1988", 20.0));
    }

    #[test]
    fn unknown_state_yields_empty_series() {
        assert!(rate_by_year(&dataset(), "Atlantis", Metric::Property).is_empty());
    }

    #[test]
    fn states_for_year_excludes_national_row() {
        let points = states_for_year(&dataset(), "2019", "United States");
        let names: Vec<_> = points.iter().map(|p| p.state.as_str()).collect();
        assert_eq!(names, vec!["Ohio", "Georgia"]);
        assert_eq!(points[1].violent_rate, 340.0);
    }

    #[test]
    fn peak_prefers_first_maximum() {
        let series = vec![
            YearValue::new("1990", 5.0),
            YearValue::new("1991", 9.0),
            YearValue::new("1992", 9.0),
        ];
        assert_eq!(peak(&series).map(|p| p.year.as_str()), Some("1991"));
        assert!(peak(&[]).is_none());
    }

    #[test]
    fn split_shares_the_peak_point() {
        let series = vec![
            YearValue::new("1988", 1.0),
            YearValue::new("1989", 7.0),
            YearValue::new("1990", 3.0),
        ];
        let (upto, from) = split_at_peak(&series);
        assert_eq!(upto.len(), 2);
        assert_eq!(from.len(), 2);
        assert_eq!(upto.last(), from.first());
    }
}
