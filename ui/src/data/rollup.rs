//! Group-by-mean aggregation.

use std::collections::HashMap;
use std::hash::Hash;

/// Aggregate value for one year of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct YearValue {
    pub year: String,
    pub value: f64,
}

impl YearValue {
    pub fn new(year: impl Into<String>, value: f64) -> Self {
        Self {
            year: year.into(),
            value,
        }
    }

    /// Numeric year used for positioning; `None` for non-numeric keys.
    pub fn year_number(&self) -> Option<f64> {
        self.year.trim().parse::<i32>().ok().map(f64::from)
    }
}

/// Arithmetic mean ignoring `NaN`; `None` when no value is usable.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        if !value.is_nan() {
            sum += value;
            count += 1;
        }
    }
    (count > 0).then(|| sum / count as f64)
}

/// Group `items` by `key_fn` and reduce each group to the mean of `value_fn`.
///
/// Groups come back in the order their key first appears. Groups without a
/// single numeric value are dropped.
pub fn rollup_mean<T, K, KF, VF>(
    items: impl IntoIterator<Item = T>,
    key_fn: KF,
    value_fn: VF,
) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> f64,
{
    let mut order: Vec<K> = Vec::new();
    let mut groups: HashMap<K, Vec<f64>> = HashMap::new();

    for item in items {
        let key = key_fn(&item);
        let value = value_fn(&item);
        groups
            .entry(key.clone())
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(value);
    }

    order
        .into_iter()
        .filter_map(|key| {
            let values = groups.remove(&key)?;
            mean(values).map(|avg| (key, avg))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_skips_nan() {
        assert_eq!(mean([1.0, f64::NAN, 3.0]), Some(2.0));
        assert_eq!(mean([f64::NAN]), None);
        assert_eq!(mean(Vec::<f64>::new()), None);
    }

    #[test]
    fn groups_keep_first_appearance_order() {
        let rows = vec![("1990", 2.0), ("1989", 4.0), ("1990", 4.0), ("1989", 8.0)];
        let out = rollup_mean(rows, |row| row.0, |row| row.1);
        assert_eq!(out, vec![("1990", 3.0), ("1989", 6.0)]);
    }

    #[test]
    fn all_nan_group_is_dropped() {
        let rows = vec![("a", f64::NAN), ("b", 1.0)];
        let out = rollup_mean(rows, |row| row.0, |row| row.1);
        assert_eq!(out, vec![("b", 1.0)]);
    }

    #[test]
    fn year_number_parses_numeric_keys() {
        assert_eq!(YearValue::new("1989", 1.0).year_number(), Some(1989.0));
        assert_eq!(YearValue::new("n/a", 1.0).year_number(), None);
    }
}
