//! Formatting helpers for chart labels and tooltips.

/// Two-decimal rate, as shown in tooltips and annotations.
pub fn format_rate(value: f64) -> String {
    format!("{value:.2}")
}

/// Format an axis tick value with the precision implied by the tick step,
/// grouping thousands with commas (`1,500`, `0.25`).
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 && step < 1.0 {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && raw.chars().any(|c| c != '0' && c != '.');
    let mut label = String::new();
    if negative {
        label.push('-');
    }
    label.push_str(&grouped);
    if let Some(frac) = frac_part {
        label.push('.');
        label.push_str(frac);
    }
    label
}
