//! Conversion from an index-linked quote to effective compounding rates

use log::warn;

/// Effective annual rate (decimal) from an index rate and a percentage-of-index multiplier.
///
/// Both inputs are percentages: 10.65 with 110 means 110% of a 10.65% p.a. index,
/// giving 0.11715. Negative or NaN inputs are clamped to zero rather than rejected.
pub fn effective_annual_rate(index_rate_annual_pct: f64, percent_of_index: f64) -> f64 {
    let index = clamp_rate("index_rate_annual", index_rate_annual_pct) / 100.0;
    let multiplier = clamp_rate("percent_of_index", percent_of_index) / 100.0;
    index * multiplier
}

/// Effective monthly rate from an effective annual rate: (1 + r)^(1/12) - 1
///
/// Compounding the result twelve times reproduces the annual rate. Do not
/// replace this with `annual_rate / 12`.
pub fn effective_monthly_rate(annual_rate: f64) -> f64 {
    (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0
}

fn clamp_rate(field: &str, value: f64) -> f64 {
    if value >= 0.0 {
        value
    } else {
        warn!("{} = {} clamped to zero", field, value);
        0.0
    }
}
