//! Initial class breaks from mean and standard deviation

use crate::dataset::{Observation, Variable, values_of};

/// Mean and sample standard deviation of a variable
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Spread {
    pub(crate) mean: f64,
    pub(crate) std_dev: f64,
}

/// Sample statistics (n - 1 denominator). A single value has zero spread.
pub(crate) fn spread(values: &[f64]) -> Option<Spread> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std_dev = if values.len() < 2 {
        0.0
    } else {
        let variance = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        variance.sqrt()
    };
    Some(Spread { mean, std_dev })
}

/// `break_count` breaks half a deviation apart, centred on the mean.
/// Zero spread yields `break_count` copies of the mean.
pub(crate) fn breaks_from_spread(spread: Spread, break_count: usize) -> Vec<f64> {
    let step = spread.std_dev / 2.0;
    let first = spread.mean - step * (break_count / 2) as f64;
    (0..break_count).map(|i| first + step * i as f64).collect()
}

/// Initial breaks for `variable`; empty when no region has a value
pub(crate) fn compute_initial_breaks(
    regions: &[Observation],
    variable: Variable,
    break_count: usize,
) -> Vec<f64> {
    spread(&values_of(regions, variable))
        .map(|s| breaks_from_spread(s, break_count))
        .unwrap_or_default()
}
