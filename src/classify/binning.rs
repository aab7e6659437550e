//! Histogram bucketing and axis ticks

use crate::dataset::{Observation, Variable};

use super::{ClassifyError, MAX_BUCKETS};

/// Histogram bucket `[x0, x1)`; the last bucket of a histogram is closed on the right.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Bucket {
    pub(crate) x0: f64,
    pub(crate) x1: f64,
    /// Indexes into the region registry
    pub(crate) members: Vec<usize>,
}

impl Bucket {
    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }
}

/// Axis tick with its display label
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Tick {
    pub(crate) value: f64,
    pub(crate) label: String,
}

/// Extent of `variable` over rounded values, used for bucket and tick placement
pub(crate) fn rounded_extent(regions: &[Observation], variable: Variable) -> Option<(f64, f64)> {
    regions
        .iter()
        .filter_map(|r| r.value(variable))
        .map(f64::round)
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// `count + 1` thresholds from `min` in equal steps of `(max - min) / count`.
/// Collapses to `[min]` when the extent has zero width.
fn stepped_thresholds(min: f64, max: f64, count: usize) -> Vec<f64> {
    let step = (max - min) / count as f64;
    if step == 0.0 || !step.is_finite() {
        return vec![min];
    }
    let mut thresholds: Vec<f64> = (0..=count).map(|i| min + step * i as f64).collect();
    // Pin the last edge so float accumulation cannot leave the maximum outside
    thresholds[count] = max;
    thresholds
}

/// Bin every region with a value for `variable` into `bucket_count`
/// equal-width buckets spanning the rounded extent
pub(crate) fn compute_buckets(
    regions: &[Observation],
    variable: Variable,
    bucket_count: usize,
) -> Result<Vec<Bucket>, ClassifyError> {
    if !(1..=MAX_BUCKETS).contains(&bucket_count) {
        return Err(ClassifyError::InvalidBucketCount(bucket_count));
    }

    let Some((min, max)) = rounded_extent(regions, variable) else {
        return Ok(Vec::new());
    };

    let thresholds = stepped_thresholds(min, max, bucket_count);
    if thresholds.len() == 1 {
        return Ok(vec![Bucket {
            x0: min,
            x1: max,
            members: regions
                .iter()
                .enumerate()
                .filter(|(_, r)| r.value(variable).is_some())
                .map(|(i, _)| i)
                .collect(),
        }]);
    }

    let mut buckets: Vec<Bucket> = thresholds
        .windows(2)
        .map(|w| Bucket {
            x0: w[0],
            x1: w[1],
            members: Vec::new(),
        })
        .collect();

    // Interior edges only: values below the first edge fall into bucket 0,
    // values at or past the last edge into the final bucket.
    let interior = &thresholds[1..bucket_count];
    for (idx, region) in regions.iter().enumerate() {
        if let Some(v) = region.value(variable) {
            let bucket = interior.partition_point(|&t| t <= v);
            buckets[bucket].members.push(idx);
        }
    }

    Ok(buckets)
}

/// Tick positions for the histogram axis, labelled with one trimmed decimal
pub(crate) fn axis_ticks(regions: &[Observation], variable: Variable, tick_steps: usize) -> Vec<Tick> {
    let Some((min, max)) = rounded_extent(regions, variable) else {
        return Vec::new();
    };
    stepped_thresholds(min, max, tick_steps.max(1))
        .into_iter()
        .map(|value| Tick {
            value,
            label: format_trimmed_decimal(value, 1),
        })
        .collect()
}

/// Fixed-precision formatting with trailing zeros (and a bare point) removed
/// Ties round away from zero (`20.25` -> `20.3`).
pub(crate) fn format_trimmed_decimal(value: f64, precision: usize) -> String {
    let scale = 10f64.powi(precision as i32);
    let rounded = (value * scale).round() / scale;
    let rounded = if rounded.is_finite() { rounded } else { value };
    let fixed = format!("{:.*}", precision, rounded);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
