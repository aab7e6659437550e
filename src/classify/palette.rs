//! Sequential color ramps per variable and class count

use crate::dataset::Variable;

use super::{ClassifyError, MAX_CLASSES, MIN_CLASSES};

/// PuBu ramps for median age, 4-7 classes
const MEDIAN_AGE: [&[&str]; 4] = [
    &["#f1eef6", "#bdc9e1", "#74a9cf", "#0570b0"],
    &["#f1eef6", "#bdc9e1", "#74a9cf", "#2b8cbe", "#045a8d"],
    &["#f1eef6", "#d0d1e6", "#a6bddb", "#74a9cf", "#2b8cbe", "#045a8d"],
    &["#f1eef6", "#d0d1e6", "#a6bddb", "#74a9cf", "#3690c0", "#0570b0", "#034e7b"],
];

/// RdPu ramps for deaths per million, 4-7 classes
const DEATHS_PER_MIL: [&[&str]; 4] = [
    &["#feebe2", "#fbb4b9", "#f768a1", "#ae017e"],
    &["#feebe2", "#fbb4b9", "#f768a1", "#c51b8a", "#7a0177"],
    &["#feebe2", "#fcc5c0", "#fa9fb5", "#f768a1", "#c51b8a", "#7a0177"],
    &["#feebe2", "#fcc5c0", "#fa9fb5", "#f768a1", "#dd3497", "#ae017e", "#7a0177"],
];

/// Ramp for `class_count` classes of `variable`
pub(crate) fn palette(
    variable: Variable,
    class_count: usize,
) -> Result<&'static [&'static str], ClassifyError> {
    if !(MIN_CLASSES..=MAX_CLASSES).contains(&class_count) {
        return Err(ClassifyError::UnsupportedClassCount(class_count));
    }
    let table = match variable {
        Variable::MedianAge => &MEDIAN_AGE,
        Variable::DeathsPerMil => &DEATHS_PER_MIL,
    };
    Ok(table[class_count - MIN_CLASSES])
}

/// Histogram bar fill for a variable (second step of its ramp)
pub(crate) fn bar_color(variable: Variable) -> &'static str {
    match variable {
        Variable::MedianAge => "#bdc9e1",
        Variable::DeathsPerMil => "#fbb4b9",
    }
}

/// Parse `#rrggbb` into components
pub(crate) fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
