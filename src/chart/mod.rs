//! Chart rendering for histogram and region classification

mod colors;
mod histogram;
mod regions;

pub(crate) use histogram::render_histogram_chart;
pub(crate) use regions::render_region_chart;

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 2800;
pub(super) const CHART_HEIGHT: u32 = 1200;

/// Round to 1 decimal place for display
pub(super) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Title line for a chart, e.g. "Median age (5 classes)"
pub(super) fn build_title(label: &str, class_count: usize) -> String {
    let mut chars = label.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{} ({} classes)", capitalized, class_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_title() {
        assert_eq!(build_title("median age", 5), "Median age (5 classes)");
        assert_eq!(build_title("", 4), " (4 classes)");
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(37.84), 37.8);
        assert_eq!(round1(-0.04), -0.0);
    }
}
