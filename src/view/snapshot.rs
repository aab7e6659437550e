//! Renderer that keeps the latest state pushed by a session

use crate::classify::{Breakpoint, Bucket, ColorAssignment, Tick, format_trimmed_decimal};
use crate::dataset::Variable;

use super::Renderer;

/// Latest rendered view, consumed by the terminal report and chart output
#[derive(Clone, Debug, Default)]
pub(crate) struct Snapshot {
    pub(crate) variable: Option<Variable>,
    pub(crate) buckets: Vec<Bucket>,
    pub(crate) ticks: Vec<Tick>,
    pub(crate) breaks: Vec<Breakpoint>,
    pub(crate) colors: ColorAssignment,
    /// Number of region color assignments received
    pub(crate) recolor_count: usize,
}

impl Snapshot {
    /// Value range of each class: `<= b0`, `b0 - b1`, ..., `> bn`
    pub(crate) fn class_labels(&self) -> Vec<String> {
        let values: Vec<String> = self
            .breaks
            .iter()
            .map(|b| format_trimmed_decimal(b.value, 1))
            .collect();
        let Some((first, last)) = values.first().zip(values.last()) else {
            return vec!["all".to_string()];
        };

        let mut labels = Vec::with_capacity(values.len() + 1);
        labels.push(format!("<= {}", first));
        labels.extend(values.windows(2).map(|w| format!("{} - {}", w[0], w[1])));
        labels.push(format!("> {}", last));
        labels
    }
}

impl Renderer for Snapshot {
    fn render_buckets(&mut self, variable: Variable, buckets: &[Bucket]) {
        self.variable = Some(variable);
        self.buckets = buckets.to_vec();
    }

    fn render_axis_ticks(&mut self, ticks: &[Tick]) {
        self.ticks = ticks.to_vec();
    }

    fn render_break_lines(&mut self, breaks: &[Breakpoint]) {
        self.breaks = breaks.to_vec();
    }

    fn render_region_colors(&mut self, colors: &ColorAssignment) {
        self.colors = colors.clone();
        self.recolor_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakpoint(value: f64) -> Breakpoint {
        Breakpoint {
            value,
            position: 0.0,
        }
    }

    #[test]
    fn test_class_labels_cover_all_classes() {
        let snapshot = Snapshot {
            breaks: vec![breakpoint(10.0), breakpoint(20.25), breakpoint(30.0)],
            ..Snapshot::default()
        };
        assert_eq!(
            snapshot.class_labels(),
            vec!["<= 10", "10 - 20.3", "20.3 - 30", "> 30"]
        );
    }

    #[test]
    fn test_class_labels_without_breaks() {
        assert_eq!(Snapshot::default().class_labels(), vec!["all"]);
    }

    #[test]
    fn test_render_calls_replace_state() {
        let mut snapshot = Snapshot::default();
        snapshot.render_break_lines(&[breakpoint(1.0)]);
        snapshot.render_break_lines(&[breakpoint(2.0), breakpoint(3.0)]);
        snapshot.render_region_colors(&ColorAssignment::default());
        assert_eq!(snapshot.breaks.len(), 2);
        assert_eq!(snapshot.recolor_count, 1);
    }
}
