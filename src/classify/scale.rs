//! Data value <-> screen position transforms

/// Linear map from `domain` onto `range`
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub(crate) fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A zero-width domain maps everything to the middle of the range
    pub(crate) fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }
}

/// Paired forward (value -> position) and backward (position -> value) maps
/// for one variable's extent on a chart of fixed width
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ValueScale {
    forward: LinearScale,
    backward: LinearScale,
    chart_width: f64,
}

impl ValueScale {
    /// `extent` is the unrounded data extent of the active variable
    pub(crate) fn new(extent: (f64, f64), chart_width: f64) -> Self {
        Self {
            forward: LinearScale::new(extent, (0.0, chart_width)),
            backward: LinearScale::new((0.0, chart_width), extent),
            chart_width,
        }
    }

    pub(crate) fn forward(&self, value: f64) -> f64 {
        self.forward.map(value)
    }

    pub(crate) fn backward(&self, position: f64) -> f64 {
        self.backward.map(position)
    }

    pub(crate) fn chart_width(&self) -> f64 {
        self.chart_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_maps_extent_to_chart_edges() {
        let scale = ValueScale::new((20.0, 60.0), 440.0);
        assert_eq!(scale.forward(20.0), 0.0);
        assert_eq!(scale.forward(60.0), 440.0);
        assert_eq!(scale.forward(40.0), 220.0);
    }

    #[test]
    fn test_backward_maps_chart_edges_to_extent() {
        let scale = ValueScale::new((20.0, 60.0), 440.0);
        assert_eq!(scale.backward(0.0), 20.0);
        assert_eq!(scale.backward(440.0), 60.0);
        assert_eq!(scale.backward(110.0), 30.0);
    }

    #[test]
    fn test_zero_width_extent_has_no_nan() {
        let scale = ValueScale::new((7.0, 7.0), 440.0);
        assert_eq!(scale.forward(7.0), 220.0);
        assert_eq!(scale.backward(13.0), 7.0);
        assert_eq!(scale.backward(scale.forward(7.0)), 7.0);
    }
}
