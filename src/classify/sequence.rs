//! Draggable, strictly ordered break sequence

use super::ClassifyError;
use super::scale::ValueScale;

/// Minimum distance in screen units between neighbouring break lines
pub(crate) const DEFAULT_MIN_GAP: f64 = 2.0;

/// Class boundary with its cached screen position
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Breakpoint {
    pub(crate) value: f64,
    pub(crate) position: f64,
}

/// Result of loading a fresh set of breaks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct InitOutcome {
    pub(crate) requested: usize,
    pub(crate) kept: usize,
}

impl InitOutcome {
    pub(crate) fn is_collapsed(&self) -> bool {
        self.kept < self.requested
    }
}

/// Owns the live breakpoints. Ordering is kept by clamping each update
/// between its neighbours, never by sorting.
#[derive(Clone, Debug)]
pub(crate) struct BreakSequence {
    points: Vec<Breakpoint>,
    scale: ValueScale,
    min_gap: f64,
    active: Option<usize>,
}

impl BreakSequence {
    pub(crate) fn new(scale: ValueScale, min_gap: f64) -> Self {
        Self {
            points: Vec::new(),
            scale,
            min_gap,
            active: None,
        }
    }

    /// Replace the whole sequence. Values that do not strictly increase on the
    /// previous kept value (duplicates from a zero spread, NaN) are dropped.
    pub(crate) fn initialize(&mut self, values: &[f64], scale: ValueScale) -> InitOutcome {
        let mut points: Vec<Breakpoint> = Vec::with_capacity(values.len());
        for &value in values {
            if !value.is_finite() {
                continue;
            }
            if points.last().is_some_and(|last| value <= last.value) {
                continue;
            }
            points.push(Breakpoint {
                value,
                position: scale.forward(value),
            });
        }

        let outcome = InitOutcome {
            requested: values.len(),
            kept: points.len(),
        };

        self.points = points;
        self.scale = scale;
        self.active = None;
        outcome
    }

    pub(crate) fn points(&self) -> &[Breakpoint] {
        &self.points
    }

    pub(crate) fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }

    pub(crate) fn active(&self) -> Option<usize> {
        self.active
    }

    fn check_index(&self, index: usize) -> Result<(), ClassifyError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(ClassifyError::BreakIndexOutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }

    pub(crate) fn begin_drag(&mut self, index: usize) -> Result<(), ClassifyError> {
        self.check_index(index)?;
        self.active = Some(index);
        Ok(())
    }

    /// Allowed positions for `index`: between the neighbours (or chart edges)
    /// shrunk by the minimum gap. `None` when the neighbours leave no room.
    fn drag_bounds(&self, index: usize) -> Option<(f64, f64)> {
        let left = match index {
            0 => 0.0,
            i => self.points[i - 1].position,
        };
        let right = self
            .points
            .get(index + 1)
            .map_or(self.scale.chart_width(), |p| p.position);

        let lo = left + self.min_gap;
        let hi = right - self.min_gap;
        // A gap too small to move off a neighbour leaves no room either
        (left < lo && lo <= hi && hi < right).then_some((lo, hi))
    }

    /// Whether `candidate` sits strictly between the neighbours of `index`
    /// in both value and position
    fn fits_between(&self, index: usize, candidate: Breakpoint) -> bool {
        let after_prev = index
            .checked_sub(1)
            .and_then(|i| self.points.get(i))
            .is_none_or(|p| p.value < candidate.value && p.position < candidate.position);
        let before_next = self
            .points
            .get(index + 1)
            .is_none_or(|n| candidate.value < n.value && candidate.position < n.position);
        after_prev && before_next
    }

    /// Move one breakpoint towards `position`, clamped between its neighbours
    pub(crate) fn update_drag(
        &mut self,
        index: usize,
        position: f64,
    ) -> Result<Breakpoint, ClassifyError> {
        self.check_index(index)?;

        if let Some((lo, hi)) = self.drag_bounds(index)
            && !position.is_nan()
        {
            let clamped = position.clamp(lo, hi);
            let candidate = Breakpoint {
                value: self.scale.backward(clamped),
                position: clamped,
            };
            if self.fits_between(index, candidate) {
                self.points[index] = candidate;
            }
        }

        Ok(self.points[index])
    }

    /// Finish the gesture and return the settled breakpoint
    pub(crate) fn end_drag(&mut self, index: usize) -> Result<Breakpoint, ClassifyError> {
        self.check_index(index)?;
        if self.active == Some(index) {
            self.active = None;
        }
        Ok(self.points[index])
    }
}
