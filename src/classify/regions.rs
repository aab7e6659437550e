//! Region color assignment from class breaks

use crate::dataset::{Observation, Variable, extent};

/// Class and fill assigned to one region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RegionClass {
    pub(crate) class_index: usize,
    pub(crate) color: &'static str,
}

/// Per-region classes in registry order. Regions without a value for the
/// classified variable have no entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ColorAssignment {
    classes: Vec<Option<RegionClass>>,
    palette: Vec<&'static str>,
}

impl ColorAssignment {
    /// Palette the classes index into
    pub(crate) fn palette(&self) -> &[&'static str] {
        &self.palette
    }

    pub(crate) fn get(&self, region: usize) -> Option<RegionClass> {
        self.classes.get(region).copied().flatten()
    }

    pub(crate) fn by_id(&self, regions: &[Observation], id: &str) -> Option<RegionClass> {
        regions
            .iter()
            .position(|r| r.id == id)
            .and_then(|idx| self.get(idx))
    }

    /// `(registry index, class)` for every classified region
    pub(crate) fn iter(&self) -> impl Iterator<Item = (usize, RegionClass)> + '_ {
        self.classes
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|c| (i, c)))
    }

    /// Number of regions in each of `class_count` classes
    pub(crate) fn class_sizes(&self, class_count: usize) -> Vec<usize> {
        let mut sizes = vec![0; class_count];
        for (_, class) in self.iter() {
            if let Some(size) = sizes.get_mut(class.class_index) {
                *size += 1;
            }
        }
        sizes
    }
}

/// Thresholds in palette order: the floored minimum followed by the breaks
pub(crate) fn class_thresholds(regions: &[Observation], variable: Variable, breaks: &[f64]) -> Vec<f64> {
    let Some((min, _)) = extent(regions, variable) else {
        return Vec::new();
    };
    std::iter::once(min.floor())
        .chain(breaks.iter().copied())
        .collect()
}

/// Assign every region the palette entry of the highest-indexed threshold
/// its value strictly exceeds. Regions exceeding none fall back to
/// `palette[0]`.
pub(crate) fn classify(
    regions: &[Observation],
    variable: Variable,
    breaks: &[f64],
    palette: &[&'static str],
) -> ColorAssignment {
    let thresholds = class_thresholds(regions, variable, breaks);
    let last_class = palette.len().saturating_sub(1);

    let classes = regions
        .iter()
        .map(|region| {
            let value = region.value(variable)?;
            let class_index = thresholds
                .iter()
                .rposition(|&t| value > t)
                .unwrap_or(0)
                .min(last_class);
            palette.get(class_index).map(|&color| RegionClass { class_index, color })
        })
        .collect();

    ColorAssignment {
        classes,
        palette: palette.to_vec(),
    }
}
