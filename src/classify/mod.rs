//! Choropleth classification engine

mod binning;
mod breaks;
mod error;
mod palette;
mod regions;
mod scale;
mod sequence;

pub(crate) use binning::{Bucket, Tick, axis_ticks, compute_buckets, format_trimmed_decimal};
pub(crate) use breaks::compute_initial_breaks;
pub(crate) use error::ClassifyError;
pub(crate) use palette::{bar_color, hex_to_rgb, palette};
pub(crate) use regions::{ColorAssignment, classify};
pub(crate) use scale::ValueScale;
pub(crate) use sequence::{BreakSequence, Breakpoint, DEFAULT_MIN_GAP, InitOutcome};

/// Supported class counts
pub(crate) const MIN_CLASSES: usize = 4;
pub(crate) const MAX_CLASSES: usize = 7;

/// Histogram buckets (and axis steps) per variable
pub(crate) const DEFAULT_BUCKETS: usize = 10;
pub(crate) const MAX_BUCKETS: usize = 1000;
