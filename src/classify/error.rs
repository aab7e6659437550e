//! Classification engine errors

use thiserror::Error;

/// Rejected configuration or gesture. Every variant leaves session state untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub(crate) enum ClassifyError {
    #[error("unknown variable '{0}' (expected median_age or deaths_per_mil)")]
    UnknownVariable(String),

    #[error("unsupported class count {0} (supported: {min}-{max})", min = super::MIN_CLASSES, max = super::MAX_CLASSES)]
    UnsupportedClassCount(usize),

    #[error("unsupported bucket count {0} (supported: 1-{max})", max = super::MAX_BUCKETS)]
    InvalidBucketCount(usize),

    #[error("minimum gap must be a positive number, got {0}")]
    InvalidMinGap(f64),

    #[error("no region has a value for {0}")]
    NoData(String),

    #[error("break index {index} out of range ({len} breaks)")]
    BreakIndexOutOfRange { index: usize, len: usize },
}
