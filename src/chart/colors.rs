//! Color definitions for charts

/// Common colors
pub(super) const COLOR_BACKGROUND: &str = "#0A0A0C"; // Near black
pub(super) const COLOR_TEXT: &str = "#FFFFFF"; // White
pub(super) const COLOR_GRID: &str = "#505050"; // Grid lines

/// Class break lines drawn over the histogram
pub(super) const COLOR_BREAK: &str = "#FFD166"; // Amber
