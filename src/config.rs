//! Decoder limits and report switches

/// Largest input accepted by default (256 MiB)
pub const DEFAULT_MAX_SIZE: usize = 256 * 1024 * 1024;
/// Deepest element nesting accepted by default
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Limits applied while decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Maximum input size in bytes
    pub max_size: usize,
    /// Maximum element nesting depth, root included
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Switches for the segment report.
///
/// Both are off by default, which reproduces the classic output: a group's
/// source lines from all its translation units, then all its target lines,
/// and a single `g` fallback per target marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Print each `trans-unit`'s sources and targets together, unit by unit
    pub per_unit: bool,
    /// Emit one target line per nested `g`, like the source side does
    pub expand_target_groups: bool,
}
