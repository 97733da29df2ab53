/*!
 * Simulator Constants
 *
 * Named values shared by the allocator core and the report renderer.
 */

// =============================================================================
// MEMORY
// =============================================================================

/// Unit label printed after every size in reports
pub const SIZE_UNIT: &str = "KB";

/// Allocated share at which memory pressure is reported as Medium
pub const PRESSURE_MEDIUM_THRESHOLD: f64 = 60.0;

/// Allocated share at which memory pressure is reported as High
pub const PRESSURE_HIGH_THRESHOLD: f64 = 80.0;

/// Allocated share at which memory pressure is reported as Critical
pub const PRESSURE_CRITICAL_THRESHOLD: f64 = 95.0;

// =============================================================================
// REPORTING
// =============================================================================

/// Width of the `=` and `-` rules framing report sections
pub const REPORT_RULE_WIDTH: usize = 40;

/// Column at which statistic values start (label is padded to this width)
pub const STATS_LABEL_WIDTH: usize = 24;
