//! Conversions between protocol dim levels and percentages.
//!
//! Both directions round half-up towards the ceiling (any non-zero remainder
//! rounds up). Installed devices expect these exact level boundaries, so
//! do not switch to round-to-nearest.

/// Highest dim level carried by a 4-bit dim field.
pub const MAX_DIM_LEVEL: u8 = 15;

/// Percentage upper bound.
pub const MAX_PERCENT: u8 = 100;

/// Convert a dim level in `0..=max_level` to a percentage.
///
/// Levels above `max_level` are clamped first.
///
/// # Examples
/// ```
/// use rfxwire_core::scaling::{MAX_DIM_LEVEL, level_to_percent};
///
/// assert_eq!(level_to_percent(15, MAX_DIM_LEVEL), 100);
/// assert_eq!(level_to_percent(1, MAX_DIM_LEVEL), 7);
/// ```
pub fn level_to_percent(level: u8, max_level: u8) -> u8 {
    if max_level == 0 {
        return 0;
    }
    let level = level.min(max_level) as u32;
    (level * MAX_PERCENT as u32).div_ceil(max_level as u32) as u8
}

/// Convert a percentage to a dim level in `0..=max_level`.
///
/// Percentages above 100 are clamped.
///
/// # Examples
/// ```
/// use rfxwire_core::scaling::{MAX_DIM_LEVEL, percent_to_level};
///
/// assert_eq!(percent_to_level(50, MAX_DIM_LEVEL), 8);
/// assert_eq!(percent_to_level(0, MAX_DIM_LEVEL), 0);
/// ```
pub fn percent_to_level(percent: u8, max_level: u8) -> u8 {
    let percent = percent.min(MAX_PERCENT) as u32;
    (percent * max_level as u32).div_ceil(MAX_PERCENT as u32) as u8
}
