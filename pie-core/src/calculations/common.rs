//! Rounding helpers shared by the pie and legend layouts.

/// Degrees in a full circle.
pub const FULL_CIRCLE: f64 = 360.0;

/// Rounds to the nearest integer, sending exact halves to the even neighbour.
///
/// # Examples
///
/// ```
/// use pie_core::calculations::common::round_half_even;
///
/// assert_eq!(round_half_even(12.5), 12);
/// assert_eq!(round_half_even(13.5), 14);
/// assert_eq!(round_half_even(33.4), 33);
/// ```
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Share of a total expressed as a whole percentage.
pub fn whole_percentage(share: f64) -> i64 {
    round_half_even(share * 100.0)
}

/// Sweep angle in degrees for a share of the total.
pub fn sweep_degrees(share: f64) -> f64 {
    share * FULL_CIRCLE
}
