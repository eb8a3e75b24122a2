//! Rounding of monetary amounts to whole dollars.

/// Whether a monetary calculation rounds its result to whole dollars.
///
/// Payslips always use [`Rounding::Whole`]. [`Rounding::Exact`] exposes the
/// unrounded intermediate figures for reconciliation and testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Round to the nearest whole dollar, halves rounding up.
    #[default]
    Whole,
    /// Keep the full fractional value.
    Exact,
}

impl Rounding {
    /// Applies this rounding mode to `value`.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Whole => round_half_up(value),
            Rounding::Exact => value,
        }
    }
}

/// Rounds to the nearest integer, with halves going toward positive infinity.
///
/// For the non-negative amounts on a payslip this is the usual "round half
/// up". Unlike [`f64::round`], `-2.5` rounds to `-2`.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::round_half_up;
///
/// assert_eq!(round_half_up(5004.166666666667), 5004.0);
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// ```
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    // exact for any value below 2^52, where all payslip amounts live
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
