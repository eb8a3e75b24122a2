//! Superannuation rate parsing and monthly contribution calculation.
//!
//! Super rates arrive as free text such as `"9.5%"`. Payroll runs must not
//! stop because one employee's rate is missing or garbled, so the parser
//! never fails: anything it cannot accept becomes the default rate.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::income::gross_monthly_income;
use super::rounding::Rounding;

/// The multiplier used when a super rate is missing or invalid (9%).
pub const DEFAULT_SUPER_MULTIPLIER: f64 = 0.09;

/// The lowest accepted super rate, in percent.
pub const MIN_SUPER_PERCENT: f64 = 0.0;

/// The highest accepted super rate, in percent.
pub const MAX_SUPER_PERCENT: f64 = 50.0;

/// Rules for turning a textual super rate into a multiplier.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::SuperPolicy;
///
/// let policy = SuperPolicy::default();
/// assert_eq!(policy.multiplier("12%"), 0.12);
/// assert_eq!(policy.multiplier("70%"), 0.09);
/// assert_eq!(policy.checked_multiplier("70%"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperPolicy {
    /// Multiplier substituted for missing or out-of-range rates.
    pub default_multiplier: f64,
    /// Lowest accepted rate in percent (inclusive).
    pub min_percent: f64,
    /// Highest accepted rate in percent (inclusive).
    pub max_percent: f64,
}

impl Default for SuperPolicy {
    fn default() -> Self {
        Self {
            default_multiplier: DEFAULT_SUPER_MULTIPLIER,
            min_percent: MIN_SUPER_PERCENT,
            max_percent: MAX_SUPER_PERCENT,
        }
    }
}

impl SuperPolicy {
    /// Checks that the policy itself is usable.
    ///
    /// `source` names the configuration the policy came from.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigParseError`] if the percent range is not
    /// finite or inverted, or if the default multiplier lies outside it.
    pub fn validate(&self, source: &str) -> EngineResult<()> {
        let invalid = |message: String| EngineError::ConfigParseError {
            path: source.to_string(),
            message,
        };

        if !self.min_percent.is_finite() || !self.max_percent.is_finite() {
            return Err(invalid(
                "superannuation min_percent and max_percent must be finite".to_string(),
            ));
        }
        if self.min_percent > self.max_percent {
            return Err(invalid(format!(
                "superannuation min_percent {} exceeds max_percent {}",
                self.min_percent, self.max_percent
            )));
        }
        let default_percent = self.default_multiplier * 100.0;
        // NaN fails both comparisons
        if !(default_percent >= self.min_percent && default_percent <= self.max_percent) {
            return Err(invalid(format!(
                "superannuation default_multiplier {} is outside {}%..={}%",
                self.default_multiplier, self.min_percent, self.max_percent
            )));
        }
        Ok(())
    }

    /// Parses a super rate, returning `None` if the default would apply.
    ///
    /// The final character (normally `%`) is dropped and the rest is
    /// trimmed. The remainder must be a decimal number within
    /// `[min_percent, max_percent]`; the result is that number divided by 100.
    pub fn checked_multiplier(&self, raw: &str) -> Option<f64> {
        let mut chars = raw.chars();
        chars.next_back();
        let number = chars.as_str().trim();
        if number.is_empty() {
            return None;
        }

        let percent: f64 = number.parse().ok()?;
        // NaN fails both comparisons
        if percent >= self.min_percent && percent <= self.max_percent {
            Some(percent / 100.0)
        } else {
            None
        }
    }

    /// Parses a super rate, falling back to the default multiplier.
    pub fn multiplier(&self, raw: &str) -> f64 {
        self.checked_multiplier(raw)
            .unwrap_or(self.default_multiplier)
    }
}

/// Converts a textual super rate such as `"9.5%"` into a multiplier.
///
/// Uses the default policy: rates outside 0-50%, empty rates and
/// non-numeric rates all become 0.09.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::parse_super_multiplier;
///
/// assert_eq!(parse_super_multiplier("12%"), 0.12);
/// assert_eq!(parse_super_multiplier("%"), 0.09);
/// assert_eq!(parse_super_multiplier("-7%"), 0.09);
/// assert_eq!(parse_super_multiplier("JD%"), 0.09);
/// ```
pub fn parse_super_multiplier(raw: &str) -> f64 {
    SuperPolicy::default().multiplier(raw)
}

/// Calculates the monthly super contribution using the default policy.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::{monthly_super, Rounding};
///
/// assert_eq!(monthly_super(60050.0, "9%", Rounding::Whole), 450.0);
/// assert_eq!(monthly_super(130000.0, "9.5%", Rounding::Exact), 1029.1666666666667);
/// ```
pub fn monthly_super(annual_salary: f64, super_rate: &str, rounding: Rounding) -> f64 {
    monthly_super_with_policy(&SuperPolicy::default(), annual_salary, super_rate, rounding)
}

/// Calculates the monthly super contribution under `policy`.
///
/// The rate is applied to gross monthly income computed with the same
/// rounding mode, so with [`Rounding::Whole`] super is a percentage of the
/// whole-dollar gross figure.
pub fn monthly_super_with_policy(
    policy: &SuperPolicy,
    annual_salary: f64,
    super_rate: &str,
    rounding: Rounding,
) -> f64 {
    let multiplier = policy.multiplier(super_rate);
    rounding.apply(gross_monthly_income(annual_salary, rounding) * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parses_whole_percentage() {
        assert_eq!(parse_super_multiplier("12%"), 0.12);
    }

    #[test]
    fn test_parses_fractional_percentage() {
        assert_eq!(parse_super_multiplier("9.5%"), 0.095);
    }

    #[test]
    fn test_missing_value_uses_default() {
        assert_eq!(parse_super_multiplier("%"), 0.09);
    }

    #[test]
    fn test_blank_value_uses_default() {
        assert_eq!(parse_super_multiplier(" %"), 0.09);
    }

    #[test]
    fn test_empty_text_uses_default() {
        assert_eq!(parse_super_multiplier(""), 0.09);
    }

    #[test]
    fn test_negative_value_uses_default() {
        assert_eq!(parse_super_multiplier("-7%"), 0.09);
    }

    #[test]
    fn test_value_above_fifty_uses_default() {
        assert_eq!(parse_super_multiplier("70%"), 0.09);
        assert_eq!(parse_super_multiplier("50.01%"), 0.09);
    }

    #[test]
    fn test_non_numeric_value_uses_default() {
        assert_eq!(parse_super_multiplier("JD%"), 0.09);
        assert_eq!(parse_super_multiplier("NaN%"), 0.09);
        assert_eq!(parse_super_multiplier("inf%"), 0.09);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        assert_eq!(parse_super_multiplier("0%"), 0.0);
        assert_eq!(parse_super_multiplier("50%"), 0.5);
    }

    #[test]
    fn test_whitespace_around_number_is_trimmed() {
        assert_eq!(parse_super_multiplier(" 10 %"), 0.1);
    }

    #[test]
    fn test_final_character_is_always_dropped() {
        // no percent sign: "12" loses its "2"
        assert_eq!(parse_super_multiplier("12"), 0.01);
    }

    #[test]
    fn test_multibyte_final_character_is_dropped() {
        assert_eq!(parse_super_multiplier("10％"), 0.1);
    }

    #[test]
    fn test_checked_multiplier_reports_fallback() {
        let policy = SuperPolicy::default();
        assert_eq!(policy.checked_multiplier("9%"), Some(0.09));
        assert_eq!(policy.checked_multiplier("JD%"), None);
    }

    #[test]
    fn test_custom_policy_range_and_default() {
        let policy = SuperPolicy {
            default_multiplier: 0.1,
            min_percent: 5.0,
            max_percent: 15.0,
        };
        assert_eq!(policy.multiplier("4%"), 0.1);
        assert_eq!(policy.multiplier("15%"), 0.15);
        assert_eq!(policy.multiplier("16%"), 0.1);
    }

    #[test]
    fn test_policy_validation() {
        assert!(SuperPolicy::default().validate("default").is_ok());

        let inverted = SuperPolicy {
            min_percent: 20.0,
            max_percent: 10.0,
            ..SuperPolicy::default()
        };
        match inverted.validate("inverted.yaml") {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert_eq!(path, "inverted.yaml");
                assert!(message.contains("min_percent"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        let negative_default = SuperPolicy {
            default_multiplier: -0.1,
            ..SuperPolicy::default()
        };
        assert!(negative_default.validate("negative.yaml").is_err());
    }

    #[test]
    fn test_default_multiplier_above_range_rejected() {
        let policy = SuperPolicy {
            default_multiplier: 5.0,
            ..SuperPolicy::default()
        };
        match policy.validate("policy.yaml") {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("default_multiplier 5"), "got: {}", message);
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_default_multiplier_must_sit_inside_custom_range() {
        let below = SuperPolicy {
            default_multiplier: 0.04,
            min_percent: 5.0,
            max_percent: 15.0,
        };
        assert!(below.validate("policy.yaml").is_err());

        let inside = SuperPolicy {
            default_multiplier: 0.1,
            ..below
        };
        assert!(inside.validate("policy.yaml").is_ok());
    }

    #[test]
    fn test_hex_literal_uses_default() {
        // Only decimal notation is accepted
        assert_eq!(parse_super_multiplier("0x10%"), DEFAULT_SUPER_MULTIPLIER);
        assert_eq!(parse_super_multiplier("0b101%"), DEFAULT_SUPER_MULTIPLIER);
        assert_eq!(SuperPolicy::default().checked_multiplier("0x10%"), None);
    }

    #[test]
    fn test_monthly_super_rounded() {
        assert_eq!(monthly_super(60050.0, "9%", Rounding::Whole), 450.0);
    }

    #[test]
    fn test_monthly_super_exact() {
        assert_eq!(
            monthly_super(130000.0, "9.5%", Rounding::Exact),
            1029.1666666666667
        );
    }

    #[test]
    fn test_monthly_super_uses_default_rate_for_garbage() {
        // 5004 * 0.09 = 450.36
        assert_eq!(monthly_super(60050.0, "abc%", Rounding::Whole), 450.0);
    }

    proptest! {
        #[test]
        fn prop_parser_is_total(raw in ".*") {
            let multiplier = parse_super_multiplier(&raw);
            prop_assert!(
                (0.0..=0.5).contains(&multiplier) || multiplier == DEFAULT_SUPER_MULTIPLIER
            );
        }

        #[test]
        fn prop_in_range_percentages_are_accepted(percent in 0u32..=50) {
            let raw = format!("{}%", percent);
            prop_assert_eq!(parse_super_multiplier(&raw), percent as f64 / 100.0);
        }

        #[test]
        fn prop_out_of_range_percentages_use_default(percent in 51u32..10_000) {
            let raw = format!("{}%", percent);
            prop_assert_eq!(parse_super_multiplier(&raw), DEFAULT_SUPER_MULTIPLIER);
        }
    }
}
