//! Monthly income calculations.
//!
//! This module derives the gross, tax and net monthly figures of a payslip
//! from an annual salary and the progressive [`TaxTable`].
//!
//! All arithmetic is `f64`, so unrounded figures carry the usual binary
//! floating point noise (e.g. `1387.7437500000003`). Payslips only ever see
//! the whole-dollar results.

use crate::config::{TaxBracket, TaxTable};
use crate::error::{EngineError, EngineResult};

use super::rounding::Rounding;

/// Number of pay periods in a year.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Checks that a salary is a finite, non-negative amount.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::validate_salary;
///
/// assert!(validate_salary(60050.0).is_ok());
/// assert!(validate_salary(-1.0).is_err());
/// assert!(validate_salary(f64::NAN).is_err());
/// ```
pub fn validate_salary(annual_salary: f64) -> EngineResult<f64> {
    if annual_salary.is_finite() && annual_salary >= 0.0 {
        Ok(annual_salary)
    } else {
        Err(EngineError::InvalidSalary {
            salary: annual_salary,
        })
    }
}

/// Calculates gross monthly income: the annual salary divided by 12.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::{gross_monthly_income, Rounding};
///
/// assert_eq!(gross_monthly_income(125000.0, Rounding::Whole), 10417.0);
/// assert_eq!(gross_monthly_income(139000.0, Rounding::Exact), 11583.333333333334);
/// ```
pub fn gross_monthly_income(annual_salary: f64, rounding: Rounding) -> f64 {
    rounding.apply(annual_salary / MONTHS_PER_YEAR)
}

/// Finds the tax bracket that an annual salary falls into.
///
/// For whole-dollar salaries this is the unique bracket with
/// `lower_limit <= salary <= upper_limit`. A fractional salary between two
/// whole-dollar limits (e.g. 18200.50) belongs to the bracket with the
/// highest lower limit not above it.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSalary`] for a negative or non-finite
/// salary.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::find_tax_bracket;
/// use payslip_engine::config::{ConfigLoader, UpperLimit};
///
/// let config = ConfigLoader::builtin()?;
/// let bracket = find_tax_bracket(config.tax_table(), 20000.0)?;
/// assert_eq!(bracket.lower_limit, 18201);
/// assert_eq!(bracket.upper_limit, UpperLimit::Bounded(37000));
/// # Ok::<(), payslip_engine::error::EngineError>(())
/// ```
pub fn find_tax_bracket(table: &TaxTable, annual_salary: f64) -> EngineResult<&TaxBracket> {
    let annual_salary = validate_salary(annual_salary)?;

    // brackets are contiguous from 0, so the last one starting at or below
    // the salary is the one containing it
    table
        .brackets()
        .iter()
        .rfind(|bracket| bracket.lower_limit as f64 <= annual_salary)
        .ok_or(EngineError::InvalidSalary {
            salary: annual_salary,
        })
}

/// Calculates monthly income tax.
///
/// The annual tax is the bracket's fixed tax plus its marginal rate applied
/// to the income above the bracket's lower limit. The monthly figure is a
/// twelfth of that.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::{monthly_income_tax, Rounding};
/// use payslip_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::builtin()?;
/// // (3572 + (60050 - 37001) * 0.325) / 12 = 921.91
/// assert_eq!(monthly_income_tax(config.tax_table(), 60050.0, Rounding::Whole)?, 922.0);
/// # Ok::<(), payslip_engine::error::EngineError>(())
/// ```
pub fn monthly_income_tax(
    table: &TaxTable,
    annual_salary: f64,
    rounding: Rounding,
) -> EngineResult<f64> {
    let bracket = find_tax_bracket(table, annual_salary)?;
    let annual_tax = bracket.fixed_tax
        + (annual_salary - bracket.lower_limit as f64) * bracket.tax_multiplier;

    Ok(rounding.apply(annual_tax / MONTHS_PER_YEAR))
}

/// Calculates net monthly income: gross monthly income less monthly tax.
///
/// Gross and tax are each computed with `rounding` before the subtraction,
/// and the difference is rounded again. With [`Rounding::Whole`] the second
/// pass is a no-op on whole numbers, but the first pass means net income is
/// always `round(gross) - round(tax)` rather than `round(gross - tax)`.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::{net_monthly_income, Rounding};
/// use payslip_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::builtin()?;
/// assert_eq!(net_monthly_income(config.tax_table(), 60050.0, Rounding::Whole)?, 4082.0);
/// # Ok::<(), payslip_engine::error::EngineError>(())
/// ```
pub fn net_monthly_income(
    table: &TaxTable,
    annual_salary: f64,
    rounding: Rounding,
) -> EngineResult<f64> {
    let gross = gross_monthly_income(validate_salary(annual_salary)?, rounding);
    let tax = monthly_income_tax(table, annual_salary, rounding)?;

    Ok(rounding.apply(gross - tax))
}
