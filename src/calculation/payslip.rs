//! Payslip assembly.
//!
//! This module combines the income and superannuation calculations into a
//! single [`Payslip`] per employee.

use tracing::{debug, warn};

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{Employee, Payslip};

use super::income::{gross_monthly_income, monthly_income_tax, net_monthly_income, validate_salary};
use super::rounding::Rounding;
use super::superannuation::monthly_super_with_policy;

/// Builds the monthly payslip for one employee.
///
/// Every amount is rounded to whole dollars. The name is the first and last
/// name joined by a space and the pay period is the employee's payment start
/// date, unchanged. An unusable super rate falls back to the configured
/// default and is logged, it never fails the payslip.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidSalary`] if the annual salary
/// is negative or not finite.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::build_payslip;
/// use payslip_engine::config::ConfigLoader;
/// use payslip_engine::models::Employee;
///
/// let config = ConfigLoader::builtin()?;
/// let employee = Employee {
///     first_name: "David".to_string(),
///     last_name: "Rudd".to_string(),
///     annual_salary: 60050.0,
///     super_rate: "9%".to_string(),
///     payment_start_date: "01 March - 31 March".to_string(),
/// };
///
/// let payslip = build_payslip(&config, &employee)?;
/// assert_eq!(payslip.gross_income, 5004);
/// assert_eq!(payslip.income_tax, 922);
/// assert_eq!(payslip.net_income, 4082);
/// assert_eq!(payslip.super_amount, 450);
/// # Ok::<(), payslip_engine::error::EngineError>(())
/// ```
pub fn build_payslip(config: &ConfigLoader, employee: &Employee) -> EngineResult<Payslip> {
    let annual_salary = validate_salary(employee.annual_salary)?;
    let table = config.tax_table();
    let policy = config.super_policy();
    let rounding = Rounding::Whole;

    if policy.checked_multiplier(&employee.super_rate).is_none() {
        warn!(
            employee = %employee.full_name(),
            super_rate = %employee.super_rate,
            default_multiplier = policy.default_multiplier,
            "Super rate unusable, applying default rate"
        );
    }

    let gross = gross_monthly_income(annual_salary, rounding);
    let tax = monthly_income_tax(table, annual_salary, rounding)?;
    let net = net_monthly_income(table, annual_salary, rounding)?;
    let super_amount =
        monthly_super_with_policy(policy, annual_salary, &employee.super_rate, rounding);

    let payslip = Payslip {
        name: employee.full_name(),
        pay_period: employee.payment_start_date.clone(),
        gross_income: gross as i64,
        income_tax: tax as i64,
        net_income: net as i64,
        super_amount: super_amount as i64,
    };
    debug!(
        employee = %payslip.name,
        gross = payslip.gross_income,
        tax = payslip.income_tax,
        net = payslip.net_income,
        super_amount = payslip.super_amount,
        "Built payslip"
    );

    Ok(payslip)
}
