//! Employee model and related types.
//!
//! This module defines the raw [`EmployeeRecord`] read from a roster and the
//! validated [`Employee`] that payslips are computed from.

use serde::{Deserialize, Serialize};

use crate::calculation::validate_salary;
use crate::error::{EngineError, EngineResult};

/// One roster row exactly as it was read, every field still text.
///
/// Field names follow the roster's column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The annual salary, as written in the roster.
    pub annual_salary: String,
    /// The super rate, e.g. `"9%"`.
    pub super_rate: String,
    /// The payment period label, e.g. `"01 March - 31 March"`.
    pub payment_start_date: String,
}

/// An employee whose payslip is to be generated.
///
/// # Example
///
/// ```
/// use payslip_engine::models::Employee;
///
/// let employee = Employee {
///     first_name: "David".to_string(),
///     last_name: "Rudd".to_string(),
///     annual_salary: 60050.0,
///     super_rate: "9%".to_string(),
///     payment_start_date: "01 March - 31 March".to_string(),
/// };
/// assert_eq!(employee.full_name(), "David Rudd");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The annual salary in whole or fractional dollars.
    pub annual_salary: f64,
    /// The super rate as free text, e.g. `"9.5%"`. Parsed leniently.
    pub super_rate: String,
    /// The payment period label. Copied to the payslip unchanged.
    pub payment_start_date: String,
}

impl Employee {
    /// Returns the first and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Converts a roster row into an employee.
    ///
    /// `row` is the 1-based data row number, used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] if the annual salary is not a
    /// finite, non-negative number. The super rate is never rejected here.
    pub fn try_from_record(record: EmployeeRecord, row: usize) -> EngineResult<Self> {
        let raw_salary = record.annual_salary.trim();
        let annual_salary = raw_salary
            .parse::<f64>()
            .ok()
            .and_then(|salary| validate_salary(salary).ok())
            .ok_or_else(|| EngineError::InvalidEmployee {
                row,
                field: "annualSalary".to_string(),
                message: format!("'{}' is not a non-negative amount", raw_salary),
            })?;

        Ok(Employee {
            first_name: record.first_name,
            last_name: record.last_name,
            annual_salary,
            super_rate: record.super_rate,
            payment_start_date: record.payment_start_date,
        })
    }
}
