//! Request types for the Payslip Engine API.
//!
//! This module defines the JSON request structure for the `/payslips`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Request body for the `/payslips` endpoint.
///
/// # Example
///
/// ```
/// use payslip_engine::api::PayslipRequest;
///
/// let request: PayslipRequest = serde_json::from_str(r#"{
///     "employees": [{
///         "firstName": "David",
///         "lastName": "Rudd",
///         "annualSalary": 60050,
///         "superRate": "9%",
///         "paymentStartDate": "01 March - 31 March"
///     }]
/// }"#).unwrap();
/// assert_eq!(request.employees.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// The employees to generate payslips for, in output order.
    pub employees: Vec<Employee>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_employees_field_is_rejected() {
        let result: Result<PayslipRequest, _> = serde_json::from_str("{}");
        assert!(result.unwrap_err().to_string().contains("missing field"));
    }

    #[test]
    fn test_super_rate_stays_text() {
        let request: PayslipRequest = serde_json::from_str(
            r#"{"employees": [{
                "firstName": "A",
                "lastName": "B",
                "annualSalary": 1000.5,
                "superRate": "JD%",
                "paymentStartDate": "March"
            }]}"#,
        )
        .unwrap();

        assert_eq!(request.employees[0].super_rate, "JD%");
        assert_eq!(request.employees[0].annual_salary, 1000.5);
    }
}
