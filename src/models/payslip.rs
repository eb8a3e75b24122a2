//! Payslip model.

use serde::{Deserialize, Serialize};

/// Column headers of a payslip table, in field order.
pub const PAYSLIP_HEADER: [&str; 6] = [
    "name",
    "pay period",
    "gross income",
    "income tax",
    "net income",
    "super",
];

/// One employee's monthly payslip.
///
/// All amounts are whole dollars.
///
/// # Example
///
/// ```
/// use payslip_engine::models::Payslip;
///
/// let payslip = Payslip {
///     name: "David Rudd".to_string(),
///     pay_period: "01 March - 31 March".to_string(),
///     gross_income: 5004,
///     income_tax: 922,
///     net_income: 4082,
///     super_amount: 450,
/// };
/// assert_eq!(
///     payslip.to_record(),
///     ["David Rudd", "01 March - 31 March", "5004", "922", "4082", "450"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// The employee's full name.
    pub name: String,
    /// The payment period, copied from the roster.
    pub pay_period: String,
    /// Gross monthly income.
    pub gross_income: i64,
    /// Monthly income tax.
    pub income_tax: i64,
    /// Net monthly income.
    pub net_income: i64,
    /// Monthly superannuation contribution.
    #[serde(rename = "super")]
    pub super_amount: i64,
}

impl Payslip {
    /// Returns the payslip's fields as text, in [`PAYSLIP_HEADER`] order.
    pub fn to_record(&self) -> [String; 6] {
        [
            self.name.clone(),
            self.pay_period.clone(),
            self.gross_income.to_string(),
            self.income_tax.to_string(),
            self.net_income.to_string(),
            self.super_amount.to_string(),
        ]
    }
}
