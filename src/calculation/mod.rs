//! Calculation logic for the Payslip Engine.
//!
//! This module contains all the calculation functions for a monthly payslip:
//! whole-dollar rounding, gross monthly income, tax bracket lookup,
//! progressive monthly income tax, net monthly income, super-rate parsing,
//! monthly superannuation and the assembly of these into a payslip.
//!
//! Every function here is pure. The tax table is passed in explicitly and
//! never mutated.

mod income;
mod payslip;
mod rounding;
mod superannuation;

pub use income::{
    MONTHS_PER_YEAR, find_tax_bracket, gross_monthly_income, monthly_income_tax,
    net_monthly_income, validate_salary,
};
pub use payslip::build_payslip;
pub use rounding::{Rounding, round_half_up};
pub use superannuation::{
    DEFAULT_SUPER_MULTIPLIER, MAX_SUPER_PERCENT, MIN_SUPER_PERCENT, SuperPolicy, monthly_super,
    monthly_super_with_policy, parse_super_multiplier,
};
