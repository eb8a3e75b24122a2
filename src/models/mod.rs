//! Core data models for the Payslip Engine.
//!
//! This module contains the employee and payslip records that flow through
//! the engine.

mod employee;
mod payslip;

pub use employee::{Employee, EmployeeRecord};
pub use payslip::{PAYSLIP_HEADER, Payslip};
