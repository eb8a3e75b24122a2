//! Payslip Engine for monthly employee payslips
//!
//! This crate calculates monthly payslips from an employee roster: gross
//! income, progressive income tax from a configurable bracket table, net
//! income and superannuation. Rosters can be processed from CSV files or
//! through a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod batch;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
