//! Batch processing of employee rosters.
//!
//! The payslip calculations never touch files. This module connects them to
//! tabular input and output through two narrow traits, [`EmployeeSource`]
//! and [`PayslipSink`], with CSV implementations of each, and provides the
//! path checks used by the file-to-file entry point.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use payslip_engine::batch::BatchRunner;
//! use payslip_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::builtin()?;
//! let summary = BatchRunner::new(&config)
//!     .run_files(Path::new("employees.csv"), Path::new("payslips.csv"))?;
//! println!("Wrote {} payslips", summary.payslips);
//! # Ok::<(), payslip_engine::error::EngineError>(())
//! ```

mod runner;
mod sink;
mod source;

pub use runner::{BatchRunner, BatchSummary, TABLE_EXTENSION, validate_paths};
pub use sink::{CsvPayslipSink, PayslipSink};
pub use source::{CsvEmployeeSource, EmployeeSource};
