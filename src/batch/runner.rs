//! Batch payslip generation.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use crate::calculation::build_payslip;
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeRecord, PAYSLIP_HEADER, Payslip};

use super::sink::{CsvPayslipSink, PayslipSink};
use super::source::{CsvEmployeeSource, EmployeeSource};

/// The file extension accepted for roster and payslip files.
pub const TABLE_EXTENSION: &str = "csv";

/// Counts from a completed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of payslips written.
    pub payslips: usize,
    /// Number of employees whose super rate fell back to the default.
    pub defaulted_super_rates: usize,
}

/// Turns a roster into payslips.
///
/// The runner reads the whole roster, computes every payslip, and only then
/// hands the results to the sink. If any row is invalid nothing is written.
///
/// # Example
///
/// ```
/// use payslip_engine::batch::{BatchRunner, CsvEmployeeSource, CsvPayslipSink};
/// use payslip_engine::config::ConfigLoader;
///
/// let roster = "firstName,lastName,annualSalary,superRate,paymentStartDate\n\
///               David,Rudd,60050,9%,01 March - 31 March\n";
///
/// let config = ConfigLoader::builtin()?;
/// let mut source = CsvEmployeeSource::new(roster.as_bytes());
/// let mut sink = CsvPayslipSink::new(Vec::new());
/// BatchRunner::new(&config).run(&mut source, &mut sink)?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(output.ends_with("David Rudd,01 March - 31 March,5004,922,4082,450\n"));
/// # Ok::<(), payslip_engine::error::EngineError>(())
/// ```
pub struct BatchRunner<'a> {
    config: &'a ConfigLoader,
}

impl<'a> BatchRunner<'a> {
    /// Creates a runner over the given configuration.
    pub fn new(config: &'a ConfigLoader) -> Self {
        Self { config }
    }

    /// Computes payslips for `records`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] for the first row whose
    /// salary cannot be used.
    pub fn generate(&self, records: Vec<EmployeeRecord>) -> EngineResult<Vec<Payslip>> {
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let employee = Employee::try_from_record(record, index + 1)?;
                build_payslip(self.config, &employee)
            })
            .collect()
    }

    /// Reads every row from `source`, computes the payslips and writes them
    /// to `sink` with the standard header.
    pub fn run<S, K>(&self, source: &mut S, sink: &mut K) -> EngineResult<BatchSummary>
    where
        S: EmployeeSource + ?Sized,
        K: PayslipSink + ?Sized,
    {
        let start_time = Instant::now();
        let records = source.read_employees()?;

        let policy = self.config.super_policy();
        let defaulted_super_rates = records
            .iter()
            .filter(|record| policy.checked_multiplier(&record.super_rate).is_none())
            .count();

        let payslips = self.generate(records)?;
        sink.write_payslips(&PAYSLIP_HEADER, &payslips)?;

        let summary = BatchSummary {
            payslips: payslips.len(),
            defaulted_super_rates,
        };
        info!(
            payslips = summary.payslips,
            defaulted_super_rates = summary.defaulted_super_rates,
            duration_us = start_time.elapsed().as_micros() as u64,
            "Payslip batch completed"
        );

        Ok(summary)
    }

    /// Generates a payslip CSV file from a roster CSV file.
    ///
    /// Both paths are checked with [`validate_paths`] before anything is
    /// read. The output file is only created once every payslip has been
    /// computed.
    pub fn run_files(&self, input: &Path, output: &Path) -> EngineResult<BatchSummary> {
        validate_paths(input, output)?;
        info!(input = %input.display(), output = %output.display(), "Generating payslips");

        let input_file = File::open(input).map_err(|e| io_error(input, e))?;
        let mut source = CsvEmployeeSource::new(BufReader::new(input_file));

        let mut computed: Vec<Payslip> = Vec::new();
        let summary = self.run(&mut source, &mut computed)?;

        let output_file = File::create(output).map_err(|e| io_error(output, e))?;
        CsvPayslipSink::new(BufWriter::new(output_file))
            .write_payslips(&PAYSLIP_HEADER, &computed)?;

        Ok(summary)
    }
}

/// Checks roster and payslip paths before a file batch.
///
/// Both paths must have a `.csv` extension, the roster must be an existing
/// file, and the payslip file's directory must already exist. A bare file
/// name refers to the current directory.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPath`] naming the first rejected path.
pub fn validate_paths(input: &Path, output: &Path) -> EngineResult<()> {
    for path in [input, output] {
        if !has_table_extension(path) {
            return Err(rejected(path, "expected a .csv file"));
        }
    }

    if !input.is_file() {
        return Err(rejected(input, "input file does not exist"));
    }

    let output_dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if !output_dir.is_dir() {
        return Err(rejected(output, "output directory does not exist"));
    }

    Ok(())
}

fn has_table_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TABLE_EXTENSION))
}

fn rejected(path: &Path, message: &str) -> EngineError {
    warn!(path = %path.display(), reason = message, "Rejected file path");
    EngineError::InvalidPath {
        path: path.display().to_string(),
        message: message.to_string(),
    }
}

fn io_error(path: &Path, err: std::io::Error) -> EngineError {
    EngineError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
