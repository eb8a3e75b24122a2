//! Employee roster sources.

use std::io::Read;

use crate::error::EngineResult;
use crate::models::EmployeeRecord;

/// Supplies the roster rows for a payslip batch.
pub trait EmployeeSource {
    /// Reads every roster row, in order.
    fn read_employees(&mut self) -> EngineResult<Vec<EmployeeRecord>>;
}

impl EmployeeSource for Vec<EmployeeRecord> {
    fn read_employees(&mut self) -> EngineResult<Vec<EmployeeRecord>> {
        Ok(std::mem::take(self))
    }
}

/// Reads roster rows from CSV text with a header row.
///
/// Columns are matched by header name, so their order does not matter and
/// extra columns are ignored. The required headers are `firstName`,
/// `lastName`, `annualSalary`, `superRate` and `paymentStartDate`. Cell
/// values are not trimmed.
///
/// ```csv
/// firstName,lastName,annualSalary,superRate,paymentStartDate
/// David,Rudd,60050,9%,01 March - 31 March
/// ```
pub struct CsvEmployeeSource<R> {
    reader: R,
}

impl<R: Read> CsvEmployeeSource<R> {
    /// Wraps a reader of CSV text.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> EmployeeSource for CsvEmployeeSource<R> {
    fn read_employees(&mut self) -> EngineResult<Vec<EmployeeRecord>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(&mut self.reader);

        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: EmployeeRecord = result?;
            records.push(record);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    const ROSTER: &str = "firstName,lastName,annualSalary,superRate,paymentStartDate
David,Rudd,60050,9%,01 March - 31 March
Ryan,Chen,120000,10%,01 March - 31 March
";

    #[test]
    fn test_reads_rows_in_order() {
        let mut source = CsvEmployeeSource::new(ROSTER.as_bytes());
        let records = source.read_employees().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].first_name, "David");
        assert_eq!(records[0].annual_salary, "60050");
        assert_eq!(records[0].super_rate, "9%");
        assert_eq!(records[1].last_name, "Chen");
        assert_eq!(records[1].payment_start_date, "01 March - 31 March");
    }

    #[test]
    fn test_columns_matched_by_name() {
        let csv = "paymentStartDate,superRate,annualSalary,lastName,firstName,department
01 March - 31 March,9%,60050,Rudd,David,Sales
";
        let records = CsvEmployeeSource::new(csv.as_bytes())
            .read_employees()
            .unwrap();

        assert_eq!(records[0].first_name, "David");
        assert_eq!(records[0].last_name, "Rudd");
        assert_eq!(records[0].annual_salary, "60050");
    }

    #[test]
    fn test_missing_column_is_csv_error() {
        let csv = "firstName,lastName,annualSalary,paymentStartDate
David,Rudd,60050,01 March - 31 March
";
        let result = CsvEmployeeSource::new(csv.as_bytes()).read_employees();

        match result {
            Err(EngineError::Csv { message }) => assert!(message.contains("superRate")),
            other => panic!("Expected Csv error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_super_rate_cell_is_kept() {
        let csv = "firstName,lastName,annualSalary,superRate,paymentStartDate
David,Rudd,60050,,01 March - 31 March
";
        let records = CsvEmployeeSource::new(csv.as_bytes())
            .read_employees()
            .unwrap();
        assert_eq!(records[0].super_rate, "");
    }

    #[test]
    fn test_header_only_yields_no_rows() {
        let csv = "firstName,lastName,annualSalary,superRate,paymentStartDate\n";
        let records = CsvEmployeeSource::new(csv.as_bytes())
            .read_employees()
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_vec_source_is_drained() {
        let mut source = vec![EmployeeRecord {
            first_name: "David".to_string(),
            last_name: "Rudd".to_string(),
            annual_salary: "60050".to_string(),
            super_rate: "9%".to_string(),
            payment_start_date: "01 March - 31 March".to_string(),
        }];

        assert_eq!(source.read_employees().unwrap().len(), 1);
        assert!(source.read_employees().unwrap().is_empty());
    }
}
