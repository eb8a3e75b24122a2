//! Payslip destinations.

use std::io::Write;

use csv::{QuoteStyle, Terminator};

use crate::error::EngineResult;
use crate::models::Payslip;

/// Receives the finished payslips of a batch.
pub trait PayslipSink {
    /// Writes the header and every payslip, in order.
    fn write_payslips(&mut self, header: &[&str], payslips: &[Payslip]) -> EngineResult<()>;
}

impl PayslipSink for Vec<Payslip> {
    fn write_payslips(&mut self, _header: &[&str], payslips: &[Payslip]) -> EngineResult<()> {
        self.extend_from_slice(payslips);
        Ok(())
    }
}

/// Writes payslips as comma-joined lines.
///
/// Fields are never quoted or escaped, so a comma inside a name or pay
/// period shifts the columns of that row. Lines end with `\n`.
pub struct CsvPayslipSink<W> {
    writer: W,
}

impl<W: Write> CsvPayslipSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PayslipSink for CsvPayslipSink<W> {
    fn write_payslips(&mut self, header: &[&str], payslips: &[Payslip]) -> EngineResult<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut self.writer);

        csv_writer.write_record(header)?;
        for payslip in payslips {
            csv_writer.write_record(payslip.to_record())?;
        }
        csv_writer.flush().map_err(csv::Error::from)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PAYSLIP_HEADER;

    fn create_test_payslip(name: &str) -> Payslip {
        Payslip {
            name: name.to_string(),
            pay_period: "01 March - 31 March".to_string(),
            gross_income: 5004,
            income_tax: 922,
            net_income: 4082,
            super_amount: 450,
        }
    }

    fn render(payslips: &[Payslip]) -> String {
        let mut sink = CsvPayslipSink::new(Vec::new());
        sink.write_payslips(&PAYSLIP_HEADER, payslips).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_writes_header_and_rows() {
        let output = render(&[create_test_payslip("David Rudd")]);

        assert_eq!(
            output,
            "name,pay period,gross income,income tax,net income,super\n\
             David Rudd,01 March - 31 March,5004,922,4082,450\n"
        );
    }

    #[test]
    fn test_header_written_for_empty_batch() {
        assert_eq!(
            render(&[]),
            "name,pay period,gross income,income tax,net income,super\n"
        );
    }

    #[test]
    fn test_fields_are_not_quoted() {
        let output = render(&[create_test_payslip("Rudd, David")]);
        assert!(output.contains("\nRudd, David,01 March - 31 March,5004"));
        assert!(!output.contains('"'));
    }

    #[test]
    fn test_rows_keep_input_order() {
        let output = render(&[
            create_test_payslip("First One"),
            create_test_payslip("Second Two"),
        ]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("First One,"));
        assert!(lines[2].starts_with("Second Two,"));
    }
}
