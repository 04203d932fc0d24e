use std::io::Write;

use serde::Serialize;

use super::Result;
use crate::{index::IndexRecord, types::Position};

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<first> : <last>`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<Position>,
    #[serde(flatten)]
    record: &'a IndexRecord,
}

pub struct Printer<W: Write> {
    writer: W,
    format: OutputFormat,
    with_positions: bool,
    printed: u64,
}

impl<W: Write> Printer<W> {
    pub fn new(writer: W, format: OutputFormat, with_positions: bool) -> Self {
        Self {
            writer,
            format,
            with_positions,
            printed: 0,
        }
    }

    pub fn print(&mut self, position: Position, record: &IndexRecord) -> Result<()> {
        match self.format {
            OutputFormat::Text if self.with_positions => {
                writeln!(self.writer, "{}: {}", position, record)?
            }
            OutputFormat::Text => writeln!(self.writer, "{}", record)?,
            OutputFormat::Json => {
                let line = JsonLine {
                    position: self.with_positions.then_some(position),
                    record,
                };
                let json = serde_json::to_string(&line)?;
                writeln!(self.writer, "{}", json)?;
            }
        }

        self.printed += 1;
        Ok(())
    }

    pub fn printed(&self) -> u64 {
        self.printed
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

    fn print_all(
        format: OutputFormat,
        with_positions: bool,
        records: &[IndexRecord],
    ) -> Result<String> {
        let mut printer = Printer::new(Vec::new(), format, with_positions);
        for (position, record) in records.iter().enumerate() {
            printer.print(position as Position, record)?;
        }
        printer.flush()?;
        assert_eq!(printer.printed(), records.len() as u64);

        Ok(String::from_utf8(printer.into_inner())?)
    }

    #[test]
    fn print_should_write_text_line_per_record() -> Result<()> {
        let records = [IndexRecord::new(u32::MAX, 0), IndexRecord::new(1, 1)];

        let output = print_all(OutputFormat::Text, false, &records)?;

        assert_eq!(output, "4294967295 : 0\n1 : 1\n");

        Ok(())
    }

    #[test]
    fn print_should_prefix_positions_when_requested() -> Result<()> {
        let records = [IndexRecord::new(5, 6), IndexRecord::new(7, 8)];

        let output = print_all(OutputFormat::Text, true, &records)?;

        assert_eq!(output, "0: 5 : 6\n1: 7 : 8\n");

        Ok(())
    }

    #[test]
    fn print_should_write_json_lines() -> Result<()> {
        let records = [IndexRecord::new(1, 2)];

        let plain = print_all(OutputFormat::Json, false, &records)?;
        let positioned = print_all(OutputFormat::Json, true, &records)?;

        assert_eq!(plain, "{\"first\":1,\"last\":2}\n");
        assert_eq!(positioned, "{\"position\":0,\"first\":1,\"last\":2}\n");

        Ok(())
    }

    #[test]
    fn print_should_report_broken_pipe() {
        struct ClosedPipe;

        impl Write for ClosedPipe {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut printer = Printer::new(ClosedPipe, OutputFormat::Text, false);

        let result = printer.print(0, &IndexRecord::new(1, 2));

        assert!(matches!(result, Err(ref e) if e.is_broken_pipe()));
        assert_eq!(printer.printed(), 0);
    }
}
