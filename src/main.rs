mod error;
mod index;
mod output;
mod types;
mod utils;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use index::IndexFile;
use output::{OutputFormat, Printer};
use tracing::{debug, info};
use types::Position;

use crate::error::{Error, Result};

/// Print the pairs of little-endian u32 values stored in an index file, one record per line.
#[derive(Parser)]
#[command(version, about, arg_required_else_help(true))]
struct Args {
    /// Index file made of 8-byte records
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Stop after printing this many records
    #[arg(short, long, value_name = "COUNT")]
    limit: Option<u64>,

    /// Print only the record at this position
    #[arg(short, long, value_name = "POSITION", conflicts_with = "limit")]
    record: Option<Position>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Prefix every record with its position in the file
    #[arg(short, long)]
    positions: bool,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    utils::logging::init(args.verbose);

    match run(&args) {
        Ok(printed) => {
            info!("Printed {} record(s) from {:?}", printed, args.file);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_broken_pipe() => {
            debug!("Standard output closed, stopping.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<u64> {
    let mut index_file = IndexFile::open(&args.file)?;

    let stdout = io::stdout();
    let mut printer = Printer::new(
        BufWriter::new(stdout.lock()),
        args.format,
        args.positions,
    );

    let dumped = match args.record {
        Some(position) => print_record_at(&mut index_file, &mut printer, position),
        None => print_records(&mut index_file, &mut printer, args.limit),
    };
    let flushed = printer.flush();

    dumped?;
    flushed?;
    Ok(printer.printed())
}

fn print_record_at<W: Write>(
    index_file: &mut IndexFile,
    printer: &mut Printer<W>,
    position: Position,
) -> Result<()> {
    let record = index_file
        .record_at(position)
        .map_err(|source| Error::IndexFile {
            path: index_file.path().to_owned(),
            source,
        })?;

    printer.print(position, &record)?;
    Ok(())
}

fn print_records<W: Write>(
    index_file: &mut IndexFile,
    printer: &mut Printer<W>,
    limit: Option<u64>,
) -> Result<()> {
    let path = index_file.path().to_owned();
    let in_file = |source: index::Error| Error::IndexFile {
        path: path.clone(),
        source,
    };

    let mut records = index_file.records().map_err(in_file)?;
    let limit = limit.unwrap_or(u64::MAX);
    let mut position: Position = 0;

    while position < limit {
        let Some(record) = records.next() else {
            return Ok(());
        };
        let record = record.map_err(in_file)?;

        printer.print(position, &record)?;
        position += 1;
    }

    info!(
        "Record limit {} reached at offset {}, stopping.",
        limit,
        records.offset()
    );
    Ok(())
}
