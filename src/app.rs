use crate::cli::Command;
use crate::config::BenchConfig;
use crate::decode::{self, Decoder};
use crate::error::{AppError, AppResult};
use crate::fixtures::CodeRange;
use crate::format::{ProductFormatter, RecordFormatter, Variant};
use log::*;
use serde::Serialize;
use std::io::Write;

/// Widest range the `table` command prints.
pub const MAX_TABLE_WIDTH: u64 = 1 << 16;

/// One row of the decode table.
///
#[derive(Debug, Serialize)]
struct TableRow {
    code: i32,
    labels: Vec<StrategyLabel>,
}

#[derive(Debug, Serialize)]
struct StrategyLabel {
    strategy: &'static str,
    label: &'static str,
}

/// Runs CLI commands against a loaded configuration.
///
pub struct App {
    config: BenchConfig,
}

impl App {
    pub fn new(config: BenchConfig) -> Self {
        App { config }
    }

    /// Run the command, writing its output to `out`.
    ///
    pub fn run<W: Write>(&self, command: &Command, out: &mut W) -> AppResult<()> {
        debug!("Running {:?}", command);
        match command {
            Command::Decode { code, strategy } => self.decode(*code, *strategy, out),
            Command::Table { range, json } => self.table(*range, *json, out),
            Command::Format { variant } => self.format(*variant, out),
        }
    }

    fn decode<W: Write>(&self, code: i32, strategy: Option<Decoder>, out: &mut W) -> AppResult<()> {
        match strategy {
            Some(decoder) => writeln!(out, "{}", decoder.decode(code))?,
            None => {
                for decoder in Decoder::ALL {
                    writeln!(out, "{:<12} {}", decoder.name(), decoder.decode(code))?;
                }
            }
        }
        Ok(())
    }

    /// Print every strategy's label for every code in the range. Fails with
    /// [`AppError::Mismatch`] after printing when any row disagrees.
    ///
    fn table<W: Write>(&self, range: CodeRange, json: bool, out: &mut W) -> AppResult<()> {
        if range.width() > MAX_TABLE_WIDTH {
            return Err(AppError::Usage(format!(
                "Range {}..={} spans {} codes, the table prints at most {}",
                range.start,
                range.end,
                range.width(),
                MAX_TABLE_WIDTH
            )));
        }
        let disagreements = decode::agreement(range.to_range())?;
        let rows: Vec<TableRow> = range
            .to_range()
            .map(|code| TableRow {
                code,
                labels: Decoder::ALL
                    .iter()
                    .map(|decoder| StrategyLabel {
                        strategy: decoder.name(),
                        label: decoder.decode(code),
                    })
                    .collect(),
            })
            .collect();

        if json {
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        } else {
            write!(out, "{:>11}", "code")?;
            for decoder in Decoder::ALL {
                write!(out, " {:<13}", decoder.name())?;
            }
            writeln!(out)?;
            for row in &rows {
                write!(out, "{:>11}", row.code)?;
                for entry in &row.labels {
                    write!(out, " {:<13}", entry.label)?;
                }
                writeln!(out)?;
            }
        }

        if disagreements.is_empty() {
            info!("All strategies agree on {}..={}", range.start, range.end);
            Ok(())
        } else {
            Err(AppError::Mismatch(disagreements.len()))
        }
    }

    fn format<W: Write>(&self, variant: Option<Variant>, out: &mut W) -> AppResult<()> {
        let (products, records): (Vec<ProductFormatter>, Vec<RecordFormatter>) = match variant {
            Some(Variant::Product(formatter)) => (vec![formatter], vec![]),
            Some(Variant::Record(formatter)) => (vec![], vec![formatter]),
            None => (ProductFormatter::ALL.to_vec(), RecordFormatter::ALL.to_vec()),
        };

        for formatter in products {
            let text = formatter.format(&self.config.product)?;
            writeln!(out, "{:<22} {}", formatter.name(), text)?;
        }

        let mut buf = self.config.scratch_buffer();
        for formatter in records {
            buf.reset();
            formatter.append(&mut buf, &self.config.record)?;
            writeln!(out, "{:<22} {}", formatter.name(), buf.as_str())?;
        }
        Ok(())
    }
}
