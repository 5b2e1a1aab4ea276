//! Writers for the generation record stream.

use anyhow::{Context, Result};
use drift_sim::GenerationRecord;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::args::OutputFormat;

/// Streams records to a file or stdout in the chosen format.
pub struct RecordWriter {
    out: Box<dyn Write>,
    format: OutputFormat,
    header_written: bool,
}

impl RecordWriter {
    pub fn new(out: Box<dyn Write>, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            header_written: false,
        }
    }

    /// Open `path`, or stdout when `None`.
    pub fn open(path: Option<&Path>, format: OutputFormat) -> Result<Self> {
        let out: Box<dyn Write> = match path {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file {}", path.display()))?,
            )),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        Ok(Self::new(out, format))
    }

    pub fn write(&mut self, record: &GenerationRecord) -> Result<()> {
        match self.format {
            OutputFormat::Csv => {
                if !self.header_written {
                    writeln!(self.out, "generation,frequency")?;
                    self.header_written = true;
                }
                writeln!(self.out, "{},{}", record.generation, record.frequency)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, record)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.out.flush().context("Failed to flush output")
    }
}
