use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::harness::ExperimentRow;
use crate::Error;

pub const HEADER: &str = "n,algorithm,avg_time_ms,avg_ops,avg_result";

/// CSV sink for experiment rows. The header goes out on construction.
pub struct CsvReport<W: Write> {
    out: W,
    rows: usize,
}

impl CsvReport<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: &Path) -> Result<Self, Error> {
        let file = File::create(path).map_err(|source| Error::CreateOutput {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> CsvReport<W> {
    pub fn new(mut out: W) -> Result<Self, Error> {
        writeln!(out, "{}", HEADER).map_err(Error::Write)?;
        Ok(Self { out, rows: 0 })
    }

    pub fn write_row(&mut self, row: &ExperimentRow) -> Result<(), Error> {
        let s = &row.summary;
        writeln!(
            self.out,
            "{},{},{},{},{}",
            row.n,
            row.algorithm.as_str(),
            s.avg_time_ms,
            s.avg_ops,
            s.avg_result
        )
        .map_err(Error::Write)?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(mut self) -> Result<W, Error> {
        self.out.flush().map_err(Error::Write)?;
        Ok(self.out)
    }
}
