use anyhow::{Context, Result};
use log::info;

use std::{fmt::Display, fs, path::Path, time::Duration};

use crate::amount::Amount;

/// The default name of the report file.
pub const REPORT_FILE_NAME: &str = "SalesResults.txt";

/// Holds the outcome of a sales calculation.
///
/// To compute a `Report` from catalog and sales data, use
/// [`compute`](crate::compute).
///
/// To get a printable version of the report, use its [`Display`]
/// implementation. To save it, use [`Report::write_to`].
#[derive(Debug, Default, PartialEq)]
pub struct Report {
    pub total: Amount,
    pub elapsed: Duration,
    pub errors: Vec<String>,
}

impl Report {
    /// Creates a report with the given total and errors, and zero execution time.
    #[must_use]
    pub fn new(total: Amount, errors: Vec<String>) -> Self {
        Self {
            total,
            errors,
            ..Self::default()
        }
    }

    /// Returns this report with its execution time set to `elapsed`.
    #[must_use]
    pub fn with_elapsed(self, elapsed: Duration) -> Self {
        Self { elapsed, ..self }
    }

    /// Writes the report to `path`, followed by a newline, replacing any
    /// existing file.
    ///
    /// # Errors
    ///
    /// Returns any errors from creating or writing the file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, format!("{self}\n"))
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!("report written to {}", path.display());
        Ok(())
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sales Calculation Report")?;
        writeln!(f, "{:-<24}", "")?;
        writeln!(f, "TOTAL: {}", self.total)?;
        writeln!(f, "EXECUTION_TIME_SECONDS: {:.6}", self.elapsed.as_secs_f64())?;
        write!(f, "ERROR_COUNT: {}", self.errors.len())?;
        if self.errors.is_empty() {
            return write!(f, "\nERRORS: None");
        }
        write!(f, "\nERRORS:")?;
        for message in &self.errors {
            write!(f, "\n- {message}")?;
        }
        Ok(())
    }
}
