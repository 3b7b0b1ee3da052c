use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::selection::{CrossStep, Selection};

// ---------------------------------------------------------------------------
// Report rows
// ---------------------------------------------------------------------------

/// One output row: a selection step with primary and, optionally, secondary totals.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub order: usize,
    pub site: String,
    pub count: usize,
    pub percent: f64,
    pub secondary: Option<(usize, f64)>,
}

/// The full table written at the end of a run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Label of the primary input, used in column names.
    pub primary: String,
    /// Label of the secondary input, when one was evaluated.
    pub secondary: Option<String>,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Rows for a primary-only run.
    pub fn primary_only(primary: &str, selection: &Selection) -> Self {
        let rows = selection
            .steps
            .iter()
            .map(|s| ReportRow {
                order: s.order,
                site: s.site.clone(),
                count: s.cumulative,
                percent: s.percent,
                secondary: None,
            })
            .collect();
        Report {
            primary: primary.to_string(),
            secondary: None,
            rows,
        }
    }

    /// Rows for a run with cross-evaluation. `cross` must be aligned with `selection`.
    pub fn with_secondary(
        primary: &str,
        selection: &Selection,
        secondary: &str,
        cross: &[CrossStep],
    ) -> Result<Self> {
        if cross.len() != selection.len() {
            bail!(
                "secondary results have {} steps but the selection has {}",
                cross.len(),
                selection.len()
            );
        }
        let mut report = Self::primary_only(primary, selection);
        for (row, c) in report.rows.iter_mut().zip(cross) {
            if row.site != c.site {
                bail!(
                    "step {}: secondary site `{}` does not match `{}`",
                    row.order,
                    c.site,
                    row.site
                );
            }
            row.secondary = Some((c.cumulative, c.percent));
        }
        report.secondary = Some(secondary.to_string());
        Ok(report)
    }

    /// Column names, derived from the input labels.
    pub fn header(&self) -> Vec<String> {
        let mut cols = vec![
            "Order".to_string(),
            "Site_name".to_string(),
            format!("{}_species_count", self.primary),
            format!("{}_percent_diversity", self.primary),
        ];
        if let Some(sec) = &self.secondary {
            cols.push(format!("{sec}_species_count"));
            cols.push(format!("{sec}_percent_diversity"));
        }
        cols
    }

    /// Write the table as CSV. Percentages are rounded to two decimals here
    /// and nowhere else.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);
        wtr.write_record(self.header())
            .context("writing report header")?;

        for row in &self.rows {
            let mut record = vec![
                row.order.to_string(),
                row.site.clone(),
                row.count.to_string(),
                format!("{:.2}", row.percent),
            ];
            if let Some((count, percent)) = row.secondary {
                record.push(count.to_string());
                record.push(format!("{percent:.2}"));
            }
            wtr.write_record(&record)
                .with_context(|| format!("writing report row {}", row.order))?;
        }

        wtr.flush().context("flushing report")?;
        Ok(())
    }

    /// Render the CSV into a string.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        String::from_utf8(buf).context("report is not valid UTF-8")
    }

    /// Write the CSV to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating output file `{}`", path.display()))?;
        self.write_csv(file)?;
        log::info!("Wrote {} rows to `{}`", self.rows.len(), path.display());
        Ok(())
    }
}
