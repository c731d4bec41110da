use std::{
    io::{self, Write},
    path::Path,
};

use dirstamp_fs::{DirectoryRecord, ScanSummary, display_path, format_date, format_file_counts};

const HEADERS: [&str; 4] = ["Folder Path", "Created", "Modified", "Files"];

/// Static context about a report run.
#[derive(Debug)]
pub struct ReportContext<'a> {
    /// Normalized scan root, used for display paths
    pub root: &'a Path,
    /// Totals over the whole scan
    pub summary: ScanSummary,
}

/// Trait for printing scan reports.
///
/// Implementations receive every record in scan order, root first.
pub trait ReportPrinter {
    /// Called once before any rows are printed.
    fn begin(&mut self, ctx: &ReportContext) -> io::Result<()>;

    /// Called for each directory record.
    fn print_row(&mut self, record: &DirectoryRecord, ctx: &ReportContext) -> io::Result<()>;

    /// Called once after all rows are printed.
    ///
    /// Use this for footers and summaries.
    fn finish(&mut self, ctx: &ReportContext) -> io::Result<()>;
}

/// Box-drawn table for terminals.
///
/// Rows are buffered until `finish` so column widths can fit every row.
pub struct TablePrinter<W: Write> {
    out: W,
    rows: Vec<[String; 4]>,
}

impl<W: Write> TablePrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            rows: Vec::new(),
        }
    }

    pub fn stdout() -> TablePrinter<io::Stdout> {
        TablePrinter::new(io::stdout())
    }

    fn widths(&self) -> [usize; 4] {
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }
        widths
    }

    fn write_rule(&mut self, widths: &[usize; 4], [left, mid, right]: [char; 3]) -> io::Result<()> {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        let mid = mid.to_string();
        writeln!(self.out, "{left}{}{right}", segments.join(mid.as_str()))
    }

    fn write_cells<S: AsRef<str>>(&mut self, widths: &[usize; 4], cells: &[S]) -> io::Result<()> {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, &w)| format!(" {:<w$} ", cell.as_ref()))
            .collect();
        writeln!(self.out, "│{}│", padded.join("│"))
    }
}

impl<W: Write> ReportPrinter for TablePrinter<W> {
    fn begin(&mut self, ctx: &ReportContext) -> io::Result<()> {
        writeln!(self.out, "Analyzing: {}", ctx.root.display())?;
        writeln!(self.out)
    }

    fn print_row(&mut self, record: &DirectoryRecord, ctx: &ReportContext) -> io::Result<()> {
        self.rows.push([
            display_path(ctx.root, &record.path),
            format_date(record.latest_created),
            format_date(record.latest_modified),
            format_file_counts(record),
        ]);
        Ok(())
    }

    fn finish(&mut self, ctx: &ReportContext) -> io::Result<()> {
        let widths = self.widths();
        let rows = std::mem::take(&mut self.rows);

        self.write_rule(&widths, ['┌', '┬', '┐'])?;
        self.write_cells(&widths, &HEADERS)?;
        self.write_rule(&widths, ['├', '┼', '┤'])?;
        for row in &rows {
            self.write_cells(&widths, row)?;
        }
        self.write_rule(&widths, ['└', '┴', '┘'])?;

        writeln!(self.out)?;
        writeln!(self.out, "Total folders analyzed: {}", ctx.summary.folders)?;
        writeln!(self.out, "Total files: {}", ctx.summary.files)?;
        self.out.flush()
    }
}

/// NDJSON printer for machine consumption.
pub struct JsonPrinter<W: Write> {
    out: W,
}

impl<W: Write> JsonPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn stdout() -> JsonPrinter<io::Stdout> {
        JsonPrinter::new(io::stdout())
    }
}

impl<W: Write> ReportPrinter for JsonPrinter<W> {
    fn begin(&mut self, _ctx: &ReportContext) -> io::Result<()> {
        Ok(())
    }

    fn print_row(&mut self, record: &DirectoryRecord, ctx: &ReportContext) -> io::Result<()> {
        let obj = serde_json::json!({
            "path": record.path.to_string_lossy(),
            "display": display_path(ctx.root, &record.path),
            "latest_created": record.latest_created.map(|t| t.to_rfc3339()),
            "latest_modified": record.latest_modified.map(|t| t.to_rfc3339()),
            "file_count": record.file_count,
            "cumulative_file_count": record.cumulative_file_count,
        });
        writeln!(self.out, "{}", obj)
    }

    fn finish(&mut self, ctx: &ReportContext) -> io::Result<()> {
        let mut obj = serde_json::to_value(ctx.summary).map_err(io::Error::other)?;
        obj["type"] = "summary".into();
        writeln!(self.out, "{}", obj)?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
