//! Markdown rendering of the per-function timing comparison.

use std::path::PathBuf;
use tracing::info;

use crate::error::DataError;
use crate::models::FunctionTiming;
use crate::paths::tables_file;

const HEADERS: [&str; 4] = ["Function", "SMT (ms)", "LeanIMT (ms)", "Relative to SMT"];

/// Render the timing measurements as a markdown table with a comparison
/// column relating each LeanIMT measurement to its SMT counterpart.
pub fn comparison_table(timings: &[FunctionTiming]) -> String {
    let rows: Vec<[String; 4]> = timings
        .iter()
        .map(|t| {
            [
                t.function.clone(),
                format!("{:.5}", t.smt_ms),
                format!("{:.5}", t.leanimt_ms),
                relative_to_smt(t),
            ]
        })
        .collect();
    render_markdown(&HEADERS, &rows)
}

/// Write the comparison table to a file in the tables directory.
pub fn write_comparison_table(
    timings: &[FunctionTiming],
    filename: &str,
) -> Result<PathBuf, DataError> {
    let path = tables_file(filename);
    let content = format!("# Generated Table\n\n{}\n", comparison_table(timings));
    std::fs::write(&path, content).map_err(|source| DataError::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "wrote comparison table");
    Ok(path)
}

fn relative_to_smt(timing: &FunctionTiming) -> String {
    if timing.smt_ms > timing.leanimt_ms {
        format!("{:.2} x faster", timing.smt_ms / timing.leanimt_ms)
    } else {
        format!("{:.2} x slower", timing.leanimt_ms / timing.smt_ms)
    }
}

fn render_markdown(head: &[&str; 4], body: &[[String; 4]]) -> String {
    // Pad every column to its widest cell so the raw text stays readable.
    let mut widths = head.map(str::len);
    for row in body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &widths, head.iter().copied());
    push_row(&mut out, &widths, widths.iter().map(|_| "---"));
    for row in body {
        push_row(&mut out, &widths, row.iter().map(String::as_str));
    }
    out
}

fn push_row<'a>(
    out: &mut String,
    widths: &[usize; 4],
    cells: impl Iterator<Item = &'a str>,
) {
    for (cell, width) in cells.zip(widths) {
        out.push_str("| ");
        out.push_str(cell);
        for _ in cell.len()..*width {
            out.push(' ');
        }
        out.push(' ');
    }
    out.push_str("|\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_comparison_column() {
        let timings = vec![
            FunctionTiming {
                function: "Add Member".into(),
                smt_ms: 1.5,
                leanimt_ms: 0.3,
            },
            FunctionTiming {
                function: "Verify ZK Proof (Membership)".into(),
                smt_ms: 11.0,
                leanimt_ms: 22.0,
            },
        ];

        let table = comparison_table(&timings);
        assert!(table.contains("| Function"));
        assert!(table.contains("| Relative to SMT"));
        assert!(table.contains("5.00 x faster"));
        assert!(table.contains("2.00 x slower"));
    }

    #[test]
    fn pads_columns_to_the_widest_cell() {
        let timings = vec![FunctionTiming {
            function: "Update Member".into(),
            smt_ms: 1.70133,
            leanimt_ms: 0.47129,
        }];

        let table = comparison_table(&timings);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }
}
