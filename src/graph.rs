//! Chart construction for the LeanIMT vs SMT comparison suite.
//!
//! Builders return a [`Plot`]; writing the rendered output is a separate
//! step so charts can be inspected without touching the filesystem.

use plotly::common::{DashType, Fill, Font, Line, Marker, MarkerSymbol, Mode};
use plotly::layout::{Annotation, Axis, AxisType, BarMode};
use plotly::{Bar, Layout, Plot, Scatter};
use std::path::PathBuf;
use tracing::info;

use crate::error::DataError;
use crate::metrics::element_wise_ratio;
use crate::models::{
    ConstraintCounts, FunctionTiming, RecreateTreeTimings, RECREATE_TREE_LEAVES,
    REVOCATION_LABELS, TREE_DEPTHS,
};
use crate::paths::charts_file;

const LEANIMT_COLOR: &str = "#22c55e";
const SMT_COLOR: &str = "#3b82f6";
const REVOCATION_COLOR: &str = "#9333ea";
const GAP_FILL_COLOR: &str = "rgba(148, 163, 184, 0.2)";

fn depth_axis() -> Vec<f64> {
    TREE_DEPTHS.map(f64::from).collect()
}

/// Absolute constraint counts of both schemes across tree depth, with the
/// gap between the traces shaded.
pub fn constraints_absolute_chart(counts: &ConstraintCounts) -> Plot {
    let depths = depth_axis();

    let leanimt = Scatter::new(depths.clone(), counts.leanimt.clone())
        .name("LeanIMT")
        .mode(Mode::LinesMarkers)
        .marker(Marker::new().color(LEANIMT_COLOR).symbol(MarkerSymbol::Circle))
        .line(Line::new().color(LEANIMT_COLOR));

    // Fills down to the LeanIMT trace added just before.
    let smt = Scatter::new(depths, counts.smt.clone())
        .name("SMT")
        .mode(Mode::LinesMarkers)
        .marker(Marker::new().color(SMT_COLOR).symbol(MarkerSymbol::Square))
        .line(Line::new().color(SMT_COLOR))
        .fill(Fill::ToNextY)
        .fill_color(GAP_FILL_COLOR);

    let mut plot = Plot::new();
    plot.add_trace(leanimt);
    plot.add_trace(smt);
    plot.set_layout(
        Layout::new()
            .title("LeanIMT vs SMT: Number of Constraints Across Tree Depth")
            .x_axis(Axis::new().title("Tree Depth"))
            .y_axis(Axis::new().title("Number of Constraints").zero_line(true))
            .width(900)
            .height(500),
    );
    plot
}

/// Relative efficiency of the two schemes: SMT constraint counts divided by
/// LeanIMT constraint counts, with a dashed parity reference at 1.0.
pub fn constraints_ratio_chart(counts: &ConstraintCounts) -> Result<Plot, DataError> {
    let depths = depth_axis();
    let ratio = element_wise_ratio(&counts.leanimt, &counts.smt)?;

    let trace = Scatter::new(depths, ratio)
        .name("SMT / LeanIMT")
        .mode(Mode::LinesMarkers)
        .marker(Marker::new().color(SMT_COLOR).symbol(MarkerSymbol::Diamond))
        .line(Line::new().color(SMT_COLOR));

    let start = f64::from(*TREE_DEPTHS.start());
    let end = f64::from(*TREE_DEPTHS.end());
    let parity = Scatter::new(vec![start, end], vec![1.0, 1.0])
        .mode(Mode::Lines)
        .line(Line::new().color(LEANIMT_COLOR).dash(DashType::Dash))
        .show_legend(false);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.add_trace(parity);
    plot.set_layout(
        Layout::new()
            .title("Relative Efficiency: Ratio of Constraints (SMT / LeanIMT)")
            .x_axis(Axis::new().title("Tree Depth"))
            .y_axis(Axis::new().title("Ratio (SMT / LeanIMT)"))
            .width(900)
            .height(450),
    );
    Ok(plot)
}

/// Per-function timings of the Node.js suite as grouped bars. The log scale
/// keeps sub-millisecond tree updates and second-scale proof generation
/// readable on one axis.
pub fn node_performance_chart(timings: &[FunctionTiming]) -> Plot {
    let functions: Vec<String> = timings.iter().map(|t| t.function.clone()).collect();
    let leanimt: Vec<f64> = timings.iter().map(|t| t.leanimt_ms).collect();
    let smt: Vec<f64> = timings.iter().map(|t| t.smt_ms).collect();

    let mut plot = Plot::new();
    plot.add_trace(
        Bar::new(functions.clone(), leanimt)
            .name("LeanIMT")
            .marker(Marker::new().color(LEANIMT_COLOR)),
    );
    plot.add_trace(
        Bar::new(functions, smt)
            .name("SMT")
            .marker(Marker::new().color(SMT_COLOR)),
    );
    plot.set_layout(
        Layout::new()
            .title("LeanIMT vs SMT: Node.js Performance (1024 Members)")
            .bar_mode(BarMode::Group)
            .x_axis(Axis::new().tick_angle(-25.0))
            .y_axis(
                Axis::new()
                    .title("Average Time (ms, log scale)")
                    .type_(AxisType::Log),
            )
            .width(900)
            .height(500),
    );
    plot
}

/// Browser tree-recreation timings across leaf counts, with one dashed
/// threshold line per recorded revocation-registry timing.
pub fn recreate_tree_chart(timings: &RecreateTreeTimings) -> Plot {
    let leaves: Vec<f64> = RECREATE_TREE_LEAVES.iter().map(|&l| f64::from(l)).collect();
    let max_leaves = f64::from(RECREATE_TREE_LEAVES[RECREATE_TREE_LEAVES.len() - 1]);

    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(leaves.clone(), timings.leanimt.clone())
            .name("LeanIMT")
            .mode(Mode::LinesMarkers)
            .marker(Marker::new().color(LEANIMT_COLOR).symbol(MarkerSymbol::Circle))
            .line(Line::new().color(LEANIMT_COLOR)),
    );
    plot.add_trace(
        Scatter::new(leaves.clone(), timings.smt.clone())
            .name("SMT")
            .mode(Mode::LinesMarkers)
            .marker(Marker::new().color(SMT_COLOR).symbol(MarkerSymbol::Square))
            .line(Line::new().color(SMT_COLOR)),
    );

    // One threshold per recorded revocation timing, labeled past the right
    // edge of the data. A single legend entry covers all of them.
    let mut annotations = Vec::new();
    for (i, (&label, &y)) in REVOCATION_LABELS
        .iter()
        .zip(&timings.leanimt_revocation)
        .enumerate()
    {
        plot.add_trace(
            Scatter::new(vec![leaves[0], max_leaves], vec![y, y])
                .name("LeanIMT (Revocation)")
                .mode(Mode::Lines)
                .line(Line::new().color(REVOCATION_COLOR).dash(DashType::Dash))
                .show_legend(i == 0),
        );
        let text = format!("{label} leaves");
        annotations.push(
            Annotation::new()
                .text(text.as_str())
                .x(max_leaves * 1.05)
                // Log-axis annotation coordinates are log10 values.
                .y(y.log10())
                .show_arrow(false)
                .font(Font::new().size(8).color(REVOCATION_COLOR)),
        );
    }

    plot.set_layout(
        Layout::new()
            .title("LeanIMT vs SMT: Recreate Tree Browser")
            .x_axis(Axis::new().title("Leaves"))
            .y_axis(Axis::new().title("Time (ms)").type_(AxisType::Log))
            .annotations(annotations)
            .width(900)
            .height(500),
    );
    plot
}

/// Write a rendered chart to an HTML file in the charts directory.
pub fn write_html_chart(plot: &Plot, filename: &str) -> PathBuf {
    let path = charts_file(filename);
    plot.write_html(&path);
    info!(path = %path.display(), "wrote chart");
    path
}

/// Write a rendered chart to a PNG file in the charts directory.
///
/// The 3x scale matches the 300 dpi export resolution of the recorded
/// charts (2700x1500 pixels).
#[cfg(feature = "image-export")]
pub fn write_png_chart(plot: &Plot, filename: &str) -> PathBuf {
    let path = charts_file(filename);
    plot.write_image(&path, plotly::ImageFormat::PNG, 900, 500, 3.0);
    info!(path = %path.display(), "wrote chart image");
    path
}
