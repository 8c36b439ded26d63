use merkle_benchmarks::graph::{recreate_tree_chart, write_html_chart};
use merkle_benchmarks::models::RecreateTreeTimings;
use merkle_benchmarks::paths::data_file;
use merkle_benchmarks::setup_logger;

fn main() -> anyhow::Result<()> {
    let _guard = setup_logger();

    let timings = RecreateTreeTimings::from_json_file(data_file("recreate-tree-browser.json"))?;

    let chart = recreate_tree_chart(&timings);
    write_html_chart(&chart, "recreate-tree-browser.html");

    #[cfg(feature = "image-export")]
    merkle_benchmarks::graph::write_png_chart(&chart, "recreate-tree-browser.png");

    Ok(())
}
