use merkle_benchmarks::graph::{node_performance_chart, write_html_chart};
use merkle_benchmarks::models::FunctionTiming;
use merkle_benchmarks::paths::data_file;
use merkle_benchmarks::setup_logger;
use merkle_benchmarks::table::write_comparison_table;

fn main() -> anyhow::Result<()> {
    let _guard = setup_logger();

    let timings = FunctionTiming::from_json_file(data_file("merkle-tree-benchmarks-1024.json"))?;

    write_html_chart(&node_performance_chart(&timings), "nodejs-benchmark.html");
    write_comparison_table(&timings, "nodejs-benchmark.md")?;
    Ok(())
}
