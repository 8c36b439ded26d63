use merkle_benchmarks::graph::{
    constraints_absolute_chart, constraints_ratio_chart, write_html_chart,
};
use merkle_benchmarks::models::ConstraintCounts;
use merkle_benchmarks::paths::data_file;
use merkle_benchmarks::setup_logger;

fn main() -> anyhow::Result<()> {
    let _guard = setup_logger();

    let counts = ConstraintCounts::from_json_file(data_file("circuit-constraints.json"))?;

    write_html_chart(&constraints_absolute_chart(&counts), "constraints_absolute.html");
    write_html_chart(&constraints_ratio_chart(&counts)?, "constraints_ratio.html");
    Ok(())
}
