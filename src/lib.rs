//! # merkle-benchmarks
//!
//! Comparison charts for two Merkle accumulator schemes: LeanIMT (an
//! incremental Merkle tree variant) and SMT (a sparse Merkle tree).
//!
//! Benchmark results are recorded as JSON files under `data/`. Each binary
//! under `src/bin` loads one result file and renders its charts into
//! `charts/` as interactive HTML (optionally PNG, with the `image-export`
//! feature). The `node_performance` binary additionally writes a markdown
//! comparison table into `tables/`.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod data;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod models;
pub mod paths;
pub mod table;

pub use error::DataError;

pub fn setup_logger() -> tracing::subscriber::DefaultGuard {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()
        .unwrap();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
                .compact()
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .set_default()
}
