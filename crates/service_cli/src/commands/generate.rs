//! Generate command implementation
//!
//! Produces a batch of synthetic orders and persists it via orders_sink.

use std::path::PathBuf;

use orders_core::config::GeneratorConfig;
use orders_engine::{OrderGenerator, OrderRng};
use orders_sink::{jsonl, parquet, BatchSummary};
use tracing::info;

use crate::{CliError, Result};

/// Arguments for the generate command.
pub struct GenerateArgs {
    /// Number of orders to generate.
    pub rows: usize,
    /// Output file path.
    pub output: PathBuf,
    /// Output format, `parquet` or `jsonl`.
    pub format: String,
    /// Seed for reproducible output.
    pub seed: Option<u64>,
    /// Generate across all cores.
    pub parallel: bool,
    /// Optional generator configuration file.
    pub config: Option<PathBuf>,
    /// Print batch statistics after writing.
    pub stats: bool,
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => crate::config::load_generator_config(path)?,
        None => GeneratorConfig::default(),
    };

    let generator = OrderGenerator::new(config)?;

    // Resolve the seed up front so every run can be reproduced from the log.
    let seed = match args.seed {
        Some(seed) => seed,
        None => OrderRng::from_entropy().seed(),
    };
    info!(rows = args.rows, seed, parallel = args.parallel, "generating orders");

    let records = if args.parallel {
        generator.generate_parallel(args.rows, seed)
    } else {
        let mut rng = OrderRng::from_seed(seed);
        generator.generate(args.rows, &mut rng)
    };

    match args.format.as_str() {
        "parquet" => parquet::write_parquet(&args.output, &records)?,
        "jsonl" => jsonl::write_jsonl(&args.output, &records)?,
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown output format: {}. Supported: parquet, jsonl",
                other
            )));
        }
    }

    info!(path = %args.output.display(), "dataset written");

    if args.stats {
        println!("{}", BatchSummary::from_records(&records));
    }

    Ok(())
}
