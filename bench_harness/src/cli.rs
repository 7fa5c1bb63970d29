use clap::{Args, Parser, Subcommand};
use fundamentals::searching::SearchAlgorithm;
use fundamentals::sorting::SortAlgorithm;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fundamentals-bench",
    about = "Time the fundamentals sorts and searches on random input",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(subcommand)]
    pub command: Command,
}

/// Input shape. Flags override values read from `--config`.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// JSON file with `size`, `max_value` and `seed` fields
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Number of random elements to generate
    #[arg(long, global = true)]
    pub size: Option<usize>,
    /// Largest generated value; values are drawn from 1..=max_value
    #[arg(long = "max-value", global = true)]
    pub max_value: Option<i64>,
    /// Seed for reproducible input
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// Print the report as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Time every (or each selected) sort on copies of one random array
    Sort {
        #[arg(long = "algorithm", short = 'a')]
        algorithms: Vec<SortAlgorithm>,
    },
    /// Time every (or each selected) search for one target in a sorted random array
    Search {
        #[arg(long = "algorithm", short = 'a')]
        algorithms: Vec<SearchAlgorithm>,
    },
    /// Walk through stack, queue, linked list and tree operations
    Structures,
    /// List the modules of the fundamentals crate with their complexity
    List,
}
