use crate::config::Overrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "survey-analytics",
    version,
    about = "Descriptive analytics over survey response exports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Config file (defaults to ./survey-analytics.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze the input export and write the report snapshots (default)
    Run(RunArgs),
    /// Print the resolved configuration as TOML
    Config(OverrideArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub overrides: OverrideArgs,
    /// Print the report to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct OverrideArgs {
    /// Key of the CSV export inside the input bucket
    #[arg(long, value_name = "KEY")]
    pub input_key: Option<String>,
    /// Bucket holding the export (defaults to the output bucket)
    #[arg(long, value_name = "BUCKET")]
    pub input_bucket: Option<String>,
    /// Bucket receiving the report
    #[arg(long, value_name = "BUCKET")]
    pub output_bucket: Option<String>,
    /// Key prefix for the report snapshots
    #[arg(long, value_name = "PREFIX")]
    pub output_prefix: Option<String>,
    /// Directory holding one subdirectory per bucket
    #[arg(long, value_name = "DIR")]
    pub store_root: Option<PathBuf>,
    /// How many occupations to keep
    #[arg(long, value_name = "N")]
    pub top_occupations: Option<usize>,
    /// Skip unparseable created_at values instead of failing
    #[arg(long)]
    pub skip_malformed_timestamps: bool,
    /// Run the analyzers in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl OverrideArgs {
    #[must_use]
    pub fn to_overrides(&self) -> Overrides {
        Overrides {
            input_key: self.input_key.clone(),
            input_bucket: self.input_bucket.clone(),
            output_bucket: self.output_bucket.clone(),
            output_prefix: self.output_prefix.clone(),
            store_root: self.store_root.clone(),
            top_occupations: self.top_occupations,
            skip_malformed_timestamps: self.skip_malformed_timestamps,
            parallel: self.parallel,
        }
    }
}
