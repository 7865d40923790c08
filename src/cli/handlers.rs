// src/cli/handlers.rs
use crate::config::Config;
use crate::exit::JobExit;
use crate::job::SurveyJob;
use crate::reporting;
use crate::store::FsStore;
use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

/// Handles the run command.
///
/// # Errors
/// Returns error if loading, analysis, or persistence fails.
pub fn handle_run(config: &Config, dry_run: bool) -> Result<JobExit> {
    info!("starting survey analytics job");
    let store = FsStore::new(&config.job.store_root);
    let job = SurveyJob::new(config, &store);
    let now = Utc::now();

    let summary = if dry_run {
        let summary = job.compute(now).context("Survey analytics failed")?;
        println!("{}", summary.json);
        summary
    } else {
        job.execute(now).context("Survey analytics failed")?
    };

    eprint!("{}", reporting::format_summary(&summary));
    Ok(JobExit::Success)
}

/// Handles the config command.
///
/// # Errors
/// Returns error if the config cannot be rendered.
pub fn handle_config(config: &Config) -> Result<JobExit> {
    print!("{}", config.to_toml()?);
    Ok(JobExit::Success)
}
