use clap::Parser;
use colored::Colorize;
use survey_analytics_core::cli::{self, Cli};
use survey_analytics_core::exit::JobExit;

fn main() -> JobExit {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    match cli::dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "job failed");
            eprintln!("{} {e:?}", "❌ Job failed:".red().bold());
            JobExit::from_error(&e)
        }
    }
}
