// src/analytics/mod.rs
//! Aggregate views over a survey dataset.
//!
//! The four analyzers are independent and read the dataset without mutating
//! it. Insights are derived from their outputs, then everything is assembled
//! into one [`AnalyticsReport`].

pub mod correlation;
pub mod counts;
pub mod distribution;
pub mod insights;
pub mod occupation;
pub mod report;
pub mod trends;

pub use correlation::{analyze_correlations, ContingencyTable, CorrelationReport};
pub use distribution::{analyze_distribution, DistributionReport};
pub use insights::generate_insights;
pub use occupation::{analyze_occupations, OccupationCount, OccupationReport};
pub use report::{Analyses, AnalyticsReport};
pub use trends::{analyze_trends, TrendReport};

use crate::config::AnalysisOptions;
use crate::dataset::Dataset;
use crate::error::Result;
use chrono::{DateTime, Utc};
use tracing::info;

/// Runs the four analyzers, on the rayon pool when `options.parallel` is set.
///
/// # Errors
/// Returns error if the trend analyzer meets an unparseable timestamp.
pub fn run_analyzers(dataset: &Dataset, options: &AnalysisOptions) -> Result<Analyses> {
    let skip = options.skip_malformed_timestamps;
    let limit = options.top_occupations;

    if options.parallel {
        let ((distribution, trends), (occupations, correlations)) = rayon::join(
            || rayon::join(|| analyze_distribution(dataset), || analyze_trends(dataset, skip)),
            || {
                rayon::join(
                    || analyze_occupations(dataset, limit),
                    || analyze_correlations(dataset),
                )
            },
        );
        return Ok(Analyses {
            distribution,
            trends: trends?,
            occupations,
            correlations,
        });
    }

    info!("analyzing preference distribution");
    let distribution = analyze_distribution(dataset);
    info!("analyzing trends");
    let trends = analyze_trends(dataset, skip)?;
    info!("analyzing occupation distribution");
    let occupations = analyze_occupations(dataset, limit);
    info!("analyzing correlations");
    let correlations = analyze_correlations(dataset);

    Ok(Analyses {
        distribution,
        trends,
        occupations,
        correlations,
    })
}

/// Computes the full report for a dataset.
///
/// # Errors
/// Returns error if any analyzer fails.
pub fn analyze(
    dataset: &Dataset,
    options: &AnalysisOptions,
    generated_at: DateTime<Utc>,
) -> Result<AnalyticsReport> {
    let analyses = run_analyzers(dataset, options)?;
    let insights = generate_insights(
        &analyses.distribution,
        &analyses.trends,
        &analyses.occupations,
        &analyses.correlations,
    );
    info!(count = insights.len(), "generated insights");
    Ok(AnalyticsReport::assemble(
        generated_at,
        dataset.len(),
        &analyses,
        &insights,
    ))
}
