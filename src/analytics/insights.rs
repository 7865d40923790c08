// src/analytics/insights.rs
//! Human-readable summary sentences for the admin dashboard.

use super::correlation::CorrelationReport;
use super::counts::most_common;
use super::distribution::DistributionReport;
use super::occupation::OccupationReport;
use super::trends::TrendReport;
use crate::dataset::fields::{HOBBY_STYLE, LIVING_STYLE, PURCHASE_TYPE, WORK_STYLE};

const SALE: &str = "sale";
const RENT: &str = "rent";

/// Most-popular rules, evaluated in this order: (field, sentence label).
const POPULARITY_RULES: &[(&str, &str)] = &[
    (LIVING_STYLE, "가장 인기 있는 생활 스타일"),
    (WORK_STYLE, "가장 많은 직업 스타일"),
    (HOBBY_STYLE, "가장 선호하는 취미 스타일"),
];

/// Derives insights from the analyzer outputs.
///
/// Only the distribution feeds the current rules; the other reports are
/// accepted so new rules can use them without changing callers.
#[must_use]
pub fn generate_insights(
    distribution: &DistributionReport,
    _trends: &TrendReport,
    _occupations: &OccupationReport,
    _correlations: &CorrelationReport,
) -> Vec<String> {
    let mut insights = Vec::new();

    for &(field, label) in POPULARITY_RULES {
        if let Some((value, count)) = distribution.get(field).and_then(most_common) {
            insights.push(format!("{label}: {value} ({count}명)"));
        }
    }

    if let Some(purchase) = distribution.get(PURCHASE_TYPE) {
        let sale = purchase.get(SALE).copied().unwrap_or(0);
        let rent = purchase.get(RENT).copied().unwrap_or(0);
        insights.push(purchase_preference(sale, rent));
    }

    insights
}

// Equal counts fall through to the rent phrasing.
fn purchase_preference(sale: usize, rent: usize) -> String {
    if sale > rent {
        format!("매매 선호 ({sale}명) > 임대 선호 ({rent}명)")
    } else {
        format!("임대 선호 ({rent}명) > 매매 선호 ({sale}명)")
    }
}
