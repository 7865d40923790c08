// tests/integration_job.rs
//! End-to-end runs against the in-memory store.

use chrono::{DateTime, TimeZone, Utc};
use survey_analytics_core::analytics::{self, AnalyticsReport};
use survey_analytics_core::config::{AnalysisOptions, Config};
use survey_analytics_core::dataset::parse_csv;
use survey_analytics_core::error::AnalyticsError;
use survey_analytics_core::job::{output_keys, sha256_hex, SurveyJob};
use survey_analytics_core::store::{FsStore, MemoryStore, ObjectStore, JSON_CONTENT_TYPE};

const BUCKET: &str = "binjib-dabang";
const INPUT: &str = "glue-input/surveys/surveys_latest.csv";

const EXPORT: &str = "\
\"id\",\"user_id\",\"occupation\",\"living_style\",\"social_style\",\"work_style\",\"hobby_style\",\"pace\",\"budget\",\"purchase_type\",\"created_at\"
\"1\",\"10\",\"개발자\",\"studio\",\"alone\",\"remote\",\"hiking\",\"slow\",\"low\",\"sale\",\"2026-10-12T08:00:00.000Z\"
\"2\",\"11\",\"\",\"studio\",\"together\",\"remote\",\"reading\",\"slow\",\"low\",\"sale\",\"2026-10-12T21:10:00.000Z\"
\"3\",\"12\",\"교사\",\"shared\",\"alone\",\"office\",\"hiking\",\"fast\",\"high\",\"rent\",\"2026-10-13T09:00:00.000Z\"
\"4\",\"13\",\"개발자\",\"studio\",\"alone\",\"office\",\"hiking\",\"slow\",\"high\",\"sale\",\"2026-10-14T01:00:00.000Z\"
";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 9, 30, 0).unwrap()
}

fn seeded(csv: &str) -> MemoryStore {
    let store = MemoryStore::new();
    store.insert(BUCKET, INPUT, csv);
    store
}

fn run(csv: &str) -> (MemoryStore, AnalyticsReport) {
    let store = seeded(csv);
    let config = Config::default();
    let summary = SurveyJob::new(&config, &store).execute(now()).unwrap();
    (store, summary.report)
}

#[test]
fn full_export_produces_expected_report() {
    let (_, report) = run(EXPORT);

    assert_eq!(report.total_surveys, 4);
    let living = report.preference_distribution.get("living_style").unwrap();
    assert_eq!(living.get("studio"), Some(&3));
    assert_eq!(living.get("shared"), Some(&1));

    let daily = report.trends.daily_submissions.as_ref().unwrap();
    assert_eq!(daily.get("2026-10-12"), Some(&2));
    assert_eq!(daily.get("2026-10-13"), Some(&1));
    assert_eq!(daily.get("2026-10-14"), Some(&1));
    assert_eq!(report.trends.total_surveys, Some(4));

    let top = report.occupation_distribution.top_occupations.as_ref().unwrap();
    assert_eq!(top[0].occupation, "개발자");
    assert_eq!(top[0].count, 2);
    assert_eq!(report.occupation_distribution.total_with_occupation, Some(3));

    assert_eq!(report.correlations.count("living_work", "studio", "remote"), 2);
    assert_eq!(report.correlations.count("living_work", "shared", "remote"), 0);
    assert_eq!(report.correlations.count("hobby_social", "hiking", "alone"), 3);
    assert_eq!(report.correlations.count("budget_purchase", "high", "rent"), 1);

    assert_eq!(
        report.insights,
        vec![
            "가장 인기 있는 생활 스타일: studio (3명)".to_string(),
            "가장 많은 직업 스타일: remote (2명)".to_string(),
            "가장 선호하는 취미 스타일: hiking (3명)".to_string(),
            "매매 선호 (3명) > 임대 선호 (1명)".to_string(),
        ]
    );
}

#[test]
fn writes_identical_timestamped_and_latest_snapshots() {
    let store = seeded(EXPORT);
    let config = Config::default();
    let summary = SurveyJob::new(&config, &store).execute(now()).unwrap();
    let keys = summary.persisted.unwrap();

    assert_eq!(
        keys.timestamped,
        "glue-output/analytics/survey_analytics_2026-10-14_093000.json"
    );
    assert_eq!(keys.latest, "glue-output/analytics/latest.json");

    let stamped = store.object(BUCKET, &keys.timestamped).unwrap();
    let latest = store.object(BUCKET, &keys.latest).unwrap();
    assert_eq!(stamped.body, latest.body);
    assert_eq!(stamped.content_type, JSON_CONTENT_TYPE);
    assert_eq!(latest.content_type, JSON_CONTENT_TYPE);
    assert_eq!(keys.sha256, sha256_hex(&latest.body));
    assert_eq!(stamped.body, summary.json.as_bytes());
}

#[test]
fn written_json_round_trips() {
    let (store, report) = run(EXPORT);
    let (_, latest) = output_keys("glue-output/analytics", now());
    let body = store.get(BUCKET, &latest).unwrap();
    let text = String::from_utf8(body).unwrap();

    assert!(text.contains("개발자"), "non-ASCII must not be escaped");
    assert!(text.starts_with("{\n  \"generated_at\""));
    assert_eq!(AnalyticsReport::from_json(&text).unwrap(), report);
}

#[test]
fn zero_records_still_writes_report() {
    let store = seeded("living_style,purchase_type,occupation,created_at\n");
    let config = Config::default();
    let summary = SurveyJob::new(&config, &store).execute(now()).unwrap();

    assert_eq!(summary.records(), 0);
    let report = &summary.report;
    assert_eq!(report.total_surveys, 0);
    assert_eq!(report.trends.total_surveys, Some(0));
    assert!(report.trends.daily_submissions.as_ref().unwrap().is_empty());
    assert!(report.occupation_distribution.is_empty());
    assert!(report.preference_distribution.get("living_style").unwrap().is_empty());
    // purchase_type is present, so the rent phrasing still fires with zeros
    assert_eq!(report.insights, vec!["임대 선호 (0명) > 매매 선호 (0명)".to_string()]);
    assert_eq!(store.keys(BUCKET).len(), 3);
}

#[test]
fn missing_occupation_column_reduces_to_empty() {
    let (_, report) = run("living_style\nstudio\nstudio\nshared\n");
    assert!(report.occupation_distribution.is_empty());
    assert!(report.trends.is_empty());
    assert!(report.correlations.is_empty());
    assert_eq!(
        report.insights,
        vec!["가장 인기 있는 생활 스타일: studio (2명)".to_string()]
    );

    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(value["occupation_distribution"], serde_json::json!({}));
    assert_eq!(value["trends"], serde_json::json!({}));
}

#[test]
fn purchase_preference_scenario() {
    let (_, report) = run("purchase_type\nsale\nsale\nrent\n");
    assert_eq!(report.insights, vec!["매매 선호 (2명) > 임대 선호 (1명)".to_string()]);
}

#[test]
fn missing_input_object_fails_before_writing() {
    let store = MemoryStore::new();
    let config = Config::default();
    let err = SurveyJob::new(&config, &store).execute(now()).unwrap_err();
    assert!(matches!(err, AnalyticsError::ObjectNotFound { .. }));
    assert!(store.keys(BUCKET).is_empty());
}

#[test]
fn zero_byte_input_fails_before_writing() {
    let store = seeded("");
    let config = Config::default();
    let err = SurveyJob::new(&config, &store).execute(now()).unwrap_err();
    assert!(matches!(err, AnalyticsError::EmptyInput));
    assert!(err.is_input_error());
    assert_eq!(store.keys(BUCKET), vec![INPUT.to_string()]);
}

#[test]
fn empty_prefix_writes_at_bucket_root() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsStore::new(dir.path());
    store.put(BUCKET, INPUT, b"pace\nslow\n", "text/csv").unwrap();
    let mut config = Config::default();
    config.job.output_prefix = String::new();
    let summary = SurveyJob::new(&config, &store).execute(now()).unwrap();
    let keys = summary.persisted.unwrap();
    assert_eq!(keys.latest, "latest.json");
    assert_eq!(keys.timestamped, "survey_analytics_2026-10-14_093000.json");
    assert!(dir.path().join(BUCKET).join("latest.json").is_file());
    assert!(dir.path().join(BUCKET).join(&keys.timestamped).is_file());
}

#[test]
fn malformed_timestamp_aborts_without_writing() {
    let store = seeded("created_at\n2026-10-14T00:00:00Z\nlast tuesday\n");
    let config = Config::default();
    let err = SurveyJob::new(&config, &store).execute(now()).unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidTimestamp { row: 2, .. }));
    assert_eq!(store.keys(BUCKET), vec![INPUT.to_string()]);
}

#[test]
fn hardened_timestamps_skip_bad_rows() {
    let store = seeded("created_at\n2026-10-14T00:00:00Z\nlast tuesday\n");
    let mut config = Config::default();
    config.analysis.skip_malformed_timestamps = true;
    let report = SurveyJob::new(&config, &store).execute(now()).unwrap().report;
    let daily = report.trends.daily_submissions.unwrap();
    assert_eq!(daily.values().sum::<usize>(), 1);
    assert_eq!(report.trends.total_surveys, Some(2));
}

#[test]
fn failed_latest_write_keeps_timestamped_snapshot() {
    let store = seeded(EXPORT);
    let (stamped, latest) = output_keys("glue-output/analytics", now());
    store.reject_puts_to(&latest);
    let config = Config::default();
    let err = SurveyJob::new(&config, &store).execute(now()).unwrap_err();
    assert!(matches!(err, AnalyticsError::Io { .. }));
    assert!(store.object(BUCKET, &stamped).is_some());
    assert!(store.object(BUCKET, &latest).is_none());
}

#[test]
fn separate_input_bucket_is_honored() {
    let store = MemoryStore::new();
    store.insert("raw", "exports/today.csv", "pace\nslow\n");
    let mut config = Config::default();
    config.job.input_bucket = Some("raw".into());
    config.job.input_key = "exports/today.csv".into();
    config.job.output_prefix = "reports/".into();
    let summary = SurveyJob::new(&config, &store).execute(now()).unwrap();
    assert_eq!(summary.persisted.unwrap().latest, "reports/latest.json");
    assert!(store.object(BUCKET, "reports/latest.json").is_some());
}

#[test]
fn dry_run_writes_nothing() {
    let store = seeded(EXPORT);
    let config = Config::default();
    let summary = SurveyJob::new(&config, &store).compute(now()).unwrap();
    assert!(summary.persisted.is_none());
    assert_eq!(summary.records(), 4);
    assert_eq!(store.keys(BUCKET), vec![INPUT.to_string()]);
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let dataset = parse_csv(EXPORT.as_bytes(), &AnalysisOptions::default().null_tokens).unwrap();
    let sequential = analytics::analyze(&dataset, &AnalysisOptions::default(), now()).unwrap();
    let parallel_opts = AnalysisOptions {
        parallel: true,
        ..AnalysisOptions::default()
    };
    let parallel = analytics::analyze(&dataset, &parallel_opts, now()).unwrap();
    assert_eq!(sequential, parallel);
    assert_eq!(sequential.to_json().unwrap(), parallel.to_json().unwrap());
}

#[test]
fn aggregate_sums_match_non_null_counts() {
    // deterministic pseudo-random dataset with nulls sprinkled in
    let styles = ["studio", "shared", "villa", "apartment"];
    let works = ["remote", "office", "hybrid"];
    let mut csv = String::from("living_style,work_style,occupation,created_at\n");
    let mut living_non_null = 0;
    let mut both_non_null = 0;
    let mut created_non_null = 0;
    let mut seed: u64 = 42;
    for _ in 0..200 {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let r = (seed >> 33) as usize;
        let living = if r % 7 == 0 { "" } else { styles[r % styles.len()] };
        let work = if r % 5 == 0 { "" } else { works[(r / 3) % works.len()] };
        let occupation = format!("job{}", r % 13);
        let created = if r % 11 == 0 {
            String::new()
        } else {
            format!("2026-10-{:02}T12:00:00Z", 1 + r % 28)
        };
        living_non_null += usize::from(!living.is_empty());
        both_non_null += usize::from(!living.is_empty() && !work.is_empty());
        created_non_null += usize::from(!created.is_empty());
        csv.push_str(&format!("{living},{work},{occupation},{created}\n"));
    }

    let (_, report) = run(&csv);
    let living_sum: usize = report
        .preference_distribution
        .get("living_style")
        .unwrap()
        .values()
        .sum();
    assert_eq!(living_sum, living_non_null);

    let daily_sum: usize = report.trends.daily_submissions.unwrap().values().sum();
    assert_eq!(daily_sum, created_non_null);

    let cells: usize = report
        .correlations
        .table("living_work")
        .unwrap()
        .values()
        .flat_map(|row| row.values())
        .sum();
    assert_eq!(cells, both_non_null);

    let top = report.occupation_distribution.top_occupations.unwrap();
    assert!(top.len() <= 10);
    assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
    assert_eq!(report.occupation_distribution.total_with_occupation, Some(200));
}
