//! End-to-end properties of the quality engine.

use chrono::{DateTime, Utc};
use tablesurveyor_core::quality::{EngineConfig, IssueKind, QualityEngine};
use tablesurveyor_core::{Column, Table};

fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

fn mixed_table() -> Table {
    let emails: Vec<Option<String>> = (0..50)
        .map(|i| {
            if i % 4 == 0 {
                None
            } else {
                Some(format!("user{i}@example.com"))
            }
        })
        .collect();

    let amounts: Vec<Option<f64>> = (0..50).map(|i| Some(f64::from(i) * 1.5)).collect();

    let statuses: Vec<Option<String>> = (0..50)
        .map(|i| Some(if i % 2 == 0 { "active" } else { "inactive" }.to_string()))
        .collect();

    Table::new(
        "mixed.csv",
        vec![
            Column::numeric("amount", amounts),
            Column::text("email", emails),
            Column::text("status", statuses),
        ],
    )
    .unwrap()
}

#[test]
fn all_scores_stay_in_bounds() {
    let report = QualityEngine::with_defaults().analyze(&mixed_table()).unwrap();

    for profile in &report.columns {
        assert!(
            (0.0..=100.0).contains(&profile.quality_score),
            "column '{}' scored {}",
            profile.name,
            profile.quality_score
        );
    }
    assert!((0.0..=100.0).contains(&report.overall_score));
}

#[test]
fn overall_score_is_rounded_mean_of_columns() {
    let report = QualityEngine::with_defaults().analyze(&mixed_table()).unwrap();

    let mean: f64 = report.columns.iter().map(|p| p.quality_score).sum::<f64>()
        / report.columns.len() as f64;
    let rounded = (mean * 10.0).round() / 10.0;
    assert!((report.overall_score - rounded).abs() < 1e-9);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let table = mixed_table();
    let engine = QualityEngine::with_defaults();
    let at = fixed_timestamp();

    let first = engine.analyze_at(&table, at).unwrap();
    let second = engine.analyze_at(&table, at).unwrap();

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn parallel_run_matches_sequential_run() {
    let table = mixed_table();
    let at = fixed_timestamp();

    let sequential = QualityEngine::new(EngineConfig::new().with_parallel(false))
        .analyze_at(&table, at)
        .unwrap();
    let parallel = QualityEngine::new(EngineConfig::new().with_worker_threads(3))
        .analyze_at(&table, at)
        .unwrap();

    assert_eq!(
        serde_json::to_string(&sequential).unwrap(),
        serde_json::to_string(&parallel).unwrap()
    );
}

#[test]
fn outlier_fixture_flags_only_the_extreme_value() {
    let cells = vec![
        Some(1.0),
        Some(2.0),
        Some(3.0),
        Some(4.0),
        Some(5.0),
        Some(6.0),
        Some(7.0),
        Some(100.0),
    ];
    let table = Table::new("outliers.csv", vec![Column::numeric("value", cells)]).unwrap();

    let report = QualityEngine::with_defaults().analyze(&table).unwrap();
    let profile = &report.columns[0];

    assert_eq!(profile.outlier_count, Some(1));
    assert_eq!(profile.outlier_pct, Some(12.5));
}

#[test]
fn null_threshold_boundary_is_strict() {
    let with_25_pct: Vec<Option<String>> = (0..100)
        .map(|i| (i >= 25).then(|| format!("value-{i}")))
        .collect();
    let with_20_pct: Vec<Option<String>> = (0..100)
        .map(|i| (i >= 20).then(|| format!("value-{i}")))
        .collect();

    let table = Table::new(
        "boundary.csv",
        vec![
            Column::text("quarter_null", with_25_pct),
            Column::text("fifth_null", with_20_pct),
        ],
    )
    .unwrap();

    let report = QualityEngine::with_defaults().analyze(&table).unwrap();

    let null_issues: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::HighNullPercentage)
        .collect();
    assert_eq!(null_issues.len(), 1);
    assert_eq!(null_issues[0].column, "quarter_null");
}

#[test]
fn duplicate_threshold_boundary_is_strict() {
    // 100 non-null values drawn from 40 distinct strings: 60 duplicates
    let repetitive: Vec<Option<String>> = (0..100).map(|i| Some(format!("v{}", i % 40))).collect();
    // 51 distinct values: 49 duplicates, stays under the threshold
    let diverse: Vec<Option<String>> = (0..100).map(|i| Some(format!("v{}", i % 51))).collect();

    let table = Table::new(
        "dups.csv",
        vec![
            Column::text("repetitive", repetitive),
            Column::text("diverse", diverse),
        ],
    )
    .unwrap();

    let report = QualityEngine::with_defaults().analyze(&table).unwrap();

    let dup_issues: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::HighDuplicates)
        .collect();
    assert_eq!(dup_issues.len(), 1);
    assert_eq!(dup_issues[0].column, "repetitive");
}

#[test]
fn empty_table_yields_empty_report() {
    let report = QualityEngine::with_defaults()
        .analyze(&Table::empty("empty.csv"))
        .unwrap();

    assert_eq!(report.overall_score, 0.0);
    assert_eq!(report.row_count, 0);
    assert_eq!(report.column_count, 0);
    assert!(report.issues.is_empty());
    assert_eq!(report.summary.columns_with_nulls, 0);
    assert_eq!(report.summary.columns_with_duplicates, 0);
    assert_eq!(report.summary.numeric_columns, 0);
    assert_eq!(report.summary.total_issues, 0);
}

#[test]
fn email_sniffing_requires_majority() {
    let two_of_three = vec![
        Some("a@b.com".to_string()),
        Some("bad".to_string()),
        Some("c@d.org".to_string()),
    ];
    let one_of_three = vec![
        Some("a@b.com".to_string()),
        Some("bad".to_string()),
        Some("worse".to_string()),
    ];

    let table = Table::new(
        "emails.csv",
        vec![
            Column::text("mostly_email", two_of_three),
            Column::text("rarely_email", one_of_three),
        ],
    )
    .unwrap();

    let report = QualityEngine::with_defaults().analyze(&table).unwrap();

    assert!(report.columns[0].type_hints.unwrap().likely_email);
    assert!(!report.columns[1].type_hints.unwrap().likely_email);
}

#[test]
fn summary_counts_match_profiles() {
    let report = QualityEngine::with_defaults().analyze(&mixed_table()).unwrap();

    let with_nulls = report.columns.iter().filter(|p| p.null_count > 0).count() as u64;
    let with_dups = report
        .columns
        .iter()
        .filter(|p| p.duplicate_count > 0)
        .count() as u64;
    let numeric = report.columns.iter().filter(|p| p.is_numeric).count() as u64;

    assert_eq!(report.summary.columns_with_nulls, with_nulls);
    assert_eq!(report.summary.columns_with_duplicates, with_dups);
    assert_eq!(report.summary.numeric_columns, numeric);
    assert_eq!(report.summary.total_issues, report.issues.len() as u64);
}
