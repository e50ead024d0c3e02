// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Benchplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Benchplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use crate::model::{BenchmarkRecord, BenchmarkReport, RealTime};

use super::{extract_grouped_series, extract_single_series, ExtractError};

fn report(records: &[(&str, &str)]) -> BenchmarkReport {
    BenchmarkReport::new(
        records.iter().map(|(name, time)| BenchmarkRecord::new(*name, *time)).collect(),
    )
}

#[fixture]
fn solve_report() -> BenchmarkReport {
    report(&[("BM_Solve/2/5", "3.1"), ("BM_Solve/2/7", "4.0"), ("BM_Solve/3/5", "9.9")])
}

#[test]
fn single_series_follows_report_order() {
    let report = report(&[
        ("BM_GenerateSudoku/45", "120.5"),
        ("BM_GenerateSudoku/40", "80.0"),
        ("BM_GenerateSudoku/50", "300.25"),
    ]);

    let series = extract_single_series(&report).expect("extract");
    assert_eq!(series.x(), &[45, 40, 50]);
    assert_eq!(series.y(), &[120.5, 80.0, 300.25]);
}

#[test]
fn single_series_ignores_segments_past_the_parameter() {
    let series = extract_single_series(&solve_report()).expect("extract");
    assert_eq!(series.x(), &[2, 2, 3]);
    assert_eq!(series.y(), &[3.1, 4.0, 9.9]);
}

#[test]
fn single_series_accepts_numeric_real_time() {
    let report = BenchmarkReport::new(vec![
        BenchmarkRecord::new("BM/1", 1.5),
        BenchmarkRecord::new("BM/2", RealTime::from("2.5")),
    ]);

    let series = extract_single_series(&report).expect("extract");
    assert_eq!(series.y(), &[1.5, 2.5]);
}

#[test]
fn empty_report_yields_empty_results() {
    let report = BenchmarkReport::default();

    assert!(extract_single_series(&report).expect("single").is_empty());
    assert!(extract_grouped_series(&report).expect("grouped").is_empty());
}

#[test]
fn single_series_rejects_name_without_parameter() {
    let report = report(&[("BM/1", "1.0"), ("BM_NoArgs", "2.0")]);

    let err = extract_single_series(&report).unwrap_err();
    assert_eq!(
        err,
        ExtractError::TooFewSegments {
            index: 1,
            name: "BM_NoArgs".to_owned(),
            expected: 2,
            found: 1,
        }
    );
    assert_eq!(err.field(), "name");
}

#[rstest]
#[case::word("BM/fast", "fast")]
#[case::float("BM/1.5", "1.5")]
#[case::empty("BM/", "")]
#[case::named_arg("BM/spaces:40", "spaces:40")]
#[case::digit_separator("BM/1_000", "1_000")]
#[case::past_i64("BM/99999999999999999999", "99999999999999999999")]
fn single_series_rejects_non_integer_parameter(#[case] name: &str, #[case] value: &str) {
    let err = extract_single_series(&report(&[(name, "1.0")])).unwrap_err();
    assert_eq!(
        err,
        ExtractError::InvalidParameter {
            index: 0,
            name: name.to_owned(),
            segment: 1,
            value: value.to_owned(),
        }
    );
}

#[rstest]
#[case::word("slow")]
#[case::empty("")]
#[case::unit_suffix("12us")]
fn rejects_non_numeric_real_time(#[case] time: &str) {
    let report = report(&[("BM/1/2", "1.0"), ("BM/1/3", time)]);

    let single = extract_single_series(&report).unwrap_err();
    let grouped = extract_grouped_series(&report).unwrap_err();

    let expected = ExtractError::InvalidRealTime {
        index: 1,
        name: "BM/1/3".to_owned(),
        value: time.to_owned(),
    };
    assert_eq!(single, expected);
    assert_eq!(grouped, expected);
    assert_eq!(single.field(), "real_time");
}

#[test]
fn parameter_tolerates_surrounding_whitespace() {
    let series = extract_single_series(&report(&[("BM/ 12 ", "1.0")])).expect("extract");
    assert_eq!(series.x(), &[12]);
}

#[test]
fn negative_parameters_parse() {
    let series = extract_single_series(&report(&[("BM/-3", "1.0")])).expect("extract");
    assert_eq!(series.x(), &[-3]);
}

#[rstest]
fn grouped_series_splits_on_first_parameter(solve_report: BenchmarkReport) {
    let table = extract_grouped_series(&solve_report).expect("extract");

    let keys: Vec<&str> = table.keys().map(|key| key.as_str()).collect();
    assert_eq!(keys, vec!["2", "3"]);

    let two = table.get("2").expect("group 2");
    assert_eq!(two.x(), &[5, 7]);
    assert_eq!(two.y(), &[3.1, 4.0]);

    let three = table.get("3").expect("group 3");
    assert_eq!(three.x(), &[5]);
    assert_eq!(three.y(), &[9.9]);
}

#[test]
fn grouped_series_keeps_first_seen_order_across_interleaving() {
    let report = report(&[
        ("BM/b/1", "1.0"),
        ("BM/a/1", "2.0"),
        ("BM/b/2", "3.0"),
        ("BM/c/1", "4.0"),
        ("BM/a/2", "5.0"),
    ]);

    let table = extract_grouped_series(&report).expect("extract");
    let keys: Vec<&str> = table.keys().map(|key| key.as_str()).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);

    assert_eq!(table.get("b").expect("b").y(), &[1.0, 3.0]);
    assert_eq!(table.get("a").expect("a").y(), &[2.0, 5.0]);
    assert_eq!(table.get("c").expect("c").y(), &[4.0]);
}

#[test]
fn grouped_series_places_every_record_in_exactly_one_group() {
    let report = report(&[
        ("BM/1/10", "1.0"),
        ("BM/2/10", "2.0"),
        ("BM/1/20", "3.0"),
        ("BM/2/20", "4.0"),
        ("BM/3/10", "5.0"),
    ]);

    let table = extract_grouped_series(&report).expect("extract");
    let total: usize = table.iter().map(|(_, series)| series.len()).sum();
    assert_eq!(total, report.len());

    for (key, series) in &table {
        assert_eq!(series.x().len(), series.y().len(), "group {key}");
    }
}

#[test]
fn grouped_series_requires_three_segments() {
    let report = report(&[("BM/1/2", "1.0"), ("BM/1", "2.0")]);

    let err = extract_grouped_series(&report).unwrap_err();
    assert_eq!(
        err,
        ExtractError::TooFewSegments {
            index: 1,
            name: "BM/1".to_owned(),
            expected: 3,
            found: 2,
        }
    );
}

#[test]
fn grouped_series_key_need_not_be_numeric() {
    let table = extract_grouped_series(&report(&[("BM/solve/3", "1.0")])).expect("extract");
    assert_eq!(table.get("solve").expect("group").x(), &[3]);
}

#[test]
fn grouped_series_rejects_non_integer_second_parameter() {
    let err = extract_grouped_series(&report(&[("BM/1/x", "1.0")])).unwrap_err();
    assert_eq!(
        err,
        ExtractError::InvalidParameter {
            index: 0,
            name: "BM/1/x".to_owned(),
            segment: 2,
            value: "x".to_owned(),
        }
    );
}

#[test]
fn error_messages_name_the_record() {
    let err = extract_single_series(&report(&[("BM", "1.0")])).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("benchmarks[0]"), "{message}");
    assert!(message.contains("\"BM\""), "{message}");
    assert_eq!(err.index(), 0);
}
