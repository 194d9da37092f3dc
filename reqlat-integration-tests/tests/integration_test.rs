use reqlat_common::{Method, ReqLatError};
use reqlat_integration_tests::{synthetic_log, write_log};
use reqlat_parser::{parse_file, ClassifyMode};
use reqlat_report::{mean, percentile, render_json, render_text, report_file, Report};

const PERMISSIVE: ClassifyMode = ClassifyMode::Permissive;

#[test]
fn test_two_by_two_scenario() {
    let file = write_log(&["GET 100", "GET 200", "POST 50", "POST 150"]).unwrap();

    let samples = parse_file(file.path(), PERMISSIVE).unwrap();
    assert_eq!(samples.gets, vec![100, 200]);
    assert_eq!(samples.posts, vec![50, 150]);

    let report = report_file(file.path(), PERMISSIVE, false).unwrap();
    assert_eq!(report.get.mean, 150.0);
    assert_eq!(report.post.mean, 100.0);
    assert_eq!(report.post.p90, 140.0);
    assert_eq!(report.post.p99, 149.0);
    assert_eq!(report.get.p90, 190.0);
    assert_eq!(report.get.p99, 199.0);
}

#[test]
fn test_line_count_equals_sample_count() {
    let lines = synthetic_log(1_001, 4_000);
    let file = write_log(&lines).unwrap();

    let samples = parse_file(file.path(), PERMISSIVE).unwrap();
    assert_eq!(samples.len(), lines.len());
    assert_eq!(samples.gets.len(), 501);
    assert_eq!(samples.posts.len(), 500);
}

#[test]
fn test_large_log_report_matches_direct_computation() {
    let lines = synthetic_log(10_000, 5_000);
    let file = write_log(&lines).unwrap();

    let samples = parse_file(file.path(), PERMISSIVE).unwrap();
    let report = report_file(file.path(), PERMISSIVE, false).unwrap();

    for (summary, method) in [(&report.post, Method::Post), (&report.get, Method::Get)] {
        let series = samples.series(method);
        assert_eq!(summary.count, series.len());
        assert_eq!(Some(summary.mean), mean(series));
        assert_eq!(Some(summary.p90), percentile(series, 90.0));
        assert_eq!(Some(summary.p99), percentile(series, 99.0));
        assert!(summary.p90 <= summary.p99);
        assert!(summary.p99 <= summary.max as f64);
    }
}

#[test]
fn test_report_is_a_pure_function_of_the_file() {
    let file = write_log(&synthetic_log(500, 900)).unwrap();

    let first = report_file(file.path(), PERMISSIVE, true).unwrap();
    let second = report_file(file.path(), PERMISSIVE, true).unwrap();
    assert_eq!(first, second);
    assert_eq!(render_text(&first), render_text(&second));
}

#[test]
fn test_malformed_line_aborts_before_reporting() {
    let file = write_log(&["GET 1", "POST 2", "POST abc", "GET 4"]).unwrap();

    let err = report_file(file.path(), PERMISSIVE, false).unwrap_err();
    assert_eq!(err, ReqLatError::Parse { line_no: 3, line: "POST abc".to_string() });
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn test_empty_file_reports_both_series_empty() {
    let file = write_log::<&str>(&[]).unwrap();

    let err = report_file(file.path(), PERMISSIVE, false).unwrap_err();
    assert_eq!(err, ReqLatError::EmptySeries(vec![Method::Post, Method::Get]));
}

#[test]
fn test_only_gets_is_an_empty_post_series() {
    let file = write_log(&["GET 1", "GET 2"]).unwrap();

    let err = report_file(file.path(), PERMISSIVE, false).unwrap_err();
    assert_eq!(err, ReqLatError::EmptySeries(vec![Method::Post]));
}

#[test]
fn test_strict_and_permissive_agree_on_clean_logs() {
    let file = write_log(&synthetic_log(200, 1_000)).unwrap();

    let permissive = report_file(file.path(), ClassifyMode::Permissive, false).unwrap();
    let strict = report_file(file.path(), ClassifyMode::Strict, false).unwrap();
    assert_eq!(permissive, strict);
}

#[test]
fn test_histograms_account_for_every_sample() {
    let file = write_log(&["GET 5", "GET 5500", "POST 12", "POST 49", "POST 4999"]).unwrap();

    let report = report_file(file.path(), PERMISSIVE, true).unwrap();
    let totals: Vec<(Method, u64)> = report.histograms.iter().map(|h| (h.method, h.total())).collect();
    assert_eq!(totals, vec![(Method::Post, 3), (Method::Get, 2)]);
}

#[test]
fn test_json_output_decodes_back() {
    let file = write_log(&synthetic_log(64, 300)).unwrap();

    let report = report_file(file.path(), PERMISSIVE, true).unwrap();
    let decoded: Report = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
    assert_eq!(decoded.histograms, report.histograms);
    assert_eq!(decoded.post.count, report.post.count);
}
