//! Integration tests for batch conversion.

mod common;

use common::{render_options, SAMPLE_REPORT};
use mdreport::convert::{
    clean_output_dir, expected_reports, BatchConverter, BatchSummary, JobStatus, ReportJob,
    DEFAULT_REPORTS,
};
use mdreport::is_pdf;
use std::fs;

#[test]
fn test_convert_dir() {
    let options = render_options();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("pdf");
    fs::write(dir.path().join("business_plan.md"), SAMPLE_REPORT).unwrap();
    fs::write(dir.path().join("pitch_deck.md"), "# Pitch\n- one\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let reports = BatchConverter::new(options)
        .convert_dir(dir.path(), &out)
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.is_rendered()));
    assert!(is_pdf(out.join("business_plan.pdf")));
    assert!(is_pdf(out.join("pitch_deck.pdf")));
    assert!(!out.join("notes.pdf").exists());
}

#[test]
fn test_expected_reports_with_missing_sources() {
    let options = render_options();
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("executive_summary.md"), SAMPLE_REPORT).unwrap();

    let jobs = expected_reports(dir.path(), &DEFAULT_REPORTS);
    let reports = BatchConverter::new(options)
        .with_parallel(false)
        .convert(&jobs);

    assert_eq!(reports[0].status, JobStatus::Missing);
    assert!(reports[1].is_rendered());
    assert_eq!(reports[2].status, JobStatus::Missing);
    assert!(dir.path().join("executive_summary.pdf").exists());
    assert!(!dir.path().join("business_plan.pdf").exists());

    let summary = BatchSummary::from_reports(&reports);
    assert_eq!(summary.rendered, 1);
    assert_eq!(summary.missing, 2);
    assert_eq!(summary.failed, 0);
}

#[test]
fn test_failed_job_does_not_block_others() {
    let options = render_options();
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.md");
    fs::write(&good, "# Good\n").unwrap();

    let jobs = vec![
        ReportJob::new(&good, dir.path().join("missing/dir/bad.pdf")),
        ReportJob::new(&good, dir.path().join("good.pdf")),
    ];
    let reports = BatchConverter::new(options).convert(&jobs);

    assert!(matches!(reports[0].status, JobStatus::Failed(_)));
    assert!(reports[1].is_rendered());
}

#[test]
fn test_clean_after_batch() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["business_plan.md", "business_plan.pdf", "pitch_deck.md"] {
        fs::write(dir.path().join(name), "x").unwrap();
    }
    fs::write(dir.path().join("keep.json"), "{}").unwrap();

    assert_eq!(clean_output_dir(dir.path()).unwrap(), 3);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    assert!(clean_output_dir(&dir.path().join("absent")).is_err());
}
