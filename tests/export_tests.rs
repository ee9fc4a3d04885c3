//! End-to-end resume export: real section markup, real rasterization, real
//! PDF assembly.

mod common;

use folio::{ExportError, JobState, PortfolioError, Section, TriggerState};

#[test]
fn resume_export_produces_named_pdf() {
    let app = common::test_app();
    app.select(Section::Resume).unwrap();

    let document = app.download_resume().unwrap();
    assert_eq!(document.file_name, "Subject_Name_Resume.pdf");
    assert_eq!(document.mime_type(), "application/pdf");
    assert!(document.bytes.starts_with(b"%PDF"));
    assert!(document.page_count >= 1);
    assert!(matches!(app.export_state(), JobState::Completed { .. }));
}

#[test]
fn exported_file_is_writable_to_disk() {
    let app = common::test_app();
    app.select(Section::Resume).unwrap();
    let document = app.download_resume().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(&document.file_name);
    std::fs::write(&path, &document.bytes).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written.len(), document.bytes.len());
}

#[test]
fn export_away_from_resume_fails_without_output() {
    let app = common::test_app();
    app.select(Section::About).unwrap();

    let err = app.download_resume().unwrap_err();
    assert!(matches!(
        err,
        PortfolioError::Export(ExportError::ContentUnavailable)
    ));
    assert_eq!(app.export_state(), JobState::Failed);
    // The trigger returns to enabled; the failure is terminal but not sticky.
    assert_eq!(app.trigger_state(), TriggerState::Idle);
}

#[test]
fn failed_export_does_not_block_a_later_run() {
    let app = common::test_app();

    assert!(app.download_resume().is_err());

    app.select(Section::Resume).unwrap();
    let document = app.download_resume().unwrap();
    assert!(document.bytes.starts_with(b"%PDF"));
}

#[test]
fn navigating_away_invalidates_the_export_precondition() {
    let app = common::test_app();
    app.select(Section::Resume).unwrap();
    app.select(Section::Contact).unwrap();

    let err = app.download_resume().unwrap_err();
    assert!(matches!(
        err,
        PortfolioError::Export(ExportError::ContentUnavailable)
    ));
}

#[test]
fn repeated_exports_from_the_same_view_succeed() {
    let app = common::test_app();
    app.select(Section::Resume).unwrap();

    let first = app.download_resume().unwrap();
    let second = app.download_resume().unwrap();
    assert_eq!(first.file_name, second.file_name);
    assert_eq!(first.page_count, second.page_count);
}
