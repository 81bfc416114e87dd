#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::run_plain;
use hexdiff_core::core_types::schema::{
    FIELD_BYTES_COMPARED, FIELD_CHUNKS, FIELD_DIFFERING_CHUNKS, FIELD_DURATION_MS,
    FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_MAX_LEN, FIELD_SKIP1, FIELD_SKIP2, FIELD_STOP,
};
use hexdiff_core::core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use hexdiff_core::errors::HexdiffError;
use hexdiff_core::logging_facility::test_capture::init_test_capture;
use hexdiff_core::{
    compare_files, log_op_end, log_op_error, log_op_start, CompareOptions, InterruptFlag,
    PlainPalette,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events = capture.find(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(
        end_events[0].fields.get(FIELD_DURATION_MS),
        Some(&"42".to_string())
    );
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = HexdiffError::usage("missing file2");
    log_op_error!(op_name, &err, duration_ms = 10);

    let error_events = capture.find(op_name, EVENT_END_ERROR);
    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(
        error_events[0].fields.get(FIELD_ERR_CODE),
        Some(&"ERR_USAGE".to_string())
    );
    assert_eq!(
        error_events[0].fields.get(FIELD_ERR_KIND),
        Some(&"Usage".to_string())
    );
}

#[test]
fn test_compare_logs_start_and_end_with_counters() {
    // Scenario: a run with one differing chunk and a byte limit
    // Then: exactly one start and one end event for "compare", end carries counters

    let capture = init_test_capture();
    let left = [0u8; 24];
    let mut right = left;
    right[3] = 9;

    let options = CompareOptions {
        skip1: 0x55,
        max_len: 16,
        ..CompareOptions::default()
    };
    run_plain(&left, &right, &options);

    let starts: Vec<_> = capture
        .find("compare", EVENT_START)
        .into_iter()
        .filter(|e| e.fields.get(FIELD_SKIP1) == Some(&"85".to_string()))
        .collect();
    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].fields.get(FIELD_SKIP2), Some(&"0".to_string()));
    assert_eq!(starts[0].fields.get(FIELD_MAX_LEN), Some(&"16".to_string()));

    let ends: Vec<_> = capture
        .find("compare", EVENT_END)
        .into_iter()
        .filter(|e| e.fields.get(FIELD_BYTES_COMPARED) == Some(&"16".to_string()))
        .filter(|e| e.fields.get(FIELD_STOP) == Some(&"LimitReached".to_string()))
        .collect();
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].fields.get(FIELD_CHUNKS), Some(&"2".to_string()));
    assert_eq!(
        ends[0].fields.get(FIELD_DIFFERING_CHUNKS),
        Some(&"1".to_string())
    );
    assert!(ends[0]
        .component
        .as_deref()
        .is_some_and(|c| c.contains("driver")));
}

#[test]
fn test_open_failure_logged_once() {
    // Scenario: the second file is missing
    // Then: one end_error for "open_at" carrying ERR_OPEN, none for "compare"

    let capture = init_test_capture();
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("present.bin");
    std::fs::write(&present, b"01234567").unwrap();
    let missing = dir.path().join("missing.bin");

    let mut out = Vec::new();
    let err = compare_files(
        &present,
        &missing,
        &CompareOptions::default(),
        &PlainPalette,
        &InterruptFlag::new(),
        &mut out,
    )
    .unwrap_err();
    assert!(matches!(err, HexdiffError::Open { .. }));
    assert!(out.is_empty());

    let open_errors = capture.find("open_at", EVENT_END_ERROR);
    assert_eq!(open_errors.len(), 1);
    assert_eq!(
        open_errors[0].fields.get(FIELD_ERR_CODE),
        Some(&"ERR_OPEN".to_string())
    );
    assert!(capture
        .find("compare", EVENT_END_ERROR)
        .iter()
        .all(|e| e.fields.get(FIELD_ERR_CODE) != Some(&"ERR_OPEN".to_string())));
}
