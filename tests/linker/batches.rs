//! Batch processing tests.

use streetlink_foundation::{ErrorCategory, ErrorKind};
use streetlink_linker::{BatchConfig, BatchProcessor, ErrorMode};

use crate::city;

const RECORDS: &[&str] = &[
    "Металлургов 2 48",
    "пл. Металлургов, д. 5, кв. 60",
    "ул. Ленина, д. 5",
    "просто текст",
    "Щорса 1",
    "ул. Ленина, д. 5, кв. 33",
];

#[test]
fn skip_mode_tallies_by_category() {
    let linker = city();
    let mut keys = Vec::new();
    let stats = BatchProcessor::new(&linker)
        .run(RECORDS, |outcome| {
            keys.push(outcome.result.ok().map(|r| r.key));
        })
        .unwrap();

    assert_eq!(keys, [Some(101), Some(202), None, None, None, Some(302)]);
    assert_eq!(stats.processed, 6);
    assert_eq!(stats.succeeded, 3);
    assert_eq!(stats.failed, 3);
    assert_eq!(stats.count(ErrorCategory::UnresolvedAmbiguity), 1);
    assert_eq!(stats.count(ErrorCategory::Unparseable), 1);
    assert_eq!(stats.count(ErrorCategory::NormalizationFailed), 1);
    assert_eq!(stats.failures[1].raw, "просто текст");
}

#[test]
fn stop_mode_halts_at_the_first_failure() {
    let linker = city();
    let mut seen = Vec::new();
    let err = BatchProcessor::with_config(
        &linker,
        BatchConfig::default().with_error_mode(ErrorMode::Stop),
    )
    .run(RECORDS, |outcome| seen.push(outcome.index))
    .unwrap_err();

    assert_eq!(err.kind, ErrorKind::UnresolvedAmbiguity { candidates: 2 });
    assert_eq!(seen, [0, 1, 2]);
    assert_eq!(err.context.unwrap().row, Some(3));
}

#[test]
fn report_lists_every_failure() {
    let linker = city();
    let stats = BatchProcessor::new(&linker).run(RECORDS, |_| {}).unwrap();
    let mut report = Vec::new();
    stats.write_report(&mut report).unwrap();
    let report = String::from_utf8(report).unwrap();
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Address,Error");
    assert!(lines[1].starts_with("\"ул. Ленина, д. 5\","));
    assert!(lines[3].starts_with("Щорса 1,"));
}

#[test]
fn progress_is_reported() {
    let linker = city();
    let mut progress = Vec::new();
    let records: Vec<String> = (1..=250).map(|i| format!("Ленина 5 {}", i % 40 + 1)).collect();
    let stats = BatchProcessor::new(&linker)
        .on_progress(|n| progress.push(n))
        .run(&records, |_| {})
        .unwrap();
    assert_eq!(progress, [100, 200]);
    assert_eq!(stats.succeeded, 250);
}
