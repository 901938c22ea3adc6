use demo_kit::{load_numbers, stats, DemoError, ParseMode};
use std::io::Write;
use tempfile::NamedTempFile;

fn number_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_summarize() {
    let file = number_file("# sample readings\n2\n4\n4\n\n4\n5\n5\n7\n9\n");

    let numbers = load_numbers(file.path(), ParseMode::Lenient).unwrap();
    assert_eq!(numbers.len(), 8);

    let summary = stats(&numbers).unwrap();
    assert_eq!(summary.count, 8);
    assert_eq!(summary.mean, 5.0);
    assert_eq!(summary.min, 2.0);
    assert_eq!(summary.max, 9.0);

    let expected = (numbers.iter().map(|x| (x - 5.0).powi(2)).sum::<f64>() / 8.0).sqrt();
    assert!((summary.stdev - expected).abs() < 1e-12);
    assert!((summary.stdev - 2.0).abs() < 1e-12);
}

#[test]
fn test_lenient_skips_bad_lines() {
    let file = number_file("1.5\nnot a number\n  2.5  \n3,0\n");
    let numbers = load_numbers(file.path(), ParseMode::Lenient).unwrap();
    assert_eq!(numbers, vec![1.5, 2.5]);
}

#[test]
fn test_strict_reports_line_number() {
    let file = number_file("# header\n1\n\n3,0\n4\n");
    match load_numbers(file.path(), ParseMode::Strict) {
        Err(DemoError::ParseError { line, content }) => {
            assert_eq!(line, 4);
            assert_eq!(content, "3,0");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_only_comments_gives_empty_input_error() {
    let file = number_file("# nothing here\n\n# still nothing\n");
    let numbers = load_numbers(file.path(), ParseMode::Strict).unwrap();
    assert!(numbers.is_empty());
    assert!(matches!(stats(&numbers), Err(DemoError::EmptyInput)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = load_numbers(dir.path().join("missing.txt"), ParseMode::Lenient);
    assert!(matches!(result, Err(DemoError::IoError(_))));
}
