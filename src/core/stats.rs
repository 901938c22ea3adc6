use crate::utils::error::{DemoError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub stdev: f64,
}

/// How the number loader treats lines it cannot parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Skip the line and log a warning.
    #[default]
    Lenient,
    /// Fail with the offending line number.
    Strict,
}

/// Count, mean, min, max and population standard deviation.
pub fn stats(numbers: &[f64]) -> Result<Stats> {
    if numbers.is_empty() {
        return Err(DemoError::EmptyInput);
    }

    let count = numbers.len();
    let n = count as f64;
    let mean = numbers.iter().sum::<f64>() / n;
    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let variance = numbers.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

    Ok(Stats {
        count,
        mean,
        min,
        max,
        stdev: variance.sqrt(),
    })
}

/// 解析每行一個數字的文字內容，忽略空行與 `#` 註解
pub fn parse_numbers(content: &str, mode: ParseMode) -> Result<Vec<f64>> {
    let mut numbers = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.parse::<f64>() {
            Ok(value) => numbers.push(value),
            Err(_) if mode == ParseMode::Lenient => {
                tracing::warn!(line = idx + 1, content = %line, "Skipping unparsable line");
            }
            Err(_) => {
                return Err(DemoError::ParseError {
                    line: idx + 1,
                    content: line.to_string(),
                })
            }
        }
    }

    Ok(numbers)
}

pub fn load_numbers<P: AsRef<Path>>(path: P, mode: ParseMode) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let numbers = parse_numbers(&content, mode)?;
    tracing::debug!(path = %path.display(), count = numbers.len(), ?mode, "Loaded numbers");
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_known_sample() {
        let result = stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(result.count, 8);
        assert_eq!(result.mean, 5.0);
        assert_eq!(result.min, 2.0);
        assert_eq!(result.max, 9.0);
        assert!((result.stdev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_stats_single_value() {
        let result = stats(&[-3.5]).unwrap();
        assert_eq!(result.mean, -3.5);
        assert_eq!(result.min, -3.5);
        assert_eq!(result.max, -3.5);
        assert_eq!(result.stdev, 0.0);
    }

    #[test]
    fn test_stats_empty_fails() {
        assert!(matches!(stats(&[]), Err(DemoError::EmptyInput)));
    }

    #[test]
    fn test_parse_numbers_skips_comments_and_blanks() {
        let content = "# readings\n1\n\n  2.5  \n#3\n-4\n";
        let numbers = parse_numbers(content, ParseMode::Strict).unwrap();
        assert_eq!(numbers, vec![1.0, 2.5, -4.0]);
    }

    #[test]
    fn test_parse_numbers_lenient_vs_strict() {
        let content = "1\nabc\n3\n";
        assert_eq!(
            parse_numbers(content, ParseMode::Lenient).unwrap(),
            vec![1.0, 3.0]
        );
        match parse_numbers(content, ParseMode::Strict) {
            Err(DemoError::ParseError { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "abc");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_mode_default_is_lenient() {
        assert_eq!(ParseMode::default(), ParseMode::Lenient);
    }
}
