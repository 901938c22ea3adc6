use crate::core::stats::Stats;
use crate::core::student::Student;
use crate::utils::error::{DemoError, Result};
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentSummary {
    pub name: String,
    pub grade_count: usize,
    pub average: f64,
    pub letter_grade: String,
}

impl From<&Student> for StudentSummary {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name().to_string(),
            grade_count: student.grades().len(),
            average: student.average(),
            letter_grade: student.letter_grade().to_string(),
        }
    }
}

pub fn render_word_counts(words: &[(String, usize)], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(words
            .iter()
            .map(|(word, count)| format!("{}\t{}", word, count))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let rows: Vec<_> = words
                .iter()
                .map(|(word, count)| serde_json::json!({ "word": word, "count": count }))
                .collect();
            Ok(serde_json::to_string_pretty(&rows)?)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(vec![]);
            writer.write_record(["word", "count"])?;
            for row in words {
                writer.serialize(row)?;
            }
            finish_csv(writer)
        }
    }
}

pub fn render_stats(stats: &Stats, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "count: {}\nmean: {}\nmin: {}\nmax: {}\nstdev: {}",
            stats.count, stats.mean, stats.min, stats.max, stats.stdev
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(vec![]);
            writer.serialize(stats)?;
            finish_csv(writer)
        }
    }
}

pub fn render_student(student: &Student, format: OutputFormat) -> Result<String> {
    let summary = StudentSummary::from(student);
    match format {
        OutputFormat::Text => Ok(format!(
            "{}\naverage: {:.2}\nletter grade: {}",
            student, summary.average, summary.letter_grade
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
            "name": summary.name,
            "grades": student.grades(),
            "average": summary.average,
            "letter_grade": summary.letter_grade,
        }))?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(vec![]);
            writer.serialize(&summary)?;
            finish_csv(writer)
        }
    }
}

/// Render a single named value, e.g. a slug or a greeting.
pub fn render_value<T: Serialize + Display>(key: &str, value: T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(value.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({ key: value }))?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(vec![]);
            writer.write_record([key])?;
            writer.write_record([value.to_string()])?;
            finish_csv(writer)
        }
    }
}

pub fn render_list(key: &str, values: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(values.join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({ key: values }))?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(vec![]);
            writer.write_record([key])?;
            for value in values {
                writer.write_record([value])?;
            }
            finish_csv(writer)
        }
    }
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| DemoError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_words() -> Vec<(String, usize)> {
        vec![("red".to_string(), 3), ("blue".to_string(), 1)]
    }

    #[test]
    fn test_render_word_counts_csv() {
        let out = render_word_counts(&sample_words(), OutputFormat::Csv).unwrap();
        assert_eq!(out, "word,count\nred,3\nblue,1");
    }

    #[test]
    fn test_render_word_counts_json() {
        let out = render_word_counts(&sample_words(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["word"], "red");
        assert_eq!(parsed[0]["count"], 3);
    }

    #[test]
    fn test_render_stats_csv_has_header() {
        let stats = Stats {
            count: 2,
            mean: 1.5,
            min: 1.0,
            max: 2.0,
            stdev: 0.5,
        };
        let out = render_stats(&stats, OutputFormat::Csv).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("count,mean,min,max,stdev"));
        assert_eq!(lines.next(), Some("2,1.5,1.0,2.0,0.5"));
    }

    #[test]
    fn test_render_student_text() {
        let mut student = Student::new("Alice");
        student.add(95.0).unwrap();
        student.add(82.0).unwrap();
        let out = render_student(&student, OutputFormat::Text).unwrap();
        assert!(out.contains("average: 88.50"));
        assert!(out.ends_with("letter grade: B"));
    }

    #[test]
    fn test_render_value_json() {
        let out = render_value("slug", "hello-world", OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["slug"], "hello-world");
    }
}
