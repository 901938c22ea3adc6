use crate::utils::error::{DemoError, Result};
use serde::Serialize;
use std::fmt;

pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            LetterGrade::A
        } else if average >= 80.0 {
            LetterGrade::B
        } else if average >= 70.0 {
            LetterGrade::C
        } else if average >= 60.0 {
            LetterGrade::D
        } else {
            LetterGrade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A student with a name and the grades recorded so far.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    name: String,
    grades: Vec<f64>,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grades: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    /// Record a grade. Values outside 0..=100 (and NaN) are rejected and the
    /// recorded grades stay as they were.
    pub fn add(&mut self, grade: f64) -> Result<()> {
        if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
            tracing::debug!(student = %self.name, grade, "Rejected grade");
            return Err(DemoError::InvalidGrade { value: grade });
        }
        self.grades.push(grade);
        Ok(())
    }

    /// Arithmetic mean of the grades, 0 when nothing is recorded.
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }

    pub fn letter_grade(&self) -> LetterGrade {
        LetterGrade::from_average(self.average())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Student(name={}, grades={:?})", quote_name(&self.name), self.grades)
    }
}

// 名字含單引號且不含雙引號時改用雙引號包住，否則單引號並跳脫
fn quote_name(name: &str) -> String {
    let quote = if name.contains('\'') && !name.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(name.len() + 2);
    out.push(quote);
    for c in name.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
