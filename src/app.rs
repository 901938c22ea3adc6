//! One-shot CLI commands. `serve` is long-running and lives in the binary.

use anyhow::Context;
use std::path::Path;

use crate::config::{AppConfig, Command};
use crate::core::basics::{add, greet, is_even};
use crate::core::report::{self, OutputFormat};
use crate::core::stats::{load_numbers, stats, ParseMode};
use crate::core::student::Student;
use crate::core::text::{normalize_names, slugify, top_k_words};
use crate::utils::error::DemoError;

/// Run a command and return its rendered output.
pub fn execute(command: Command, format: OutputFormat) -> anyhow::Result<String> {
    let output = match command {
        Command::Slugify { text } => report::render_value("slug", slugify(&text), format)?,

        Command::TopWords { k, file, text } => {
            let text = match (file, text) {
                (Some(path), _) => std::fs::read_to_string(&path)
                    .map_err(DemoError::from)
                    .with_context(|| format!("failed to read '{}'", path.display()))?,
                (None, Some(text)) => text,
                (None, None) => {
                    return Err(DemoError::ValidationError {
                        message: "provide TEXT or --file".to_string(),
                    }
                    .into())
                }
            };
            report::render_word_counts(&top_k_words(&text, k), format)?
        }

        Command::Stats {
            path,
            strict,
            config,
        } => {
            let mode = if strict {
                ParseMode::Strict
            } else {
                load_config(config.as_deref())?.loader.mode
            };
            let numbers = load_numbers(&path, mode)
                .with_context(|| format!("failed to load numbers from '{}'", path.display()))?;
            tracing::info!("📊 Loaded {} numbers from {}", numbers.len(), path.display());
            report::render_stats(&stats(&numbers)?, format)?
        }

        Command::Grade { name, grades } => {
            let mut student = Student::new(name);
            for grade in grades {
                student.add(grade)?;
            }
            report::render_student(&student, format)?
        }

        Command::Normalize { names } => {
            report::render_list("names", &normalize_names(&names), format)?
        }

        Command::Greet { name } => report::render_value("greeting", greet(&name), format)?,

        Command::Add { a, b } => report::render_value("sum", add(a, b)?, format)?,

        Command::IsEven { n } => report::render_value("is_even", is_even(n), format)?,

        Command::Serve { .. } => {
            return Err(DemoError::ValidationError {
                message: "serve is not a one-shot command".to_string(),
            }
            .into())
        }
    };

    Ok(output)
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path.display())),
        None => Ok(AppConfig::default()),
    }
}

/// 從 anyhow 錯誤鏈找出 DemoError 並決定結束碼
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<DemoError>()
        .map(DemoError::exit_code)
        .unwrap_or(1)
}
