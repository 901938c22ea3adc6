#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::AppConfig;

pub use crate::core::basics::{add, greet, is_even};
pub use crate::core::report::OutputFormat;
pub use crate::core::stats::{load_numbers, parse_numbers, stats, ParseMode, Stats};
pub use crate::core::student::{LetterGrade, Student};
pub use crate::core::text::{normalize_names, slugify, top_k_words};
pub use crate::utils::error::{DemoError, Result};
