use crate::core::report::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "demo-kit")]
#[command(about = "Small text, statistics and grading utilities plus a demo web server")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Turn a title into a URL-friendly slug
    Slugify { text: String },

    /// Most frequent words in a text or file
    TopWords {
        #[arg(short, default_value = "10")]
        k: usize,

        /// Read the text from this file instead of the argument
        #[arg(long)]
        file: Option<PathBuf>,

        text: Option<String>,
    },

    /// Count, mean, min, max and standard deviation of a number file
    Stats {
        path: PathBuf,

        /// Fail on unparsable lines instead of skipping them
        #[arg(long)]
        strict: bool,

        /// TOML config providing the default loader mode
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Record grades for a student and print the letter grade
    Grade {
        #[arg(long)]
        name: String,

        #[arg(allow_negative_numbers = true)]
        grades: Vec<f64>,
    },

    /// Trim, collapse whitespace and title-case names
    Normalize {
        #[arg(required = true)]
        names: Vec<String>,
    },

    Greet { name: String },

    Add {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    IsEven {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Run the demo web server
    Serve {
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },
}
