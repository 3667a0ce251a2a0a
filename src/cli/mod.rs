use crate::constants::{APP_DESCRIPTION, APP_NAME};
use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for diagnostic logs on stderr.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

/// A personal journal with one entry per day
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
#[clap(group(ArgGroup::new("operation").args(["read", "import", "show"])))]
pub struct CliArgs {
    /// Read the journal entry for a date (YYYY-MM-DD)
    #[clap(short = 'r', long, value_name = "DATE")]
    pub read: Option<String>,

    /// Config file [default: daybook_conf.json next to the executable]
    #[clap(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Import the entry for DATE from FILE
    #[clap(short = 'i', long = "import", num_args = 2, value_names = ["FILE", "DATE"])]
    pub import: Option<Vec<String>>,

    /// Show the list of dates with journal entries
    #[clap(short = 's', long)]
    pub show: bool,

    /// Print verbose output
    #[clap(short = 'v', long)]
    pub verbose: bool,

    /// Format of log output on stderr
    #[clap(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// The journal operation selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Write or revise today's entry in the editor.
    EditToday,
    /// Print the entry for a date.
    Read { date: String },
    /// Store a file's contents as the entry for a date.
    Import { file: PathBuf, date: String },
    /// List all dates with entries.
    Show,
}

impl CliArgs {
    /// Maps the parsed flags to the operation to run.
    pub fn operation(&self) -> Operation {
        if let Some(date) = &self.read {
            return Operation::Read { date: date.clone() };
        }
        if let Some([file, date]) = self.import.as_deref() {
            return Operation::Import {
                file: PathBuf::from(file),
                date: date.clone(),
            };
        }
        if self.show {
            return Operation::Show;
        }
        Operation::EditToday
    }
}
