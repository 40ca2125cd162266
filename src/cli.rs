use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::member::types::{AccessModifier, BraceMode, ReorderOptions};
use crate::utils::config_file;

#[derive(Parser, Debug)]
#[command(name = "member-reorder")]
#[command(about = "Reorder class members by access modifier: fields, constructor, public, internal, private", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File to rewrite in place (defaults to the configured or built-in path)
    pub path: Option<PathBuf>,

    /// TOML file with reorder options
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Literal constructor signature marking the end of the header
    #[arg(long)]
    pub signature: Option<String>,

    /// Access modifiers to emit, in order (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub order: Option<Vec<AccessModifier>>,

    /// How braces are counted
    #[arg(long, value_enum)]
    pub brace_mode: Option<BraceMode>,

    /// Print the reordered file instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Layer built-in defaults, the optional config file and command-line flags
    pub fn resolve_options(&self) -> Result<ReorderOptions> {
        let mut options = match &self.config {
            Some(path) => config_file::load_options(path)?,
            None => ReorderOptions::default(),
        };

        if let Some(path) = &self.path {
            options.input_path = path.clone();
        }
        if let Some(signature) = &self.signature {
            options.constructor_signature = signature.clone();
        }
        if let Some(order) = &self.order {
            options.category_order = order.clone();
        }
        if let Some(mode) = self.brace_mode {
            options.brace_mode = mode;
        }
        options.dry_run |= self.dry_run;

        options.validate()?;
        Ok(options)
    }

    /// Log level implied by the verbosity flag
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
