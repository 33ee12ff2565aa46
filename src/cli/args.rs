//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use clap_complete::Shell;

use crate::builder::OverwritePolicy;
use crate::forge::GeneratorKind;
use crate::generators::Language;

/// Standardized repository scaffolding: deterministic directory trees and boilerplate from a template catalogue
#[derive(Parser, Debug)]
#[command(name = "rsforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target directory to generate into (default: cwd)
    #[arg(value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Repository name used in templates (default: root directory name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Generators to run (default: all)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub generators: Vec<GeneratorKind>,

    /// Behavior when a generated file already exists
    #[arg(long, value_enum, default_value_t = OverwritePolicy::Skip)]
    pub overwrite: OverwritePolicy,

    /// Target languages for project and documentation generators
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub languages: Vec<Language>,

    /// Preview all planned actions without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Add .gitkeep placeholders to empty directories
    #[arg(long)]
    pub gitkeep: bool,

    /// Enable debug logging. Multiple -d options increase the verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Print version and author information
    #[arg(long)]
    pub info: bool,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,
}
