//! Generators: pure functions assembling a [`crate::tree::TreeNode`] per
//! concern. No filesystem access happens here; the orchestrator merges the
//! trees and hands them to the builder.

pub mod config;
pub mod docs;
pub mod project;
pub mod scripts;

use clap::ValueEnum;

use crate::config::AuthorInfo;
use crate::templates::Context;

/// Target languages for project scaffolds and documentation trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Language {
    Python,
    Nodejs,
    Go,
    Rust,
}

impl Language {
    pub const ALL: &'static [Language] =
        &[Language::Python, Language::Nodejs, Language::Go, Language::Rust];

    /// Lowercase name used in generated paths (`projects/<name>_project`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Nodejs => "nodejs",
            Language::Go => "go",
            Language::Rust => "rust",
        }
    }

    /// Capitalized display name for documentation pages.
    pub fn title(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Nodejs => "Nodejs",
            Language::Go => "Go",
            Language::Rust => "Rust",
        }
    }

    /// Directory name of the generated project scaffold.
    pub fn project_name(&self) -> String {
        format!("{}_project", self.as_str())
    }
}

/// Options shared by all generators, constructed once per run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub repo_name: String,
    pub languages: Vec<Language>,
    pub author: AuthorInfo,
}

impl GenerateOptions {
    pub fn new(repo_name: impl Into<String>, languages: Vec<Language>, author: AuthorInfo) -> Self {
        Self {
            repo_name: repo_name.into(),
            languages,
            author,
        }
    }

    /// Base placeholder context: repo/author values plus date defaults.
    pub fn base_context(&self) -> Context {
        Context::with_defaults()
            .with("repo_name", self.repo_name.clone())
            .with("author_name", self.author.name.clone())
            .with("author_email", self.author.email.clone())
            .with("org_name", self.author.org.clone())
            .with("github_user", self.author.github_user.clone())
    }
}
