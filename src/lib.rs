//! rsforge: standardized repository scaffolding.
//!
//! Generates deterministic directory trees and boilerplate files from a
//! fixed template catalogue. The pipeline is: generators assemble a
//! declarative [`tree::TreeNode`], the orchestrator in [`forge`] merges the
//! trees, and [`builder::materialize`] writes the result to disk.

pub mod builder;
pub mod cli;
pub mod config;
pub mod content;
pub mod errors;
pub mod exitcode;
pub mod forge;
pub mod generators;
pub mod paths;
pub mod templates;
pub mod tree;
pub mod util;

pub use builder::{materialize, OverwritePolicy, Report};
pub use errors::{ForgeError, ForgeResult};
pub use forge::{run, GenerationRequest, GeneratorKind};
pub use templates::{Context, TemplateStore};
pub use tree::TreeNode;
