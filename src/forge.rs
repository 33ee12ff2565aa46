//! Orchestration: select generators, merge their trees, materialize once.

use std::path::PathBuf;

use clap::ValueEnum;
use tracing::{debug, info};

use crate::builder::{materialize, OverwritePolicy, Report};
use crate::errors::ForgeResult;
use crate::generators::{self, GenerateOptions};
use crate::templates::TemplateStore;
use crate::tree::TreeNode;

/// The generators the CLI can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorKind {
    Docs,
    Project,
    Config,
    Scripts,
}

impl GeneratorKind {
    pub const ALL: &'static [GeneratorKind] = &[
        GeneratorKind::Docs,
        GeneratorKind::Project,
        GeneratorKind::Config,
        GeneratorKind::Scripts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::Docs => "docs",
            GeneratorKind::Project => "project",
            GeneratorKind::Config => "config",
            GeneratorKind::Scripts => "scripts",
        }
    }
}

/// One generation run, constructed from CLI arguments and passed by value.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub root: PathBuf,
    pub generators: Vec<GeneratorKind>,
    pub policy: OverwritePolicy,
    pub dry_run: bool,
    pub gitkeep: bool,
    pub options: GenerateOptions,
}

/// Build the combined tree for a request without touching the filesystem.
pub fn build_tree(store: &TemplateStore, request: &GenerationRequest) -> ForgeResult<TreeNode> {
    let mut combined = TreeNode::dir();

    for kind in &request.generators {
        debug!("running generator: {}", kind.as_str());
        let tree = match kind {
            GeneratorKind::Docs => generators::docs::generate(store, &request.options)?,
            GeneratorKind::Project => generators::project::generate(store, &request.options)?,
            GeneratorKind::Config => generators::config::generate(store, &request.options)?,
            GeneratorKind::Scripts => generators::scripts::generate(store, &request.options)?,
        };
        combined.merge(tree)?;
    }

    if request.gitkeep {
        combined.add_gitkeep();
    }

    Ok(combined)
}

/// Run the selected generators against the target root.
pub fn run(store: &TemplateStore, request: &GenerationRequest) -> ForgeResult<Report> {
    let tree = build_tree(store, request)?;
    info!(
        "materializing {} files under {}",
        tree.file_count(),
        request.root.display()
    );
    materialize(&request.root, &tree, request.policy, request.dry_run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthorInfo;
    use crate::generators::Language;
    use std::path::PathBuf;

    fn request(generators: Vec<GeneratorKind>) -> GenerationRequest {
        GenerationRequest {
            root: PathBuf::from("/tmp/unused"),
            generators,
            policy: OverwritePolicy::Skip,
            dry_run: true,
            gitkeep: false,
            options: GenerateOptions::new(
                "demo_repo",
                vec![Language::Python],
                AuthorInfo::default(),
            ),
        }
    }

    #[test]
    fn given_all_generators_when_build_tree_then_trees_merge_without_collision() {
        let store = TemplateStore::with_catalogue();
        let tree = build_tree(&store, &request(GeneratorKind::ALL.to_vec())).unwrap();

        let paths: Vec<PathBuf> = tree.walk().into_iter().map(|(p, _)| p).collect();
        // One path from each generator
        assert!(paths.contains(&PathBuf::from("docs/index.md")));
        assert!(paths.contains(&PathBuf::from("projects/python_project/README.md")));
        assert!(paths.contains(&PathBuf::from("README.md")));
        assert!(paths.contains(&PathBuf::from("scripts/README.md")));
    }

    #[test]
    fn given_gitkeep_when_build_tree_then_empty_dirs_get_placeholder() {
        let store = TemplateStore::with_catalogue();
        let mut req = request(vec![GeneratorKind::Docs]);
        req.gitkeep = true;

        let tree = build_tree(&store, &req).unwrap();

        let paths: Vec<PathBuf> = tree.walk().into_iter().map(|(p, _)| p).collect();
        assert!(paths.contains(&PathBuf::from("docs/assets/images/.gitkeep")));
    }

    #[test]
    fn no_generated_path_is_absolute() {
        let store = TemplateStore::with_catalogue();
        let tree = build_tree(&store, &request(GeneratorKind::ALL.to_vec())).unwrap();

        for (path, _) in tree.walk() {
            assert!(path.is_relative(), "{} is not relative", path.display());
        }
    }
}
