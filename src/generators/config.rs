//! Root configuration file generator.
//!
//! Produces the repository-level boilerplate: README, ignore file, editor
//! config, CI workflow, and the standard community health files.

use crate::errors::ForgeResult;
use crate::generators::GenerateOptions;
use crate::templates::TemplateStore;
use crate::tree::TreeNode;

pub fn generate(store: &TemplateStore, options: &GenerateOptions) -> ForgeResult<TreeNode> {
    let mut tree = TreeNode::dir();
    let ctx = options.base_context();

    for (path, template_id) in [
        ("README.md", "readme"),
        (".gitignore", "gitignore"),
        (".editorconfig", "editorconfig"),
        (".github/workflows/ci.yml", "ci_workflow"),
        ("CONTRIBUTING.md", "contributing"),
        ("CODE_OF_CONDUCT.md", "code_of_conduct"),
        ("LICENSE", "license"),
        ("SECURITY.md", "security"),
        ("CHANGELOG.md", "changelog"),
    ] {
        tree.insert(path, TreeNode::file(store.render(template_id, &ctx)?))?;
    }

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthorInfo;
    use crate::generators::Language;
    use std::path::PathBuf;

    #[test]
    fn given_defaults_when_generate_then_root_files_present() {
        let store = TemplateStore::with_catalogue();
        let options =
            GenerateOptions::new("demo_repo", vec![Language::Python], AuthorInfo::default());

        let tree = generate(&store, &options).unwrap();

        let paths: Vec<PathBuf> = tree.walk().into_iter().map(|(p, _)| p).collect();
        for expected in [
            "README.md",
            ".gitignore",
            ".editorconfig",
            ".github/workflows/ci.yml",
            "CONTRIBUTING.md",
            "LICENSE",
            "SECURITY.md",
            "CHANGELOG.md",
        ] {
            assert!(
                paths.contains(&PathBuf::from(expected)),
                "missing {}",
                expected
            );
        }
    }

    #[test]
    fn readme_interpolates_repo_name() {
        let store = TemplateStore::with_catalogue();
        let options = GenerateOptions::new("my_repo", vec![], AuthorInfo::default());

        let tree = generate(&store, &options).unwrap();

        let (_, node) = tree
            .walk()
            .into_iter()
            .find(|(p, _)| p == &PathBuf::from("README.md"))
            .unwrap();
        match node {
            TreeNode::File { content, .. } => assert!(content.contains("my_repo")),
            _ => panic!("README.md is not a file"),
        }
    }
}
