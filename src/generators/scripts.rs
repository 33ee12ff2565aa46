//! Helper script generator.
//!
//! Produces `scripts/` with a README and executable automation scripts. The
//! executable flag is consumed by the builder at materialization time.

use crate::errors::ForgeResult;
use crate::generators::GenerateOptions;
use crate::paths::SCRIPT_DIRECTORIES;
use crate::templates::TemplateStore;
use crate::tree::TreeNode;

pub fn generate(store: &TemplateStore, options: &GenerateOptions) -> ForgeResult<TreeNode> {
    let mut tree = TreeNode::dir();
    let ctx = options.base_context();

    for category in SCRIPT_DIRECTORIES {
        tree.insert_dir(format!("scripts/{}", category))?;
    }

    tree.insert(
        "scripts/README.md",
        TreeNode::file(store.render("scripts_readme", &ctx)?),
    )?;
    tree.insert(
        "scripts/setup/install_dependencies.sh",
        TreeNode::script(store.render("install_deps", &ctx)?),
    )?;
    tree.insert(
        "scripts/build/build_all.sh",
        TreeNode::script(store.render("build_all", &ctx)?),
    )?;
    tree.insert(
        "scripts/ci/run_tests.sh",
        TreeNode::script(store.render("run_tests", &ctx)?),
    )?;

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthorInfo;
    use std::path::PathBuf;

    #[test]
    fn given_defaults_when_generate_then_scripts_are_executable() {
        let store = TemplateStore::with_catalogue();
        let options = GenerateOptions::new("demo_repo", vec![], AuthorInfo::default());

        let tree = generate(&store, &options).unwrap();

        let (_, node) = tree
            .walk()
            .into_iter()
            .find(|(p, _)| p == &PathBuf::from("scripts/setup/install_dependencies.sh"))
            .unwrap();
        match node {
            TreeNode::File { executable, .. } => assert!(*executable),
            _ => panic!("expected a file node"),
        }
    }

    #[test]
    fn script_bodies_carry_shebang() {
        let store = TemplateStore::with_catalogue();
        let options = GenerateOptions::new("demo_repo", vec![], AuthorInfo::default());

        let tree = generate(&store, &options).unwrap();

        for script in [
            "scripts/setup/install_dependencies.sh",
            "scripts/build/build_all.sh",
            "scripts/ci/run_tests.sh",
        ] {
            let (_, node) = tree
                .walk()
                .into_iter()
                .find(|(p, _)| p == &PathBuf::from(script))
                .unwrap();
            match node {
                TreeNode::File { content, .. } => {
                    assert!(content.starts_with("#!/usr/bin/env bash"), "{}", script)
                }
                _ => panic!("expected a file node"),
            }
        }
    }
}
