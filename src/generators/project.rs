//! Per-language project scaffold generator.
//!
//! For every requested language, produces `projects/<lang>_project/` with a
//! README, a package manifest, a source layout, and an example test. Also
//! lays down the monorepo top-level skeleton directories so a full run
//! reproduces the standard repository shape.

use crate::content::project_manifest;
use crate::errors::ForgeResult;
use crate::generators::{GenerateOptions, Language};
use crate::paths::{
    BENCHMARK_DIRECTORIES, CI_DIRECTORIES, CONFIG_DIRECTORIES, CORE_DIRECTORIES,
    SCRIPT_DIRECTORIES, SHARED_DIRECTORIES, TEST_DIRECTORIES, TOOL_DIRECTORIES,
};
use crate::templates::TemplateStore;
use crate::tree::TreeNode;

pub fn generate(store: &TemplateStore, options: &GenerateOptions) -> ForgeResult<TreeNode> {
    let mut tree = monorepo_skeleton()?;

    for lang in &options.languages {
        let scaffold = language_scaffold(store, options, *lang)?;
        tree.merge(scaffold)?;
    }

    Ok(tree)
}

/// Top-level monorepo directories with their category subdirectories.
fn monorepo_skeleton() -> ForgeResult<TreeNode> {
    let mut tree = TreeNode::dir();

    for dir in CORE_DIRECTORIES {
        tree.insert_dir(dir)?;
    }
    for (parent, children) in [
        ("scripts", SCRIPT_DIRECTORIES),
        ("tests", TEST_DIRECTORIES),
        ("benchmarks", BENCHMARK_DIRECTORIES),
        ("ci", CI_DIRECTORIES),
        ("shared", SHARED_DIRECTORIES),
        ("config", CONFIG_DIRECTORIES),
        ("tools", TOOL_DIRECTORIES),
    ] {
        for child in children {
            tree.insert_dir(format!("{}/{}", parent, child))?;
        }
    }

    Ok(tree)
}

fn language_scaffold(
    store: &TemplateStore,
    options: &GenerateOptions,
    lang: Language,
) -> ForgeResult<TreeNode> {
    let mut tree = TreeNode::dir();
    let project = lang.project_name();
    let root = format!("projects/{}", project);

    let ctx = options
        .base_context()
        .with("project_name", project.clone())
        .with("language_title", lang.title());

    tree.insert(
        format!("{}/README.md", root),
        TreeNode::file(store.render("project_readme", &ctx)?),
    )?;

    let (manifest_name, manifest_id) = project_manifest(lang);
    tree.insert(
        format!("{}/{}", root, manifest_name),
        TreeNode::file(store.render(manifest_id, &ctx)?),
    )?;

    tree.insert_dir(format!("{}/tests", root))?;

    match lang {
        Language::Python => {
            let pkg = format!("{}/src/{}", root, project);
            tree.insert(
                format!("{}/__init__.py", pkg),
                TreeNode::file(store.render("python_init", &ctx)?),
            )?;
            tree.insert(
                format!("{}/main.py", pkg),
                TreeNode::file(store.render("python_main", &ctx)?),
            )?;
            for module in ["core", "utils", "models", "api", "services", "config"] {
                tree.insert(
                    format!("{}/{}/__init__.py", pkg, module),
                    TreeNode::file(""),
                )?;
            }
            tree.insert(format!("{}/tests/__init__.py", root), TreeNode::file(""))?;
            tree.insert(
                format!("{}/tests/test_example.py", root),
                TreeNode::file(store.render("python_test", &ctx)?),
            )?;
        }
        Language::Nodejs => {
            tree.insert(
                format!("{}/src/index.js", root),
                TreeNode::file(store.render("nodejs_index", &ctx)?),
            )?;
            for module in ["api", "services", "models", "utils", "config"] {
                tree.insert_dir(format!("{}/src/{}", root, module))?;
            }
            tree.insert(
                format!("{}/tests/example.test.js", root),
                TreeNode::file(store.render("nodejs_test", &ctx)?),
            )?;
        }
        Language::Go => {
            tree.insert(
                format!("{}/cmd/main.go", root),
                TreeNode::file(store.render("go_main", &ctx)?),
            )?;
            for module in ["pkg", "internal", "api", "config", "models"] {
                tree.insert_dir(format!("{}/{}", root, module))?;
            }
            tree.insert(
                format!("{}/tests/example_test.go", root),
                TreeNode::file(store.render("go_test", &ctx)?),
            )?;
        }
        Language::Rust => {
            tree.insert(
                format!("{}/src/lib.rs", root),
                TreeNode::file(store.render("rust_lib", &ctx)?),
            )?;
            tree.insert(
                format!("{}/src/bin/main.rs", root),
                TreeNode::file(store.render("rust_main", &ctx)?),
            )?;
            for module in ["api", "models", "utils", "config"] {
                tree.insert_dir(format!("{}/src/{}", root, module))?;
            }
        }
    }

    Ok(tree)
}
