//! Documentation skeleton generator.
//!
//! Produces the `docs/` tree: per-language manual and auto-generated
//! sections, asset directories, Sphinx compatibility files, and topic-based
//! source directories.

use itertools::Itertools;

use crate::errors::ForgeResult;
use crate::generators::GenerateOptions;
use crate::paths::{
    ASSETS_STRUCTURE, AUTO_DOC_STRUCTURE, MANUAL_DOC_STRUCTURE, SOURCE_DOC_STRUCTURE,
};
use crate::templates::TemplateStore;
use crate::tree::TreeNode;

pub fn generate(store: &TemplateStore, options: &GenerateOptions) -> ForgeResult<TreeNode> {
    let mut tree = TreeNode::dir();
    let ctx = options.base_context();

    let language_list = options
        .languages
        .iter()
        .map(|lang| format!("- [{}]({}/): {} documentation", lang.title(), lang.as_str(), lang.title()))
        .join("\n");
    let index_ctx = ctx.clone().with("language_list", language_list);

    tree.insert("docs/index.md", TreeNode::file(store.render("docs_index", &index_ctx)?))?;
    tree.insert(
        "docs/manual/index.md",
        TreeNode::file(store.render("manual_index", &index_ctx)?),
    )?;
    tree.insert(
        "docs/auto/index.md",
        TreeNode::file(store.render("auto_index", &index_ctx)?),
    )?;

    for lang in &options.languages {
        let lang_ctx = ctx.clone().with("language_title", lang.title());

        for subdir in MANUAL_DOC_STRUCTURE {
            tree.insert_dir(format!("docs/manual/{}/{}", lang.as_str(), subdir))?;
        }
        tree.insert(
            format!("docs/manual/{}/index.md", lang.as_str()),
            TreeNode::file(store.render("manual_lang_index", &lang_ctx)?),
        )?;

        for subdir in AUTO_DOC_STRUCTURE {
            tree.insert_dir(format!("docs/auto/{}/{}", lang.as_str(), subdir))?;
        }
        tree.insert(
            format!("docs/auto/{}/index.md", lang.as_str()),
            TreeNode::file(store.render("auto_lang_index", &lang_ctx)?),
        )?;
    }

    for subdir in ASSETS_STRUCTURE {
        tree.insert_dir(format!("docs/assets/{}", subdir))?;
    }
    tree.insert(
        "docs/assets/README.md",
        TreeNode::file(store.render("assets_readme", &ctx)?),
    )?;

    // Sphinx compatibility
    tree.insert("docs/conf.py", TreeNode::file(store.render("sphinx_conf", &ctx)?))?;
    tree.insert(
        "docs/.readthedocs.yaml",
        TreeNode::file(store.render("readthedocs", &ctx)?),
    )?;
    tree.insert_dir("docs/_static")?;
    tree.insert_dir("docs/_templates")?;

    for section in SOURCE_DOC_STRUCTURE {
        tree.insert_dir(format!("docs/source/{}", section))?;
    }
    tree.insert(
        "docs/source/index.md",
        TreeNode::file(store.render("source_index", &ctx)?),
    )?;

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthorInfo;
    use crate::generators::Language;
    use std::path::PathBuf;

    fn options() -> GenerateOptions {
        GenerateOptions::new("demo_repo", vec![Language::Python], AuthorInfo::default())
    }

    #[test]
    fn given_python_when_generate_then_manual_and_auto_indexes_exist() {
        let store = TemplateStore::with_catalogue();
        let tree = generate(&store, &options()).unwrap();

        let paths: Vec<PathBuf> = tree.walk().into_iter().map(|(p, _)| p).collect();
        assert!(paths.contains(&PathBuf::from("docs/manual/index.md")));
        assert!(paths.contains(&PathBuf::from("docs/auto/index.md")));
        assert!(paths.contains(&PathBuf::from("docs/manual/python/index.md")));
        assert!(paths.contains(&PathBuf::from("docs/manual/python/guides")));
        assert!(paths.contains(&PathBuf::from("docs/auto/python/api")));
        assert!(paths.contains(&PathBuf::from("docs/assets/images")));
        assert!(paths.contains(&PathBuf::from("docs/assets/diagrams")));
    }

    #[test]
    fn given_single_language_when_generate_then_no_other_language_dirs() {
        let store = TemplateStore::with_catalogue();
        let tree = generate(&store, &options()).unwrap();

        let paths: Vec<PathBuf> = tree.walk().into_iter().map(|(p, _)| p).collect();
        assert!(!paths.contains(&PathBuf::from("docs/manual/go")));
    }
}
