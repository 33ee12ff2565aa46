//! End-to-end orchestration scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use rsforge::builder::OverwritePolicy;
use rsforge::config::AuthorInfo;
use rsforge::forge::{build_tree, run, GenerationRequest, GeneratorKind};
use rsforge::generators::{GenerateOptions, Language};
use rsforge::templates::TemplateStore;
use rstest::{fixture, rstest};
use tempfile::TempDir;
use walkdir::WalkDir;

#[fixture]
fn store() -> TemplateStore {
    TemplateStore::with_catalogue()
}

fn request(root: &Path, generators: Vec<GeneratorKind>, languages: Vec<Language>) -> GenerationRequest {
    GenerationRequest {
        root: root.to_path_buf(),
        generators,
        policy: OverwritePolicy::Skip,
        dry_run: false,
        gitkeep: false,
        options: GenerateOptions::new("demo_repo", languages, AuthorInfo::default()),
    }
}

fn snapshot(root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path() != root)
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    paths.sort();
    paths
}

#[rstest]
fn given_docs_generator_on_empty_root_then_expected_layout(store: TemplateStore) {
    let temp = TempDir::new().unwrap();
    let req = request(
        temp.path(),
        vec![GeneratorKind::Docs],
        vec![Language::Python, Language::Rust],
    );

    run(&store, &req).unwrap();

    assert!(temp.path().join("docs/manual/index.md").is_file());
    assert!(temp.path().join("docs/auto/index.md").is_file());
    assert!(temp.path().join("docs/assets/images").is_dir());
    assert!(temp.path().join("docs/assets/diagrams").is_dir());
    // Empty directories stay empty without --gitkeep
    assert_eq!(
        fs::read_dir(temp.path().join("docs/assets/images"))
            .unwrap()
            .count(),
        0
    );
}

#[rstest]
fn given_project_generator_with_python_only_then_no_go_project(store: TemplateStore) {
    let temp = TempDir::new().unwrap();
    let req = request(
        temp.path(),
        vec![GeneratorKind::Project],
        vec![Language::Python],
    );

    run(&store, &req).unwrap();

    assert!(temp
        .path()
        .join("projects/python_project/src/python_project/__init__.py")
        .is_file());
    assert!(temp.path().join("projects/python_project/tests").is_dir());
    assert!(!temp.path().join("projects/go_project").exists());
}

#[rstest]
fn given_two_runs_with_skip_then_second_reports_every_file_skipped(store: TemplateStore) {
    let temp = TempDir::new().unwrap();
    let req = request(
        temp.path(),
        GeneratorKind::ALL.to_vec(),
        vec![Language::Python],
    );

    let first = run(&store, &req).unwrap();
    let second = run(&store, &req).unwrap();

    assert!(first.files_written > 0);
    assert_eq!(second.files_written, 0);
    assert_eq!(second.files_skipped, first.files_written);
}

#[rstest]
fn given_dry_run_then_filesystem_unchanged(store: TemplateStore) {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("existing.txt"), "keep me").unwrap();
    let before = snapshot(temp.path());

    let mut req = request(
        temp.path(),
        GeneratorKind::ALL.to_vec(),
        vec![Language::Python],
    );
    req.dry_run = true;

    let report = run(&store, &req).unwrap();

    assert_eq!(before, snapshot(temp.path()));
    assert!(report.files_written > 0, "dry run still plans actions");
}

#[rstest]
fn given_all_generators_then_combined_tree_has_no_escaping_paths(store: TemplateStore) {
    let temp = TempDir::new().unwrap();
    let req = request(
        temp.path(),
        GeneratorKind::ALL.to_vec(),
        Language::ALL.to_vec(),
    );

    let tree = build_tree(&store, &req).unwrap();
    let root = temp.path().canonicalize().unwrap();

    for (rel, _) in tree.walk() {
        let joined = root.join(&rel);
        assert!(
            joined.starts_with(&root),
            "{} escapes the root",
            rel.display()
        );
        assert!(!rel
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir)));
    }
}

#[rstest]
fn given_full_run_then_summary_counts_match_walked_files(store: TemplateStore) {
    let temp = TempDir::new().unwrap();
    let req = request(
        temp.path(),
        GeneratorKind::ALL.to_vec(),
        vec![Language::Go],
    );

    let tree = build_tree(&store, &req).unwrap();
    let report = run(&store, &req).unwrap();

    assert_eq!(report.files_written, tree.file_count());
    assert_eq!(report.files_skipped, 0);
    assert_eq!(report.files_overwritten, 0);
}

#[rstest]
fn given_gitkeep_then_empty_directories_survive(store: TemplateStore) {
    let temp = TempDir::new().unwrap();
    let mut req = request(temp.path(), vec![GeneratorKind::Docs], vec![Language::Rust]);
    req.gitkeep = true;

    run(&store, &req).unwrap();

    assert!(temp
        .path()
        .join("docs/assets/images/.gitkeep")
        .is_file());
}

#[cfg(unix)]
#[rstest]
fn given_scripts_generator_then_scripts_are_executable_on_disk(store: TemplateStore) {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let req = request(temp.path(), vec![GeneratorKind::Scripts], vec![]);

    run(&store, &req).unwrap();

    for script in [
        "scripts/setup/install_dependencies.sh",
        "scripts/build/build_all.sh",
        "scripts/ci/run_tests.sh",
    ] {
        let mode = fs::metadata(temp.path().join(script))
            .unwrap()
            .permissions()
            .mode();
        assert_ne!(mode & 0o111, 0, "{} is not executable", script);
    }
}
