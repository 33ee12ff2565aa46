//! Materialization of a [`TreeNode`] onto the real filesystem.
//!
//! Writes are sequential and best-effort: a conflict under the `Fail` policy
//! aborts the call, but files already written in the current run stay on
//! disk. Dry-run mode records every planned action without touching the
//! filesystem.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::debug;

use crate::errors::{ForgeError, ForgeResult};
use crate::tree::TreeNode;

/// Behavior when a generated file already exists on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OverwritePolicy {
    /// Leave existing files untouched
    #[default]
    Skip,
    /// Replace existing files unconditionally
    Overwrite,
    /// Abort on the first existing file
    Fail,
}

impl fmt::Display for OverwritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverwritePolicy::Skip => "skip",
            OverwritePolicy::Overwrite => "overwrite",
            OverwritePolicy::Fail => "fail",
        };
        write!(f, "{}", name)
    }
}

/// One materialization step, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreatedDir(PathBuf),
    ExistingDir(PathBuf),
    Created(PathBuf),
    Skipped(PathBuf),
    Overwritten(PathBuf),
    WouldCreateDir(PathBuf),
    WouldWrite(PathBuf),
    WouldSkip(PathBuf),
    WouldOverwrite(PathBuf),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::CreatedDir(p) => write!(f, "created directory {}", p.display()),
            Action::ExistingDir(p) => write!(f, "directory exists {}", p.display()),
            Action::Created(p) => write!(f, "created file {}", p.display()),
            Action::Skipped(p) => write!(f, "skipped existing file {}", p.display()),
            Action::Overwritten(p) => write!(f, "overwrote file {}", p.display()),
            Action::WouldCreateDir(p) => write!(f, "would create directory {}", p.display()),
            Action::WouldWrite(p) => write!(f, "would write file {}", p.display()),
            Action::WouldSkip(p) => write!(f, "would skip existing file {}", p.display()),
            Action::WouldOverwrite(p) => write!(f, "would overwrite file {}", p.display()),
        }
    }
}

/// Outcome of one materialize call.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub actions: Vec<Action>,
    pub dirs_created: usize,
    pub files_written: usize,
    pub files_skipped: usize,
    pub files_overwritten: usize,
}

impl Report {
    fn record(&mut self, action: Action) {
        match &action {
            Action::CreatedDir(_) | Action::WouldCreateDir(_) => self.dirs_created += 1,
            Action::Created(_) | Action::WouldWrite(_) => self.files_written += 1,
            Action::Skipped(_) | Action::WouldSkip(_) => self.files_skipped += 1,
            Action::Overwritten(_) | Action::WouldOverwrite(_) => self.files_overwritten += 1,
            Action::ExistingDir(_) => {}
        }
        self.actions.push(action);
    }

    /// Paths recorded as skipped.
    pub fn skipped_paths(&self) -> Vec<&Path> {
        self.actions
            .iter()
            .filter_map(|a| match a {
                Action::Skipped(p) | Action::WouldSkip(p) => Some(p.as_path()),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} directories, {} files written, {} skipped, {} overwritten",
            self.dirs_created, self.files_written, self.files_skipped, self.files_overwritten
        )
    }
}

/// Write the tree rooted at `root` to disk.
///
/// Directory creation is idempotent. File handling follows `policy`; see
/// [`OverwritePolicy`]. With `dry_run` no filesystem mutation occurs and the
/// report lists every planned action instead.
pub fn materialize(
    root: &Path,
    tree: &TreeNode,
    policy: OverwritePolicy,
    dry_run: bool,
) -> ForgeResult<Report> {
    let mut report = Report::default();

    if !dry_run {
        fs::create_dir_all(root).map_err(|e| ForgeError::io(root, e))?;
    }

    for (rel_path, node) in tree.walk() {
        let target = root.join(&rel_path);
        ensure_under_root(root, &rel_path)?;

        match node {
            TreeNode::Directory(_) => {
                if target.is_dir() {
                    report.record(Action::ExistingDir(rel_path));
                } else if target.exists() {
                    return Err(ForgeError::NotADirectory(target));
                } else if dry_run {
                    report.record(Action::WouldCreateDir(rel_path));
                } else {
                    fs::create_dir_all(&target).map_err(|e| ForgeError::io(&target, e))?;
                    debug!("created directory: {}", target.display());
                    report.record(Action::CreatedDir(rel_path));
                }
            }
            TreeNode::File {
                content,
                executable,
            } => {
                let action =
                    write_file(&target, &rel_path, content, *executable, policy, dry_run)?;
                report.record(action);
            }
        }
    }

    Ok(report)
}

fn write_file(
    target: &Path,
    rel_path: &Path,
    content: &str,
    executable: bool,
    policy: OverwritePolicy,
    dry_run: bool,
) -> ForgeResult<Action> {
    let exists = target.exists();

    if exists {
        match policy {
            OverwritePolicy::Skip => {
                debug!("skipping existing file: {}", target.display());
                return Ok(if dry_run {
                    Action::WouldSkip(rel_path.to_path_buf())
                } else {
                    Action::Skipped(rel_path.to_path_buf())
                });
            }
            OverwritePolicy::Fail => {
                return Err(ForgeError::Conflict(rel_path.to_path_buf()));
            }
            OverwritePolicy::Overwrite => {
                if dry_run {
                    return Ok(Action::WouldOverwrite(rel_path.to_path_buf()));
                }
            }
        }
    } else if dry_run {
        return Ok(Action::WouldWrite(rel_path.to_path_buf()));
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| ForgeError::io(parent, e))?;
    }
    fs::write(target, content).map_err(|e| ForgeError::io(target, e))?;
    debug!("wrote file: {}", target.display());

    if executable {
        set_executable(target)?;
    }

    Ok(if exists {
        Action::Overwritten(rel_path.to_path_buf())
    } else {
        Action::Created(rel_path.to_path_buf())
    })
}

#[cfg(unix)]
fn set_executable(path: &Path) -> ForgeResult<()> {
    use std::os::unix::fs::PermissionsExt;
    let metadata = fs::metadata(path).map_err(|e| ForgeError::io(path, e))?;
    let mut perms = metadata.permissions();
    perms.set_mode(perms.mode() | 0o111);
    fs::set_permissions(path, perms).map_err(|e| ForgeError::io(path, e))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> ForgeResult<()> {
    Ok(())
}

/// Defense in depth: tree insertion already rejects traversal, but verify the
/// joined path still has the root as prefix before touching the filesystem.
fn ensure_under_root(root: &Path, rel_path: &Path) -> ForgeResult<()> {
    let joined = root.join(rel_path);
    if joined.starts_with(root) && !rel_path.is_absolute() {
        Ok(())
    } else {
        Err(ForgeError::PathEscape(rel_path.to_path_buf()))
    }
}
