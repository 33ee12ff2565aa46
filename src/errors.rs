use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Template '{template}' references missing placeholder: {placeholder}")]
    MissingPlaceholder {
        template: String,
        placeholder: String,
    },

    #[error("Refusing to overwrite existing file: {0}")]
    Conflict(PathBuf),

    #[error("Generators disagree on content for path: {0}")]
    PathCollision(PathBuf),

    #[error("Path escapes the target root: {0}")]
    PathEscape(PathBuf),

    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

pub type ForgeResult<T> = Result<T, ForgeError>;

impl ForgeError {
    /// Attach a path to a raw I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ForgeError::UnknownTemplate(_) | ForgeError::MissingPlaceholder { .. } => {
                crate::exitcode::SOFTWARE
            }
            ForgeError::Conflict(_) | ForgeError::PathCollision(_) => crate::exitcode::CANTCREAT,
            ForgeError::PathEscape(_) | ForgeError::NotADirectory(_) => crate::exitcode::DATAERR,
            ForgeError::Io { .. } => crate::exitcode::IOERR,
            ForgeError::Config(_) => crate::exitcode::CONFIG,
        }
    }
}
