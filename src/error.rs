use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{reason}")]
    Usage { reason: String },

    #[error("Cannot read directory {}: {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot read modification time of {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to rename {} => {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Refusing to overwrite existing entry {}", path.display())]
    NameCollision { path: PathBuf },

    #[error("Year {year} cannot be written as YYYYMMDD (supported: 1000-9999)")]
    FormatRange { year: i32 },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
