//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap::error::ErrorKind;

use crate::config::Config;
use crate::error::AppError;

#[derive(Debug, Parser)]
#[command(name = "prepend_filedate_to_filename")]
#[command(
    about = "Prefix each file in a directory with its modification date (YYYYMMDD_)",
    version
)]
pub(crate) struct Cli {
    /// Directory whose files are renamed (exactly one)
    #[arg(value_name = "START_DIR")]
    pub(crate) dirs: Vec<PathBuf>,

    /// Timezone for modification dates (e.g., "UTC", "Europe/Berlin"; default: local)
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Also rename dot-files
    #[arg(short, long)]
    pub(crate) all: bool,

    /// Enable debug output on stderr
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Parse `args`; any malformed command line becomes `Usage`.
    ///
    /// `--help` and `--version` are printed by clap and exit the process.
    pub(crate) fn parse_args<I, T>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            kind => AppError::Usage {
                reason: kind.to_string(),
            },
        })
    }

    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.all && config.include_hidden {
            self.all = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        self
    }

    /// The single start directory, or `Usage` for any other count
    pub(crate) fn start_dir(&self) -> Result<&Path, AppError> {
        match self.dirs.as_slice() {
            [dir] => Ok(dir.as_path()),
            other => Err(AppError::Usage {
                reason: format!(
                    "expected exactly one directory argument, got {}",
                    other.len()
                ),
            }),
        }
    }
}
