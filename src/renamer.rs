//! Date-prefix renamer
//!
//! Lists the direct entries of one directory, and renames every regular file
//! to `YYYYMMDD_<original name>` using its modification date.

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::consts::SEPARATOR;
use crate::error::AppError;
use crate::utils::{Timezone, debug_log, format_date};

/// One rename computed from the directory listing
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlannedRename {
    pub(crate) from: PathBuf,
    pub(crate) to: PathBuf,
    pub(crate) date_portion: String,
}

impl PlannedRename {
    fn old_name(&self) -> &OsStr {
        self.from.file_name().unwrap_or_default()
    }

    pub(crate) fn new_name(&self) -> &OsStr {
        self.to.file_name().unwrap_or_default()
    }
}

/// `"{date_portion}_{base_name}"`
pub(crate) fn prefixed_name(date_portion: &str, base_name: &OsStr) -> OsString {
    let mut name = OsString::with_capacity(date_portion.len() + SEPARATOR.len() + base_name.len());
    name.push(date_portion);
    name.push(SEPARATOR);
    name.push(base_name);
    name
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Renamer {
    timezone: Timezone,
    include_hidden: bool,
}

impl Renamer {
    pub(crate) fn new(timezone: Timezone, include_hidden: bool) -> Self {
        Self {
            timezone,
            include_hidden,
        }
    }

    /// Compute every rename for `start_dir` without touching the file system.
    ///
    /// Entries are visited in name order. Only regular files are planned;
    /// directories, symlinks and (unless enabled) dot-files are skipped but
    /// still count as occupied names. Fails with `NameCollision` if any
    /// target would already exist at the time its rename runs.
    pub(crate) fn plan(&self, start_dir: &Path) -> Result<Vec<PlannedRename>, AppError> {
        let dir_err = |source| AppError::DirectoryAccess {
            path: start_dir.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(start_dir).map_err(dir_err)? {
            entries.push(entry.map_err(dir_err)?);
        }
        entries.sort_by_key(|e| e.file_name());

        let mut occupied: HashSet<OsString> = entries.iter().map(|e| e.file_name()).collect();
        let mut plans = Vec::new();

        for entry in entries {
            let name = entry.file_name();
            let path = start_dir.join(&name);

            if !self.include_hidden && name.as_encoded_bytes().starts_with(b".") {
                debug_log!("skip hidden {}", path.display());
                continue;
            }

            let metadata_err = |source| AppError::Metadata {
                path: path.clone(),
                source,
            };
            let file_type = entry.file_type().map_err(metadata_err)?;
            if !file_type.is_file() {
                debug_log!("skip non-file {}", path.display());
                continue;
            }

            let modified = entry
                .metadata()
                .and_then(|m| m.modified())
                .map_err(metadata_err)?;
            let date = self.timezone.date_of(modified)?;
            let date_portion = format_date(&date)?;
            debug_log!("{} modified {}", path.display(), date);

            plans.push(PlannedRename {
                to: start_dir.join(prefixed_name(&date_portion, &name)),
                from: path,
                date_portion,
            });
        }

        // Replay the renames in order against the names present right now
        for plan in &plans {
            let new_name = plan.new_name().to_os_string();
            if occupied.contains(&new_name) {
                return Err(AppError::NameCollision {
                    path: plan.to.clone(),
                });
            }
            occupied.remove(plan.old_name());
            occupied.insert(new_name);
        }

        Ok(plans)
    }

    /// Rename every regular file in `start_dir`, writing one
    /// `" rename {old_path} => {new_name}"` line to `out` per entry.
    ///
    /// Stops at the first failure; renames already done are kept.
    /// Returns how many entries were renamed.
    pub(crate) fn apply_to_all<W: Write>(
        &self,
        start_dir: &Path,
        out: &mut W,
    ) -> Result<usize, AppError> {
        let plans = self.plan(start_dir)?;
        let total = plans.len();
        let mut renamed = 0;

        for plan in &plans {
            if let Err(e) = apply_one(plan, out) {
                eprintln!("Renamed {renamed} of {total} entries before failure");
                return Err(e);
            }
            renamed += 1;
        }

        debug_log!("renamed {} entries in {}", renamed, start_dir.display());
        Ok(renamed)
    }
}

fn apply_one<W: Write>(plan: &PlannedRename, out: &mut W) -> Result<(), AppError> {
    // The listing may be stale by now
    if fs::symlink_metadata(&plan.to).is_ok() {
        return Err(AppError::NameCollision {
            path: plan.to.clone(),
        });
    }

    writeln!(
        out,
        " rename {} => {}",
        plan.from.display(),
        plan.new_name().to_string_lossy()
    )
    .map_err(AppError::Output)?;

    fs::rename(&plan.from, &plan.to).map_err(|source| AppError::Rename {
        from: plan.from.clone(),
        to: plan.to.clone(),
        source,
    })
}
