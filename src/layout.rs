//! Model directory layout validation
//!
//! Two shapes are recognised:
//!
//! ```text
//! <model>/                      model directory
//!     1500000000/               model version (unix timestamp)
//!         evaluation/           process subdirectories
//!         execution/
//!         testing/
//! ```
//!
//! Only names, directory-ness and the one level of nesting above are
//! checked. Empty directories satisfy both shapes.

use crate::error::DeleteDirError;
use crate::tree::{ChildEntry, FileSystem};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

/// Names allowed directly inside a model version directory
pub const PROCESS_LABELS: [&str; 3] = ["evaluation", "execution", "testing"];

/// 2017-01-01 00:00:00 UTC
pub const MIN_VERSION_TIMESTAMP: u64 = 1_483_228_800;

/// Longest accepted model version name
pub const MAX_VERSION_NAME_LEN: usize = 10;

/// Whether `name` is one of [`PROCESS_LABELS`]
pub fn is_process_label(name: &OsStr) -> bool {
    name.to_str()
        .is_some_and(|name| PROCESS_LABELS.contains(&name))
}

/// Why a directory does not have the expected shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// A child that should be a directory is not
    NotADirectory { name: OsString },
    /// A model version child outside [`PROCESS_LABELS`]
    UnknownLabel { name: OsString },
    /// A model child whose name is not all decimal digits
    NotNumeric { name: OsString },
    /// A model child name longer than [`MAX_VERSION_NAME_LEN`]
    NameTooLong { name: OsString },
    /// A model child older than the minimum version timestamp
    BeforeMinimum { name: OsString, minimum: u64 },
    /// A model version inside a model directory failed its own check
    InVersion {
        version: OsString,
        inner: Box<Mismatch>,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotADirectory { name } => {
                write!(f, "'{}' is not a directory", name.to_string_lossy())
            }
            Self::UnknownLabel { name } => write!(
                f,
                "'{}' is not one of {}",
                name.to_string_lossy(),
                PROCESS_LABELS.join(", ")
            ),
            Self::NotNumeric { name } => {
                write!(f, "'{}' is not a numeric version", name.to_string_lossy())
            }
            Self::NameTooLong { name } => write!(
                f,
                "'{}' is longer than {} characters",
                name.to_string_lossy(),
                MAX_VERSION_NAME_LEN
            ),
            Self::BeforeMinimum { name, minimum } => write!(
                f,
                "'{}' is older than {}",
                name.to_string_lossy(),
                minimum
            ),
            Self::InVersion { version, inner } => {
                write!(f, "{}/{}", version.to_string_lossy(), inner)
            }
        }
    }
}

/// Checks a model version name, in the order: digits, length, minimum
fn version_name_mismatch(name: &OsStr) -> Option<Mismatch> {
    // ASCII 0-9 only; other Unicode digits (e.g. Arabic-Indic) are refused
    let digits = match name.to_str() {
        Some(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => s,
        _ => {
            return Some(Mismatch::NotNumeric {
                name: name.to_os_string(),
            })
        }
    };

    if digits.len() > MAX_VERSION_NAME_LEN {
        return Some(Mismatch::NameTooLong {
            name: name.to_os_string(),
        });
    }

    // At most ten digits always fits in a u64
    match digits.parse::<u64>() {
        Ok(value) if value >= MIN_VERSION_TIMESTAMP => None,
        _ => Some(Mismatch::BeforeMinimum {
            name: name.to_os_string(),
            minimum: MIN_VERSION_TIMESTAMP,
        }),
    }
}

/// 構造検証器
///
/// Pure over [`FileSystem`]: nothing is modified. The layout rules are
/// fixed and cannot be relaxed by the caller.
pub struct StructureValidator<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
}

impl<'a, F: FileSystem + ?Sized> StructureValidator<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Whether `path` only contains process subdirectories
    pub fn is_model_version_dir(&self, path: &Path) -> Result<bool, DeleteDirError> {
        Ok(self.model_version_dir_mismatch(path)?.is_none())
    }

    /// Whether `path` only contains valid model versions
    pub fn is_model_dir(&self, path: &Path) -> Result<bool, DeleteDirError> {
        Ok(self.model_dir_mismatch(path)?.is_none())
    }

    /// First reason `path` is not a model version directory, if any
    pub fn model_version_dir_mismatch(
        &self,
        path: &Path,
    ) -> Result<Option<Mismatch>, DeleteDirError> {
        for child in self.sorted_children(path)? {
            if !child.is_dir {
                return Ok(Some(Mismatch::NotADirectory { name: child.name }));
            }
            if !is_process_label(&child.name) {
                return Ok(Some(Mismatch::UnknownLabel { name: child.name }));
            }
        }
        Ok(None)
    }

    /// First reason `path` is not a model directory, if any
    ///
    /// Each child must be a directory with a valid version name, and then
    /// pass [`Self::model_version_dir_mismatch`] itself.
    pub fn model_dir_mismatch(&self, path: &Path) -> Result<Option<Mismatch>, DeleteDirError> {
        for child in self.sorted_children(path)? {
            if !child.is_dir {
                return Ok(Some(Mismatch::NotADirectory { name: child.name }));
            }
            if let Some(mismatch) = version_name_mismatch(&child.name) {
                return Ok(Some(mismatch));
            }
            if let Some(inner) = self.model_version_dir_mismatch(&path.join(&child.name))? {
                return Ok(Some(Mismatch::InVersion {
                    version: child.name,
                    inner: Box::new(inner),
                }));
            }
        }
        Ok(None)
    }

    fn sorted_children(&self, path: &Path) -> Result<Vec<ChildEntry>, DeleteDirError> {
        let mut children = self.fs.list_children(path)?;
        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(children)
    }
}
