//! Classify, validate, then remove
//!
//! A target is removed only when it matches the layout it was classified
//! as. Any structural mismatch is a refusal, not an error.

use crate::error::DeleteDirError;
use crate::layout::{is_process_label, Mismatch, StructureValidator};
use crate::tree::FileSystem;
use std::fmt;
use std::path::Path;

/// Which layout a target is expected to have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    /// Contains only process subdirectories (or nothing)
    VersionDir,
    /// Contains at least one entry that is not a process subdirectory
    ModelDir,
}

impl fmt::Display for DirKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VersionDir => write!(f, "model version directory"),
            Self::ModelDir => write!(f, "model directory"),
        }
    }
}

/// Result of a single [`Deleter::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The target does not exist; nothing to do
    Missing,
    /// The target matched its layout and was removed
    Removed(DirKind),
    /// Dry run: the target matched and would have been removed
    WouldRemove(DirKind),
    /// The target did not match its layout and was left alone
    Refused { kind: DirKind, reason: Mismatch },
}

/// Decide which layout `path` should be validated against
///
/// Any child outside the process labels makes it a model directory. An
/// empty directory is a model version directory.
pub fn classify<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Result<DirKind, DeleteDirError> {
    let children = fs.list_children(path)?;
    if children.iter().all(|child| is_process_label(&child.name)) {
        Ok(DirKind::VersionDir)
    } else {
        Ok(DirKind::ModelDir)
    }
}

/// 構造チェック付き削除
pub struct Deleter<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    dry_run: bool,
}

impl<'a, F: FileSystem + ?Sized> Deleter<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self {
            fs,
            dry_run: false,
        }
    }

    /// Validate only, never remove
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Remove `path` if it is a model directory or a model version directory
    ///
    /// Listing and removal failures are returned as errors. A symlinked
    /// target that passes validation is an error rather than a removal.
    pub fn run(&self, path: &Path) -> Result<Outcome, DeleteDirError> {
        if !self.fs.exists(path) {
            return Ok(Outcome::Missing);
        }

        let kind = classify(self.fs, path)?;
        let validator = StructureValidator::new(self.fs);
        let mismatch = match kind {
            DirKind::ModelDir => validator.model_dir_mismatch(path)?,
            DirKind::VersionDir => validator.model_version_dir_mismatch(path)?,
        };
        if let Some(reason) = mismatch {
            return Ok(Outcome::Refused { kind, reason });
        }

        if self.fs.is_symlink(path) {
            return Err(DeleteDirError::SymlinkTarget {
                path: path.to_path_buf(),
            });
        }

        if self.dry_run {
            return Ok(Outcome::WouldRemove(kind));
        }

        self.fs.remove_tree(path)?;
        Ok(Outcome::Removed(kind))
    }
}
