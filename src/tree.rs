//! Directory tree access for model-deletedir
//!
//! The validator and the deleter only ever need four things from the
//! filesystem, so they go through [`FileSystem`] instead of `std::fs`
//! directly. Unit tests swap in an in-memory tree.

use crate::error::DeleteDirError;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

/// A direct child of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildEntry {
    pub name: OsString,
    /// True for directories and for symbolic links pointing at one
    pub is_dir: bool,
}

impl ChildEntry {
    pub fn new(name: impl Into<OsString>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }
}

/// Filesystem operations used during classification, validation and removal
pub trait FileSystem {
    /// Whether `path` exists (symbolic links are followed)
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` itself is a symbolic link
    fn is_symlink(&self, path: &Path) -> bool;

    /// Direct children of `path`, in no particular order
    fn list_children(&self, path: &Path) -> Result<Vec<ChildEntry>, DeleteDirError>;

    /// Remove `path` and everything below it
    fn remove_tree(&self, path: &Path) -> Result<(), DeleteDirError>;
}

/// [`FileSystem`] backed by `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_symlink(&self, path: &Path) -> bool {
        fs::symlink_metadata(path)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false)
    }

    fn list_children(&self, path: &Path) -> Result<Vec<ChildEntry>, DeleteDirError> {
        let read_error = |source: io::Error| DeleteDirError::DirectoryReadError {
            path: path.to_path_buf(),
            source,
        };

        let mut children = Vec::new();
        for entry in fs::read_dir(path).map_err(read_error)? {
            let entry = entry.map_err(read_error)?;
            // Path::is_dir follows symlinks
            let is_dir = entry.path().is_dir();
            children.push(ChildEntry::new(entry.file_name(), is_dir));
        }
        Ok(children)
    }

    fn remove_tree(&self, path: &Path) -> Result<(), DeleteDirError> {
        fs::remove_dir_all(path).map_err(|source| DeleteDirError::RemoveError {
            path: path.to_path_buf(),
            source,
        })
    }
}
