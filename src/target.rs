//! Target path resolution for model-deletedir
//!
//! The parent of the target is resolved through the filesystem, so `..`
//! after a symbolic link means what the OS says it means. The final
//! component is kept as given, which leaves a symlinked target visible to
//! the deleter.

use std::path::{Path, PathBuf};

/// 削除対象パスの解決
pub struct TargetResolver;

impl TargetResolver {
    /// Resolve `target` against `cwd`
    ///
    /// # Returns
    /// * `Some(PathBuf)` - absolute path naming the same entry as `target`
    /// * `None` - empty argument, which never names an existing directory
    pub fn resolve(cwd: &Path, target: &Path) -> Option<PathBuf> {
        if target.as_os_str().is_empty() {
            return None;
        }
        let absolute = Self::to_absolute(cwd, target);

        // file_name() is None when the path ends in `..` or is a root
        let resolved = match (absolute.parent(), absolute.file_name()) {
            (Some(parent), Some(name)) => Self::try_canonicalize(parent).join(name),
            _ => Self::try_canonicalize(&absolute),
        };
        Some(resolved)
    }

    /// 相対パスを絶対パスに変換
    fn to_absolute(base: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        }
    }

    /// 可能であれば canonicalize、失敗時は元のパスを返す
    ///
    /// A failure means some component does not exist, in which case the
    /// target does not exist either.
    fn try_canonicalize(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
    }
}
