//! Error types for model-deletedir
//!
//! Structural mismatches are not errors (they become a refusal, see
//! [`crate::deleter::Outcome`]). Everything here aborts the run.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// model-deletedir のエラー型
#[derive(Debug)]
pub enum DeleteDirError {
    // 使い方エラー（Exit 1）
    /// 対象ディレクトリの引数なし
    MissingArgument,

    // ファイルシステムエラー（Exit 1）
    /// ディレクトリの一覧取得に失敗
    DirectoryReadError { path: PathBuf, source: io::Error },
    /// 再帰削除に失敗
    RemoveError { path: PathBuf, source: io::Error },
    /// 対象がシンボリックリンク
    SymlinkTarget { path: PathBuf },
    /// その他の I/O エラー
    IoError(io::Error),
}

impl DeleteDirError {
    /// 終了コードを取得
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingArgument => 1,
            Self::DirectoryReadError { .. }
            | Self::RemoveError { .. }
            | Self::SymlinkTarget { .. }
            | Self::IoError(_) => 1,
        }
    }

    /// Whether this error is a usage problem rather than a filesystem failure
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::MissingArgument)
    }

    /// 利用者向けのエラーメッセージ
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingArgument => "Missing directory argument".to_string(),
            Self::DirectoryReadError { path, source } => {
                format!("cannot read directory '{}': {}", path.display(), source)
            }
            Self::RemoveError { path, source } => {
                format!("cannot remove '{}': {}", path.display(), source)
            }
            Self::SymlinkTarget { path } => {
                format!(
                    "cannot remove '{}': refusing to recursively delete a symbolic link",
                    path.display()
                )
            }
            Self::IoError(e) => format!("I/O error: {}", e),
        }
    }
}

impl fmt::Display for DeleteDirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for DeleteDirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DirectoryReadError { source, .. } | Self::RemoveError { source, .. } => {
                Some(source)
            }
            Self::IoError(e) => Some(e),
            Self::MissingArgument | Self::SymlinkTarget { .. } => None,
        }
    }
}

impl From<io::Error> for DeleteDirError {
    fn from(err: io::Error) -> Self {
        Self::IoError(err)
    }
}
