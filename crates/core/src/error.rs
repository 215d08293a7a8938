use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("対象フォルダが見つかりません: {}", .0.display())]
    RootNotFound(PathBuf),
    #[error("フォルダ走査に失敗しました")]
    Traversal(#[from] walkdir::Error),
    #[error("撮影日時を取得できませんでした: {reason}")]
    Metadata { path: PathBuf, reason: String },
    #[error("移動先が既に存在します: {}", .0.display())]
    TargetExists(PathBuf),
    #[error("ファイル操作に失敗しました: {}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
