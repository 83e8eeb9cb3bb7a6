//! # Export Options DTO
//!
//! クエリ結果をストレージ経由で取得する際のオプション

use crate::domain::entities::IfExists;

/// エクスポートオプション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// 一時テーブルが存在する場合のポリシー
    pub if_exists: IfExists,
    /// ダウンロード後にストレージ上のファイルを削除するか
    pub cleanup_files: bool,
}

impl ExportOptions {
    /// 既定値: replace, ファイルは削除する
    pub fn new() -> Self {
        Self {
            if_exists: IfExists::Replace,
            cleanup_files: true,
        }
    }

    pub fn with_if_exists(mut self, if_exists: IfExists) -> Self {
        self.if_exists = if_exists;
        self
    }

    pub fn keep_files(mut self) -> Self {
        self.cleanup_files = false;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_options_default() {
        let opts = ExportOptions::default();
        assert_eq!(opts.if_exists, IfExists::Replace);
        assert!(opts.cleanup_files);
    }

    #[test]
    fn test_keep_files() {
        let opts = ExportOptions::new().keep_files().with_if_exists(IfExists::Fail);
        assert!(!opts.cleanup_files);
        assert_eq!(opts.if_exists, IfExists::Fail);
    }
}
