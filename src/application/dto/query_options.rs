//! # Query Options DTO
//!
//! クエリ結果をテーブルへ書き込む際のオプション

use crate::domain::entities::{IfExists, StorageLocation};

/// クエリ書き込みオプション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// 出力先が存在する場合のポリシー
    pub if_exists: IfExists,
    /// ジョブの完了を待つかどうか
    pub block: bool,
    /// 置き換え前のバックアップ先（`IfExists::Replace` のときのみ使用）
    pub backup: Option<StorageLocation>,
}

impl QueryOptions {
    /// 既定のオプションを作成します（fail, 完了を待つ, バックアップなし）。
    ///
    /// # 例
    ///
    /// ```
    /// use bqhelper::application::dto::QueryOptions;
    /// use bqhelper::domain::entities::{IfExists, StorageLocation};
    ///
    /// let opts = QueryOptions::new()
    ///     .with_if_exists(IfExists::Replace)
    ///     .with_backup(StorageLocation::new("my-bucket", "backups").unwrap());
    ///
    /// assert_eq!(opts.if_exists, IfExists::Replace);
    /// assert!(opts.block);
    /// assert!(opts.backs_up_before_replace());
    /// ```
    pub fn new() -> Self {
        Self {
            if_exists: IfExists::Fail,
            block: true,
            backup: None,
        }
    }

    pub fn with_if_exists(mut self, if_exists: IfExists) -> Self {
        self.if_exists = if_exists;
        self
    }

    pub fn with_block(mut self, block: bool) -> Self {
        self.block = block;
        self
    }

    pub fn with_backup(mut self, backup: StorageLocation) -> Self {
        self.backup = Some(backup);
        self
    }

    /// 置き換え前にバックアップを取る設定かどうか
    pub fn backs_up_before_replace(&self) -> bool {
        self.if_exists == IfExists::Replace && self.backup.is_some()
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self::new()
    }
}
