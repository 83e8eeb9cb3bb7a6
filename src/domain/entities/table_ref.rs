//! # TableRef Value Object
//!
//! テーブル（またはビュー）の位置を表すバリューオブジェクト

use std::fmt;

use crate::domain::error::HelperError;

/// テーブル参照
///
/// `project.dataset.table` の3要素で BigQuery 上の位置を特定する
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRef {
    project_id: String,
    dataset: String,
    table: String,
}

impl TableRef {
    /// 新しいテーブル参照を作成します。
    ///
    /// # Errors
    ///
    /// いずれかの要素が空（空白のみを含む）の場合に `HelperError::EmptyIdentifier`
    ///
    /// # 例
    ///
    /// ```
    /// use bqhelper::domain::entities::TableRef;
    ///
    /// let table = TableRef::new("my-project", "analytics", "daily_sales").unwrap();
    /// assert_eq!(table.to_string(), "my-project.analytics.daily_sales");
    /// assert_eq!(table.sql_identifier(), "`my-project.analytics.daily_sales`");
    ///
    /// assert!(TableRef::new("my-project", "", "daily_sales").is_err());
    /// ```
    pub fn new(
        project_id: impl Into<String>,
        dataset: impl Into<String>,
        table: impl Into<String>,
    ) -> Result<Self, HelperError> {
        let project_id = non_empty(project_id.into(), "project_id")?;
        let dataset = non_empty(dataset.into(), "dataset")?;
        let table = non_empty(table.into(), "table")?;

        Ok(Self {
            project_id,
            dataset,
            table,
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Standard SQL で使えるバッククォート付き識別子
    pub fn sql_identifier(&self) -> String {
        format!("`{}`", self)
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.project_id, self.dataset, self.table)
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String, HelperError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HelperError::EmptyIdentifier(field));
    }
    Ok(trimmed.to_string())
}
