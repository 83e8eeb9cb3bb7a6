//! # Naming Service
//!
//! バックアップファイル名、一時テーブル名、管理用SQLの生成規則

use chrono::{DateTime, Utc};

use crate::domain::entities::TableRef;

/// 一時テーブル名の接頭辞
pub const TEMP_TABLE_PREFIX: &str = "bqhelper_tmp_";

/// 命名サービス
pub struct NamingService;

impl NamingService {
    /// ファイル名に使えるUTCタイムスタンプ（ミリ秒まで）
    pub fn timestamp_suffix(now: DateTime<Utc>) -> String {
        now.format("%Y%m%dT%H%M%S%.3fZ").to_string()
    }

    /// バックアップ／エクスポートファイルの接頭辞 `{table}_{timestamp}_`
    ///
    /// # 例
    ///
    /// ```
    /// use bqhelper::domain::services::naming::NamingService;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
    /// assert_eq!(
    ///     NamingService::export_file_prefix("sales", now),
    ///     "sales_20240301T093000.000Z_"
    /// );
    /// ```
    pub fn export_file_prefix(table: &str, now: DateTime<Utc>) -> String {
        format!("{}_{}_", table, Self::timestamp_suffix(now))
    }

    /// 一時テーブル名。BigQuery のテーブル名に使えない `-` は `_` に置換する
    pub fn temp_table_name(seed: &str) -> String {
        format!("{}{}", TEMP_TABLE_PREFIX, seed.replace('-', "_"))
    }

    /// テーブルの全行を削除する DML
    pub fn delete_all_rows_sql(table: &TableRef) -> String {
        format!("DELETE FROM {} WHERE 1=1", table.sql_identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_suffix() {
        let now = Utc.with_ymd_and_hms(2024, 12, 25, 10, 5, 9).unwrap();
        assert_eq!(NamingService::timestamp_suffix(now), "20241225T100509.000Z");
    }

    #[test]
    fn test_export_file_prefix() {
        let now = Utc.with_ymd_and_hms(2024, 12, 25, 10, 5, 9).unwrap();
        assert_eq!(
            NamingService::export_file_prefix("orders", now),
            "orders_20241225T100509.000Z_"
        );
    }

    #[test]
    fn test_temp_table_name_replaces_dashes() {
        let name = NamingService::temp_table_name("550e8400-e29b-41d4");
        assert_eq!(name, "bqhelper_tmp_550e8400_e29b_41d4");
    }

    #[test]
    fn test_delete_all_rows_sql() {
        let table = TableRef::new("proj", "ds", "tbl").unwrap();
        assert_eq!(
            NamingService::delete_all_rows_sql(&table),
            "DELETE FROM `proj.ds.tbl` WHERE 1=1"
        );
    }
}
