//! # StorageLocation Value Object
//!
//! GCS のバケットとディレクトリ

use crate::domain::error::HelperError;

/// ストレージ上の保存先
///
/// ディレクトリは必須。バケット直下への書き出しは許可しない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
    bucket: String,
    directory: String,
}

impl StorageLocation {
    /// 新しい保存先を作成します。
    ///
    /// ディレクトリの先頭・末尾の `/` は取り除かれます。
    ///
    /// # Errors
    ///
    /// - バケットが空の場合 `HelperError::EmptyIdentifier`
    /// - ディレクトリが空の場合 `HelperError::EmptyDirectory`
    ///
    /// # 例
    ///
    /// ```
    /// use bqhelper::domain::entities::StorageLocation;
    ///
    /// let loc = StorageLocation::new("my-bucket", "/backups/sales/").unwrap();
    /// assert_eq!(loc.directory(), "backups/sales");
    /// assert_eq!(loc.gs_uri("a.csv"), "gs://my-bucket/backups/sales/a.csv");
    ///
    /// assert!(StorageLocation::new("my-bucket", "/").is_err());
    /// ```
    pub fn new(
        bucket: impl Into<String>,
        directory: impl Into<String>,
    ) -> Result<Self, HelperError> {
        let bucket = bucket.into().trim().to_string();
        if bucket.is_empty() {
            return Err(HelperError::EmptyIdentifier("bucket"));
        }

        let directory = directory.into().trim().trim_matches('/').to_string();
        if directory.is_empty() {
            return Err(HelperError::EmptyDirectory);
        }

        Ok(Self { bucket, directory })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// バケット内のオブジェクトパス（`directory/name`）
    pub fn object_path(&self, name: &str) -> String {
        format!("{}/{}", self.directory, name)
    }

    /// `gs://bucket/directory/name` 形式のURI
    pub fn gs_uri(&self, name: &str) -> String {
        format!("gs://{}/{}", self.bucket, self.object_path(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_location_new() {
        let loc = StorageLocation::new("bkt", "exports").unwrap();
        assert_eq!(loc.bucket(), "bkt");
        assert_eq!(loc.directory(), "exports");
    }

    #[test]
    fn test_storage_location_nested_directory() {
        let loc = StorageLocation::new("bkt", "a/b/c/").unwrap();
        assert_eq!(loc.object_path("x.csv"), "a/b/c/x.csv");
        assert_eq!(loc.gs_uri("x.csv"), "gs://bkt/a/b/c/x.csv");
    }

    #[test]
    fn test_storage_location_rejects_empty_directory() {
        assert_eq!(
            StorageLocation::new("bkt", ""),
            Err(HelperError::EmptyDirectory)
        );
        assert_eq!(
            StorageLocation::new("bkt", "//"),
            Err(HelperError::EmptyDirectory)
        );
    }

    #[test]
    fn test_storage_location_rejects_empty_bucket() {
        assert_eq!(
            StorageLocation::new(" ", "dir"),
            Err(HelperError::EmptyIdentifier("bucket"))
        );
    }
}
