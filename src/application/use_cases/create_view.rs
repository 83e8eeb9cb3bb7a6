//! # Create View Use Case
//!
//! ビュー作成・更新ユースケース

use std::sync::Arc;
use anyhow::Result;
use log::info;

use crate::domain::entities::TableRef;
use crate::domain::error::HelperError;
use crate::domain::repositories::WarehouseRepository;

/// ビュー作成ユースケース
pub struct CreateViewUseCase<W: WarehouseRepository> {
    warehouse: Arc<W>,
}

impl<W: WarehouseRepository> CreateViewUseCase<W> {
    pub fn new(warehouse: Arc<W>) -> Self {
        Self { warehouse }
    }

    /// ビューを作成する
    ///
    /// # Arguments
    ///
    /// * `view_sql` - ビュー定義（Standard SQL）
    /// * `view` - ビューの位置
    /// * `update` - 既存ビューを削除して定義し直すかどうか
    ///
    /// # Errors
    ///
    /// `update` が `false` でビューが既に存在する場合 `HelperError::ViewAlreadyExists`
    pub async fn execute(&self, view_sql: &str, view: &TableRef, update: bool) -> Result<()> {
        if self.warehouse.table_exists(view).await? {
            if !update {
                return Err(HelperError::ViewAlreadyExists(view.to_string()).into());
            }
            self.warehouse.delete_table(view).await?;
            info!("Existing view {} deleted", view);
        }

        self.warehouse.create_view(view, view_sql).await?;
        info!("View {} created", view);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::RecordingWarehouse;

    const VIEW_SQL: &str = "SELECT * FROM `proj.ds.events` WHERE ok";

    fn view() -> TableRef {
        TableRef::new("proj", "ds", "events_ok").unwrap()
    }

    #[tokio::test]
    async fn test_create_new_view() {
        let warehouse = Arc::new(RecordingWarehouse::new());
        let use_case = CreateViewUseCase::new(warehouse.clone());

        use_case.execute(VIEW_SQL, &view(), false).await.unwrap();

        assert_eq!(
            warehouse.calls(),
            vec![
                "exists proj.ds.events_ok".to_string(),
                format!("create_view proj.ds.events_ok {}", VIEW_SQL),
            ]
        );
    }

    #[tokio::test]
    async fn test_update_existing_view_deletes_first() {
        let warehouse = Arc::new(RecordingWarehouse::new().with_table(&view()));
        let use_case = CreateViewUseCase::new(warehouse.clone());

        use_case.execute(VIEW_SQL, &view(), true).await.unwrap();

        assert_eq!(warehouse.call_kinds(), vec!["delete", "create_view"]);
        assert!(warehouse.exists(&view()));
    }

    #[tokio::test]
    async fn test_update_missing_view_just_creates() {
        let warehouse = Arc::new(RecordingWarehouse::new());
        let use_case = CreateViewUseCase::new(warehouse.clone());

        use_case.execute(VIEW_SQL, &view(), true).await.unwrap();

        assert_eq!(warehouse.call_kinds(), vec!["create_view"]);
    }

    #[tokio::test]
    async fn test_existing_view_without_update_is_rejected() {
        let warehouse = Arc::new(RecordingWarehouse::new().with_table(&view()));
        let use_case = CreateViewUseCase::new(warehouse.clone());

        let err = use_case.execute(VIEW_SQL, &view(), false).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<HelperError>(),
            Some(&HelperError::ViewAlreadyExists("proj.ds.events_ok".to_string()))
        );
        assert!(warehouse.call_kinds().is_empty());
    }
}
