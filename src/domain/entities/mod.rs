//! # Domain Entities
//!
//! 外部サービスに渡す識別子とバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **TableRef**: テーブル／ビューの位置
//! - **StorageLocation**: GCS のバケットとディレクトリ
//! - **IfExists**: 書き込みポリシー
//! - **JobHandle / StagedExport**: 投入済みジョブとエクスポート結果
//! - **DataFrame**: メモリ上の表形式データ

pub mod dataframe;
pub mod job;
pub mod storage_location;
pub mod table_ref;
pub mod write_disposition;

pub use dataframe::DataFrame;
pub use job::{JobHandle, StagedExport};
pub use storage_location::StorageLocation;
pub use table_ref::TableRef;
pub use write_disposition::IfExists;
