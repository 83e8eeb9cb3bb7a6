//! # Domain Layer
//!
//! このモジュールはウェアハウス操作の核となる識別子・ルール・エンティティを定義します。
//!
//! ## 特徴
//!
//! - BigQuery / GCS クライアントに依存しない
//! - 外部サービスへの呼び出しは Repository trait 越しにのみ行う
//! - 純粋なビジネスルール（命名規則、入力検証）
//!
//! ## 構成要素
//!
//! - **entities**: 識別子とバリューオブジェクト（TableRef, StorageLocation, DataFrameなど）
//! - **error**: ローカル検証エラー
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（命名規則、SQL生成）

pub mod entities;
pub mod error;
pub mod repositories;
pub mod services;

pub use error::HelperError;
