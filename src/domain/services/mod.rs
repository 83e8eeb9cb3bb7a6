//! # Domain Services
//!
//! ドメインサービス（ステートレスなビジネスルール）
//!
//! - **naming**: ファイル名・一時テーブル名・管理用SQL
//! - **csv_decoder**: CSVシャードの連結とデコード

pub mod csv_decoder;
pub mod naming;
