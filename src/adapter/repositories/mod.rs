//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod bigquery_warehouse_repository;
pub mod object_storage_repository;
