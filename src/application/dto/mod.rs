//! # Data Transfer Objects
//!
//! ユースケースに渡すオプション

pub mod export_options;
pub mod query_options;

pub use export_options::ExportOptions;
pub use query_options::QueryOptions;
