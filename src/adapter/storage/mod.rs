//! Cloud Storage Adapter Modules
//!
//! バケットごとの ObjectStore の生成

pub mod provider;
