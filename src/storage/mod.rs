//! Whole-collection JSON persistence for the three record collections.

pub mod backup;
pub mod seed;
pub mod store;

pub use backup::BackupWriter;
pub use store::{DatabaseBackup, RecordStore, StoreStats};
