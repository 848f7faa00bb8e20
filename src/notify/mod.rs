//! Outage notification lifecycle: creation, status bookkeeping,
//! responsible-party resolution, log export and message drafting.

pub mod draft;
pub mod export;
pub mod manager;

pub use manager::{AlertInput, AlertManager};
