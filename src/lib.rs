//! Fiber NOC Control
//!
//! Library backing the `fiberctl` tool: a local, single-operator record
//! store for an ISP fiber-network operations team. It tracks OLT inventory,
//! broadcasts outage notifications with automatic responsible-party
//! resolution, and manages operator accounts with role and regional scoping.

pub mod accounts;
pub mod cli;
pub mod inventory;
pub mod models;
pub mod notify;
pub mod paths;
pub mod storage;
