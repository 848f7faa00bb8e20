//! Data models for Fiber NOC Control
//!
//! This module contains the records persisted by the tool:
//!
//! - Operator accounts with role and regional scoping
//! - OLT (Optical Line Terminal) inventory records
//! - Outage notifications with their lifecycle timestamps
//!
//! All persisted models serialize with camelCase field names so the on-disk
//! blobs stay compatible with the original dashboard export format.

pub mod notification;
pub mod olt;
pub mod user;
pub mod validation;

pub use notification::{AlertStatus, Notification};
pub use olt::{OltRecord, OltStatus};
pub use user::{Permissions, Role, User};
pub use validation::{Validatable, ValidationContext, ValidationError, Validators};

use uuid::Uuid;

/// Generate a new UUID for model IDs
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
