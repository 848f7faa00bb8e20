use serde::{Deserialize, Serialize};

use crate::models::generate_id;
use crate::models::validation::{Validatable, ValidationContext, Validators};

/// Access level of an operator account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Read-only operations staff
    User,
    /// Regional network engineer
    Admin,
    /// Full system administrator
    SuperAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
            Role::SuperAdmin => "SUPER_ADMIN",
        }
    }
}

/// Capability flags attached to an account.
///
/// Flags are derived from the role once, when the account is created, and
/// stored with the record. Editing a role later does not recompute them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub can_view_dashboard: bool,
    pub can_view_notifications: bool,
    #[serde(default)]
    pub can_manage_users: bool,
    #[serde(default)]
    pub can_create_notifications: bool,
    #[serde(default, rename = "canManageOLTs")]
    pub can_manage_olts: bool,
    #[serde(default)]
    pub can_export_data: bool,
}

impl Permissions {
    /// Derive the capability flags for a role.
    pub fn for_role(role: Role) -> Self {
        let elevated = matches!(role, Role::Admin | Role::SuperAdmin);
        Self {
            can_view_dashboard: true,
            can_view_notifications: true,
            can_manage_users: elevated,
            can_create_notifications: elevated,
            can_manage_olts: elevated,
            can_export_data: matches!(role, Role::SuperAdmin),
        }
    }
}

/// An operator account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned at creation
    pub id: String,

    /// Display name
    pub name: String,

    /// Login email, matched case-insensitively
    pub email: String,

    /// Access level
    pub role: Role,

    /// Region scope: "All" for unrestricted access, or a single region name
    pub region: String,

    /// Human-readable label of the last successful login ("Never" until then)
    pub last_login: String,

    /// Inactive accounts cannot log in
    pub active: bool,

    /// Capability flags, derived from `role` at creation time
    pub permissions: Permissions,
}

impl User {
    /// Create a new account with permissions derived from the role.
    pub fn new(name: String, email: String, role: Role, region: String) -> Self {
        Self {
            id: generate_id(),
            name,
            email,
            role,
            region,
            last_login: "Never".to_string(),
            active: true,
            permissions: Permissions::for_role(role),
        }
    }

    /// Whether this account is limited to a single region.
    pub fn is_region_restricted(&self) -> bool {
        self.region != "All"
    }
}

impl Validatable for User {
    fn validate_with_context(&self, ctx: &mut ValidationContext) {
        ctx.enter_field("name");
        if let Err(e) = Validators::not_empty(&self.name, "name") {
            ctx.add_error(e);
        }
        if let Err(e) = Validators::string_length(&self.name, "name", Some(1), Some(100)) {
            ctx.add_error(e);
        }
        ctx.exit_field();

        ctx.enter_field("email");
        if let Err(e) = Validators::email(&self.email, "email") {
            ctx.add_error(e);
        }
        ctx.exit_field();

        ctx.enter_field("region");
        if let Err(e) = Validators::not_empty(&self.region, "region") {
            ctx.add_error(e);
        }
        ctx.exit_field();
    }
}
