use anyhow::Result;
use chrono::Local;
use tracing::info;

use crate::models::user::{Role, User};
use crate::storage::store::RecordStore;

/// Owns the operator account directory over a record store.
pub struct AccountManager<'a> {
    store: &'a RecordStore,
}

impl<'a> AccountManager<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Create and persist a new account. Permissions are derived from the
    /// role here, once; later role edits leave them untouched.
    pub fn create_user(
        &self,
        name: String,
        email: String,
        role: Role,
        region: String,
    ) -> Result<User> {
        let user = User::new(name, email, role, region);
        info!(id = %user.id, role = user.role.as_str(), "created operator account");
        self.store.save_user(user.clone())?;
        Ok(user)
    }

    /// Look up an account by email, case-insensitively. Inactive accounts
    /// never match. On success the last-login label is stamped and
    /// persisted; failure is an outcome (`None`), not an error.
    pub fn authenticate(&self, email: &str) -> Result<Option<User>> {
        let found = self
            .store
            .get_users()
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email) && u.active);

        let Some(mut user) = found else {
            return Ok(None);
        };

        user.last_login = Local::now().format("%Y-%m-%d %I:%M %p").to_string();
        self.store.save_user(user.clone())?;
        info!(id = %user.id, "operator logged in");
        Ok(Some(user))
    }

    /// Remove an account. Self-deletion is refused; deleting an unknown id
    /// is a silent no-op.
    pub fn delete_user(&self, id: &str, acting_user_id: &str) -> Result<Vec<User>> {
        if id == acting_user_id {
            anyhow::bail!("You cannot delete your own account");
        }
        self.store.delete_user(id)
    }
}
