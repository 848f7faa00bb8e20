use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{Notification, OltRecord, User};
use crate::storage::seed;

const USERS_FILE: &str = "users.json";
const OLTS_FILE: &str = "olts.json";
const NOTIFICATIONS_FILE: &str = "notifications.json";

/// Where an upserted record lands when its id is not already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsertAt {
    /// Newest records first (olts, notifications)
    Front,
    /// Insertion order preserved (users)
    Back,
}

/// Persistent store of the three independent record collections.
///
/// Each collection lives in its own JSON-array file under the data
/// directory and is rewritten wholesale on every mutation. There is exactly
/// one writer (the current process); no locking is needed.
#[derive(Debug, Clone)]
pub struct RecordStore {
    data_dir: PathBuf,
}

/// Per-collection record counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    pub users: usize,
    pub olts: usize,
    pub notifications: usize,
}

/// Snapshot of every collection, used by the backup export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseBackup {
    pub users: Vec<User>,
    pub olts: Vec<OltRecord>,
    pub notifications: Vec<Notification>,
    pub exported_at: DateTime<Utc>,
}

impl RecordStore {
    /// Open the store, creating and seeding the data directory on first run.
    ///
    /// Only missing collection files are seeded, so reopening an existing
    /// store never clobbers mutated data.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();

        fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        let store = Self { data_dir };
        store.seed_missing()?;
        Ok(store)
    }

    /// Path of the backing data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn seed_missing(&self) -> Result<()> {
        if !self.collection_path(USERS_FILE).exists() {
            debug!("seeding default users");
            self.write_collection(USERS_FILE, &seed::default_users())?;
        }
        if !self.collection_path(OLTS_FILE).exists() {
            debug!("seeding default OLT inventory");
            self.write_collection(OLTS_FILE, &seed::default_olts())?;
        }
        if !self.collection_path(NOTIFICATIONS_FILE).exists() {
            debug!("seeding default notifications");
            self.write_collection(NOTIFICATIONS_FILE, &seed::default_notifications())?;
        }
        Ok(())
    }

    fn collection_path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Read a whole collection. A missing or unreadable file and a parse
    /// failure all degrade to an empty collection; corruption is logged,
    /// never surfaced.
    fn read_collection<T: DeserializeOwned>(&self, file: &str) -> Vec<T> {
        let path = self.collection_path(file);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                warn!(file, error = %e, "collection blob is corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    /// Serialize and overwrite a whole collection.
    fn write_collection<T: Serialize>(&self, file: &str, records: &[T]) -> Result<()> {
        let path = self.collection_path(file);
        let content = serde_json::to_string_pretty(records)
            .with_context(|| format!("Failed to serialize collection: {}", file))?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write collection file: {}", path.display()))?;

        Ok(())
    }

    /// Upsert by id: replace in place on a match (preserving position),
    /// otherwise insert per `position`.
    fn upsert<T, F>(list: &mut Vec<T>, record: T, id_of: F, position: InsertAt)
    where
        F: Fn(&T) -> &str,
    {
        let id = id_of(&record).to_string();
        if let Some(index) = list.iter().position(|r| id_of(r) == id) {
            list[index] = record;
        } else {
            match position {
                InsertAt::Front => list.insert(0, record),
                InsertAt::Back => list.push(record),
            }
        }
    }

    // --- Users ---

    pub fn get_users(&self) -> Vec<User> {
        self.read_collection(USERS_FILE)
    }

    pub fn save_user(&self, user: User) -> Result<Vec<User>> {
        let mut list = self.get_users();
        Self::upsert(&mut list, user, |u| &u.id, InsertAt::Back);
        self.write_collection(USERS_FILE, &list)?;
        Ok(list)
    }

    /// Remove a user by id. Silent no-op when the id is absent.
    pub fn delete_user(&self, id: &str) -> Result<Vec<User>> {
        let mut list = self.get_users();
        list.retain(|u| u.id != id);
        self.write_collection(USERS_FILE, &list)?;
        Ok(list)
    }

    // --- OLT inventory ---

    pub fn get_olts(&self) -> Vec<OltRecord> {
        self.read_collection(OLTS_FILE)
    }

    pub fn save_olt(&self, olt: OltRecord) -> Result<Vec<OltRecord>> {
        let mut list = self.get_olts();
        Self::upsert(&mut list, olt, |o| &o.id, InsertAt::Front);
        self.write_collection(OLTS_FILE, &list)?;
        Ok(list)
    }

    /// Prepend a batch of records ahead of the existing inventory.
    /// No de-duplication is attempted against existing ids.
    pub fn bulk_insert_olts(&self, records: Vec<OltRecord>) -> Result<Vec<OltRecord>> {
        let mut list = records;
        list.extend(self.get_olts());
        self.write_collection(OLTS_FILE, &list)?;
        Ok(list)
    }

    /// Remove an OLT record by id. Silent no-op when the id is absent.
    pub fn delete_olt(&self, id: &str) -> Result<Vec<OltRecord>> {
        let mut list = self.get_olts();
        list.retain(|o| o.id != id);
        self.write_collection(OLTS_FILE, &list)?;
        Ok(list)
    }

    // --- Notifications ---

    pub fn get_notifications(&self) -> Vec<Notification> {
        self.read_collection(NOTIFICATIONS_FILE)
    }

    pub fn save_notification(&self, notification: Notification) -> Result<Vec<Notification>> {
        let mut list = self.get_notifications();
        Self::upsert(&mut list, notification, |n| &n.id, InsertAt::Front);
        self.write_collection(NOTIFICATIONS_FILE, &list)?;
        Ok(list)
    }

    /// Remove a notification by id. Silent no-op when the id is absent.
    pub fn delete_notification(&self, id: &str) -> Result<Vec<Notification>> {
        let mut list = self.get_notifications();
        list.retain(|n| n.id != id);
        self.write_collection(NOTIFICATIONS_FILE, &list)?;
        Ok(list)
    }

    // --- Store management ---

    /// Per-collection record counts.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            users: self.get_users().len(),
            olts: self.get_olts().len(),
            notifications: self.get_notifications().len(),
        }
    }

    /// Snapshot of all three collections with an export timestamp.
    pub fn full_backup(&self) -> DatabaseBackup {
        DatabaseBackup {
            users: self.get_users(),
            olts: self.get_olts(),
            notifications: self.get_notifications(),
            exported_at: Utc::now(),
        }
    }

    /// Destroy all collections and reseed the defaults. Irreversible.
    pub fn reset(&self) -> Result<()> {
        for file in [USERS_FILE, OLTS_FILE, NOTIFICATIONS_FILE] {
            let path = self.collection_path(file);
            if path.exists() {
                fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
            }
        }
        self.seed_missing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OltStatus, Role};
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> RecordStore {
        RecordStore::open(dir.path()).unwrap()
    }

    fn test_olt(code: &str) -> OltRecord {
        OltRecord::new(
            "Nokia".to_string(),
            "TST-POD-01".to_string(),
            code.to_string(),
            "TST-Core-01".to_string(),
            "Test Person".to_string(),
            "Kathmandu".to_string(),
            OltStatus::Active,
        )
    }

    #[test]
    fn test_first_run_seeds_defaults() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        assert!(!store.get_users().is_empty());
        assert!(!store.get_olts().is_empty());
        assert!(!store.get_notifications().is_empty());
    }

    #[test]
    fn test_reopen_does_not_reseed() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let olt = test_olt("TST-OLT-77");
        let id = olt.id.clone();
        store.save_olt(olt).unwrap();
        let count = store.get_olts().len();

        let reopened = open_store(&dir);
        assert_eq!(reopened.get_olts().len(), count);
        assert!(reopened.get_olts().iter().any(|o| o.id == id));
    }

    #[test]
    fn test_save_olt_prepends_new_records() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let olt = test_olt("TST-OLT-01");
        let id = olt.id.clone();
        let list = store.save_olt(olt).unwrap();

        assert_eq!(list[0].id, id);
    }

    #[test]
    fn test_save_user_appends_new_records() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let user = User::new(
            "New Operator".to_string(),
            "operator@fibernet.com.np".to_string(),
            Role::User,
            "All".to_string(),
        );
        let id = user.id.clone();
        let list = store.save_user(user).unwrap();

        assert_eq!(list.last().unwrap().id, id);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let olt = test_olt("TST-OLT-01");
        let id = olt.id.clone();
        store.save_olt(olt.clone()).unwrap();
        store.save_olt(test_olt("TST-OLT-02")).unwrap();

        let position = store.get_olts().iter().position(|o| o.id == id).unwrap();

        let mut updated = olt;
        updated.status = OltStatus::Maintenance;
        let list = store.save_olt(updated).unwrap();

        assert_eq!(list.len(), store.get_olts().len());
        assert_eq!(list[position].id, id);
        assert_eq!(list[position].status, OltStatus::Maintenance);
    }

    #[test]
    fn test_bulk_insert_prepends_batch() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let before = store.get_olts().len();

        let batch = vec![test_olt("TST-OLT-A"), test_olt("TST-OLT-B")];
        let list = store.bulk_insert_olts(batch).unwrap();

        assert_eq!(list.len(), before + 2);
        assert_eq!(list[0].olt_code, "TST-OLT-A");
        assert_eq!(list[1].olt_code, "TST-OLT-B");
    }

    #[test]
    fn test_delete_absent_id_is_silent_noop() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let before = store.get_notifications();

        let after = store.delete_notification("no-such-id").unwrap();

        assert_eq!(after.len(), before.len());
    }

    #[test]
    fn test_corrupt_collection_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        std::fs::write(dir.path().join("olts.json"), "{not valid json").unwrap();

        assert!(store.get_olts().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip_is_lossless() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let olt = test_olt("TST-OLT-RT");
        let saved = olt.clone();
        store.save_olt(olt).unwrap();

        let loaded = store
            .get_olts()
            .into_iter()
            .find(|o| o.id == saved.id)
            .unwrap();

        assert_eq!(
            serde_json::to_value(&loaded).unwrap(),
            serde_json::to_value(&saved).unwrap()
        );
    }

    #[test]
    fn test_reset_restores_seed_defaults() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        store.bulk_insert_olts(vec![test_olt("TST-OLT-X")]).unwrap();
        store.delete_user(&store.get_users()[0].id.clone()).unwrap();

        store.reset().unwrap();

        let stats = store.stats();
        assert_eq!(stats.users, seed::default_users().len());
        assert_eq!(stats.olts, seed::default_olts().len());
        assert_eq!(stats.notifications, seed::default_notifications().len());
    }

    #[test]
    fn test_full_backup_covers_all_collections() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let backup = store.full_backup();

        assert_eq!(backup.users.len(), store.get_users().len());
        assert_eq!(backup.olts.len(), store.get_olts().len());
        assert_eq!(backup.notifications.len(), store.get_notifications().len());
    }

    #[test]
    fn test_status_enum_wire_format() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        store.reset().unwrap();

        // Seed data contains one WARNING and one COMPLETED notification.
        let content = std::fs::read_to_string(dir.path().join("notifications.json")).unwrap();
        assert!(content.contains("\"WARNING\""));
        assert!(content.contains("\"COMPLETED\""));
    }
}
