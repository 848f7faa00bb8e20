use std::collections::BTreeSet;

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info};

use crate::models::notification::{AlertStatus, Notification};
use crate::models::{generate_id, OltRecord};
use crate::storage::store::RecordStore;

/// A submitted outage report.
///
/// The master and OLT lists arrive as comma-separated free text, exactly as
/// typed into the broadcast form.
#[derive(Debug, Clone, Default)]
pub struct AlertInput {
    pub title: String,
    pub masters_down_count: u32,
    /// Comma-separated master names, e.g. "Core-01, Core-02"
    pub affected_masters: String,
    pub olts_down_count: u32,
    /// Comma-separated OLT codes, e.g. "KTM-OLT-01, BKT-OLT-05"
    pub down_olts: String,
    pub impacted_customers: u32,
    pub reason: String,
    pub estimated_time: String,
    /// Defaults to WARNING on create; keeps the stored status on update
    pub status: Option<AlertStatus>,
}

/// Owns the outage notification lifecycle over a record store.
pub struct AlertManager<'a> {
    store: &'a RecordStore,
}

impl<'a> AlertManager<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Split a comma-separated free-text field into trimmed, non-empty items.
    pub fn split_list(text: &str) -> Vec<String> {
        text.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Resolve the responsible parties for a list of down terminal codes.
    ///
    /// Each code is matched case-insensitively against the OLT inventory;
    /// codes with no match are ignored rather than reported, and duplicate
    /// parties collapse. Best-effort resolution, not a validation gate.
    pub fn resolve_responsible_parties(&self, down_olt_codes: &[String]) -> BTreeSet<String> {
        let inventory = self.store.get_olts();
        Self::resolve_against(&inventory, down_olt_codes)
    }

    fn resolve_against(inventory: &[OltRecord], down_olt_codes: &[String]) -> BTreeSet<String> {
        let mut parties = BTreeSet::new();
        for code in down_olt_codes {
            if let Some(record) = inventory.iter().find(|o| o.matches_code(code)) {
                if !record.responsible_person.is_empty() {
                    parties.insert(record.responsible_person.clone());
                }
            } else {
                debug!(code = %code, "no inventory match for down terminal");
            }
        }
        parties
    }

    /// Create and persist a notification from an outage report.
    pub fn create(&self, input: AlertInput, created_by: &str) -> Result<Notification> {
        let now = Utc::now();
        let down_olts = Self::split_list(&input.down_olts);
        let notified: Vec<String> = self
            .resolve_responsible_parties(&down_olts)
            .into_iter()
            .collect();

        let notification = Notification {
            id: generate_id(),
            title: if input.title.is_empty() {
                "Untitled Outage".to_string()
            } else {
                input.title
            },
            masters_down_count: input.masters_down_count,
            affected_masters: Self::split_list(&input.affected_masters),
            olts_down_count: input.olts_down_count,
            down_olts_list: down_olts,
            impacted_customers: input.impacted_customers,
            reason: input.reason,
            estimated_time: if input.estimated_time.is_empty() {
                "Unknown".to_string()
            } else {
                input.estimated_time
            },
            alert_time: now,
            maintenance_start_time: None,
            resolved_time: None,
            status: input.status.unwrap_or(AlertStatus::Warning),
            created_by: created_by.to_string(),
            notified_persons: notified,
        };

        info!(
            id = %notification.id,
            status = notification.status.as_str(),
            notified = notification.notified_persons.len(),
            "broadcasting outage alert"
        );

        self.store.save_notification(notification.clone())?;
        Ok(notification)
    }

    /// Edit an existing notification, applying the timestamp-transition rule
    /// against its stored status.
    ///
    /// Returns `Ok(None)` without touching the store when `id` is unknown;
    /// an absent record is an outcome here, not an error.
    pub fn update(&self, id: &str, input: AlertInput) -> Result<Option<Notification>> {
        let Some(existing) = self
            .store
            .get_notifications()
            .into_iter()
            .find(|n| n.id == id)
        else {
            debug!(id, "update for unknown notification, nothing to do");
            return Ok(None);
        };

        let now = Utc::now();
        let down_olts = Self::split_list(&input.down_olts);
        let recomputed: Vec<String> = self
            .resolve_responsible_parties(&down_olts)
            .into_iter()
            .collect();

        let mut updated = existing.clone();
        updated.title = input.title;
        updated.masters_down_count = input.masters_down_count;
        updated.affected_masters = Self::split_list(&input.affected_masters);
        updated.olts_down_count = input.olts_down_count;
        updated.down_olts_list = down_olts;
        updated.impacted_customers = input.impacted_customers;
        updated.reason = input.reason;
        updated.estimated_time = input.estimated_time;
        updated.apply_status(input.status.unwrap_or(existing.status), now);

        // An empty recomputation must not regress an alert that already
        // reached someone.
        updated.notified_persons = if recomputed.is_empty() {
            existing.notified_persons
        } else {
            recomputed
        };

        self.store.save_notification(updated.clone())?;
        Ok(Some(updated))
    }

    /// Remove a notification. Idempotent whether or not the id exists.
    pub fn delete(&self, id: &str) -> Result<Vec<Notification>> {
        self.store.delete_notification(id)
    }
}
