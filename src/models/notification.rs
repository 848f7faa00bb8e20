use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle stage of an outage notification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertStatus {
    /// Outage reported, investigation in progress
    Warning,
    /// Maintenance crew is working on the fault
    Running,
    /// Service restored
    Completed,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Warning => "WARNING",
            AlertStatus::Running => "RUNNING",
            AlertStatus::Completed => "COMPLETED",
        }
    }

    /// Operator-facing label for the stage.
    pub fn display_label(&self) -> &'static str {
        match self {
            AlertStatus::Warning => "Investigation",
            AlertStatus::Running => "Maintenance",
            AlertStatus::Completed => "Resolved",
        }
    }
}

/// An outage notification.
///
/// `alert_time` is fixed at creation. `maintenance_start_time` and
/// `resolved_time` are each written at most once, by the first transition
/// into RUNNING and COMPLETED respectively; moving a notification backward
/// does not clear them (see `apply_status`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub masters_down_count: u32,
    pub affected_masters: Vec<String>,
    pub olts_down_count: u32,
    pub down_olts_list: Vec<String>,
    pub impacted_customers: u32,
    pub reason: String,
    /// Free-text estimate, e.g. "2 Hours"
    pub estimated_time: String,
    /// When the outage was reported; never changes after creation
    pub alert_time: DateTime<Utc>,
    /// Set by the first transition into RUNNING
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_start_time: Option<DateTime<Utc>>,
    /// Set by the first transition into COMPLETED
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_time: Option<DateTime<Utc>>,
    pub status: AlertStatus,
    pub created_by: String,
    /// Responsible parties alerted for the down terminals; derived, not
    /// hand-edited
    #[serde(default)]
    pub notified_persons: Vec<String>,
}

impl Notification {
    /// Move the notification to `next`, applying the one-directional
    /// timestamp side effects.
    ///
    /// Any status may be set to any other status; only the bookkeeping is
    /// restricted. `maintenance_start_time` is written when entering RUNNING
    /// from another stage and still unset, `resolved_time` when entering
    /// COMPLETED from another stage and still unset. Backward moves leave
    /// both fields as they are.
    pub fn apply_status(&mut self, next: AlertStatus, now: DateTime<Utc>) {
        match next {
            AlertStatus::Running => {
                if self.status != AlertStatus::Running && self.maintenance_start_time.is_none() {
                    self.maintenance_start_time = Some(now);
                }
            }
            AlertStatus::Completed => {
                if self.status != AlertStatus::Completed && self.resolved_time.is_none() {
                    self.resolved_time = Some(now);
                }
            }
            AlertStatus::Warning => {}
        }
        self.status = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_notification(status: AlertStatus) -> Notification {
        Notification {
            id: "n-test".to_string(),
            title: "Fiber Cut - Bhaktapur".to_string(),
            masters_down_count: 1,
            affected_masters: vec!["BKT-Core-01".to_string()],
            olts_down_count: 2,
            down_olts_list: vec!["BKT-OLT-01".to_string(), "BKT-OLT-02".to_string()],
            impacted_customers: 2400,
            reason: "Pole shifting caused fiber cut".to_string(),
            estimated_time: "4 Hours".to_string(),
            alert_time: Utc.with_ymd_and_hms(2023, 10, 27, 10, 0, 0).unwrap(),
            maintenance_start_time: None,
            resolved_time: None,
            status,
            created_by: "Network Engineer".to_string(),
            notified_persons: Vec::new(),
        }
    }

    #[test]
    fn test_first_transition_to_running_sets_maintenance_start() {
        let mut n = sample_notification(AlertStatus::Warning);
        let t1 = Utc.with_ymd_and_hms(2023, 10, 27, 11, 0, 0).unwrap();

        n.apply_status(AlertStatus::Running, t1);

        assert_eq!(n.status, AlertStatus::Running);
        assert_eq!(n.maintenance_start_time, Some(t1));
        assert_eq!(n.resolved_time, None);
    }

    #[test]
    fn test_reentering_running_does_not_overwrite_timestamp() {
        let mut n = sample_notification(AlertStatus::Warning);
        let t1 = Utc.with_ymd_and_hms(2023, 10, 27, 11, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2023, 10, 27, 12, 0, 0).unwrap();

        n.apply_status(AlertStatus::Running, t1);
        n.apply_status(AlertStatus::Running, t2);

        assert_eq!(n.maintenance_start_time, Some(t1));
    }

    #[test]
    fn test_full_lifecycle_sets_each_timestamp_once() {
        let mut n = sample_notification(AlertStatus::Warning);
        let t1 = Utc.with_ymd_and_hms(2023, 10, 27, 11, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2023, 10, 27, 14, 0, 0).unwrap();
        let t3 = Utc.with_ymd_and_hms(2023, 10, 27, 15, 0, 0).unwrap();

        n.apply_status(AlertStatus::Running, t1);
        n.apply_status(AlertStatus::Completed, t2);
        // Subsequent edits must not move either timestamp.
        n.apply_status(AlertStatus::Completed, t3);

        assert_eq!(n.maintenance_start_time, Some(t1));
        assert_eq!(n.resolved_time, Some(t2));
    }

    #[test]
    fn test_warning_straight_to_completed_skips_maintenance_start() {
        let mut n = sample_notification(AlertStatus::Warning);
        let t1 = Utc.with_ymd_and_hms(2023, 10, 27, 11, 0, 0).unwrap();

        n.apply_status(AlertStatus::Completed, t1);

        assert_eq!(n.maintenance_start_time, None);
        assert_eq!(n.resolved_time, Some(t1));
    }

    #[test]
    fn test_backward_transition_keeps_stale_timestamps() {
        let mut n = sample_notification(AlertStatus::Warning);
        let t1 = Utc.with_ymd_and_hms(2023, 10, 27, 11, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2023, 10, 27, 12, 0, 0).unwrap();

        n.apply_status(AlertStatus::Completed, t1);
        n.apply_status(AlertStatus::Warning, t2);

        // Reverting to WARNING leaves the resolved timestamp in place.
        assert_eq!(n.status, AlertStatus::Warning);
        assert_eq!(n.resolved_time, Some(t1));

        // Completing again later does not overwrite it either.
        n.apply_status(AlertStatus::Completed, t2);
        assert_eq!(n.resolved_time, Some(t1));
    }

    #[test]
    fn test_serialization_round_trip_is_lossless() {
        let mut n = sample_notification(AlertStatus::Running);
        n.maintenance_start_time = Some(Utc.with_ymd_and_hms(2023, 10, 27, 11, 0, 0).unwrap());
        n.notified_persons = vec!["Ramesh Gupta".to_string()];

        let json = serde_json::to_string(&n).unwrap();
        let back: Notification = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, n.id);
        assert_eq!(back.status, n.status);
        assert_eq!(back.alert_time, n.alert_time);
        assert_eq!(back.maintenance_start_time, n.maintenance_start_time);
        assert_eq!(back.resolved_time, None);
        assert_eq!(back.notified_persons, n.notified_persons);
    }
}
