use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::models::Notification;

const LOG_HEADERS: [&str; 11] = [
    "Notification ID",
    "Title / Area",
    "Current Status",
    "Investigation Started (Down Time)",
    "Maintenance Started",
    "Resolved Time",
    "Masters Down",
    "OLTs Down",
    "Impacted Customers",
    "Reason",
    "Notified Staff",
];

/// Render the notification log as CSV.
///
/// Text fields are quoted with embedded double quotes doubled; unset
/// maintenance/resolved timestamps export as "N/A".
pub fn render_log_csv(notifications: &[Notification]) -> String {
    let mut lines = Vec::with_capacity(notifications.len() + 1);
    lines.push(LOG_HEADERS.join(","));

    for n in notifications {
        let row = [
            n.id.clone(),
            quote(&n.title),
            n.status.as_str().to_string(),
            quote(&format_time(Some(n.alert_time))),
            quote(&format_time(n.maintenance_start_time)),
            quote(&format_time(n.resolved_time)),
            n.masters_down_count.to_string(),
            n.olts_down_count.to_string(),
            n.impacted_customers.to_string(),
            quote(&n.reason),
            quote(&n.notified_persons.join(", ")),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Write the notification log CSV to a file.
pub fn write_log_csv<P: AsRef<Path>>(path: P, notifications: &[Notification]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_log_csv(notifications))
        .with_context(|| format!("Failed to write log export: {}", path.display()))?;
    Ok(())
}

fn format_time(time: Option<DateTime<Utc>>) -> String {
    match time {
        Some(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "N/A".to_string(),
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlertStatus;
    use chrono::TimeZone;

    fn notification(title: &str, reason: &str) -> Notification {
        Notification {
            id: "n-export".to_string(),
            title: title.to_string(),
            masters_down_count: 2,
            affected_masters: vec!["Core-01".to_string()],
            olts_down_count: 3,
            down_olts_list: vec!["KTM-OLT-01".to_string()],
            impacted_customers: 900,
            reason: reason.to_string(),
            estimated_time: "2 Hours".to_string(),
            alert_time: Utc.with_ymd_and_hms(2023, 10, 27, 10, 0, 0).unwrap(),
            maintenance_start_time: None,
            resolved_time: None,
            status: AlertStatus::Warning,
            created_by: "Admin".to_string(),
            notified_persons: vec!["Ramesh Gupta".to_string(), "Hari Sharma".to_string()],
        }
    }

    #[test]
    fn test_header_row_is_fixed() {
        let csv = render_log_csv(&[]);
        assert_eq!(csv, LOG_HEADERS.join(","));
    }

    #[test]
    fn test_unset_timestamps_export_as_na() {
        let csv = render_log_csv(&[notification("Outage", "Fiber cut")]);
        let data_row = csv.lines().nth(1).unwrap();

        assert!(data_row.contains("\"N/A\",\"N/A\""));
        assert!(data_row.contains("\"2023-10-27 10:00:00\""));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let csv = render_log_csv(&[notification("The \"big\" cut", "cable \"snapped\"")]);
        let data_row = csv.lines().nth(1).unwrap();

        assert!(data_row.contains("\"The \"\"big\"\" cut\""));
        assert!(data_row.contains("\"cable \"\"snapped\"\"\""));
    }

    #[test]
    fn test_notified_staff_joined_by_comma() {
        let csv = render_log_csv(&[notification("Outage", "Fiber cut")]);
        let data_row = csv.lines().nth(1).unwrap();

        assert!(data_row.ends_with("\"Ramesh Gupta, Hari Sharma\""));
    }
}
