//! Fixed first-run dataset.
//!
//! The seed records double as the demo environment: three accounts covering
//! every role, a small OLT inventory across four regions, and one open plus
//! one resolved notification.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::models::notification::{AlertStatus, Notification};
use crate::models::olt::{OltRecord, OltStatus};
use crate::models::user::{Permissions, Role, User};

pub fn default_users() -> Vec<User> {
    vec![
        User {
            id: "u1".to_string(),
            name: "Super Admin".to_string(),
            email: "admin@fibernet.com.np".to_string(),
            role: Role::SuperAdmin,
            region: "All".to_string(),
            last_login: "2023-10-27 10:30 AM".to_string(),
            active: true,
            permissions: Permissions {
                can_view_dashboard: true,
                can_view_notifications: true,
                can_manage_users: true,
                can_create_notifications: true,
                can_manage_olts: true,
                can_export_data: true,
            },
        },
        User {
            id: "u2".to_string(),
            name: "Network Engineer (KTM)".to_string(),
            email: "engineer@fibernet.com.np".to_string(),
            role: Role::Admin,
            region: "Kathmandu".to_string(),
            last_login: "2023-10-26 09:15 AM".to_string(),
            active: true,
            permissions: Permissions {
                can_view_dashboard: true,
                can_view_notifications: true,
                can_manage_users: false,
                can_create_notifications: true,
                can_manage_olts: true,
                can_export_data: true,
            },
        },
        User {
            id: "u3".to_string(),
            name: "Support Staff (PKR)".to_string(),
            email: "support@fibernet.com.np".to_string(),
            role: Role::User,
            region: "Pokhara".to_string(),
            last_login: "2023-10-27 08:00 AM".to_string(),
            active: true,
            permissions: Permissions {
                can_view_dashboard: true,
                can_view_notifications: true,
                can_manage_users: false,
                can_create_notifications: false,
                can_manage_olts: false,
                can_export_data: false,
            },
        },
    ]
}

pub fn default_olts() -> Vec<OltRecord> {
    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    vec![
        OltRecord {
            id: "d1".to_string(),
            vendor_name: "Huawei".to_string(),
            pod_name: "KTM-POD-01".to_string(),
            olt_code: "KTM-OLT-01".to_string(),
            master_name: "KTM-Core-01".to_string(),
            responsible_person: "Ramesh Gupta".to_string(),
            region: "Kathmandu".to_string(),
            added_at: date(2023, 1, 15),
            status: OltStatus::Active,
        },
        OltRecord {
            id: "d2".to_string(),
            vendor_name: "Nokia".to_string(),
            pod_name: "BKT-POD-05".to_string(),
            olt_code: "BKT-OLT-01".to_string(),
            master_name: "BKT-Core-01".to_string(),
            responsible_person: "Suresh Shrestha".to_string(),
            region: "Bhaktapur".to_string(),
            added_at: date(2023, 2, 20),
            status: OltStatus::Active,
        },
        OltRecord {
            id: "d3".to_string(),
            vendor_name: "ZTE".to_string(),
            pod_name: "LAL-POD-02".to_string(),
            olt_code: "LAL-OLT-01".to_string(),
            master_name: "LAL-Core-01".to_string(),
            responsible_person: "Anita Rai".to_string(),
            region: "Lalitpur".to_string(),
            added_at: date(2023, 3, 10),
            status: OltStatus::Inactive,
        },
        OltRecord {
            id: "d4".to_string(),
            vendor_name: "Huawei".to_string(),
            pod_name: "PKR-POD-10".to_string(),
            olt_code: "PKR-OLT-01".to_string(),
            master_name: "PKR-Core-01".to_string(),
            responsible_person: "Hari Sharma".to_string(),
            region: "Pokhara".to_string(),
            added_at: date(2023, 4, 5),
            status: OltStatus::Maintenance,
        },
    ]
}

pub fn default_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "n1".to_string(),
            title: "Major Fiber Cut - Bhaktapur Area".to_string(),
            masters_down_count: 1,
            affected_masters: vec!["BKT-Core-01".to_string()],
            olts_down_count: 3,
            down_olts_list: vec![
                "BKT-OLT-01".to_string(),
                "BKT-OLT-02".to_string(),
                "BKT-OLT-05".to_string(),
            ],
            impacted_customers: 2400,
            reason: "NEA pole shifting caused fiber cut near Sallaghari.".to_string(),
            estimated_time: "4 Hours".to_string(),
            alert_time: Utc.with_ymd_and_hms(2023, 10, 27, 10, 0, 0).unwrap(),
            maintenance_start_time: None,
            resolved_time: None,
            status: AlertStatus::Warning,
            created_by: "Network Engineer".to_string(),
            notified_persons: vec!["Suresh Shrestha".to_string()],
        },
        Notification {
            id: "n2".to_string(),
            title: "Scheduled Maintenance - Lalitpur".to_string(),
            masters_down_count: 0,
            affected_masters: Vec::new(),
            olts_down_count: 1,
            down_olts_list: vec!["LAL-OLT-03".to_string()],
            impacted_customers: 500,
            reason: "Software upgrade on OLT.".to_string(),
            estimated_time: "Completed".to_string(),
            alert_time: Utc.with_ymd_and_hms(2023, 10, 26, 2, 0, 0).unwrap(),
            maintenance_start_time: Some(Utc.with_ymd_and_hms(2023, 10, 26, 2, 15, 0).unwrap()),
            resolved_time: Some(Utc.with_ymd_and_hms(2023, 10, 26, 4, 0, 0).unwrap()),
            status: AlertStatus::Completed,
            created_by: "Super Admin".to_string(),
            notified_persons: Vec::new(),
        },
    ]
}
