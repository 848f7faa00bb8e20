use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::generate_id;
use crate::models::validation::{Validatable, ValidationContext, Validators};

/// Operational status of an OLT
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OltStatus {
    /// Terminal is in service
    Active,
    /// Terminal is out of service
    Inactive,
    /// Terminal is undergoing planned maintenance
    Maintenance,
}

impl OltStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OltStatus::Active => "ACTIVE",
            OltStatus::Inactive => "INACTIVE",
            OltStatus::Maintenance => "MAINTENANCE",
        }
    }
}

/// An Optical Line Terminal inventory record.
///
/// The internal `id` is generator-assigned and immutable; `olt_code` is the
/// externally meaningful business key and is compared case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OltRecord {
    pub id: String,
    pub vendor_name: String,
    pub pod_name: String,
    pub olt_code: String,
    pub master_name: String,
    pub responsible_person: String,
    pub region: String,
    pub added_at: NaiveDate,
    pub status: OltStatus,
}

impl OltRecord {
    /// Create a new inventory record dated today.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        vendor_name: String,
        pod_name: String,
        olt_code: String,
        master_name: String,
        responsible_person: String,
        region: String,
        status: OltStatus,
    ) -> Self {
        Self {
            id: generate_id(),
            vendor_name,
            pod_name,
            olt_code,
            master_name,
            responsible_person,
            region,
            added_at: Utc::now().date_naive(),
            status,
        }
    }

    /// Case-insensitive match on the terminal business key.
    pub fn matches_code(&self, code: &str) -> bool {
        self.olt_code.eq_ignore_ascii_case(code)
    }
}

impl Validatable for OltRecord {
    fn validate_with_context(&self, ctx: &mut ValidationContext) {
        for (field, value) in [
            ("vendorName", &self.vendor_name),
            ("podName", &self.pod_name),
            ("oltCode", &self.olt_code),
            ("masterName", &self.master_name),
            ("responsiblePerson", &self.responsible_person),
            ("region", &self.region),
        ] {
            ctx.enter_field(field);
            if let Err(e) = Validators::not_empty(value, field) {
                ctx.add_error(e);
            }
            ctx.exit_field();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_olt(code: &str) -> OltRecord {
        OltRecord::new(
            "Huawei".to_string(),
            "KTM-POD-01".to_string(),
            code.to_string(),
            "KTM-Core-01".to_string(),
            "Ramesh Gupta".to_string(),
            "Kathmandu".to_string(),
            OltStatus::Active,
        )
    }

    #[test]
    fn test_code_match_is_case_insensitive() {
        let olt = sample_olt("ktm-olt-01");

        assert!(olt.matches_code("KTM-OLT-01"));
        assert!(olt.matches_code("Ktm-Olt-01"));
        assert!(!olt.matches_code("KTM-OLT-02"));
    }

    #[test]
    fn test_validation_rejects_blank_fields() {
        let mut olt = sample_olt("KTM-OLT-01");
        olt.responsible_person = "  ".to_string();

        assert!(olt.validate().is_err());
    }
}
