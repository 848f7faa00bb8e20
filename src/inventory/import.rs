use anyhow::Result;
use tracing::{info, warn};

use crate::models::olt::{OltRecord, OltStatus};
use crate::models::User;
use crate::storage::store::RecordStore;

/// Downloadable CSV template: header plus one sample row.
pub const CSV_TEMPLATE: &str = "Vendor Name,POD Name,OLT Code,Master Name,Responsible Person,Region\n\
                                Huawei,KTM-POD-99,KTM-TEST-01,KTM-CORE-01,John Doe,Kathmandu\n";

/// Result of parsing a CSV upload.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    /// Records accepted for insertion
    pub records: Vec<OltRecord>,
    /// Rows dropped because the importer's region scope excludes them
    pub skipped_region: usize,
    /// Rows dropped for having fewer than six columns
    pub skipped_malformed: usize,
}

impl ImportOutcome {
    pub fn accepted(&self) -> usize {
        self.records.len()
    }
}

/// Parse a CSV upload into inventory records.
///
/// Column order is fixed: Vendor, POD, OLT Code, Master, Responsible Person,
/// Region. A first line mentioning "vendor" is treated as a header and
/// skipped; blank lines and rows with fewer than six columns are dropped
/// silently. When `importer_region` names a single region, rows for any
/// other region are dropped as well — the gate is an exact string compare,
/// unlike the case-insensitive OLT-code matching elsewhere; that asymmetry
/// is inherited behavior and kept as-is. Imported records come in ACTIVE
/// with a fresh id, dated today.
pub fn parse_csv(text: &str, importer_region: &str) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();
    let region_restricted = importer_region != "All";

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if index == 0 && line.to_lowercase().contains("vendor") {
            continue;
        }

        let cols: Vec<&str> = line.split(',').collect();
        if cols.len() < 6 {
            outcome.skipped_malformed += 1;
            continue;
        }

        let region = cols[5].trim();
        if region_restricted && region != importer_region {
            warn!(region, scope = importer_region, "skipping out-of-scope import row");
            outcome.skipped_region += 1;
            continue;
        }

        outcome.records.push(OltRecord::new(
            cols[0].trim().to_string(),
            cols[1].trim().to_string(),
            cols[2].trim().to_string(),
            cols[3].trim().to_string(),
            cols[4].trim().to_string(),
            region.to_string(),
            OltStatus::Active,
        ));
    }

    outcome
}

/// Parse and persist a CSV upload on behalf of `importer`.
/// Returns the outcome; nothing is written when no row survives parsing.
pub fn import_csv(store: &RecordStore, text: &str, importer: &User) -> Result<ImportOutcome> {
    let outcome = parse_csv(text, &importer.region);

    if !outcome.records.is_empty() {
        store.bulk_insert_olts(outcome.records.clone())?;
    }

    info!(
        accepted = outcome.accepted(),
        skipped_region = outcome.skipped_region,
        skipped_malformed = outcome.skipped_malformed,
        importer = %importer.email,
        "processed inventory import"
    );

    Ok(outcome)
}
