use crate::models::{OltRecord, User};

/// Restrict the inventory to what `user` is allowed to see.
///
/// A user scoped to a named region sees only that region's records; "All"
/// sees everything.
pub fn visible_to(olts: Vec<OltRecord>, user: &User) -> Vec<OltRecord> {
    if !user.is_region_restricted() {
        return olts;
    }
    olts.into_iter()
        .filter(|o| o.region == user.region)
        .collect()
}

/// Case-insensitive substring search across the fields operators actually
/// look things up by: OLT code, master name, region and responsible person.
pub fn search(olts: Vec<OltRecord>, term: &str) -> Vec<OltRecord> {
    if term.trim().is_empty() {
        return olts;
    }
    let term = term.to_lowercase();
    olts.into_iter()
        .filter(|o| {
            o.olt_code.to_lowercase().contains(&term)
                || o.master_name.to_lowercase().contains(&term)
                || o.region.to_lowercase().contains(&term)
                || o.responsible_person.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OltStatus, Role};

    fn olt(code: &str, region: &str, person: &str) -> OltRecord {
        OltRecord::new(
            "Huawei".to_string(),
            "POD-01".to_string(),
            code.to_string(),
            "Core-01".to_string(),
            person.to_string(),
            region.to_string(),
            OltStatus::Active,
        )
    }

    fn user(region: &str) -> User {
        User::new(
            "Operator".to_string(),
            "operator@fibernet.com.np".to_string(),
            Role::User,
            region.to_string(),
        )
    }

    #[test]
    fn test_region_scope_filters_records() {
        let olts = vec![
            olt("KTM-OLT-01", "Kathmandu", "Ramesh Gupta"),
            olt("PKR-OLT-01", "Pokhara", "Hari Sharma"),
        ];

        let scoped = visible_to(olts.clone(), &user("Pokhara"));
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].region, "Pokhara");

        let all = visible_to(olts, &user("All"));
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_search_matches_any_lookup_field() {
        let olts = vec![
            olt("KTM-OLT-01", "Kathmandu", "Ramesh Gupta"),
            olt("PKR-OLT-01", "Pokhara", "Hari Sharma"),
        ];

        assert_eq!(search(olts.clone(), "pkr-olt").len(), 1);
        assert_eq!(search(olts.clone(), "gupta").len(), 1);
        assert_eq!(search(olts.clone(), "KATHMANDU").len(), 1);
        assert_eq!(search(olts.clone(), "").len(), 2);
        assert!(search(olts, "no-match").is_empty());
    }
}
