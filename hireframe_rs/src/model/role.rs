use serde::{Deserialize, Serialize};

/// A hireable role from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub description: String,
}

/// The role catalog served while `GET /roles` is short-circuited to local
/// data (the backend table is not populated yet).
pub fn builtin_roles() -> Vec<Role> {
    let raw: &[(i64, &str, &str, &str)] = &[
        (1, "Software Engineer", "Engineering", "Builds and ships product features end to end."),
        (2, "Product Manager", "Product", "Owns the roadmap and turns customer problems into specs."),
        (3, "Product Designer", "Design", "Designs flows and interfaces from research to handoff."),
        (4, "Account Executive", "Sales", "Runs the full sales cycle from demo to close."),
        (5, "Growth Marketer", "Marketing", "Owns acquisition channels and the experiment pipeline."),
        (6, "Customer Success Manager", "Customer Success", "Keeps accounts healthy from onboarding to renewal."),
        (7, "Data Analyst", "Data", "Turns product and revenue data into decisions."),
        (8, "Operations Manager", "Operations", "Keeps hiring, finance, and vendor plumbing running."),
    ];
    raw.iter()
        .map(|&(id, title, category, description)| Role {
            id,
            title: title.into(),
            category: category.into(),
            description: description.into(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_unique_ids_and_titles() {
        let roles = builtin_roles();
        assert!(!roles.is_empty());
        let mut ids: Vec<i64> = roles.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), roles.len());
        assert!(roles.iter().all(|r| !r.title.is_empty()));
    }
}
