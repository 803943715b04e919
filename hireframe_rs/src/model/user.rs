use serde::{Deserialize, Serialize};

/// The signed-in user as `/auth/me` returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub created_at: Option<i64>,
    pub email: String,
    pub name: Option<String>,
    /// Account role, e.g. "employer".
    pub role: Option<String>,
    /// Last wizard main step the user finished, e.g. "organization".
    pub onboarding_stage: Option<String>,
    pub organization_complete: bool,
    pub team_complete: bool,
}

/// Partial update for `PATCH /auth/me` and `PATCH /user/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding_stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_complete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_complete: Option<bool>,
}

impl UserPatch {
    /// Best-effort full user payload: the cached user with this patch laid
    /// over it. Used when the backend rejects a partial PATCH and the call
    /// is replayed as a PUT.
    pub fn merged_with(&self, cached: &User) -> User {
        User {
            name: self.name.clone().or_else(|| cached.name.clone()),
            role: self.role.clone().or_else(|| cached.role.clone()),
            onboarding_stage: self
                .onboarding_stage
                .clone()
                .or_else(|| cached.onboarding_stage.clone()),
            organization_complete: self
                .organization_complete
                .unwrap_or(cached.organization_complete),
            team_complete: self.team_complete.unwrap_or(cached.team_complete),
            ..cached.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cached_user() -> User {
        User {
            id: 42,
            email: "founder@acme.dev".into(),
            name: Some("Jamie".into()),
            role: Some("employer".into()),
            onboarding_stage: Some("organization".into()),
            organization_complete: true,
            team_complete: false,
            ..Default::default()
        }
    }

    #[test]
    fn merged_with_keeps_cached_fields_the_patch_leaves_unset() {
        let patch = UserPatch {
            team_complete: Some(true),
            ..Default::default()
        };
        let merged = patch.merged_with(&cached_user());
        assert_eq!(merged.id, 42);
        assert_eq!(merged.name.as_deref(), Some("Jamie"));
        assert!(merged.organization_complete);
        assert!(merged.team_complete);
    }

    #[test]
    fn merged_with_prefers_patch_values() {
        let patch = UserPatch {
            onboarding_stage: Some("team".into()),
            ..Default::default()
        };
        let merged = patch.merged_with(&cached_user());
        assert_eq!(merged.onboarding_stage.as_deref(), Some("team"));
    }
}
