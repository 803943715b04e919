use serde::{Deserialize, Serialize};

/// A team row as the backend returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: i64,
    pub created_at: Option<i64>,
    pub organization_id: i64,
    pub title: String,
    /// What the team does, e.g. "Engineering".
    pub function: Option<String>,
    /// "remote" | "hybrid" | "onsite".
    pub location_mode: Option<String>,
    pub pace: Option<String>,
    pub collaboration: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
    pub culture_summary: Option<String>,
}

/// Create payload for `POST /team`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTeam {
    pub organization_id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaboration: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culture_summary: Option<String>,
}

/// Partial update for `PATCH /team/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaboration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culture_summary: Option<String>,
}
