use serde::{Deserialize, Serialize};

/// A job post row as the backend returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPost {
    pub id: i64,
    pub created_at: Option<i64>,
    pub team_id: i64,
    /// Catalog role this post was seeded from, if any.
    pub role_id: Option<i64>,
    pub title: String,
    pub seniority: Option<String>,
    /// Hire timeline, e.g. "0-3 months".
    pub timeline: Option<String>,
    /// Compensation band as entered, e.g. "$140k-$180k".
    pub compensation: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub traits: Vec<String>,
    pub summary: Option<String>,
}

/// Create payload for `POST /job_post`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewJobPost {
    pub team_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seniority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensation: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub traits: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Partial update for `PATCH /job_post/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seniority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_post_deserializes_with_missing_columns() {
        let post: JobPost =
            serde_json::from_str(r#"{"id": 11, "team_id": 3, "title": "Backend Engineer"}"#)
                .unwrap();
        assert_eq!(post.title, "Backend Engineer");
        assert_eq!(post.role_id, None);
        assert!(post.skills.is_empty());
    }
}
