use serde::{Deserialize, Serialize};

/// An organization row as the backend returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub id: i64,
    /// Unix epoch millis, set by the backend.
    pub created_at: Option<i64>,
    pub name: String,
    pub industry: Option<String>,
    pub website: Option<String>,
    /// Employee-count band, e.g. "11-50".
    pub size: Option<String>,
    pub funding_status: Option<String>,
    pub revenue_band: Option<String>,
    pub profitable: Option<bool>,
    pub mission: Option<String>,
    /// Founding-story narrative shown to candidates.
    pub story: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Create payload for `POST /organization`; also the full body for
/// `PUT /organization/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewOrganization {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_band: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profitable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_deserializes_with_missing_columns() {
        let org: Organization = serde_json::from_str(r#"{"id": 7, "name": "Acme"}"#).unwrap();
        assert_eq!(org.id, 7);
        assert_eq!(org.name, "Acme");
        assert_eq!(org.industry, None);
        assert!(org.values.is_empty());
    }

    #[test]
    fn new_organization_omits_unset_columns() {
        let payload = NewOrganization {
            name: "Acme".into(),
            industry: Some("Robotics".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["name"], "Acme");
        assert_eq!(json["industry"], "Robotics");
        assert!(json.get("website").is_none());
        assert!(json.get("values").is_none());
    }
}
