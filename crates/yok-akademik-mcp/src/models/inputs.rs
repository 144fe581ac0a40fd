//! Input models for MCP tool parameters and outbound request bodies.

use serde::{Deserialize, Serialize};

/// Input for the profile search tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchProfilesInput {
    /// Name to search for (e.g., "mert yıl").
    pub name: String,

    /// Email filter.
    #[serde(default)]
    pub email: Option<String>,

    /// Field ID filter.
    #[serde(default)]
    pub field_id: Option<i64>,

    /// Specialty ID filters (e.g., ["all"] or specific IDs).
    #[serde(default)]
    pub specialty_ids: Option<Vec<String>>,
}

/// Input for the collaborator lookup tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaboratorsInput {
    /// Session token from a prior search result, passed through verbatim.
    #[serde(rename = "sessionId")]
    pub session_id: String,

    /// Profile ID to get collaborators for.
    #[serde(rename = "profileId")]
    pub profile_id: i64,
}

/// Outbound body for `POST /api/search`.
///
/// Optional keys are omitted entirely when unsupplied; the backend
/// distinguishes an absent filter from an empty one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Name to search for.
    pub name: String,

    /// Email filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Field ID filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_id: Option<i64>,

    /// Specialty ID filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty_ids: Option<Vec<String>>,
}

impl From<SearchProfilesInput> for SearchRequest {
    fn from(input: SearchProfilesInput) -> Self {
        Self {
            name: input.name,
            // Empty-string and zero filters are treated as unsupplied.
            email: input.email.filter(|e| !e.is_empty()),
            field_id: input.field_id.filter(|id| *id != 0),
            specialty_ids: input.specialty_ids,
        }
    }
}
