//! Wire models matching the YOK Akademik API schema.

use serde::{Deserialize, Serialize};

/// A single academic's record as returned by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Numeric profile identifier.
    pub id: i64,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Academic title (e.g., "Doç. Dr.").
    #[serde(default)]
    pub title: String,

    /// Canonical profile URL.
    #[serde(default)]
    pub url: String,

    /// Free-text info line.
    #[serde(default)]
    pub info: String,

    /// Photo reference.
    #[serde(default, rename = "photoUrl")]
    pub photo_url: String,

    /// Institution header (university / faculty / department).
    #[serde(default)]
    pub header: String,

    /// Categorical field label.
    #[serde(default)]
    pub green_label: String,

    /// Categorical specialty label.
    #[serde(default)]
    pub blue_label: String,

    /// Free-text keywords.
    #[serde(default)]
    pub keywords: String,

    /// Contact email. Often empty.
    #[serde(default)]
    pub email: String,
}

/// A co-author relationship record. Same shape as [`Profile`] plus
/// status and soft-delete flags; the institution lives in `info`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collaborator {
    /// Numeric profile identifier.
    pub id: i64,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Academic title.
    #[serde(default)]
    pub title: String,

    /// Institution line.
    #[serde(default)]
    pub info: String,

    /// Categorical field label.
    #[serde(default)]
    pub green_label: String,

    /// Categorical specialty label.
    #[serde(default)]
    pub blue_label: String,

    /// Free-text keywords.
    #[serde(default)]
    pub keywords: String,

    /// Photo reference.
    #[serde(default, rename = "photoUrl")]
    pub photo_url: String,

    /// Crawl status for this entry.
    #[serde(default)]
    pub status: String,

    /// Soft-delete flag.
    #[serde(default)]
    pub deleted: bool,

    /// Canonical profile URL.
    #[serde(default)]
    pub url: String,

    /// Contact email.
    #[serde(default)]
    pub email: String,
}

/// Response of `POST /api/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Whether the backend accepted the search.
    pub success: bool,

    /// Opaque session token; required verbatim by the collaborator
    /// endpoint. Lifecycle is fully owned by the backend.
    #[serde(default, rename = "sessionId")]
    pub session_id: String,

    /// Matching profiles, ordered by the backend.
    #[serde(default)]
    pub profiles: Vec<Profile>,

    /// Total match count.
    #[serde(default)]
    pub total_profiles: i64,
}

/// Response of `POST /api/collaborators/{sessionId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollaboratorsResponse {
    /// Whether the backend accepted the request.
    pub success: bool,

    /// Session token echoed back.
    #[serde(default, rename = "sessionId")]
    pub session_id: String,

    /// The originating profile. Absent on some otherwise-successful
    /// responses; callers must handle that case distinctly.
    #[serde(default)]
    pub profile: Option<Profile>,

    /// Co-author records, ordered by the backend.
    #[serde(default)]
    pub collaborators: Vec<Collaborator>,

    /// Total collaborator count.
    #[serde(default)]
    pub total_collaborators: i64,

    /// Whether the backend's background crawl has finished. Partial
    /// results are surfaced as-is; the connector does not poll.
    #[serde(default)]
    pub completed: bool,

    /// Backend status string.
    #[serde(default)]
    pub status: String,

    /// Backend timestamp. Carried for wire fidelity, never rendered.
    #[serde(default)]
    pub timestamp: Option<i64>,
}
