//! Data models for YOK Akademik API entities.
//!
//! Response models use `#[serde(default)]` on non-required fields so a
//! sparse backend payload still deserializes. Wire names that differ
//! from Rust naming (`sessionId`, `photoUrl`, `profileId`) carry
//! per-field renames.

mod inputs;
mod profile;

pub use inputs::{CollaboratorsInput, SearchProfilesInput, SearchRequest};
pub use profile::{Collaborator, CollaboratorsResponse, Profile, SearchResponse};
