//! Output formatting for tool results.
//!
//! Everything the connector returns is a single plain-text block; these
//! functions own the templates.

mod text;

pub use text::{
    collaborators_failed_text, format_collaborator_report, format_search_results,
    profile_unavailable_text, search_failed_text, tool_failure_text,
};
