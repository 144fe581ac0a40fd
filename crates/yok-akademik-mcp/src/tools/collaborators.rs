//! Collaborator lookup tool: get_academic_collaborators.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::ToolResult;
use crate::formatters;
use crate::models::CollaboratorsInput;

/// Collaborator lookup tool.
///
/// Requires a session token from a prior search; the token is passed
/// through verbatim, validity is owned by the backend.
pub struct CollaboratorsTool;

#[async_trait::async_trait]
impl McpTool for CollaboratorsTool {
    fn name(&self) -> &'static str {
        "get_academic_collaborators"
    }

    fn description(&self) -> &'static str {
        "Get collaborators for a specific academic profile using YOK Akademik API"
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "sessionId": {
                    "type": "string",
                    "description": "Session ID from search results"
                },
                "profileId": {
                    "type": "integer",
                    "description": "Profile ID to get collaborators for"
                }
            },
            "required": ["sessionId", "profileId"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: CollaboratorsInput = serde_json::from_value(input)?;

        let reply = match ctx.client.collaborators(&params.session_id, params.profile_id).await {
            Ok(reply) => reply,
            Err(e) => return Ok(formatters::tool_failure_text(&e.to_string())),
        };
        let response = &reply.response;

        tracing::debug!(
            session_id = %params.session_id,
            profile_id = params.profile_id,
            completed = response.completed,
            status = %response.status,
            "Collaborator response received"
        );

        if !response.success {
            // Echo the body as received; the typed view drops keys it
            // does not declare (e.g. a backend "error" message).
            return Ok(formatters::collaborators_failed_text(&reply.raw.to_string()));
        }

        // success:true with no profile object is a distinct backend bug.
        let Some(profile) = response.profile.as_ref() else {
            return Ok(formatters::profile_unavailable_text());
        };

        Ok(formatters::format_collaborator_report(profile, response))
    }
}
