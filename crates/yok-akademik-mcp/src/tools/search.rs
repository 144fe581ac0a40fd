//! Profile search tool: search_academic_profiles.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{SearchProfilesInput, SearchRequest};

/// Academic profile search tool.
pub struct SearchProfilesTool;

#[async_trait::async_trait]
impl McpTool for SearchProfilesTool {
    fn name(&self) -> &'static str {
        "search_academic_profiles"
    }

    fn description(&self) -> &'static str {
        "Search for academic profiles in Turkish universities using YOK Akademik API"
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Name to search for (e.g., 'mert yıl')"
                },
                "email": {
                    "type": "string",
                    "description": "Email filter (optional)"
                },
                "field_id": {
                    "type": "integer",
                    "description": "Field ID filter (optional)"
                },
                "specialty_ids": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Specialty IDs filter (optional, e.g., ['all'] or specific IDs)"
                }
            },
            "required": ["name"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SearchProfilesInput = serde_json::from_value(input)?;
        let queried_name = params.name.clone();
        let request = SearchRequest::from(params);

        let response = match ctx.client.search_profiles(&request).await {
            Ok(response) => response,
            Err(e) => return Ok(formatters::tool_failure_text(&e.to_string())),
        };

        if !response.success {
            return Ok(formatters::search_failed_text());
        }

        Ok(formatters::format_search_results(&queried_name, &response))
    }
}
