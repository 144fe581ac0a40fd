//! Informational tool: get_yok_info.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::ToolResult;

/// Static description of the backend, its operations, and endpoints.
const INFO_TEXT: &str = "YOK Akademik API Bilgileri\n\n\
YOK Akademik, Türkiye'deki üniversitelerde görev yapan akademisyenlerin \
bilgilerini içeren kapsamlı bir veritabanıdır.\n\n\
Mevcut özellikler:\n\
- Akademisyen Arama (search_academic_profiles)\n\
- İşbirlikçi Analizi (get_academic_collaborators)\n\n\
API Endpoints:\n\
- POST /api/search\n\
- POST /api/collaborators/{sessionId}\n\n\
Base URL: http://91.99.144.40:3002";

/// Backend information tool. No input, no network call, always the
/// same text.
pub struct YokInfoTool;

#[async_trait::async_trait]
impl McpTool for YokInfoTool {
    fn name(&self) -> &'static str {
        "get_yok_info"
    }

    fn description(&self) -> &'static str {
        "Get information about YOK Akademik API and available features"
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _ctx: &ToolContext, _input: serde_json::Value) -> ToolResult<String> {
        Ok(INFO_TEXT.to_string())
    }
}
