//! Mock-based tool tests using wiremock.
//!
//! These tests verify actual tool behavior by mocking the YOK Akademik API.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use yok_akademik_mcp::client::YokAkademikClient;
use yok_akademik_mcp::config::Config;
use yok_akademik_mcp::tools::{CollaboratorsTool, McpTool, SearchProfilesTool, ToolContext, YokInfoTool};

/// Create a test context with a mock server.
fn setup_test_context(mock_server: &MockServer) -> ToolContext {
    let config = Config::for_testing(&mock_server.uri());
    let client = YokAkademikClient::new(config).unwrap();
    ToolContext::new(Arc::new(client))
}

/// Sample profile JSON for mocking.
fn sample_profile_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "title": "Prof. Dr.",
        "url": format!("https://akademik.yok.gov.tr/{id}"),
        "info": "",
        "photoUrl": "",
        "header": "Ankara Üniversitesi",
        "green_label": "Mühendislik",
        "blue_label": "Bilgisayar Bilimleri",
        "keywords": "",
        "email": format!("{id}@edu.tr")
    })
}

fn sample_search_result(profiles: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "success": true,
        "sessionId": "session-abc",
        "total_profiles": profiles.len(),
        "profiles": profiles
    })
}

// =============================================================================
// SearchProfilesTool Tests
// =============================================================================

#[tokio::test]
async fn test_search_sends_only_name_when_no_filters() {
    let mock_server = MockServer::start().await;

    // body_json matches the body exactly: any extra key fails the match.
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .and(body_json(json!({"name": "mert yıl"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_search_result(vec![
            sample_profile_json(1, "Mert Yılmaz"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let tool = SearchProfilesTool;

    let result = tool.execute(&ctx, json!({"name": "mert yıl"})).await.unwrap();
    assert!(result.contains("Mert Yılmaz"));
}

#[tokio::test]
async fn test_search_sends_all_supplied_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/search"))
        .and(body_json(json!({
            "name": "ayşe",
            "email": "ayse@edu.tr",
            "field_id": 7,
            "specialty_ids": ["all"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_search_result(vec![])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let tool = SearchProfilesTool;

    let result = tool
        .execute(
            &ctx,
            json!({
                "name": "ayşe",
                "email": "ayse@edu.tr",
                "field_id": 7,
                "specialty_ids": ["all"]
            }),
        )
        .await
        .unwrap();

    assert!(result.contains("Hiç sonuç bulunamadı"));
}

#[tokio::test]
async fn test_search_zero_field_id_omitted_from_body() {
    let mock_server = MockServer::start().await;

    // A zero field filter counts as unsupplied, like an empty email.
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .and(body_json(json!({"name": "x"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_search_result(vec![])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let tool = SearchProfilesTool;

    let result = tool
        .execute(&ctx, json!({"name": "x", "field_id": 0, "email": ""}))
        .await
        .unwrap();
    assert!(result.contains("Hiç sonuç bulunamadı"));
}

#[tokio::test]
async fn test_search_renders_numbered_entries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_search_result(vec![
            sample_profile_json(10, "Birinci Kişi"),
            sample_profile_json(20, "İkinci Kişi"),
            sample_profile_json(30, "Üçüncü Kişi"),
        ])))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let tool = SearchProfilesTool;

    let result = tool.execute(&ctx, json!({"name": "kişi"})).await.unwrap();

    assert!(result.contains("1. Birinci Kişi (ID: 10)"));
    assert!(result.contains("2. İkinci Kişi (ID: 20)"));
    assert!(result.contains("3. Üçüncü Kişi (ID: 30)"));
    assert!(result.contains("Session ID: session-abc"));
    assert!(result.contains("Toplam Sonuç: 3"));
}

#[tokio::test]
async fn test_search_zero_results_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_search_result(vec![])))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let tool = SearchProfilesTool;

    let result = tool.execute(&ctx, json!({"name": "kimse"})).await.unwrap();

    assert!(result.contains("❌ Hiç sonuç bulunamadı."));
    assert!(!result.contains("Bulunan Profiller"));
}

#[tokio::test]
async fn test_search_backend_failure_returns_error_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let tool = SearchProfilesTool;

    let result = tool.execute(&ctx, json!({"name": "x"})).await.unwrap();

    assert_eq!(result, "Error: Search request was not successful");
}

#[tokio::test]
async fn test_search_server_error_becomes_error_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let tool = SearchProfilesTool;

    let result = tool.execute(&ctx, json!({"name": "x"})).await.unwrap();

    assert!(result.starts_with("❌ Hata:"), "got: {result}");
    assert!(result.contains("500"));
}

#[tokio::test]
async fn test_search_timeout_becomes_error_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_search_result(vec![]))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let mut config = Config::for_testing(&mock_server.uri());
    config.request_timeout = std::time::Duration::from_millis(200);
    let client = YokAkademikClient::new(config).unwrap();
    let ctx = ToolContext::new(Arc::new(client));
    let tool = SearchProfilesTool;

    let result = tool.execute(&ctx, json!({"name": "x"})).await.unwrap();

    assert!(result.starts_with("❌ Hata:"), "got: {result}");
    assert!(result.contains("timed out"), "got: {result}");
}

#[tokio::test]
async fn test_search_malformed_response_becomes_error_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ invalid json here"))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let tool = SearchProfilesTool;

    let result = tool.execute(&ctx, json!({"name": "x"})).await.unwrap();

    assert!(result.starts_with("❌ Hata:"), "got: {result}");
}

#[tokio::test]
async fn test_search_rejects_missing_name() {
    let mock_server = MockServer::start().await;
    let ctx = setup_test_context(&mock_server);
    let tool = SearchProfilesTool;

    // Malformed arguments are a protocol error, not a rendered text.
    let result = tool.execute(&ctx, json!({})).await;
    assert!(result.is_err());
}

// =============================================================================
// CollaboratorsTool Tests
// =============================================================================

fn sample_collaborator_json(id: i64, name: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "title": "Dr. Öğr. Üyesi",
        "info": "İstanbul Teknik Üniversitesi",
        "green_label": "Mühendislik",
        "blue_label": "Yazılım",
        "keywords": "dağıtık sistemler",
        "photoUrl": "",
        "status": status,
        "deleted": false,
        "url": format!("https://akademik.yok.gov.tr/{id}"),
        "email": ""
    })
}

#[tokio::test]
async fn test_collaborators_posts_profile_id_to_session_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/collaborators/session-abc"))
        .and(body_json(json!({"profileId": 42})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "sessionId": "session-abc",
            "profile": sample_profile_json(42, "Ana Profil"),
            "collaborators": [
                sample_collaborator_json(1, "Ortak Bir", "done"),
                sample_collaborator_json(2, "Ortak İki", "done")
            ],
            "total_collaborators": 2,
            "completed": true,
            "status": "completed",
            "timestamp": 1_700_000_000
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let tool = CollaboratorsTool;

    let result = tool
        .execute(&ctx, json!({"sessionId": "session-abc", "profileId": 42}))
        .await
        .unwrap();

    assert!(result.contains("Ana Profil: Ana Profil (ID: 42)"));
    assert!(result.contains("Toplam İşbirlikçi: 2"));
    assert!(result.contains("✅ Tamamlandı"));
    assert!(result.contains("1. Ortak Bir (ID: 1)"));
    assert!(result.contains("2. Ortak İki (ID: 2)"));
    assert!(result.contains("📊 Durum: done"));
}

#[tokio::test]
async fn test_collaborators_backend_failure_includes_raw_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/collaborators/bad-session"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": false, "status": "expired"})),
        )
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let tool = CollaboratorsTool;

    let result = tool
        .execute(&ctx, json!({"sessionId": "bad-session", "profileId": 1}))
        .await
        .unwrap();

    assert!(result.contains("İşbirlikçi bilgileri alınamadı"));
    assert!(result.contains("API Response:"));
    assert!(result.contains("expired"));
    assert!(!result.contains("Ana Profil:"));
}

#[tokio::test]
async fn test_collaborators_failure_echoes_body_verbatim() {
    let mock_server = MockServer::start().await;

    // The echoed payload must keep keys the typed model does not
    // declare, and must not grow keys the backend never sent.
    Mock::given(method("POST"))
        .and(path("/api/collaborators/bad-session"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": false, "error": "Oturum bulunamadı"})),
        )
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let tool = CollaboratorsTool;

    let result = tool
        .execute(&ctx, json!({"sessionId": "bad-session", "profileId": 1}))
        .await
        .unwrap();

    assert!(result.contains(r#""error":"Oturum bulunamadı""#), "got: {result}");
    assert!(!result.contains("sessionId"), "got: {result}");
    assert!(!result.contains("profile"), "got: {result}");
    assert!(!result.contains("timestamp"), "got: {result}");
}

#[tokio::test]
async fn test_collaborators_missing_profile_distinct_error() {
    let mock_server = MockServer::start().await;

    // success:true but no profile object.
    Mock::given(method("POST"))
        .and(path("/api/collaborators/session-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "sessionId": "session-abc",
            "collaborators": [],
            "total_collaborators": 0,
            "completed": false,
            "status": "processing"
        })))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let tool = CollaboratorsTool;

    let result = tool
        .execute(&ctx, json!({"sessionId": "session-abc", "profileId": 42}))
        .await
        .unwrap();

    assert!(result.contains("profile objesi bulunamadı"));
    assert!(!result.contains("API Response:"));
}

#[tokio::test]
async fn test_collaborators_in_progress_rendered_as_is() {
    let mock_server = MockServer::start().await;

    // Backend crawl still running: no polling, the partial state is
    // rendered once with the in-progress marker.
    Mock::given(method("POST"))
        .and(path("/api/collaborators/session-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "sessionId": "session-abc",
            "profile": sample_profile_json(42, "Ana Profil"),
            "collaborators": [],
            "total_collaborators": 0,
            "completed": false,
            "status": "processing"
        })))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let tool = CollaboratorsTool;

    let result = tool
        .execute(&ctx, json!({"sessionId": "session-abc", "profileId": 42}))
        .await
        .unwrap();

    assert!(result.contains("⏳ Devam ediyor"));
    assert!(result.contains("Durum: processing"));
    assert!(result.contains("❌ İşbirlikçi bulunamadı."));
}

#[tokio::test]
async fn test_collaborators_connection_failure_becomes_error_text() {
    // Point at a server that no longer exists.
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let config = Config::for_testing(&uri);
    let client = YokAkademikClient::new(config).unwrap();
    let ctx = ToolContext::new(Arc::new(client));
    let tool = CollaboratorsTool;

    let result = tool
        .execute(&ctx, json!({"sessionId": "s", "profileId": 1}))
        .await
        .unwrap();

    assert!(result.starts_with("❌ Hata:"), "got: {result}");
}

#[tokio::test]
async fn test_collaborators_rejects_missing_arguments() {
    let mock_server = MockServer::start().await;
    let ctx = setup_test_context(&mock_server);
    let tool = CollaboratorsTool;

    let result = tool.execute(&ctx, json!({"sessionId": "only-session"})).await;
    assert!(result.is_err());
}

// =============================================================================
// YokInfoTool Tests
// =============================================================================

#[tokio::test]
async fn test_info_is_static_and_stateless() {
    let mock_server = MockServer::start().await;
    let ctx = setup_test_context(&mock_server);
    let tool = YokInfoTool;

    let first = tool.execute(&ctx, json!({})).await.unwrap();
    let second = tool.execute(&ctx, json!({})).await.unwrap();

    assert_eq!(first, second);
    assert!(first.contains("YOK Akademik API Bilgileri"));
    assert!(first.contains("search_academic_profiles"));
    assert!(first.contains("get_academic_collaborators"));
    assert!(first.contains("POST /api/search"));
    assert!(first.contains("POST /api/collaborators/{sessionId}"));

    // No network call was made.
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
