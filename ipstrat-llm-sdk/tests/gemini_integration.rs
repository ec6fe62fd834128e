use ipstrat_llm_sdk::client::LlmClient;
use ipstrat_llm_sdk::error::LlmError;
use ipstrat_llm_sdk::gemini::{GeminiClient, GeminiGenerateContentRequest};
use ipstrat_llm_sdk::types::CompletionRequest;
use mockito::Matcher;
use serde_json::json;

const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

fn test_client(base_url: &str) -> GeminiClient {
    GeminiClient::new("test-key")
        .expect("client")
        .with_base_url(base_url)
}

#[tokio::test]
async fn test_generate_content_sends_key_as_query_param() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_body(Matcher::Json(json!({
            "contents": [{"parts": [{"text": "Hi"}]}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "Hello there"}]},
                    "finishReason": "STOP"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server.url());
    let response = client
        .generate_content("gemini-1.5-flash", GeminiGenerateContentRequest::from_prompt("Hi"))
        .await
        .expect("generate_content");

    assert_eq!(response.first_text(), Some("Hello there"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_complete_returns_first_candidate_text() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "candidates": [{
                    "content": {"parts": [{"text": "File the provisional first."}]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 5, "totalTokenCount": 17}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server.url());
    let response = client
        .complete(CompletionRequest::prompt("", "Which filing comes first?"))
        .await
        .expect("complete");

    assert_eq!(response.text(), "File the provisional first.");
    assert_eq!(response.usage.input_tokens, 12);
    assert_eq!(response.usage.output_tokens, 5);
    assert_eq!(response.stop_reason.as_deref(), Some("STOP"));
}

#[tokio::test]
async fn test_quota_response_maps_to_rate_limit() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": {
                    "code": 429,
                    "message": "Resource has been exhausted (e.g. check quota).",
                    "status": "RESOURCE_EXHAUSTED"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server.url());
    let err = client
        .complete(CompletionRequest::prompt("", "Hi"))
        .await
        .expect_err("quota must fail");

    assert!(err.is_quota());
    assert!(matches!(err, LlmError::RateLimit { .. }));
}

#[tokio::test]
async fn test_provider_error_message_is_preserved() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-0:generateContent")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": {"code": 404, "message": "models/gemini-0 is not found", "status": "NOT_FOUND"}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server.url()).with_model("gemini-0");
    let err = client
        .complete(CompletionRequest::prompt("", "Hi"))
        .await
        .expect_err("404 must fail");

    assert!(matches!(err, LlmError::Api { status: 404, .. }));
    assert_eq!(err.provider_message(), "models/gemini-0 is not found");
}

#[tokio::test]
async fn test_unreachable_provider_is_transport_error() {
    let client = test_client("http://127.0.0.1:1");
    let err = client
        .complete(CompletionRequest::prompt("", "Hi"))
        .await
        .expect_err("nothing listens on port 1");

    assert!(err.is_transport());
}

#[tokio::test]
async fn test_list_models() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1beta/models")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "models": [
                    {"name": "models/gemini-1.5-flash", "supportedGenerationMethods": ["generateContent", "countTokens"]},
                    {"name": "models/text-embedding-004", "supportedGenerationMethods": ["embedContent"]}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server.url());
    let models = client.list_models().await.expect("list_models");

    let generative: Vec<&str> = models
        .iter()
        .filter(|m| m.supports_generate_content())
        .map(|m| m.id())
        .collect();
    assert_eq!(generative, vec!["gemini-1.5-flash"]);
}

fn hello_body() -> String {
    json!({
        "candidates": [{"content": {"parts": [{"text": "Hello"}]}, "finishReason": "STOP"}]
    })
    .to_string()
}

fn not_found_body(model: &str) -> String {
    json!({
        "error": {"code": 404, "message": format!("models/{} is not found", model), "status": "NOT_FOUND"}
    })
    .to_string()
}

#[tokio::test]
async fn test_model_sweep_stops_at_first_working_model() {
    let mut server = mockito::Server::new_async().await;
    let missing = server
        .mock("POST", "/v1beta/models/gemini-old:generateContent")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(not_found_body("gemini-old"))
        .expect(1)
        .create_async()
        .await;
    let working = server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": {"maxOutputTokens": 16}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(hello_body())
        .expect(1)
        .create_async()
        .await;
    let untouched = server
        .mock("POST", "/v1beta/models/gemini-1.5-pro:generateContent")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(hello_body())
        .expect(0)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let probe = client
        .probe_models(&["gemini-old", "gemini-1.5-flash", "gemini-1.5-pro"], true)
        .await;

    assert_eq!(probe.working, vec!["gemini-1.5-flash".to_string()]);
    assert_eq!(probe.failures.len(), 1);
    assert_eq!(probe.failures[0].0, "gemini-old");
    assert_eq!(
        probe.failures[0].1.provider_message(),
        "models/gemini-old is not found"
    );

    missing.assert_async().await;
    working.assert_async().await;
    untouched.assert_async().await;
}

#[tokio::test]
async fn test_full_sweep_covers_every_candidate() {
    let mut server = mockito::Server::new_async().await;
    let any_model = server
        .mock("POST", Matcher::Regex(r"^/v1beta/models/.+:generateContent$".to_string()))
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(hello_body())
        .expect(2)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let probe = client
        .probe_models(&["gemini-1.5-flash", "gemini-1.5-pro"], false)
        .await;

    assert_eq!(probe.working.len(), 2);
    assert!(probe.failures.is_empty());
    any_model.assert_async().await;
}

#[tokio::test]
#[ignore]
async fn test_live_gemini_completion() {
    let api_key = std::env::var("GOOGLE_API_KEY").expect("GOOGLE_API_KEY required");
    let client = GeminiClient::new(api_key).expect("Failed to create Gemini client");

    let response = client
        .message_builder()
        .model(client.model_name())
        .user_message("What is 2+2? Answer in one word.")
        .max_output_tokens(50)
        .send()
        .await
        .expect("Failed to get response");

    let text = response.first_text().expect("Expected text response");
    assert!(text.contains('4') || text.to_lowercase().contains("four"));
}
