//! Chat completions client against a mock inference endpoint.

mod common;

use ai_inference_rust::sample::SampleVariant;
use ai_inference_rust::{
    ChatCompletionsApi, ChatCompletionsClient, ChatCompletionsOptions, ChatRequestMessage, Error,
    ErrorClass, ModelType,
};
use common::{api_version_query, chat_body, MockServerFixture};
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn sends_fixed_two_turn_request() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/chat/completions")
        .match_query(api_version_query())
        .match_header("content-type", "application/json")
        .match_header(
            "x-ms-client-request-id",
            Matcher::Regex("^[0-9a-f-]{36}$".into()),
        )
        .match_body(Matcher::Json(json!({
            "model": "TinyLlama/TinyLlama-1.1B-Chat-v1.0",
            "messages": [
                {"role": "system", "content": "You are a helpful assistant."},
                {"role": "user", "content": "How many feet are in a mile?"}
            ],
            "max_tokens": 256
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_body("There are 5280 feet in a mile.", 25, 9))
        .create_async()
        .await;

    let client = fixture.client("");
    let response = client
        .complete(SampleVariant::AzureFoundry.options())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        response.choices[0].message.text(),
        "There are 5280 feet in a mile."
    );
    assert_eq!(response.usage.prompt_tokens, 25);
    assert_eq!(response.usage.completion_tokens, 9);
    assert_eq!(response.usage.total_tokens, 34);
}

#[tokio::test]
async fn empty_credential_sends_no_auth_headers() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/chat/completions")
        .match_query(api_version_query())
        .match_header("authorization", Matcher::Missing)
        .match_header("api-key", Matcher::Missing)
        .with_status(200)
        .with_body(chat_body("ok", 1, 1))
        .create_async()
        .await;

    let client = fixture.client("");
    assert_eq!(client.credential().key(), "");
    client
        .complete(SampleVariant::DefaultModel.options())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn credential_is_sent_as_bearer_and_api_key() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/chat/completions")
        .match_query(api_version_query())
        .match_header("authorization", "Bearer test-key")
        .match_header("api-key", "test-key")
        .with_status(200)
        .with_body(chat_body("ok", 1, 1))
        .create_async()
        .await;

    fixture
        .client("test-key")
        .complete(SampleVariant::DefaultModel.options())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn default_model_fills_unset_request_model() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/chat/completions")
        .match_query(api_version_query())
        .match_body(Matcher::PartialJson(json!({"model": "Phi-4", "max_tokens": 128})))
        .with_status(200)
        .with_body(chat_body("ok", 1, 1))
        .create_async()
        .await;

    let client = ChatCompletionsClient::builder(fixture.base_url.as_str(), "")
        .model("Phi-4")
        .build()
        .unwrap();
    client
        .complete(SampleVariant::DefaultModel.options())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn model_extras_request_pass_through() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/chat/completions")
        .match_query(api_version_query())
        .match_header("extra-parameters", "pass-through")
        .match_body(Matcher::PartialJson(json!({"logprobs": true})))
        .with_status(200)
        .with_body(chat_body("ok", 1, 1))
        .create_async()
        .await;

    let options = ChatCompletionsOptions::new(vec![ChatRequestMessage::user("Hi")])
        .model_extra("logprobs", json!(true));
    fixture.client("").complete(options).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn pinned_api_version_is_sent() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/chat/completions")
        .match_query(Matcher::UrlEncoded(
            "api-version".into(),
            "2025-04-01".into(),
        ))
        .with_status(200)
        .with_body(chat_body("ok", 1, 1))
        .create_async()
        .await;

    let client = ChatCompletionsClient::builder(fixture.base_url.as_str(), "")
        .api_version("2025-04-01")
        .build()
        .unwrap();
    client
        .complete(SampleVariant::AzureFoundry.options())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[test]
fn unsupported_api_version_fails_at_build() {
    let result = ChatCompletionsClient::builder("http://localhost", "")
        .api_version("2023-05-15")
        .build();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[tokio::test]
async fn azure_error_body_becomes_remote_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("POST", "/chat/completions")
        .match_query(api_version_query())
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"code": "Unauthorized", "message": "Access denied due to invalid subscription key."}}"#)
        .create_async()
        .await;

    let err = fixture
        .client("wrong")
        .complete(SampleVariant::AzureFoundry.options())
        .await
        .unwrap_err();

    match err {
        Error::Remote {
            status,
            class,
            code,
            message,
        } => {
            assert_eq!(status, 401);
            assert_eq!(class, ErrorClass::Authentication);
            assert_eq!(code.as_deref(), Some("Unauthorized"));
            assert_eq!(message, "Access denied due to invalid subscription key.");
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn plain_error_body_is_kept_verbatim() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("POST", "/chat/completions")
        .match_query(api_version_query())
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let err = fixture
        .client("")
        .complete(SampleVariant::AzureFoundry.options())
        .await
        .unwrap_err();

    assert_eq!(err.class(), Some(ErrorClass::Overloaded));
    assert_eq!(
        err.to_string(),
        "Remote error: HTTP 503 (overloaded): upstream unavailable"
    );
}

#[tokio::test]
async fn malformed_success_body_is_a_serialization_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("POST", "/chat/completions")
        .match_query(api_version_query())
        .with_status(200)
        .with_body(r#"{"choices": "nope"}"#)
        .create_async()
        .await;

    let err = fixture
        .client("")
        .complete(SampleVariant::AzureFoundry.options())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Bind then drop to get a local port with nothing listening.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let client = ChatCompletionsClient::builder(format!("http://127.0.0.1:{port}"), "")
        .build()
        .unwrap();
    let err = client
        .complete(SampleVariant::AzureFoundry.options())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn invalid_request_never_reaches_the_server() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let err = fixture
        .client("")
        .complete(ChatCompletionsOptions::new(Vec::new()).max_tokens(16))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));

    mock.assert_async().await;
}

#[tokio::test]
async fn model_info_is_fetched() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/info")
        .match_query(api_version_query())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "model_name": "TinyLlama-1.1B-Chat-v1.0",
                "model_type": "chat-completion",
                "model_provider_name": "TinyLlama"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let info = fixture.client("").get_model_info().await.unwrap();

    mock.assert_async().await;
    assert_eq!(info.model_name, "TinyLlama-1.1B-Chat-v1.0");
    assert_eq!(info.model_type, ModelType::ChatCompletion);
    assert_eq!(info.model_provider_name, "TinyLlama");
}
