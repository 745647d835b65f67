//! Integration tests for the Ollama provider using wiremock.

use dialectic_provider_ollama::Ollama;
use dialectic_types::{Message, ProviderError, Roster, Speaker, TurnProvider, TurnRequest};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn success_response_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "model": "llama3.2",
        "created_at": "2024-01-01T00:00:00Z",
        "message": {
            "role": "assistant",
            "content": text
        },
        "done": true,
        "done_reason": "stop",
        "eval_count": 10,
        "prompt_eval_count": 20,
        "total_duration": 5000000000_u64
    })
}

fn turn<'a>(history: &'a [Message], roster: &'a Roster) -> TurnRequest<'a> {
    TurnRequest {
        speaker: Speaker::B,
        topic: "Is cereal a soup?",
        history,
        roster,
    }
}

#[tokio::test]
async fn take_turn_sends_non_streaming_request_to_chat_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(
            serde_json::json!({"model": "llama3.2", "stream": false}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_response_body("No.")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = Ollama::new().base_url(mock_server.uri());
    let roster = Roster::default();
    let history = vec![Message::new(Speaker::A, "Cereal is soup.")];

    let reply = provider
        .take_turn(turn(&history, &roster))
        .await
        .expect("should succeed");
    assert_eq!(reply, Message::new(Speaker::B, "No."));
}

#[tokio::test]
async fn history_is_sent_as_labelled_user_messages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_response_body("ok")))
        .mount(&mock_server)
        .await;

    let provider = Ollama::new()
        .model("mistral")
        .keep_alive("5m")
        .base_url(mock_server.uri());
    let roster = Roster::default();
    let history = vec![
        Message::new(Speaker::A, "hi"),
        Message::new(Speaker::B, "hello"),
    ];
    provider
        .take_turn(turn(&history, &roster))
        .await
        .expect("should succeed");

    let requests = mock_server.received_requests().await.expect("recorded");
    let body: serde_json::Value = requests[0].body_json().expect("json body");
    assert_eq!(body["model"], "mistral");
    assert_eq!(body["keep_alive"], "5m");

    let messages = body["messages"].as_array().expect("messages");
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["content"], "OPENAI: hi");
    assert_eq!(messages[2]["content"], "OLLAMA: hello");
    assert!(
        messages[3]["content"]
            .as_str()
            .expect("text")
            .starts_with("It is now your turn")
    );
}

#[tokio::test]
async fn empty_reply_becomes_placeholder() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_response_body("")))
        .mount(&mock_server)
        .await;

    let provider = Ollama::new().base_url(mock_server.uri());
    let roster = Roster::default();
    let reply = provider
        .take_turn(turn(&[], &roster))
        .await
        .expect("empty text is not an error");
    assert_eq!(
        reply.content,
        dialectic_types::prompt::EMPTY_REPLY_PLACEHOLDER
    );
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("out of memory"))
        .mount(&mock_server)
        .await;

    let provider = Ollama::new().base_url(mock_server.uri());
    let roster = Roster::default();
    let err = provider.take_turn(turn(&[], &roster)).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("out of memory"));
}

#[tokio::test]
async fn model_not_found_surfaces_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"error":"model 'nope' not found"}"#),
        )
        .mount(&mock_server)
        .await;

    let provider = Ollama::new().model("nope").base_url(mock_server.uri());
    let roster = Roster::default();
    let err = provider.take_turn(turn(&[], &roster)).await.unwrap_err();
    assert!(matches!(err, ProviderError::Http { status: 404, .. }));
}

#[tokio::test]
async fn response_without_message_is_invalid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"model": "llama3.2"})),
        )
        .mount(&mock_server)
        .await;

    let provider = Ollama::new().base_url(mock_server.uri());
    let roster = Roster::default();
    let err = provider.take_turn(turn(&[], &roster)).await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidResponse(_)));
}
