//! Translation pipeline integration tests
//!
//! Tests the prompt chain end to end with a mock chat model and with the
//! Groq client against a local mock HTTP server.

use serde_json::json;
use translatr::config::LlmConfig;
use translatr::error::{Result, TranslatrError};
use translatr::llm::{ChatModel, CompletionResponse, GroqClient, Message, MockChatModel};
use translatr::prompt::{PromptChain, variables};
use translatr::translate::{Language, LanguagePolicy, TranslationRequest, Translator, translation_template};

fn mock_translator(responses: Vec<Result<CompletionResponse>>) -> Translator<MockChatModel> {
    Translator::new(MockChatModel::new(responses), LanguagePolicy::Open).unwrap()
}

/// Integration test: every supported language renders the fixed system prompt
#[test]
fn test_one_call_per_language_with_rendered_prompt() {
    for language in Language::ALL {
        let translator = mock_translator(vec![Ok(CompletionResponse::text("ok"))]);
        let text = "Hello, my name is Kunal and I am a Gen AI Developer...";

        translator
            .translate(&TranslationRequest::new(text, language.name()))
            .unwrap();

        let requests = translator.model().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].messages,
            vec![
                Message::system(format!("Translate the following message into {}:", language)),
                Message::user(text),
            ]
        );
    }
}

/// Integration test: missing variables never reach the model
#[test]
fn test_missing_variables_make_zero_calls() {
    let chain = PromptChain::new(translation_template().unwrap(), MockChatModel::replying("unused"));

    let err = chain.invoke(&variables([("language", "French")])).unwrap_err();
    assert!(matches!(err, TranslatrError::MissingVariable { ref name } if name == "text"));

    let err = chain.invoke(&variables([("text", "Hello")])).unwrap_err();
    assert!(matches!(err, TranslatrError::MissingVariable { ref name } if name == "language"));

    assert_eq!(chain.model().call_count(), 0);
}

/// Integration test: a `{"content": ...}` payload is returned exactly
#[test]
fn test_content_payload_returned_exactly() -> std::result::Result<(), serde_json::Error> {
    let payload: CompletionResponse = serde_json::from_value(json!({"content": "Bonjour"}))?;
    let chain = PromptChain::new(translation_template().unwrap(), MockChatModel::new(vec![Ok(payload)]));

    let result = chain
        .invoke(&variables([("language", "French"), ("text", "Hello")]))
        .unwrap();
    assert_eq!(result, "Bonjour");
    Ok(())
}

/// Integration test: transport errors propagate after a single attempt
#[test]
fn test_transport_error_propagates_without_retry() {
    let translator = mock_translator(vec![
        Err(TranslatrError::remote("connection refused")),
        Ok(CompletionResponse::text("never")),
    ]);

    let err = translator
        .translate(&TranslationRequest::new("Hello", "French"))
        .unwrap_err();

    assert!(matches!(err, TranslatrError::RemoteCall { .. }));
    assert_eq!(translator.model().call_count(), 1);
}

/// Integration test: a payload with no text field is a parse error
#[test]
fn test_payload_without_text_is_parse_error() {
    let payload: CompletionResponse = serde_json::from_value(json!({"model": "x"})).unwrap();
    let translator = mock_translator(vec![Ok(payload)]);

    let err = translator
        .translate(&TranslationRequest::new("Hello", "French"))
        .unwrap_err();
    assert!(matches!(err, TranslatrError::Parse(_)));
}

/// Integration test: whitespace-only input is rejected before the chain
#[test]
fn test_whitespace_input_rejected_before_call() {
    let translator = mock_translator(vec![]);

    let err = translator
        .translate(&TranslationRequest::new("   ", "French"))
        .unwrap_err();

    assert!(matches!(err, TranslatrError::EmptyInput));
    assert_eq!(translator.model().call_count(), 0);
}

/// Integration test: the translator is reusable across independent calls
#[test]
fn test_template_reused_across_invocations() {
    let translator = mock_translator(vec![
        Ok(CompletionResponse::text("Bonjour")),
        Ok(CompletionResponse::text("Hola")),
    ]);

    let first = translator
        .translate(&TranslationRequest::new("Hello", "French"))
        .unwrap();
    let second = translator
        .translate(&TranslationRequest::new("Hello", "Spanish"))
        .unwrap();

    assert_eq!(first, "Bonjour");
    assert_eq!(second, "Hola");
    let requests = translator.model().requests();
    assert_eq!(requests[1].messages[0].content, "Translate the following message into Spanish:");
}

fn groq_translator(server: &mockito::Server) -> Translator<GroqClient> {
    let config = LlmConfig {
        base_url: server.url(),
        timeout_ms: 2_000,
        ..Default::default()
    };
    let client = GroqClient::with_api_key("gsk_test", &config).unwrap();
    Translator::new(client, LanguagePolicy::Open).unwrap()
}

/// Integration test: full pipeline over HTTP
#[test]
fn test_groq_pipeline_success() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer gsk_test")
        .match_body(mockito::Matcher::PartialJson(json!({
            "model": "llama-3.3-70b-versatile",
            "messages": [
                { "role": "system", "content": "Translate the following message into French:" },
                { "role": "user", "content": "Hello" }
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "chatcmpl-1",
                "model": "llama-3.3-70b-versatile",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": "Bonjour" },
                    "finish_reason": "stop"
                }],
                "usage": { "prompt_tokens": 18, "completion_tokens": 2, "total_tokens": 20 }
            })
            .to_string(),
        )
        .expect(1)
        .create();

    let translator = groq_translator(&server);
    let result = translator
        .translate(&TranslationRequest::new("Hello", "French"))
        .unwrap();

    assert_eq!(result, "Bonjour");
    assert_eq!(translator.model().model(), "llama-3.3-70b-versatile");
    mock.assert();
}

/// Integration test: HTTP auth failure surfaces once as a remote call error
#[test]
fn test_groq_pipeline_auth_failure() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Invalid API Key"}}"#)
        .expect(1)
        .create();

    let translator = groq_translator(&server);
    let err = translator
        .translate(&TranslationRequest::new("Hello", "French"))
        .unwrap_err();

    assert!(matches!(err, TranslatrError::RemoteCall { status: Some(401), .. }));
    mock.assert();
}

/// Integration test: HTTP success without message content is a parse error
#[test]
fn test_groq_pipeline_missing_content() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"role":"assistant"},"finish_reason":"stop"}]}"#)
        .create();

    let translator = groq_translator(&server);
    let err = translator
        .translate(&TranslationRequest::new("Hello", "French"))
        .unwrap_err();

    assert!(matches!(err, TranslatrError::Parse(_)));
}

/// Integration test: blank input never opens a connection
#[test]
fn test_groq_pipeline_blank_input_no_request() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/chat/completions").expect(0).create();

    let translator = groq_translator(&server);
    let err = translator
        .translate(&TranslationRequest::new(" \n ", "French"))
        .unwrap_err();

    assert!(matches!(err, TranslatrError::EmptyInput));
    mock.assert();
}
