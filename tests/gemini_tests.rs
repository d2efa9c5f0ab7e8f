#![cfg(feature = "gemini")]

use faq_chatbot::llm::{FaqAssistant, GeminiClient, DEFAULT_MODEL, SYSTEM_INSTRUCTION};
use faq_chatbot::{ChatSession, FaqChatbotError, KnowledgeBase, GENERATION_ERROR_PREFIX};
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn generate_path() -> String {
    format!("/models/{}:generateContent", DEFAULT_MODEL)
}

fn text_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": text}]}}
        ]
    }))
}

async fn assistant_for(server: &MockServer) -> FaqAssistant {
    let client = GeminiClient::new("test-key".to_string()).with_base_url(server.uri());
    FaqAssistant::new(client)
}

#[tokio::test]
async fn test_ask_sends_fixed_config_and_two_segments() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path()))
        .and(body_partial_json(json!({
            "generationConfig": {
                "temperature": 0.4,
                "topP": 0.95,
                "topK": 40,
                "maxOutputTokens": 8192,
                "responseMimeType": "text/plain"
            },
            "contents": [
                {"role": "user", "parts": [{"text": SYSTEM_INSTRUCTION}]},
                {"role": "user", "parts": [{"text": "User's question: What is this?"}]}
            ]
        })))
        .respond_with(text_response("It is a test."))
        .expect(1)
        .mount(&server)
        .await;

    let assistant = assistant_for(&server).await;
    let answer = assistant.ask("What is this?").await.unwrap();
    assert_eq!(answer, "It is a test.");
}

#[tokio::test]
async fn test_answer_is_trimmed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(text_response("\n  Brief answer.  \n"))
        .mount(&server)
        .await;

    let assistant = assistant_for(&server).await;
    assert_eq!(assistant.ask("q").await.unwrap(), "Brief answer.");
}

#[tokio::test]
async fn test_api_error_is_typed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(403).set_body_string("invalid key"))
        .mount(&server)
        .await;

    let assistant = assistant_for(&server).await;
    let err = assistant.ask("q").await.unwrap_err();
    assert!(matches!(err, FaqChatbotError::Generation(_)));
    assert!(err.to_string().contains("403"));
}

#[tokio::test]
async fn test_empty_candidates_is_generation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let assistant = assistant_for(&server).await;
    let err = assistant.ask("q").await.unwrap_err();
    assert!(matches!(err, FaqChatbotError::Generation(_)));
}

#[tokio::test]
async fn test_exchange_records_turn_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(text_response("Ask away!"))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let mut session = ChatSession::new(KnowledgeBase::new(dir.path()).unwrap());
    session
        .load_file("faq.csv", b"question,answer\nQ,A\n")
        .unwrap();

    let assistant = assistant_for(&server).await;
    let turn = session.exchange(&assistant, "Can I ask?").await;

    assert_eq!(turn.question, "Can I ask?");
    assert_eq!(turn.answer, "Ask away!");
    assert_eq!(session.history(), &[turn]);
}

#[tokio::test]
async fn test_exchange_degrades_failure_into_prefixed_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend down"))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let mut session = ChatSession::new(KnowledgeBase::new(dir.path()).unwrap());
    let assistant = assistant_for(&server).await;

    let turn = session.exchange(&assistant, "q").await;

    // The failure never aborts the turn; it is only distinguishable from a
    // genuine answer by the prefix convention.
    assert!(turn.answer.starts_with(GENERATION_ERROR_PREFIX));
    assert!(turn.answer.contains("backend down") || turn.answer.contains("500"));
    assert_eq!(session.history().len(), 1);
}

#[tokio::test]
async fn test_history_preserves_question_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(text_response("ok"))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let mut session = ChatSession::new(KnowledgeBase::new(dir.path()).unwrap());
    let assistant = assistant_for(&server).await;

    session.exchange(&assistant, "first").await;
    session.exchange(&assistant, "second").await;
    session.exchange(&assistant, "third").await;

    let questions: Vec<&str> = session
        .history()
        .iter()
        .map(|turn| turn.question.as_str())
        .collect();
    assert_eq!(questions, ["first", "second", "third"]);
}
