//! Tests for the public library API: prompt building and completion requests.

use std::cell::RefCell;

use projexbuzz::{
    AppError, CompletionClient, CompletionConfig, CompletionRequest, ERROR_PREFIX, PostRequest,
    PostResult, build_prompt, generate_post, request_completion,
};
use proptest::prelude::*;

const GUIDELINES: [&str; 9] = [
    "1. Start with an exciting hook about the project launch",
    "2. Briefly explain what problem the project solves",
    "3. Highlight 2-3 key features or capabilities",
    "4. Mention the tech stack naturally",
    "5. Include a clear call-to-action (like checking out the project, providing feedback, or connecting)",
    "6. Add 3-4 relevant hashtags",
    "7. Use appropriate emojis to make the post engaging",
    "8. Keep it under 1300 characters",
    "9. Use line breaks for better readability",
];

/// Stub transport answering every call the same way.
struct StubClient {
    reply: Result<String, String>,
    calls: RefCell<Vec<CompletionRequest>>,
}

impl StubClient {
    fn ok(text: &str) -> Self {
        Self { reply: Ok(text.to_string()), calls: RefCell::new(vec![]) }
    }

    fn err(message: &str) -> Self {
        Self { reply: Err(message.to_string()), calls: RefCell::new(vec![]) }
    }
}

impl CompletionClient for StubClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        self.calls.borrow_mut().push(request.clone());
        self.reply.clone().map_err(AppError::Transport)
    }
}

fn task_flow() -> PostRequest {
    PostRequest::new(
        "TaskFlow",
        "A kanban app for small teams",
        "drag-and-drop, real-time sync",
        "Go, PostgreSQL, React",
    )
}

#[test]
fn task_flow_prompt_contains_fields_and_length_rule() {
    let prompt = build_prompt(&task_flow()).unwrap();

    assert!(prompt.contains("TaskFlow"));
    assert!(prompt.contains("A kanban app for small teams"));
    assert!(prompt.contains("drag-and-drop, real-time sync"));
    assert!(prompt.contains("Go, PostgreSQL, React"));
    assert!(prompt.contains("Keep it under 1300 characters"));
}

#[test]
fn prompt_is_deterministic() {
    assert_eq!(build_prompt(&task_flow()).unwrap(), build_prompt(&task_flow()).unwrap());
}

#[test]
fn prompt_does_not_interpret_template_syntax_in_fields() {
    let request = PostRequest::new("{{ tech_stack }}", "{% if x %}", "<b>&</b>", "Rust");
    let prompt = build_prompt(&request).unwrap();

    assert!(prompt.contains("Project Name: {{ tech_stack }}\n"));
    assert!(prompt.contains("Project Description: {% if x %}\n"));
    assert!(prompt.contains("Key Features: <b>&</b>\n"));
}

#[test]
fn timeout_failure_becomes_prefixed_string() {
    let client = StubClient::err("timeout");
    let result = request_completion(&client, "llama3-8b-8192", "prompt");

    assert_eq!(result.to_string(), "Error generating caption: timeout");
    assert!(result.to_string().starts_with(ERROR_PREFIX));
}

#[test]
fn success_returns_first_choice_text_exactly() {
    let client = StubClient::ok("Line one\n\nLine two 🎉");
    let result = request_completion(&client, "llama3-8b-8192", "prompt");
    assert_eq!(result, PostResult::Generated("Line one\n\nLine two 🎉".to_string()));
}

#[test]
fn generate_post_uses_configured_model() {
    let client = StubClient::ok("post");
    let config = CompletionConfig { model: "gemma-7b-it".to_string(), ..Default::default() };

    let result = generate_post(&task_flow(), &client, &config).unwrap();

    assert!(result.is_generated());
    let calls = client.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].model, "gemma-7b-it");
}

#[test]
fn generate_post_accepts_trait_objects() {
    let client = StubClient::err("connection reset");
    let dyn_client: &dyn CompletionClient = &client;

    let result = generate_post(&task_flow(), dyn_client, &CompletionConfig::default()).unwrap();

    assert_eq!(result, PostResult::Failed { reason: "connection reset".to_string() });
}

#[test]
fn generate_post_rejects_blank_fields() {
    let client = StubClient::ok("post");
    let request = PostRequest { project_name: " ".to_string(), ..task_flow() };

    let err = generate_post(&request, &client, &CompletionConfig::default()).unwrap_err();

    assert!(matches!(err, AppError::MissingField { .. }));
    assert!(client.calls.borrow().is_empty());
}

proptest! {
    #[test]
    fn prompt_contains_every_field_and_guideline(
        name in "\\PC{1,40}",
        description in "\\PC{1,120}",
        features in "\\PC{1,80}",
        tech in "\\PC{1,60}",
    ) {
        let request = PostRequest::new(name.clone(), description.clone(), features.clone(), tech.clone());
        let prompt = build_prompt(&request).unwrap();

        prop_assert!(prompt.contains(&name));
        prop_assert!(prompt.contains(&description));
        prop_assert!(prompt.contains(&features));
        prop_assert!(prompt.contains(&tech));
        for guideline in GUIDELINES {
            prop_assert!(prompt.contains(guideline));
        }
    }

    #[test]
    fn failures_always_carry_prefix(message in "\\PC{0,60}") {
        let client = StubClient::err(&message);
        let result = request_completion(&client, "m", "p");
        prop_assert_eq!(result.to_string(), format!("{}{}", ERROR_PREFIX, message));
    }
}
