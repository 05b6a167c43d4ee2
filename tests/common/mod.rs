//! Shared testing utilities for projexbuzz CLI tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";

/// Testing harness providing an isolated working directory for CLI runs.
pub struct TestContext {
    root: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory used as the working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for the compiled `projexbuzz` binary with a clean environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("projexbuzz").expect("Failed to locate projexbuzz binary");
        cmd.current_dir(self.work_dir())
            .env_remove("GROQ_API_KEY")
            .env_remove("PROJEXBUZZ_MODEL")
            .env_remove("PROJEXBUZZ_API_URL")
            .env_remove("PROJEXBUZZ_LOG");
        cmd
    }

    /// `cli()` pointed at `server` with a fake credential.
    pub fn cli_against(&self, server_url: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("GROQ_API_KEY", "gsk_test")
            .env("PROJEXBUZZ_API_URL", format!("{}{}", server_url, COMPLETIONS_PATH));
        cmd
    }

    /// Write `projexbuzz.toml` into the working directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir().join("projexbuzz.toml"), content).expect("write config");
    }
}

/// Flags describing the TaskFlow example project.
pub fn task_flow_args() -> Vec<&'static str> {
    vec![
        "--name",
        "TaskFlow",
        "--description",
        "A kanban app for small teams",
        "--features",
        "drag-and-drop, real-time sync",
        "--tech",
        "Go, PostgreSQL, React",
        "--no-input",
    ]
}

/// JSON body of a chat completion whose first choice says `content`.
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "llama3-8b-8192",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
        ]
    })
    .to_string()
}
