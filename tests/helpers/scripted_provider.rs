// ABOUTME: Scripted LLM provider for automated testing without network access
// ABOUTME: Returns a fixed reply or error and records every request it receives

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use async_trait::async_trait;
use food_analysis_server::errors::{AppError, ErrorCode};
use food_analysis_server::llm::{ChatRequest, ChatResponse, LlmProvider};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// What the provider answers with
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// Successful completion with this text
    Text(String),
    /// Failed completion with this code and message
    Error(ErrorCode, String),
}

/// Provider double returning the same scripted outcome for every call
pub struct ScriptedProvider {
    reply: ScriptedReply,
    calls: AtomicUsize,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedProvider {
    /// Provider that answers every call with `text`
    #[must_use]
    pub fn replying(text: &str) -> Self {
        Self::new(ScriptedReply::Text(text.to_owned()))
    }

    /// Provider that fails every call with `code`
    #[must_use]
    pub fn failing(code: ErrorCode, message: &str) -> Self {
        Self::new(ScriptedReply::Error(code, message.to_owned()))
    }

    fn new(reply: ScriptedReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of completed calls
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Most recent request received
    #[allow(dead_code)]
    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        match &self.reply {
            ScriptedReply::Text(text) => Ok(ChatResponse {
                content: text.clone(),
                model: request
                    .model
                    .clone()
                    .unwrap_or_else(|| self.default_model().to_owned()),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            ScriptedReply::Error(code, message) => Err(AppError::new(*code, message.clone())),
        }
    }
}
