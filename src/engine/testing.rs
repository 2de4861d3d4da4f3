use std::sync::Mutex;

use crate::engine::llm_client::{reply_from_response, InferenceBackend};
use crate::error::TurnError;

/// Answers every prompt with the same canned HTTP status and body, running
/// them through the real response handling. Remembers each prompt.
pub struct ScriptedBackend {
    status: u16,
    body: String,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl InferenceBackend for ScriptedBackend {
    fn generate(&self, prompt: &str) -> Result<String, TurnError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        reply_from_response(self.status, &self.body)
    }
}
