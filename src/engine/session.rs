use std::slice;

use crate::engine::llm_client::InferenceBackend;
use crate::engine::prompt_builder::PromptBuilder;
use crate::error::TurnError;
use crate::model::message::Message;
use crate::model::persona::Persona;
use crate::model::transcript::Transcript;

/// Everything one conversation owns. Passed into `submit` and handed back,
/// so whoever hosts the chat decides where it lives between turns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSession {
    pub transcript: Transcript,
}

impl ChatSession {
    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    pub fn export(&self) -> String {
        self.transcript.export()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }
}

/// Run one chat turn.
///
/// The user message is always recorded. The assistant reply is recorded
/// only when the backend succeeds; on failure the session is returned as it
/// stood right after the user message.
pub fn submit(
    mut session: ChatSession,
    user_text: &str,
    persona: Persona,
    use_memory: bool,
    backend: &dyn InferenceBackend,
) -> (ChatSession, Result<String, TurnError>) {
    let user_msg = Message::user(user_text);
    session.transcript.push(user_msg.clone());

    let history = if use_memory {
        session.transcript.messages()
    } else {
        slice::from_ref(&user_msg)
    };
    let prompt = PromptBuilder::build(history, persona.system_prompt());

    log::info!(
        "[engine] Turn: persona={}, memory={}, {} messages in prompt, {} chars",
        persona.label(),
        use_memory,
        history.len(),
        prompt.len()
    );

    let outcome = backend.generate(&prompt);
    match &outcome {
        Ok(reply) => session.transcript.push(Message::assistant(reply.clone())),
        Err(e) => log::warn!("[engine] Turn failed: {}", e),
    }

    (session, outcome)
}
