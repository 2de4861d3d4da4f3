use crate::model::message::{Message, Role};

pub const SYSTEM_TOKEN: &str = "<|system|>";
pub const USER_TOKEN: &str = "<|user|>";
pub const ASSISTANT_TOKEN: &str = "<|assistant|>";

/// Builds the single text prompt sent to the inference endpoint.
/// Only formats text: no truncation, no token budgeting.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(messages: &[Message], system_prompt: &str) -> String {
        let mut prompt = String::new();

        push_segment(&mut prompt, SYSTEM_TOKEN, system_prompt);
        for msg in messages {
            push_segment(&mut prompt, role_token(msg.role), &msg.content);
        }

        // Empty assistant segment: generation starts here.
        prompt.push_str(ASSISTANT_TOKEN);

        prompt
    }
}

fn push_segment(prompt: &mut String, token: &str, text: &str) {
    prompt.push_str(token);
    prompt.push_str(text);
}

fn role_token(role: Role) -> &'static str {
    match role {
        Role::User => USER_TOKEN,
        Role::Assistant => ASSISTANT_TOKEN,
    }
}
