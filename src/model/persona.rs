use serde::{Deserialize, Serialize};

/// System-prompt preset controlling the assistant's response style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Persona {
    #[default]
    Helpful,
    Funny,
    Formal,
    Sarcastic,
}

impl Persona {
    pub const ALL: [Persona; 4] = [
        Persona::Helpful,
        Persona::Funny,
        Persona::Formal,
        Persona::Sarcastic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Persona::Helpful => "Helpful",
            Persona::Funny => "Funny",
            Persona::Formal => "Formal",
            Persona::Sarcastic => "Sarcastic",
        }
    }

    pub fn system_prompt(self) -> &'static str {
        match self {
            Persona::Helpful => "You are a helpful assistant.",
            Persona::Funny => "You tell jokes and respond in a humorous way.",
            Persona::Formal => "You are a polite, formal assistant.",
            Persona::Sarcastic => "You respond with witty sarcasm.",
        }
    }
}
