use crate::engine::session::ChatSession;
use crate::error::TurnError;
use crate::model::persona::Persona;

pub enum EngineCommand {
    /// Run one turn. The session travels with the command and comes back
    /// in `TurnFinished`.
    Submit {
        session: ChatSession,
        text: String,
        persona: Persona,
        use_memory: bool,
    },
}

pub enum EngineResponse {
    TurnFinished {
        session: ChatSession,
        outcome: Result<String, TurnError>,
    },
}
