use std::sync::mpsc::{Receiver, Sender};

use crate::engine::llm_client::InferenceBackend;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::session::submit;

/// Runs blocking inference calls off the UI thread, one command at a time.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    backend: Box<dyn InferenceBackend + Send>,
}

impl Engine {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        backend: Box<dyn InferenceBackend + Send>,
    ) -> Self {
        Self { rx, tx, backend }
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::Submit {
                    session,
                    text,
                    persona,
                    use_memory,
                } => {
                    let (session, outcome) =
                        submit(session, &text, persona, use_memory, self.backend.as_ref());

                    if self
                        .tx
                        .send(EngineResponse::TurnFinished { session, outcome })
                        .is_err()
                    {
                        break;
                    }
                }
            }
        }

        log::info!("[engine] Command channel closed, stopping");
    }
}
