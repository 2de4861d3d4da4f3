use eframe::egui;
use egui::Layout;
use std::sync::mpsc;
use std::time::Duration;

use crate::engine::engine::Engine;
use crate::engine::llm_client::InferenceBackend;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::session::ChatSession;
use crate::error::TurnError;
use crate::model::message::{Message, Role};
use crate::ui::center_panel::draw_center_panel;
use crate::ui::left_panel::draw_left_panel;
use crate::ui::settings::UiSettings;
use crate::ui::settings_io::load_settings;

/* =========================
   UI State
   ========================= */

#[derive(Default)]
pub(crate) struct UiState {
    pub input_text: String,
    pub session: ChatSession,

    /// Text of the turn currently running in the engine.
    pub pending: Option<String>,
    pub last_error: Option<TurnError>,
    pub notice: Option<String>,

    pub should_auto_scroll: bool,
    pub settings: UiSettings,
}

/* =========================
   App
   ========================= */

pub struct ChatApp {
    pub(crate) ui: UiState,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl ChatApp {
    pub fn new(backend: Box<dyn InferenceBackend + Send>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx, backend);
            engine.run();
        });

        Self {
            ui: UiState {
                settings: load_settings(),
                ..Default::default()
            },
            cmd_tx,
            resp_rx,
        }
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.ui.pending.is_some()
    }

    /// Hand the trimmed input to the engine. Blank input and input typed
    /// while a turn is running are ignored.
    pub(crate) fn submit_input(&mut self) {
        let text = self.ui.input_text.trim().to_string();
        if text.is_empty() || self.is_busy() {
            return;
        }

        self.ui.last_error = None;
        self.ui.notice = None;

        let cmd = EngineCommand::Submit {
            session: self.ui.session.clone(),
            text: text.clone(),
            persona: self.ui.settings.persona,
            use_memory: self.ui.settings.use_memory,
        };

        if self.cmd_tx.send(cmd).is_err() {
            log::error!("[ui] Engine thread is gone, turn dropped");
            self.ui.last_error = Some(TurnError::Transport("chat engine stopped".into()));
            return;
        }

        self.ui.pending = Some(text);
        self.ui.input_text.clear();
        self.ui.should_auto_scroll = true;
    }

    pub(crate) fn clear_chat(&mut self) {
        if self.is_busy() {
            return;
        }
        self.ui.session.clear();
        self.ui.last_error = None;
        self.ui.notice = Some("Chat history cleared.".into());
        log::info!("[ui] Chat history cleared");
    }

    fn poll_engine(&mut self) {
        while let Ok(resp) = self.resp_rx.try_recv() {
            match resp {
                EngineResponse::TurnFinished { session, outcome } => {
                    self.ui.session = session;
                    self.ui.pending = None;
                    self.ui.last_error = outcome.err();
                    self.ui.should_auto_scroll = true;
                }
            }
        }
    }

    pub(crate) fn draw_message(&self, ui: &mut egui::Ui, msg: &Message) {
        let bg = self.ui.settings.color(msg.role);
        let text = format!("{} {}", msg.role.avatar(), msg.content);

        ui.add_space(6.0);

        if msg.role == Role::User {
            ui.with_layout(Layout::right_to_left(egui::Align::TOP), |ui| {
                bubble(ui, bg, &text);
            });
        } else {
            bubble(ui, bg, &text);
        }
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.ui.settings.ui_scale);

        self.poll_engine();
        if self.is_busy() {
            // The engine thread has no handle on the context; poll instead.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        draw_left_panel(ctx, self);
        draw_center_panel(ctx, self);

        self.ui.should_auto_scroll = false;
    }
}

fn bubble(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    egui::Frame::new()
        .fill(color)
        .corner_radius(8)
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(egui::Color32::WHITE));
        });
}
