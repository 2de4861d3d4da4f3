use eframe::egui;
use egui::{Color32, RichText};

use crate::model::message::Message;
use super::app::ChatApp;

pub fn draw_center_panel(ctx: &egui::Context, app: &mut ChatApp) {
    let input_id = egui::Id::new("chat_input_box");
    let busy = app.is_busy();

    // ---------- Header ----------
    egui::TopBottomPanel::top("chat_header").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(
                RichText::new("🤖 Hugging Face Zephyr Chatbot")
                    .color(Color32::from_rgb(0x4C, 0xAF, 0x50)),
            );
            ui.label("Chat with a friendly LLM assistant!");
        });
        ui.add_space(4.0);
    });

    // ---------- Input bar ----------
    egui::TopBottomPanel::bottom("chat_input").show(ctx, |ui| {
        let mut send_now = false;

        if let Some(err) = &app.ui.last_error {
            ui.colored_label(Color32::from_rgb(220, 80, 80), err.to_string());
        }

        if busy {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Thinking...");
            });
        }

        ui.add_enabled_ui(!busy, |ui| {
            ui.horizontal(|ui| {
                let response = ui.add_sized(
                    [ui.available_width() - 60.0, 60.0],
                    egui::TextEdit::multiline(&mut app.ui.input_text)
                        .id(input_id)
                        .hint_text("Say something...")
                        .lock_focus(true),
                );

                // Enter vs Shift+Enter
                if response.has_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift)
                {
                    send_now = true;
                }

                if ui.button("Send").clicked() {
                    send_now = true;
                }
            });
        });

        if send_now {
            app.submit_input();

            // Keep cursor focused
            ui.memory_mut(|m| m.request_focus(input_id));
        }
    });

    // ---------- Chat history ----------
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .stick_to_bottom(app.ui.should_auto_scroll)
            .show(ui, |ui| {
                for msg in app.ui.session.transcript.messages() {
                    app.draw_message(ui, msg);
                }

                // Shown until the engine hands the session back.
                if let Some(text) = &app.ui.pending {
                    app.draw_message(ui, &Message::user(text.clone()));
                }
            });
    });
}
