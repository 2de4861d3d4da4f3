use eframe::egui;

use crate::model::message::Role;
use crate::model::persona::Persona;
use crate::ui::app::ChatApp;
use crate::ui::export::{write_export, EXPORT_FILE_NAME};
use crate::ui::settings_io::save_settings;

pub fn draw_left_panel(ctx: &egui::Context, app: &mut ChatApp) {
    let mut settings_changed = false;
    let busy = app.is_busy();

    egui::SidePanel::left("left")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("🛠️ Chat Settings");
            ui.separator();

            ui.label("Assistant Personality");
            let persona = &mut app.ui.settings.persona;
            egui::ComboBox::from_id_salt("persona")
                .selected_text(persona.label())
                .show_ui(ui, |ui| {
                    for p in Persona::ALL {
                        if ui.selectable_value(&mut *persona, p, p.label()).changed() {
                            settings_changed = true;
                        }
                    }
                });

            if ui
                .checkbox(&mut app.ui.settings.use_memory, "Enable Chat Memory")
                .changed()
            {
                settings_changed = true;
            }

            ui.separator();

            if ui
                .add_enabled(!busy, egui::Button::new("🧹 Clear Chat"))
                .clicked()
            {
                app.clear_chat();
            }

            if !app.ui.session.is_empty() && ui.button("📄 Download Chat").clicked() {
                download_chat(app);
            }

            if let Some(notice) = &app.ui.notice {
                ui.colored_label(egui::Color32::from_rgb(80, 170, 90), notice.as_str());
            }

            ui.separator();

            ui.collapsing("Appearance", |ui| {
                ui.label("UI Scale");
                if ui
                    .add(egui::Slider::new(&mut app.ui.settings.ui_scale, 0.75..=2.0))
                    .changed()
                {
                    settings_changed = true;
                }

                for role in [Role::User, Role::Assistant] {
                    let mut color = app.ui.settings.color(role);
                    ui.horizontal(|ui| {
                        ui.label(role.label());
                        if ui.color_edit_button_srgba(&mut color).changed() {
                            app.ui.settings.set_color(role, color);
                            settings_changed = true;
                        }
                    });
                }
            });
        });

    if settings_changed {
        save_settings(&app.ui.settings);
    }
}

fn download_chat(app: &mut ChatApp) {
    let Some(path) = rfd::FileDialog::new()
        .set_file_name(EXPORT_FILE_NAME)
        .add_filter("Text", &["txt"])
        .save_file()
    else {
        return;
    };

    match write_export(&path, &app.ui.session) {
        Ok(()) => {
            log::info!("[ui] Exported chat to {}", path.display());
            app.ui.notice = Some(format!("Saved to {}", path.display()));
        }
        Err(e) => {
            log::error!("[ui] Could not export chat to {}: {}", path.display(), e);
            app.ui.notice = Some(format!("Could not save chat: {e}"));
        }
    }
}
