use serde::{Deserialize, Serialize};
use egui::Color32;
use std::collections::HashMap;

use crate::model::message::Role;
use crate::model::persona::Persona;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    pub ui_scale: f32,

    // Role → bubble color
    pub role_colors: HashMap<String, [u8; 4]>,

    pub persona: Persona,
    pub use_memory: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        let mut role_colors = HashMap::new();

        role_colors.insert(role_key(Role::User).into(), [40, 70, 120, 255]);
        role_colors.insert(role_key(Role::Assistant).into(), [40, 90, 60, 255]);

        Self {
            ui_scale: 1.0,
            role_colors,
            persona: Persona::default(),
            use_memory: true,
        }
    }
}

impl UiSettings {
    pub fn color(&self, role: Role) -> Color32 {
        self.role_colors
            .get(role_key(role))
            .map(|c| Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]))
            .unwrap_or(Color32::DARK_GRAY)
    }

    pub fn set_color(&mut self, role: Role, color: Color32) {
        self.role_colors.insert(
            role_key(role).to_string(),
            [color.r(), color.g(), color.b(), color.a()],
        );
    }
}

fn role_key(role: Role) -> &'static str {
    match role {
        Role::User => "User",
        Role::Assistant => "Assistant",
    }
}
