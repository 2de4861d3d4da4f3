mod config;
mod engine;
mod error;
mod model;
mod ui;

use anyhow::{anyhow, Context};
use eframe::egui;

use crate::config::AppConfig;
use crate::engine::llm_client::HfInferenceClient;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load().context("no usable inference credentials")?;
    let backend = HfInferenceClient::new(&config).context("building HTTP client")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        "🤖 Hugging Face Chatbot",
        options,
        Box::new(|_cc| {
            Ok(Box::new(ui::app::ChatApp::new(Box::new(backend))))
        }),
    )
    .map_err(|e| anyhow!("window error: {e}"))
}
