#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::NativeOptions;
use std::path::PathBuf;
use tokio::runtime::Runtime;

use stockview::ui::config::UI_TEXT;
use stockview::{Cli, fetch_market_data, run_app};

const APP_STATE_PATH: &str = "app_state.json";

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Data Loading (Blocking, once, before the UI exists)
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let store = match rt.block_on(fetch_market_data(&args)) {
        Ok((store, _signature)) => store,
        Err(e) => {
            // No recovery path: without data there is nothing to show
            log::error!("Startup data download failed: {:#}", e);
            std::process::exit(1);
        }
    };

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        viewport: eframe::egui::ViewportBuilder::default().with_maximized(true),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.app_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, store))),
    )
}
