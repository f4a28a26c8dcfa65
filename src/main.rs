// BayLog - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and validation
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can keep using
// `crate::app::...`, `crate::core::...` etc.
pub use baylog::app;

pub use baylog::core;
pub use baylog::platform;
pub use baylog::ui;
pub use baylog::util;

use clap::Parser;
use std::path::PathBuf;

/// BayLog - Carwash bay tracker.
///
/// Log washes into nine bays, search them by day, export CSV/JSON, and
/// clear bays behind a password.
#[derive(Parser, Debug)]
#[command(name = "BayLog", version, about)]
struct Cli {
    /// Bay selected at startup (1-9).
    #[arg(short = 'b', long = "bay", value_parser = clap::value_parser!(u8).range(1..=9))]
    bay: Option<u8>,

    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve config directory: CLI override > platform default
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_dir);

    let (config, config_warnings) = platform::config::load_config(&config_dir);

    // Initialise logging subsystem
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %config_dir.display(),
        "BayLog starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let initial_bay = match cli.bay {
        Some(n) => core::model::Bay::new(i64::from(n)).unwrap_or_default(),
        None => core::model::Bay::first(),
    };
    let today = chrono::Local::now().date_naive();

    let state = app::state::AppState::new(&config, initial_bay, today, cli.debug);
    let (dark_mode, font_size) = (state.dark_mode, state.font_size);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} - {} v{}",
                util::constants::BUSINESS_NAME,
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::BayLogApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch BayLog GUI: {e}");
        std::process::exit(1);
    }
}
