#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use eframe::NativeOptions;

use phone_resale::config::APP_STATE_PATH;
use phone_resale::headless::{build_report, report_json};
use phone_resale::ui::config::UI_TEXT;
use phone_resale::{Cli, DashboardEngine, load_listing_data, run_app};

fn main() -> ExitCode {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Data Loading (Blocking, once per process)
    let table = match load_listing_data(&args) {
        Ok(table) => table,
        Err(e) => {
            log::error!("Failed to load listings: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // D. Headless export
    if args.headless {
        let engine = DashboardEngine::new(table);
        let json = build_report(&engine, args.brand.as_deref(), args.volume.as_deref())
            .and_then(|report| report_json(&report));
        return match json {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Headless export failed: {:#}", e);
                ExitCode::FAILURE
            }
        };
    }

    // E. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    match eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, table))),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Window closed with error: {}", e);
            ExitCode::FAILURE
        }
    }
}
