// Module declarations in dependency order
pub mod commands;
pub mod core;
pub mod processing;
pub mod utils;

use tauri::{Emitter, Manager};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

// A tracer panic is reported as a lost conversion, which needs the worker to unwind.
#[cfg(not(panic = "unwind"))]
compile_error!("vtracer-gui must be built with panic = \"unwind\"");

// Public exports for external consumers
pub use crate::core::{
    AppConfig, AppState, ConversionOutcome, ParameterChange, ParameterPanel, ParameterSnapshot,
    SessionStatus,
};
pub use crate::processing::{ConversionNotifier, Tracer, VtracerEngine};
pub use crate::utils::{VectorizerError, VectorizerResult};
pub use commands::PARAMETER_EVENT;

/// Initializes logging. `RUST_LOG` overrides the default `debug` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(std::io::stdout)
        .compact();               // Use compact formatter instead of pretty

    subscriber.init();
}

/// Builds and runs the application. Returns when the last window closes.
pub fn run() -> anyhow::Result<()> {
    init_tracing();
    info!("=== Application Starting ===");

    let config = AppConfig::from_env();

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .invoke_handler(tauri::generate_handler![
            commands::load_image,
            commands::pick_image,
            commands::get_image_preview,
            commands::get_status,
            commands::convert_image,
            commands::save_svg,
            commands::get_parameters,
            commands::get_parameter_controls,
            commands::update_parameter,
            commands::reset_parameters,
        ])
        .setup(move |app| {
            let state = AppState::new(config);

            // Every control edit is mirrored to the webview so value labels follow the sliders.
            let handle = app.app_handle().clone();
            state.subscribe_parameters(move |event| {
                if let Err(e) = handle.emit(PARAMETER_EVENT, event) {
                    warn!("Failed to emit {}: {}", PARAMETER_EVENT, e);
                }
            })?;

            app.manage(state);
            debug!("✓ AppState initialized");
            Ok(())
        })
        .build(tauri::generate_context!())?;

    info!("Starting application event loop...");
    app.run(|_app_handle, event| {
        if let tauri::RunEvent::Exit = event {
            info!("Application exiting");
        }
    });

    Ok(())
}
