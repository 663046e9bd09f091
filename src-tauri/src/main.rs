// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// The application entry point. Everything lives in the library so that
// integration tests exercise the same code the binary runs.

fn main() -> anyhow::Result<()> {
    vtracer_gui_lib::run()
}
