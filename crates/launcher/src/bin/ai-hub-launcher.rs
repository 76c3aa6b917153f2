#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use ai_hub_launcher::{LauncherConfig, MessageBoxPresenter, SystemSpawner};

fn main() {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // The child is not supervised; dropping its handle leaves it running.
    let _child = ai_hub_launcher::run(
        &LauncherConfig::default(),
        &mut SystemSpawner,
        &mut MessageBoxPresenter,
    );
}
