use std::process;

use eframe::egui;

mod app;
mod headless;

fn main() -> eframe::Result<()> {
    let (console, log_level_state) = app::setup_tracing();

    tracing::info!("Melt editor starting");

    let args: Vec<String> = std::env::args().collect();
    match headless::maybe_run_headless(&args) {
        Ok(true) => return Ok(()),
        Ok(false) => {}
        Err(err) => {
            eprintln!("headless error: {err}");
            process::exit(1);
        }
    }

    let project_path = args
        .iter()
        .skip(1)
        .find(|arg| !arg.starts_with('-'))
        .map(std::path::PathBuf::from);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };
    eframe::run_native(
        "Melt Editor",
        native_options,
        Box::new(|_cc| {
            let mut app = app::MeltApp::new(console, log_level_state);
            if let Some(path) = project_path {
                match app.load_project_from(&path) {
                    Ok(()) => tracing::info!("project loaded from {:?}", path),
                    Err(err) => tracing::error!("failed to load project: {}", err),
                }
            }
            Ok(Box::new(app))
        }),
    )
}
