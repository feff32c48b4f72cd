use clap::Parser;
use eframe::egui;

use grid_display::ui::GridApp;
use grid_display::{CliArgs, GridController};

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match CliArgs::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    };

    let mut controller = match GridController::new(config) {
        Ok(controller) => controller,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    };
    log::info!("{}", controller);

    // Host is ready once the controller exists; seed before the first frame
    if let Err(e) = controller.setup() {
        log::error!("{}", e);
        std::process::exit(2);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Grid Display",
        options,
        Box::new(|_cc| Box::new(GridApp::new(controller))),
    )
}
