//! Main application entry point.

use clap::Parser;
use painter_app::{App, Cli};

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Starting Painter ({})", cli.variant.name());

    if let Err(e) = App::run(cli) {
        log::error!("{}", e);
        eprintln!("painter: {e}");
        std::process::exit(1);
    }
}
