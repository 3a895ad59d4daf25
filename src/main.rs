use MouseOverlayRust::config::OverlayConfig;
use MouseOverlayRust::{gui, logging};
use anyhow::{Result, anyhow};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let mut config_path: Option<PathBuf> = None;
    let mut force_debug = false;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" if i + 1 < args.len() => {
                config_path = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--debug" => force_debug = true,
            other => return Err(anyhow!("Unknown argument: {}, expected -c <config.json> or --debug", other)),
        }
        i += 1;
    }

    let mut config = OverlayConfig::load(config_path.as_deref())?;
    config.debug_logging |= force_debug;
    logging::init(config.debug_logging);

    tracing::info!(config = ?config_path, "starting pointer overlay");
    gui::run_gui(config).map_err(|e| anyhow!("Failed to start overlay window: {}", e))
}
