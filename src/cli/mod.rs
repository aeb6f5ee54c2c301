pub mod menu;

use std::env;
use std::error::Error;
use std::io;

use dotenv::dotenv;
use tracing::info;

use crate::config::{constant, Settings};
use crate::utils::init_tracing;
pub use menu::Menu;

/// Entry point of the `courier-optimizer` binary.
pub fn run() -> Result<(), Box<dyn Error>> {
    // the log file has to be known before settings parsing can report problems
    dotenv().ok();
    let log_path = env::var("RUN_LOG_FILE").unwrap_or_else(|_| constant::RUN_LOG_FILE.to_string());
    init_tracing(&log_path)?;

    let settings = Settings::from_env();

    info!(
        "Loaded settings: orders={}, mode={}, objective={}, depot={}",
        settings.orders_path, settings.mode.key, settings.objective, settings.depot
    );

    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout(), settings);
    menu.run()?;

    info!("Menu closed");
    Ok(())
}
