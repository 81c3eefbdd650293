use std::sync::Arc;

use anyhow::Result;

use tasklens::capture::CommandCamera;
use tasklens::config::Config;
use tasklens::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // `tasklens --init-config` writes a default config file and exits
    if std::env::args().any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;

    let camera = Arc::new(CommandCamera::from_config(&config.capture));

    ui::run_app(camera, &config).await?;

    Ok(())
}
