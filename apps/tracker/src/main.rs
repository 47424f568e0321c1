mod config;
mod main_lib;

use config::Config;
use main_lib::{build_tracker, init_tracing, overview};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();
    tracing::info!("Starting with {} storage", config.storage);

    let tracker = build_tracker(&config)?;
    let overview = overview(&tracker, config.seed_sample).await?;
    println!("{}", serde_json::to_string_pretty(&overview)?);
    Ok(())
}
