use anyhow::Context;
use clap::Parser;
use record_directory::utils::logger;
use record_directory::{CliConfig, ConfigMap, Directory};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    println!("Running tests...");

    // 載入配置；失敗直接結束程式
    let directory = match &config.config {
        Some(path) => Directory::from_config(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => Directory::new(ConfigMap::new()),
    };

    println!("{}", directory);
    Ok(())
}
