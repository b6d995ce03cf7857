use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use roomtree::domain::entities::ChannelMap;
use roomtree::infrastructure::{AppConfig, CliArgs, StorageManager, snapshot};
use roomtree::presentation::CommandRunner;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<(StorageManager, AppConfig)> {
    let storage = match &args.config {
        Some(path) => StorageManager::with_dir(
            path.parent()
                .map(std::path::Path::to_path_buf)
                .unwrap_or_default(),
        ),
        None => StorageManager::new().wrap_err("failed to locate config directory")?,
    };

    let mut config = storage
        .load_config(args.config.as_deref())
        .wrap_err("failed to load configuration")?;
    config.merge_with_args(args);
    Ok((storage, config))
}

async fn load_channels(config: &AppConfig) -> Result<ChannelMap> {
    let Some(path) = config.effective_channels_path() else {
        warn!("no channel snapshot configured");
        return Ok(ChannelMap::new());
    };
    if config.channels.is_none() && !path.exists() {
        warn!(path = %path.display(), "default channel snapshot missing");
        return Ok(ChannelMap::new());
    }

    let channels = snapshot::load_channel_map(&path)
        .await
        .wrap_err("failed to load channel snapshot")?;

    info!(count = channels.len(), "Loaded channel snapshot");
    Ok(channels)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let (storage, config) = load_config(&args)?;
    init_logging(&config)?;

    info!(version = roomtree::VERSION, "Starting {}", roomtree::NAME);

    let settings = storage
        .load_settings()
        .wrap_err("failed to load browser settings")?;
    let channels = load_channels(&config).await?;
    let mut runner = CommandRunner::new(&channels, &config).with_settings(settings);

    for line in runner.run(&args.command).await? {
        println!("{line}");
    }

    if runner.settings_changed() {
        storage
            .save_settings(runner.settings())
            .wrap_err("failed to save browser settings")?;
    }

    Ok(())
}
