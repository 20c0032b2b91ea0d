use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

pub fn initialize_logging() -> color_eyre::Result<()> {
    let dirs = ProjectDirs::from("fm", "mellow", "mellow")
        .ok_or_else(|| color_eyre::eyre::eyre!("could not determine a data directory"))?;
    let log_dir = dirs.data_local_dir().to_path_buf();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = std::fs::File::create(log_dir.join("mellow.log"))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(false)
        .with_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        );

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
