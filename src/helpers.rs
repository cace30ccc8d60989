use crate::constants::DEFAULT_CONFIG_PATH;
use crate::session::ControlWriter;
use crate::Config;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Sends a response to the client.
pub async fn send_response(writer: &mut ControlWriter, message: &[u8]) -> Result<(), std::io::Error> {
    debug!("Response: {}", String::from_utf8_lossy(message).trim_end());
    writer.write_all(message).await?;
    writer.flush().await?;
    Ok(())
}

/// Loads the configuration file, falling back to defaults when the default
/// path does not exist. An explicitly given path must be readable.
pub fn load_config(path: &str) -> Result<Config> {
    let path = if path.is_empty() {
        if !Path::new(DEFAULT_CONFIG_PATH).exists() {
            warn!(
                "No configuration file at {}, using built-in defaults",
                DEFAULT_CONFIG_PATH
            );
            return Ok(Config::default());
        }
        DEFAULT_CONFIG_PATH
    } else {
        path
    };

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path))?;
    let config: Config = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse configuration file: {}", path))?;

    info!("Loaded configuration from {}", path);
    Ok(config)
}

// Helper function to log configuration options
pub fn log_config(config: &Config) {
    info!("  Listen Address: {}", config.server.listen_address);
    info!("  Listen Port: {}", config.server.listen_port);
    info!("  PASV Address: {}", config.server.pasv_address);
    info!("  Data Timeout: {}s", config.server.data_timeout_secs);
    info!(
        "  Transfer Buffer Size: {} KB",
        config.server.transfer_buffer_size / 1024
    );
    info!("  Root Directory: {}", config.storage.root_dir);
    info!(
        "  Passwd File: {}",
        config.storage.passwd_file.as_deref().unwrap_or("<none>")
    );
    info!("  Login Required: {}", config.storage.login_required);
}
