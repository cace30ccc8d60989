use crate::core_fs::FsFactory;
use crate::core_network::network;
use crate::Config;
use anyhow::Result;
use log::{error, info};
use std::sync::Arc;

/// Runs the FTP server with the provided configuration.
///
/// Every accepted control connection gets its own filesystem collaborator
/// from `factory`.
///
/// # Arguments
///
/// * `config` - The server configuration.
/// * `factory` - Builds one filesystem collaborator per session.
///
/// # Returns
///
/// Result<(), anyhow::Error> indicating the success or failure of the operation.
pub async fn run(config: Config, factory: FsFactory) -> Result<()> {
    info!(
        "Starting server on {}:{}",
        config.server.listen_address, config.server.listen_port
    );

    if let Err(e) = network::start_server(Arc::new(config), factory).await {
        error!("Server stopped: {:#}", e);
        return Err(e);
    }

    Ok(())
}
