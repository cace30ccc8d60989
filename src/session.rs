use crate::core_fs::RemoteFs;
use crate::core_network::datachan::DataChannel;
use crate::Config;
use log::debug;
use std::sync::Arc;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Write side of the control connection.
pub type ControlWriter = Box<dyn AsyncWrite + Send + Unpin>;

/// State of one control connection.
///
/// Owned by the connection's task and handed to command handlers as
/// `&mut Session`; never shared between connections.
pub struct Session {
    pub writer: ControlWriter,
    pub config: Arc<Config>,
    pub fs: Box<dyn RemoteFs>,
    pub current_dir: String,         // Always absolute and normalized
    pub rename_from: Option<String>, // Set by RNFR, consumed by RNTO
    pub data_channel: DataChannel,
    pub type_: String,            // The primary transfer type (A, E, I, L)
    pub byte_size: Option<u8>,    // The byte size for TYPE L (None if not applicable)
    pub username: Option<String>, // Username given by USER, awaiting PASS
    pub is_authenticated: bool,
}

impl Session {
    pub fn new(writer: ControlWriter, fs: Box<dyn RemoteFs>, config: Arc<Config>) -> Self {
        let is_authenticated = !config.storage.login_required;
        Self {
            writer,
            config,
            fs,
            current_dir: String::from("/"),
            rename_from: None,
            data_channel: DataChannel::Idle,
            type_: "A".to_string(), // Default transfer type is ASCII
            byte_size: None,
            username: None,
            is_authenticated,
        }
    }

    /// Releases everything the session holds once the control connection is gone.
    pub async fn teardown(&mut self) {
        self.data_channel.close();
        self.rename_from = None;
        self.fs.disconnect().await;
        if let Err(e) = self.writer.shutdown().await {
            debug!("Failed to shutdown control stream: {}", e);
        }
    }
}
