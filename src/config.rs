use crate::constants::{
    DATA_CONNECTION_TIMEOUT_SECS, DEFAULT_BANNER, DEFAULT_LISTEN_PORT, DEFAULT_TRANSFER_BUFFER_SIZE,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_address: String,
    pub listen_port: u16,
    pub pasv_address: String, // Address advertised (and bound) for PASV listeners
    pub data_timeout_secs: u64,
    pub banner: String,
    pub transfer_buffer_size: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub root_dir: String,
    pub passwd_file: Option<String>, // user:bcrypt_hash lines, any user accepted when unset
    pub login_required: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: String::from("127.0.0.1"),
            listen_port: DEFAULT_LISTEN_PORT,
            pasv_address: String::from("127.0.0.1"),
            data_timeout_secs: DATA_CONNECTION_TIMEOUT_SECS,
            banner: String::from(DEFAULT_BANNER),
            transfer_buffer_size: DEFAULT_TRANSFER_BUFFER_SIZE,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root_dir: String::from("./ftp-root"),
            passwd_file: None,
            login_required: true,
        }
    }
}

impl ServerConfig {
    /// How long a transfer command waits for the PASV/PORT peer.
    pub fn data_timeout(&self) -> Duration {
        Duration::from_secs(self.data_timeout_secs)
    }
}
