// src/constants.rs

pub const DEFAULT_CONFIG_PATH: &str = "/etc/rouillebridge.conf";
pub const DEFAULT_LISTEN_PORT: u16 = 2121;
pub const DEFAULT_BANNER: &str = "rouillebridge ready";

/// Bound on how long a transfer waits for its data connection.
pub const DATA_CONNECTION_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TRANSFER_BUFFER_SIZE: usize = 64 * 1024;

/// Longest control line accepted, terminator included.
pub const MAX_COMMAND_LINE: usize = 4096;
