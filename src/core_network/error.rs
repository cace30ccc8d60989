// Data channel errors
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataChanError {
    #[error("No data connection")]
    NoDataConnection,

    #[error("Data connection timeout after {0} seconds")]
    Timeout(u64),

    #[error("Data connection failed: {0}")]
    Io(#[from] io::Error),

    #[error("Data connection aborted: {0}")]
    Aborted(String),

    #[error("Invalid passive address: {0}")]
    InvalidPasvAddress(String),
}

impl DataChanError {
    pub fn to_ftp_response(&self) -> String {
        format!("550 {}", self)
    }
}
