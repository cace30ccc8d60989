// Errors surfaced by command handlers
use crate::core_fs::FsError;
use crate::core_network::error::DataChanError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// Writing to or reading from the control connection failed; ends the session.
    #[error("Control connection error: {0}")]
    Control(#[from] io::Error),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    DataChan(#[from] DataChanError),

    #[error("Bad sequence of commands: RNFR required before RNTO")]
    NoRenameSource,
}

impl SessionError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, SessionError::Control(_))
    }

    pub fn to_ftp_response(&self) -> String {
        match self {
            SessionError::Fs(e) => e.to_ftp_response(),
            SessionError::DataChan(e) => e.to_ftp_response(),
            _ => format!("550 {}", self),
        }
    }
}
