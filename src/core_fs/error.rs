// Errors raised by the filesystem collaborator
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FsError {
    #[error("No such file or directory: {0}")]
    NotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("File exists: {0}")]
    AlreadyExists(String),

    #[error("Login authentication failed for user {0}")]
    AuthenticationFailed(String),

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Operation(String),
}

impl FsError {
    /// Maps an I/O failure on `path` to the matching variant.
    pub fn from_io(path: &str, e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path.to_string()),
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_string()),
            _ => FsError::Io(e),
        }
    }

    pub fn to_ftp_response(&self) -> String {
        match self {
            FsError::AuthenticationFailed(_) => "530 Login authentication failed.".to_string(),
            _ => format!("550 {}", self),
        }
    }
}
