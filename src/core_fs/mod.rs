//! The remote filesystem as seen by a session.
//!
//! Every session talks to exactly one [`RemoteFs`] instance, created by the
//! listener's [`FsFactory`] when the control connection is accepted. Paths
//! handed to the collaborator are always absolute and already normalized.

pub mod error;
pub mod local;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::Debug;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};

pub use error::FsError;
pub use local::LocalFs;

pub type FsResult<T> = Result<T, FsError>;
pub type ReadStream = Box<dyn AsyncRead + Send + Unpin>;
pub type WriteStream = Box<dyn AsyncWrite + Send + Unpin>;

/// Builds a fresh collaborator for each accepted control connection.
pub type FsFactory = Arc<dyn Fn() -> Box<dyn RemoteFs> + Send + Sync>;

/// Result of a `stat` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub is_directory: bool,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_directory: bool,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    pub append: bool,
    pub start_offset: u64,
}

#[async_trait]
pub trait RemoteFs: Send + Sync + Debug {
    /// Verifies the credentials, establishing the underlying connection if needed.
    async fn connect_with_credentials(&self, username: &str, password: &str) -> FsResult<()>;

    async fn stat(&self, path: &str) -> FsResult<Metadata>;

    /// Fails with [`FsError::NotADirectory`] when `path` is a file.
    async fn readdir(&self, path: &str) -> FsResult<Vec<DirEntry>>;

    async fn create_read_stream(&self, path: &str) -> FsResult<ReadStream>;

    /// The written data is committed once the stream is shut down.
    async fn create_write_stream(&self, path: &str, options: WriteOptions) -> FsResult<WriteStream>;

    async fn unlink(&self, path: &str) -> FsResult<()>;

    async fn mkdir(&self, path: &str) -> FsResult<()>;

    async fn rmdir(&self, path: &str) -> FsResult<()>;

    async fn rename(&self, from: &str, to: &str) -> FsResult<()>;

    async fn disconnect(&self);
}
