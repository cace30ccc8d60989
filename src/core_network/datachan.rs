//! Lifecycle of the per-session data connection.
//!
//! `Idle -> Pending (PASV accept / PORT connect running in the background) ->
//! consumed by one transfer -> Idle`. At most one attempt is live at a time.

use crate::core_network::error::DataChanError;
use log::{debug, info, warn};
use std::io;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    Passive,
    Active,
}

/// Background accept/connect task, aborted when dropped.
#[derive(Debug)]
pub struct PendingConnection {
    handle: JoinHandle<io::Result<TcpStream>>,
}

impl Drop for PendingConnection {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[derive(Debug, Default)]
pub enum DataChannel {
    #[default]
    Idle,
    Pending {
        mode: DataMode,
        connection: PendingConnection,
    },
}

impl DataChannel {
    pub fn mode(&self) -> Option<DataMode> {
        match self {
            DataChannel::Idle => None,
            DataChannel::Pending { mode, .. } => Some(*mode),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DataChannel::Idle)
    }

    /// Adopts a new PASV/PORT attempt, discarding any previous one.
    pub fn adopt(&mut self, mode: DataMode, handle: JoinHandle<io::Result<TcpStream>>) {
        if let Some(previous) = self.mode() {
            debug!("Discarding pending {:?} data connection", previous);
        }
        *self = DataChannel::Pending {
            mode,
            connection: PendingConnection { handle },
        };
    }

    /// Hands the data connection to a transfer, waiting at most `timeout` for
    /// the peer. The channel is Idle afterwards whatever the outcome.
    pub async fn wait_for_data_connection(
        &mut self,
        timeout: Duration,
    ) -> Result<TcpStream, DataChanError> {
        let (mode, mut connection) = match std::mem::take(self) {
            DataChannel::Idle => return Err(DataChanError::NoDataConnection),
            DataChannel::Pending { mode, connection } => (mode, connection),
        };

        match tokio::time::timeout(timeout, &mut connection.handle).await {
            Ok(Ok(Ok(stream))) => {
                info!("{:?} data connection ready with {:?}", mode, stream.peer_addr().ok());
                Ok(stream)
            }
            Ok(Ok(Err(e))) => {
                warn!("{:?} data connection failed: {}", mode, e);
                Err(DataChanError::Io(e))
            }
            Ok(Err(e)) => Err(DataChanError::Aborted(e.to_string())),
            Err(_) => {
                warn!("Timed out waiting for {:?} data connection", mode);
                Err(DataChanError::Timeout(timeout.as_secs()))
            }
        }
    }

    /// Tears down whatever is pending.
    pub fn close(&mut self) {
        if self.is_idle() {
            return;
        }
        debug!("Closing pending {:?} data connection", self.mode());
        *self = DataChannel::Idle;
    }
}

/// Shuts a data stream down once its transfer is over.
pub async fn close_data_connection(mut stream: TcpStream) {
    if let Err(e) = stream.shutdown().await {
        debug!("Failed to shutdown data stream: {}", e);
    }
}
