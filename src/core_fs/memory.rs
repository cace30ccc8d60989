// In-memory collaborator used by the session tests
use crate::core_fs::{
    DirEntry, FsError, FsResult, Metadata, ReadStream, RemoteFs, WriteOptions, WriteStream,
};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, ReadBuf};

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(Vec<u8>),
}

#[derive(Debug, Default)]
struct MemoryState {
    nodes: BTreeMap<String, Node>,
    calls: Vec<String>,
    password: Option<String>,
    broken: BTreeSet<String>,
}

/// Clones share the same tree and call log.
#[derive(Debug, Clone)]
pub struct MemoryFs {
    state: Arc<Mutex<MemoryState>>,
}

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 5, 14, 30, 0).unwrap()
}

fn parent_of(path: &str) -> String {
    match path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(index) => path[..index].to_string(),
    }
}

impl MemoryFs {
    pub fn new() -> Self {
        let mut state = MemoryState::default();
        state.nodes.insert("/".to_string(), Node::Dir);
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.state.lock().unwrap().nodes.insert(path.to_string(), Node::Dir);
        self
    }

    pub fn with_file(self, path: &str, content: &[u8]) -> Self {
        self.state
            .lock()
            .unwrap()
            .nodes
            .insert(path.to_string(), Node::File(content.to_vec()));
        self
    }

    /// Reads of `path` fail after `content`, writes to it fail at once.
    pub fn with_broken_file(self, path: &str, content: &[u8]) -> Self {
        self.state.lock().unwrap().broken.insert(path.to_string());
        self.with_file(path, content)
    }

    /// Only this password is accepted; any password is accepted otherwise.
    pub fn with_password(self, password: &str) -> Self {
        self.state.lock().unwrap().password = Some(password.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        match self.state.lock().unwrap().nodes.get(path) {
            Some(Node::File(data)) => Some(data.clone()),
            _ => None,
        }
    }

    pub fn exists(&self, path: &str) -> bool {
        self.state.lock().unwrap().nodes.contains_key(path)
    }

    fn record(&self, call: String) -> std::sync::MutexGuard<'_, MemoryState> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        state
    }
}

struct FailingStream;

impl AsyncRead for FailingStream {
    fn poll_read(self: Pin<&mut Self>, _cx: &mut Context<'_>, _buf: &mut ReadBuf<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Err(io::Error::other("device read error")))
    }
}

impl AsyncWrite for FailingStream {
    fn poll_write(self: Pin<&mut Self>, _cx: &mut Context<'_>, _buf: &[u8]) -> Poll<io::Result<usize>> {
        Poll::Ready(Err(io::Error::other("no space left on device")))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

struct MemoryWriter {
    state: Arc<Mutex<MemoryState>>,
    path: String,
    data: Vec<u8>,
}

impl AsyncWrite for MemoryWriter {
    fn poll_write(mut self: Pin<&mut Self>, _cx: &mut Context<'_>, buf: &[u8]) -> Poll<io::Result<usize>> {
        self.data.extend_from_slice(buf);
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        let data = std::mem::take(&mut self.data);
        self.state
            .lock()
            .unwrap()
            .nodes
            .insert(self.path.clone(), Node::File(data));
        Poll::Ready(Ok(()))
    }
}

#[async_trait]
impl RemoteFs for MemoryFs {
    async fn connect_with_credentials(&self, username: &str, password: &str) -> FsResult<()> {
        let state = self.record(format!("connect {}", username));
        match &state.password {
            Some(expected) if expected != password => {
                Err(FsError::AuthenticationFailed(username.to_string()))
            }
            _ => Ok(()),
        }
    }

    async fn stat(&self, path: &str) -> FsResult<Metadata> {
        let state = self.record(format!("stat {}", path));
        match state.nodes.get(path) {
            Some(Node::Dir) => Ok(Metadata {
                is_directory: true,
                size: 0,
                modified: fixed_time(),
            }),
            Some(Node::File(data)) => Ok(Metadata {
                is_directory: false,
                size: data.len() as u64,
                modified: fixed_time(),
            }),
            None => Err(FsError::NotFound(path.to_string())),
        }
    }

    async fn readdir(&self, path: &str) -> FsResult<Vec<DirEntry>> {
        let state = self.record(format!("readdir {}", path));
        match state.nodes.get(path) {
            Some(Node::Dir) => {}
            Some(Node::File(_)) => return Err(FsError::NotADirectory(path.to_string())),
            None => return Err(FsError::NotFound(path.to_string())),
        }

        let entries = state
            .nodes
            .iter()
            .filter(|(child, _)| child.as_str() != "/" && parent_of(child) == path)
            .map(|(child, node)| DirEntry {
                name: child.rsplit('/').next().unwrap_or_default().to_string(),
                is_directory: matches!(node, Node::Dir),
                size: match node {
                    Node::File(data) => data.len() as u64,
                    Node::Dir => 0,
                },
                modified: fixed_time(),
            })
            .collect();
        Ok(entries)
    }

    async fn create_read_stream(&self, path: &str) -> FsResult<ReadStream> {
        let state = self.record(format!("read {}", path));
        match state.nodes.get(path) {
            Some(Node::File(data)) if state.broken.contains(path) => {
                Ok(Box::new(io::Cursor::new(data.clone()).chain(FailingStream)))
            }
            Some(Node::File(data)) => Ok(Box::new(io::Cursor::new(data.clone()))),
            Some(Node::Dir) => Err(FsError::Operation(format!("Is a directory: {}", path))),
            None => Err(FsError::NotFound(path.to_string())),
        }
    }

    async fn create_write_stream(&self, path: &str, options: WriteOptions) -> FsResult<WriteStream> {
        let state = self.record(format!(
            "write {} append={} offset={}",
            path, options.append, options.start_offset
        ));
        if !matches!(state.nodes.get(&parent_of(path)), Some(Node::Dir)) {
            return Err(FsError::NotFound(parent_of(path)));
        }
        if state.broken.contains(path) {
            return Ok(Box::new(FailingStream));
        }

        let mut data = match state.nodes.get(path) {
            Some(Node::File(existing)) if options.append => existing.clone(),
            Some(Node::Dir) => return Err(FsError::Operation(format!("Is a directory: {}", path))),
            _ => Vec::new(),
        };
        data.truncate(options.start_offset as usize);
        Ok(Box::new(MemoryWriter {
            state: Arc::clone(&self.state),
            path: path.to_string(),
            data,
        }))
    }

    async fn unlink(&self, path: &str) -> FsResult<()> {
        let mut state = self.record(format!("unlink {}", path));
        match state.nodes.get(path) {
            Some(Node::File(_)) => {
                state.nodes.remove(path);
                Ok(())
            }
            Some(Node::Dir) => Err(FsError::Operation(format!("Is a directory: {}", path))),
            None => Err(FsError::NotFound(path.to_string())),
        }
    }

    async fn mkdir(&self, path: &str) -> FsResult<()> {
        let mut state = self.record(format!("mkdir {}", path));
        if state.nodes.contains_key(path) {
            return Err(FsError::AlreadyExists(path.to_string()));
        }
        state.nodes.insert(path.to_string(), Node::Dir);
        Ok(())
    }

    async fn rmdir(&self, path: &str) -> FsResult<()> {
        let mut state = self.record(format!("rmdir {}", path));
        match state.nodes.get(path) {
            Some(Node::Dir) if state.nodes.keys().any(|k| k != path && parent_of(k) == path) => {
                Err(FsError::Operation(format!("Directory not empty: {}", path)))
            }
            Some(Node::Dir) => {
                state.nodes.remove(path);
                Ok(())
            }
            Some(Node::File(_)) => Err(FsError::NotADirectory(path.to_string())),
            None => Err(FsError::NotFound(path.to_string())),
        }
    }

    async fn rename(&self, from: &str, to: &str) -> FsResult<()> {
        let mut state = self.record(format!("rename {} {}", from, to));
        match state.nodes.remove(from) {
            Some(node) => {
                state.nodes.insert(to.to_string(), node);
                Ok(())
            }
            None => Err(FsError::NotFound(from.to_string())),
        }
    }

    async fn disconnect(&self) {
        self.record("disconnect".to_string());
    }
}
