use crate::core_auth::check_credentials;
use crate::core_fs::{
    DirEntry, FsError, FsResult, Metadata, ReadStream, RemoteFs, WriteOptions, WriteStream,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::io::SeekFrom;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncSeekExt;

/// Serves a local directory tree as the remote filesystem.
///
/// Virtual paths are mapped below `root`; `..` components are dropped so a
/// path can never leave the served tree.
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
    passwd_file: Option<PathBuf>,
}

impl LocalFs {
    pub fn new<P: AsRef<Path>>(root: P, passwd_file: Option<PathBuf>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            passwd_file,
        }
    }

    fn real_path(&self, path: &str) -> PathBuf {
        let mut real = self.root.clone();
        for component in Path::new(path).components() {
            if let Component::Normal(part) = component {
                real.push(part);
            }
        }
        real
    }
}

fn modified_time(metadata: &std::fs::Metadata) -> DateTime<Utc> {
    DateTime::<Utc>::from(metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH))
}

#[async_trait]
impl RemoteFs for LocalFs {
    async fn connect_with_credentials(&self, username: &str, password: &str) -> FsResult<()> {
        let Some(passwd_file) = &self.passwd_file else {
            info!("No passwd file configured, accepting user {}", username);
            return Ok(());
        };

        match check_credentials(passwd_file, username, password).await {
            Ok(true) => {
                info!("User {} authenticated against {:?}", username, passwd_file);
                Ok(())
            }
            Ok(false) => Err(FsError::AuthenticationFailed(username.to_string())),
            Err(e) => {
                warn!("Failed to read passwd file {:?}: {}", passwd_file, e);
                Err(FsError::AuthenticationFailed(username.to_string()))
            }
        }
    }

    async fn stat(&self, path: &str) -> FsResult<Metadata> {
        let metadata = fs::metadata(self.real_path(path))
            .await
            .map_err(|e| FsError::from_io(path, e))?;

        Ok(Metadata {
            is_directory: metadata.is_dir(),
            size: metadata.len(),
            modified: modified_time(&metadata),
        })
    }

    async fn readdir(&self, path: &str) -> FsResult<Vec<DirEntry>> {
        let real_path = self.real_path(path);
        if !self.stat(path).await?.is_directory {
            return Err(FsError::NotADirectory(path.to_string()));
        }

        let mut read_dir = fs::read_dir(&real_path)
            .await
            .map_err(|e| FsError::from_io(path, e))?;
        let mut entries = Vec::new();

        while let Some(entry) = read_dir.next_entry().await? {
            let metadata = match entry.metadata().await {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!("Failed to get metadata for entry: {:?}, error: {}", entry.path(), e);
                    continue;
                }
            };

            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_directory: metadata.is_dir(),
                size: metadata.len(),
                modified: modified_time(&metadata),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        debug!("Listed {} entries in {:?}", entries.len(), real_path);
        Ok(entries)
    }

    async fn create_read_stream(&self, path: &str) -> FsResult<ReadStream> {
        let file = File::open(self.real_path(path))
            .await
            .map_err(|e| FsError::from_io(path, e))?;
        Ok(Box::new(file))
    }

    async fn create_write_stream(&self, path: &str, options: WriteOptions) -> FsResult<WriteStream> {
        let keep_contents = options.append || options.start_offset > 0;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(!keep_contents)
            .open(self.real_path(path))
            .await
            .map_err(|e| FsError::from_io(path, e))?;

        if options.start_offset > 0 {
            file.seek(SeekFrom::Start(options.start_offset)).await?;
        }
        Ok(Box::new(file))
    }

    async fn unlink(&self, path: &str) -> FsResult<()> {
        fs::remove_file(self.real_path(path))
            .await
            .map_err(|e| FsError::from_io(path, e))
    }

    async fn mkdir(&self, path: &str) -> FsResult<()> {
        fs::create_dir(self.real_path(path))
            .await
            .map_err(|e| FsError::from_io(path, e))
    }

    async fn rmdir(&self, path: &str) -> FsResult<()> {
        fs::remove_dir(self.real_path(path))
            .await
            .map_err(|e| FsError::from_io(path, e))
    }

    async fn rename(&self, from: &str, to: &str) -> FsResult<()> {
        fs::rename(self.real_path(from), self.real_path(to))
            .await
            .map_err(|e| FsError::from_io(from, e))
    }

    async fn disconnect(&self) {
        debug!("Released local filesystem rooted at {:?}", self.root);
    }
}
