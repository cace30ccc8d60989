use crate::core_fs::WriteOptions;
use crate::core_ftpcommand::error::SessionError;
use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::core_ftpcommand::mkd::handle_mkd_command;
use crate::core_ftpcommand::transfer::{open_data_connection, pipe};
use crate::core_ftpcommand::utils::{join_path, resolve_path};
use crate::core_network::datachan::close_data_connection;
use crate::helpers::send_response;
use crate::session::Session;
use log::{error, info};
use tokio::io::AsyncWriteExt;

/// Handles the STOR (Store) FTP command.
///
/// When the target already exists as a directory, its existing children are
/// walked instead: subdirectories are recreated with MKD and every file goes
/// through STOR again. The first failure stops the walk.
///
/// # Arguments
///
/// * `session` - The session of the connected client.
/// * `arg` - The path to store to.
pub fn handle_stor_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        let path = resolve_path(&session.current_dir, &arg);

        let is_directory = matches!(session.fs.stat(&path).await, Ok(metadata) if metadata.is_directory);
        if is_directory {
            info!("STOR target {} is a directory, walking its children", path);
            return store_directory(session, path).await;
        }

        store_file(session, path, WriteOptions::default()).await
    })
}

fn store_directory(session: &mut Session, path: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        let entries = session.fs.readdir(&path).await?;
        for entry in entries {
            let child = join_path(&path, &entry.name);
            if entry.is_directory {
                handle_mkd_command(session, child.clone()).await?;
                store_directory(session, child).await?;
            } else {
                handle_stor_command(session, child).await?;
            }
        }
        Ok(())
    })
}

/// Pipes the data connection into a collaborator write stream for `path`.
///
/// Shared by STOR and APPE; the data is committed when the write stream is
/// shut down.
pub async fn store_file(
    session: &mut Session,
    path: String,
    options: WriteOptions,
) -> Result<(), SessionError> {
    let mut data_stream = open_data_connection(session).await?;

    let mut writer = match session.fs.create_write_stream(&path, options).await {
        Ok(writer) => writer,
        Err(e) => {
            close_data_connection(data_stream).await;
            return Err(e.into());
        }
    };

    info!("Receiving file: {}", path);
    let buffer_size = session.config.server.transfer_buffer_size;
    let mut result = pipe(&mut data_stream, &mut writer, buffer_size).await;
    if let Ok(bytes) = result {
        result = writer.shutdown().await.map(|_| bytes);
    }
    close_data_connection(data_stream).await;

    match result {
        Ok(bytes) => {
            info!("File {} stored successfully ({} bytes)", path, bytes);
            send_response(&mut session.writer, b"226 Transfer complete.\r\n").await?;
        }
        Err(e) => {
            error!("Failed to store file {}: {}", path, e);
            send_response(&mut session.writer, b"550 Transfer failed.\r\n").await?;
        }
    }
    Ok(())
}
