use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::core_ftpcommand::transfer::{open_data_connection, pipe};
use crate::core_ftpcommand::utils::resolve_path;
use crate::core_network::datachan::close_data_connection;
use crate::helpers::send_response;
use crate::session::Session;
use log::{error, info};

/// Handles the RETR (Retrieve) FTP command.
///
/// Streams the file from the collaborator to the data connection. Bytes
/// already sent when the stream fails are not retracted; the client gets a
/// 550 instead of the 226.
///
/// # Arguments
///
/// * `session` - The session of the connected client.
/// * `arg` - The path of the file to retrieve.
pub fn handle_retr_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        let path = resolve_path(&session.current_dir, &arg);
        let mut data_stream = open_data_connection(session).await?;

        let mut reader = match session.fs.create_read_stream(&path).await {
            Ok(reader) => reader,
            Err(e) => {
                close_data_connection(data_stream).await;
                return Err(e.into());
            }
        };

        info!("Sending file: {}", path);
        let buffer_size = session.config.server.transfer_buffer_size;
        let result = pipe(&mut reader, &mut data_stream, buffer_size).await;
        close_data_connection(data_stream).await;

        match result {
            Ok(bytes) => {
                info!("File {} sent successfully ({} bytes)", path, bytes);
                send_response(&mut session.writer, b"226 Transfer complete.\r\n").await?;
            }
            Err(e) => {
                error!("Failed to send file {}: {}", path, e);
                send_response(&mut session.writer, b"550 Transfer failed.\r\n").await?;
            }
        }
        Ok(())
    })
}
