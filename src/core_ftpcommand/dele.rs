use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::core_ftpcommand::utils::resolve_path;
use crate::helpers::send_response;
use crate::session::Session;
use log::info;

/// Handles the DELE FTP command.
///
/// # Arguments
///
/// * `session` - The session of the connected client.
/// * `arg` - The path of the file to delete.
pub fn handle_dele_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        let path = resolve_path(&session.current_dir, &arg);
        session.fs.unlink(&path).await?;

        info!("File deleted: {}", path);
        send_response(&mut session.writer, b"250 File deleted successfully.\r\n").await?;
        Ok(())
    })
}
