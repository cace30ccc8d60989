use crate::core_fs::DirEntry;
use crate::core_ftpcommand::error::SessionError;
use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::core_ftpcommand::listing::format_unix_listing;
use crate::core_ftpcommand::transfer::send_listing;
use crate::core_ftpcommand::utils::{resolve_path, strip_list_options};
use crate::session::Session;
use log::info;

/// Handles the LIST FTP command.
///
/// Sends an `ls -l` style listing of the requested directory, or of the
/// current directory when no path is given, over the data connection.
///
/// # Arguments
///
/// * `session` - The session of the connected client.
/// * `arg` - Optional `ls` flags followed by an optional path.
pub fn handle_list_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(list_directory(session, arg, format_unix_listing))
}

/// Reads the directory named by `arg` and sends it in the given format.
///
/// The collaborator is queried before the data connection is awaited, so a
/// bad path fails without consuming the data connection.
pub async fn list_directory(
    session: &mut Session,
    arg: String,
    format: fn(&[DirEntry]) -> String,
) -> Result<(), SessionError> {
    let path = resolve_path(&session.current_dir, strip_list_options(&arg));
    let entries = session.fs.readdir(&path).await?;
    info!("Listing {} ({} entries)", path, entries.len());

    send_listing(session, format(&entries)).await
}
