use crate::core_ftpcommand::error::SessionError;
use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::core_ftpcommand::utils::resolve_path;
use crate::helpers::send_response;
use crate::session::Session;
use log::{debug, warn};

pub fn handle_cwd_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(change_directory(session, arg))
}

/// Moves the session into `arg` once the collaborator confirms it is a directory.
/// The working directory is left alone on any failure.
pub async fn change_directory(session: &mut Session, arg: String) -> Result<(), SessionError> {
    let new_dir = resolve_path(&session.current_dir, &arg);
    let metadata = session.fs.stat(&new_dir).await?;

    if metadata.is_directory {
        debug!("Changing directory from {} to {}", session.current_dir, new_dir);
        let response = format!("250 Directory changed to {}\r\n", new_dir);
        session.current_dir = new_dir;
        send_response(&mut session.writer, response.as_bytes()).await?;
    } else {
        warn!("CWD target is not a directory: {}", new_dir);
        send_response(&mut session.writer, b"550 Not a directory.\r\n").await?;
    }
    Ok(())
}
