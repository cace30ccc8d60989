use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::helpers::send_response;
use crate::session::Session;
use log::info;

/// Handles the USER FTP command.
///
/// Records the username for the following PASS. A session that is already
/// logged in keeps its identity and gets a 230.
///
/// # Arguments
///
/// * `session` - The session of the connected client.
/// * `arg` - The username.
pub fn handle_user_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        if session.is_authenticated {
            send_response(&mut session.writer, b"230 Already logged in.\r\n").await?;
            return Ok(());
        }

        let username = arg.trim().to_string();
        info!("User {} is logging in", username);
        session.username = Some(username);
        send_response(&mut session.writer, b"331 User name okay, need password.\r\n").await?;
        Ok(())
    })
}
