use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::helpers::send_response;
use crate::session::Session;
use log::{info, warn};

/// Handles the PASS FTP command.
///
/// Credentials are checked by the filesystem collaborator. On failure the
/// pending username is dropped and the client may start over with USER.
///
/// # Arguments
///
/// * `session` - The session of the connected client.
/// * `arg` - The password.
pub fn handle_pass_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        if session.is_authenticated {
            send_response(&mut session.writer, b"230 Already logged in.\r\n").await?;
            return Ok(());
        }

        let username = match session.username.clone() {
            Some(username) if !username.is_empty() => username,
            _ => {
                send_response(&mut session.writer, b"503 Login with USER first.\r\n").await?;
                return Ok(());
            }
        };

        match session.fs.connect_with_credentials(&username, &arg).await {
            Ok(()) => {
                session.is_authenticated = true;
                info!("User {} logged in", username);
                send_response(&mut session.writer, b"230 User logged in, proceed.\r\n").await?;
            }
            Err(e) => {
                warn!("Login failed for user {}: {}", username, e);
                session.username = None;
                send_response(&mut session.writer, b"530 Login incorrect.\r\n").await?;
            }
        }
        Ok(())
    })
}
