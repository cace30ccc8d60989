use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::helpers::send_response;
use crate::session::Session;

/// Handles the QUIT FTP command.
///
/// Only the reply is sent here; the connection loop tears the session down
/// once it sees QUIT.
pub fn handle_quit_command(session: &mut Session, _arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        send_response(&mut session.writer, b"221 Goodbye.\r\n").await?;
        Ok(())
    })
}
