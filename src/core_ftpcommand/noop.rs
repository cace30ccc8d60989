use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::helpers::send_response;
use crate::session::Session;

/// Handles the NOOP FTP command.
pub fn handle_noop_command(session: &mut Session, _arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        send_response(&mut session.writer, b"200 NOOP command successful.\r\n").await?;
        Ok(())
    })
}
