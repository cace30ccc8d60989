use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::helpers::send_response;
use crate::session::Session;

/// Handles MODE. Only stream mode exists, so the argument is acknowledged as is.
pub fn handle_mode_command(session: &mut Session, _arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        send_response(&mut session.writer, b"200 Mode set to S.\r\n").await?;
        Ok(())
    })
}
