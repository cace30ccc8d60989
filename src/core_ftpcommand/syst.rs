use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::helpers::send_response;
use crate::session::Session;

pub fn handle_syst_command(session: &mut Session, _arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        send_response(&mut session.writer, b"215 UNIX Type: L8\r\n").await?;
        Ok(())
    })
}
