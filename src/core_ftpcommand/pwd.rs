use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::core_ftpcommand::utils::quote_path;
use crate::helpers::send_response;
use crate::session::Session;

/// Handles the PWD FTP command.
pub fn handle_pwd_command(session: &mut Session, _arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        let response = format!(
            "257 \"{}\" is the current directory.\r\n",
            quote_path(&session.current_dir)
        );
        send_response(&mut session.writer, response.as_bytes()).await?;
        Ok(())
    })
}
