use crate::core_ftpcommand::error::SessionError;
use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::core_ftpcommand::utils::resolve_path;
use crate::helpers::send_response;
use crate::session::Session;
use log::info;

/// Handles the RNTO FTP command.
///
/// Consumes the path stored by RNFR, so a second RNTO needs a new RNFR even
/// when the rename failed.
pub fn handle_rnto_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        let from = session.rename_from.take().ok_or(SessionError::NoRenameSource)?;
        let to = resolve_path(&session.current_dir, &arg);

        session.fs.rename(&from, &to).await?;

        info!("Renamed {} to {}", from, to);
        send_response(&mut session.writer, b"250 File renamed successfully.\r\n").await?;
        Ok(())
    })
}
