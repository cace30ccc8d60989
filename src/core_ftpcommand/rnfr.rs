use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::core_ftpcommand::utils::resolve_path;
use crate::helpers::send_response;
use crate::session::Session;
use log::debug;

/// Handles the RNFR FTP command.
///
/// Only remembers the source path; whether it exists is left to the rename.
pub fn handle_rnfr_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        let path = resolve_path(&session.current_dir, &arg);
        debug!("Rename source set to {}", path);
        session.rename_from = Some(path);

        send_response(
            &mut session.writer,
            b"350 Requested file action pending further information.\r\n",
        )
        .await?;
        Ok(())
    })
}
