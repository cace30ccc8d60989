use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::core_ftpcommand::listing::format_timestamp;
use crate::core_ftpcommand::utils::resolve_path;
use crate::helpers::send_response;
use crate::session::Session;

/// Handles the MDTM FTP command.
///
/// Replies with the modification time as `YYYYMMDDHHMMSS` in UTC.
pub fn handle_mdtm_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        let path = resolve_path(&session.current_dir, &arg);
        let metadata = session.fs.stat(&path).await?;

        let response = format!("213 {}\r\n", format_timestamp(&metadata.modified));
        send_response(&mut session.writer, response.as_bytes()).await?;
        Ok(())
    })
}
