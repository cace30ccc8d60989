use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::core_ftpcommand::listing::format_facts;
use crate::core_ftpcommand::utils::resolve_path;
use crate::helpers::send_response;
use crate::session::Session;

/// Handles the MLST FTP command.
///
/// Unlike MLSD the facts travel on the control connection, wrapped in a
/// multi-line 250 reply.
pub fn handle_mlst_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        let path = resolve_path(&session.current_dir, &arg);
        let metadata = session.fs.stat(&path).await?;

        let response = format!(
            "250-Begin\r\n {} {}\r\n250 End\r\n",
            format_facts(metadata.is_directory, metadata.size, &metadata.modified),
            path
        );
        send_response(&mut session.writer, response.as_bytes()).await?;
        Ok(())
    })
}
