use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::core_ftpcommand::utils::{quote_path, resolve_path};
use crate::helpers::send_response;
use crate::session::Session;
use log::info;

/// Handles the MKD and XMKD FTP commands.
pub fn handle_mkd_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        let path = resolve_path(&session.current_dir, &arg);
        session.fs.mkdir(&path).await?;

        info!("Directory created: {}", path);
        let response = format!("257 \"{}\" created.\r\n", quote_path(&path));
        send_response(&mut session.writer, response.as_bytes()).await?;
        Ok(())
    })
}
