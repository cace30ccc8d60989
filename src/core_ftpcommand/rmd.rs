use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::core_ftpcommand::utils::resolve_path;
use crate::helpers::send_response;
use crate::session::Session;
use log::info;

pub fn handle_rmd_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        let path = resolve_path(&session.current_dir, &arg);
        session.fs.rmdir(&path).await?;

        info!("Directory removed: {}", path);
        send_response(&mut session.writer, b"250 Directory removed.\r\n").await?;
        Ok(())
    })
}
