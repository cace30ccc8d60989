use crate::core_fs::WriteOptions;
use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::core_ftpcommand::stor::store_file;
use crate::core_ftpcommand::utils::resolve_path;
use crate::session::Session;
use log::debug;

/// Handles the APPE FTP command.
///
/// Appends at the current size of the target; a missing target is created.
pub fn handle_appe_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        let path = resolve_path(&session.current_dir, &arg);
        let start_offset = match session.fs.stat(&path).await {
            Ok(metadata) => metadata.size,
            Err(_) => 0,
        };
        debug!("Appending to {} at offset {}", path, start_offset);

        let options = WriteOptions {
            append: true,
            start_offset,
        };
        store_file(session, path, options).await
    })
}
