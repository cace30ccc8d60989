use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::core_ftpcommand::list::list_directory;
use crate::core_ftpcommand::listing::format_name_listing;
use crate::session::Session;

/// Handles the NLST FTP command: names only, one per line.
pub fn handle_nlst_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(list_directory(session, arg, format_name_listing))
}
