use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::core_ftpcommand::list::list_directory;
use crate::core_ftpcommand::listing::format_machine_listing;
use crate::session::Session;

pub fn handle_mlsd_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(list_directory(session, arg, format_machine_listing))
}
