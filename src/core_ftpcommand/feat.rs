use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::helpers::send_response;
use crate::session::Session;

const FEATURES: &[&str] = &["SIZE", "MDTM", "MLST type*;size*;modify*;", "MLSD"];

/// Handles the FEAT FTP command with a multi-line 211 reply.
pub fn handle_feat_command(session: &mut Session, _arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        let mut response = String::from("211-Features:\r\n");
        for feature in FEATURES {
            response.push_str(&format!(" {}\r\n", feature));
        }
        response.push_str("211 End\r\n");

        send_response(&mut session.writer, response.as_bytes()).await?;
        Ok(())
    })
}
