use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::helpers::send_response;
use crate::session::Session;

/// Handles the TYPE FTP command.
///
/// Sets the transfer type to ASCII, EBCDIC, Image or Local byte. The type is
/// only recorded; transfers always move bytes unchanged.
///
/// # Arguments
///
/// * `session` - The session of the connected client.
/// * `arg` - The type code, followed by the byte size for `L`.
pub fn handle_type_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        let parts: Vec<&str> = arg.split_whitespace().collect();
        let primary_type = parts.first().map(|s| s.to_uppercase()).unwrap_or_default();

        let response = match primary_type.as_str() {
            "A" | "E" | "I" => {
                session.type_ = primary_type.clone();
                session.byte_size = None;
                format!("200 Type set to {}\r\n", primary_type)
            }
            "L" => match parts.get(1).map(|s| s.parse::<u8>()) {
                Some(Ok(byte_size)) => {
                    session.type_ = "L".to_string();
                    session.byte_size = Some(byte_size);
                    format!("200 Type set to L ({})\r\n", byte_size)
                }
                Some(Err(_)) => "504 Invalid byte size parameter.\r\n".to_string(),
                None => "504 Byte size parameter required for TYPE L.\r\n".to_string(),
            },
            _ => "504 Command not implemented for that parameter.\r\n".to_string(),
        };

        send_response(&mut session.writer, response.as_bytes()).await?;
        Ok(())
    })
}
