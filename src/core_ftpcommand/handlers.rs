use crate::core_ftpcommand::error::SessionError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::core_ftpcommand::{
    appe, cdup, cwd, dele, feat, list, mdtm, mkd, mlsd, mlst, mode, nlst, noop, pass, pwd, quit,
    retr, rmd, rnfr, rnto, size, stor, stru, syst, type_, user,
};
use crate::core_network::{pasv, port};
use crate::helpers::send_response;
use crate::session::Session;
use log::warn;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = Result<(), SessionError>> + Send + 'a>>;

/// A command handler receives the session and the raw argument string.
pub type CommandHandler = for<'a> fn(&'a mut Session, String) -> HandlerFuture<'a>;

pub type CommandHandlers = HashMap<FtpCommand, CommandHandler>;

pub fn initialize_command_handlers() -> CommandHandlers {
    let mut handlers: CommandHandlers = HashMap::new();

    handlers.insert(FtpCommand::USER, user::handle_user_command);
    handlers.insert(FtpCommand::PASS, pass::handle_pass_command);
    handlers.insert(FtpCommand::QUIT, quit::handle_quit_command);
    handlers.insert(FtpCommand::SYST, syst::handle_syst_command);
    handlers.insert(FtpCommand::FEAT, feat::handle_feat_command);
    handlers.insert(FtpCommand::PWD, pwd::handle_pwd_command);
    handlers.insert(FtpCommand::TYPE, type_::handle_type_command);
    handlers.insert(FtpCommand::MODE, mode::handle_mode_command);
    handlers.insert(FtpCommand::STRU, stru::handle_stru_command);
    handlers.insert(FtpCommand::NOOP, noop::handle_noop_command);
    handlers.insert(FtpCommand::CWD, cwd::handle_cwd_command);
    handlers.insert(FtpCommand::CDUP, cdup::handle_cdup_command);

    // Data channel set up
    handlers.insert(FtpCommand::PASV, pasv::handle_pasv_command);
    handlers.insert(FtpCommand::PORT, port::handle_port_command);

    handlers.insert(FtpCommand::LIST, list::handle_list_command);
    handlers.insert(FtpCommand::NLST, nlst::handle_nlst_command);
    handlers.insert(FtpCommand::MLSD, mlsd::handle_mlsd_command);
    handlers.insert(FtpCommand::MLST, mlst::handle_mlst_command);
    handlers.insert(FtpCommand::RETR, retr::handle_retr_command);
    handlers.insert(FtpCommand::STOR, stor::handle_stor_command);
    handlers.insert(FtpCommand::APPE, appe::handle_appe_command);

    handlers.insert(FtpCommand::DELE, dele::handle_dele_command);
    handlers.insert(FtpCommand::MKD, mkd::handle_mkd_command);
    handlers.insert(FtpCommand::XMKD, mkd::handle_mkd_command);
    handlers.insert(FtpCommand::RMD, rmd::handle_rmd_command);
    handlers.insert(FtpCommand::XRMD, rmd::handle_rmd_command);
    handlers.insert(FtpCommand::RNFR, rnfr::handle_rnfr_command);
    handlers.insert(FtpCommand::RNTO, rnto::handle_rnto_command);
    handlers.insert(FtpCommand::SIZE, size::handle_size_command);
    handlers.insert(FtpCommand::MDTM, mdtm::handle_mdtm_command);

    handlers
}

/// Runs one parsed command line against the session.
///
/// Applies the login gate, looks the verb up and turns every non fatal
/// handler failure into a 550 reply. Only control connection errors are
/// returned to the caller.
pub async fn dispatch_command(
    session: &mut Session,
    handlers: &CommandHandlers,
    verb: &str,
    arg: String,
) -> Result<(), SessionError> {
    let command = FtpCommand::from_str(verb);

    if !session.is_authenticated && !command.is_some_and(|c| c.allowed_before_login()) {
        send_response(&mut session.writer, b"530 Please login with USER and PASS.\r\n").await?;
        return Ok(());
    }

    let Some(handler) = command.and_then(|c| handlers.get(&c)).copied() else {
        warn!("Command not implemented: {}", verb);
        send_response(&mut session.writer, b"502 Command not implemented.\r\n").await?;
        return Ok(());
    };

    match handler(session, arg).await {
        Ok(()) => Ok(()),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            warn!("Error handling command {}: {}", verb, e);
            let response = format!("{}\r\n", e.to_ftp_response());
            send_response(&mut session.writer, response.as_bytes()).await?;
            Ok(())
        }
    }
}
