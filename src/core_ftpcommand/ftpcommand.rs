#[derive(Eq, Hash, PartialEq, Debug, Clone, Copy)]
pub enum FtpCommand {
    USER,
    PASS,
    QUIT,
    SYST,
    FEAT,
    PWD,
    TYPE,
    MODE,
    STRU,
    NOOP,
    CWD,
    CDUP,
    PASV,
    PORT,
    LIST,
    NLST,
    MLSD,
    MLST,
    RETR,
    STOR,
    APPE,
    DELE,
    MKD,
    XMKD,
    RMD,
    XRMD,
    RNFR,
    RNTO,
    SIZE,
    MDTM,
}

impl FtpCommand {
    pub fn from_str(cmd: &str) -> Option<FtpCommand> {
        match cmd.to_ascii_uppercase().as_str() {
            "USER" => Some(FtpCommand::USER),
            "PASS" => Some(FtpCommand::PASS),
            "QUIT" => Some(FtpCommand::QUIT),
            "SYST" => Some(FtpCommand::SYST),
            "FEAT" => Some(FtpCommand::FEAT),
            "PWD" => Some(FtpCommand::PWD),
            "TYPE" => Some(FtpCommand::TYPE),
            "MODE" => Some(FtpCommand::MODE),
            "STRU" => Some(FtpCommand::STRU),
            "NOOP" => Some(FtpCommand::NOOP),
            "CWD" => Some(FtpCommand::CWD),
            "CDUP" => Some(FtpCommand::CDUP),
            "PASV" => Some(FtpCommand::PASV),
            "PORT" => Some(FtpCommand::PORT),
            "LIST" => Some(FtpCommand::LIST),
            "NLST" => Some(FtpCommand::NLST),
            "MLSD" => Some(FtpCommand::MLSD),
            "MLST" => Some(FtpCommand::MLST),
            "RETR" => Some(FtpCommand::RETR),
            "STOR" => Some(FtpCommand::STOR),
            "APPE" => Some(FtpCommand::APPE),
            "DELE" => Some(FtpCommand::DELE),
            "MKD" => Some(FtpCommand::MKD),
            "XMKD" => Some(FtpCommand::XMKD),
            "RMD" => Some(FtpCommand::RMD),
            "XRMD" => Some(FtpCommand::XRMD),
            "RNFR" => Some(FtpCommand::RNFR),
            "RNTO" => Some(FtpCommand::RNTO),
            "SIZE" => Some(FtpCommand::SIZE),
            "MDTM" => Some(FtpCommand::MDTM),
            _ => None,
        }
    }

    /// Commands admitted before the client has logged in.
    pub fn allowed_before_login(&self) -> bool {
        matches!(self, FtpCommand::USER | FtpCommand::PASS | FtpCommand::QUIT)
    }
}

/// Splits one control line into its upper-cased verb and the raw argument.
///
/// The argument is everything after the first space, kept verbatim up to
/// the line terminator, so paths with inner or trailing spaces survive.
/// Blank lines yield `None`.
pub fn parse_command_line(line: &str) -> Option<(String, String)> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim_end().is_empty() {
        return None;
    }

    let (verb, arg) = line.split_once(' ').unwrap_or((line, ""));
    Some((verb.to_ascii_uppercase(), arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbs_are_case_insensitive() {
        assert_eq!(FtpCommand::from_str("user"), Some(FtpCommand::USER));
        assert_eq!(FtpCommand::from_str("XmKd"), Some(FtpCommand::XMKD));
        assert_eq!(FtpCommand::from_str("SITE"), None);
    }

    #[test]
    fn test_login_triad() {
        assert!(FtpCommand::USER.allowed_before_login());
        assert!(FtpCommand::PASS.allowed_before_login());
        assert!(FtpCommand::QUIT.allowed_before_login());
        assert!(!FtpCommand::LIST.allowed_before_login());
        assert!(!FtpCommand::PWD.allowed_before_login());
    }

    #[test]
    fn test_parse_command_line() {
        assert_eq!(
            parse_command_line("stor my holiday photo.jpg\r\n"),
            Some(("STOR".to_string(), "my holiday photo.jpg".to_string()))
        );
        assert_eq!(parse_command_line("PWD\r\n"), Some(("PWD".to_string(), String::new())));
        assert_eq!(parse_command_line("  \r\n"), None);
        assert_eq!(parse_command_line("NOOP\n"), Some(("NOOP".to_string(), String::new())));
        assert_eq!(parse_command_line(""), None);
    }

    #[test]
    fn test_trailing_spaces_belong_to_the_argument() {
        assert_eq!(
            parse_command_line("RETR notes.txt  \r\n"),
            Some(("RETR".to_string(), "notes.txt  ".to_string()))
        );
    }
}
