// Here's the list of the FTP commands implemented
pub mod appe;
pub mod cdup;
pub mod cwd;
pub mod dele;
pub mod feat;
pub mod list;
pub mod mdtm;
pub mod mkd;
pub mod mlsd;
pub mod mlst;
pub mod mode;
pub mod nlst;
pub mod noop;
pub mod pass;
pub mod pwd;
pub mod quit;
pub mod retr;
pub mod rmd;
pub mod rnfr;
pub mod rnto;
pub mod size;
pub mod stor;
pub mod stru;
pub mod syst;
pub mod type_;
pub mod user;

// Dispatch, errors and the shared transfer plumbing
pub mod error;
pub mod ftpcommand;
pub mod handlers;
pub mod transfer;

// The utils and common functions are here
pub mod listing;
pub mod utils;
