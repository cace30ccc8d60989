pub mod datachan;
pub mod error;
pub mod network;
pub mod pasv;
pub mod port;
