#[allow(clippy::module_inception)]
pub mod core_auth;
pub mod helper;

pub use helper::check_credentials;
