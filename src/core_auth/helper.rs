use crate::core_auth::core_auth::PasswdEntry;
use bcrypt::verify;
use log::{debug, warn};
use std::collections::HashMap;
use std::io;
use std::path::Path;

#[cfg(test)]
pub fn hash_password(password: &str) -> String {
    // Minimum cost keeps the tests fast
    bcrypt::hash(password, 4).expect("Failed to hash password")
}

pub fn verify_password(password: &str, hashed_password: &str) -> bool {
    verify(password, hashed_password).unwrap_or(false)
}

pub async fn load_passwd_file(path: &Path) -> io::Result<HashMap<String, PasswdEntry>> {
    let mut passwd_map = HashMap::new();
    let content = tokio::fs::read_to_string(path).await?;

    for (number, line) in content.lines().enumerate() {
        match PasswdEntry::from_line(line) {
            Some(entry) => {
                passwd_map.insert(entry.get_username().to_string(), entry);
            }
            None if !line.trim().is_empty() && !line.trim_start().starts_with('#') => {
                warn!("Ignoring malformed passwd line {} in {:?}", number + 1, path);
            }
            None => {}
        }
    }

    debug!("Loaded {} passwd entries from {:?}", passwd_map.len(), path);
    Ok(passwd_map)
}

/// Checks `username`/`password` against the passwd file at `path`.
pub async fn check_credentials(path: &Path, username: &str, password: &str) -> io::Result<bool> {
    let passwd_map = load_passwd_file(path).await?;
    let Some(entry) = passwd_map.get(username) else {
        return Ok(false);
    };

    // Verification runs on the blocking pool
    let password = password.to_string();
    let hashed_password = entry.get_hashed_password().to_string();
    tokio::task::spawn_blocking(move || verify_password(&password, &hashed_password))
        .await
        .map_err(io::Error::other)
}
