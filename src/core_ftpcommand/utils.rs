/// Collapses `.`, `..` and repeated separators of an absolute path.
///
/// `..` at the root stays at the root. The result always starts with `/` and
/// never ends with one, except for the root itself.
pub fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }
    format!("/{}", segments.join("/"))
}

/// Maps a client supplied path to an absolute path, relative to `current_dir`.
///
/// Never touches the filesystem; whether the target exists is up to the caller.
pub fn resolve_path(current_dir: &str, arg: &str) -> String {
    match arg {
        "" | "." => current_dir.to_string(),
        ".." => normalize_path(&format!("{}/..", current_dir)),
        _ if arg.starts_with('/') => normalize_path(arg),
        _ => normalize_path(&format!("{}/{}", current_dir, arg)),
    }
}

/// Joins a directory path and one entry name.
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Letters accepted in an `ls` flag group such as `-la`.
const LIST_FLAGS: &str = "aAdFhlLRrSt1";

fn is_list_flag_group(token: &str) -> bool {
    match token.strip_prefix('-') {
        Some(flags) if !flags.is_empty() => flags.chars().all(|c| LIST_FLAGS.contains(c)),
        _ => false,
    }
}

/// Drops `ls`-style flags (`LIST -la /pub`) that many clients send.
///
/// Only tokens made entirely of known flag letters are dropped, so a
/// directory named `-backup` is still listed.
pub fn strip_list_options(arg: &str) -> &str {
    let mut rest = arg;
    loop {
        let trimmed = rest.trim_start_matches(' ');
        let (token, tail) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
        if !is_list_flag_group(token) {
            return trimmed;
        }
        rest = tail;
    }
}

/// Doubles embedded quotes for a path inside a quoted 257 reply.
pub fn quote_path(path: &str) -> String {
    path.replace('"', "\"\"")
}
