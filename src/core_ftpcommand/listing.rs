//! Directory listing wire formats.
//!
//! All three formats are pure functions of the entries: one CRLF terminated
//! line per entry, in the order given, and an empty payload for no entries.

use crate::core_fs::DirEntry;
use chrono::{DateTime, Utc};

fn join_lines<I: Iterator<Item = String>>(lines: I) -> String {
    let mut listing = String::new();
    for line in lines {
        listing.push_str(&line);
        listing.push_str("\r\n");
    }
    listing
}

/// `YYYYMMDDHHMMSS` in UTC, as used by MDTM and the MLSx `modify` fact.
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.format("%Y%m%d%H%M%S").to_string()
}

/// `ls -l` style line as produced for LIST.
pub fn format_unix_line(entry: &DirEntry) -> String {
    let permissions = if entry.is_directory { "drwxr-xr-x" } else { "-rw-r--r--" };
    format!(
        "{} 1 user group {:>12} {} {}",
        permissions,
        entry.size,
        entry.modified.format("%b %d %H:%M"),
        entry.name
    )
}

/// The `type=..;size=..;modify=..` fact string of MLSD and MLST.
pub fn format_facts(is_directory: bool, size: u64, modified: &DateTime<Utc>) -> String {
    format!(
        "type={};size={};modify={}",
        if is_directory { "dir" } else { "file" },
        size,
        format_timestamp(modified)
    )
}

pub fn format_unix_listing(entries: &[DirEntry]) -> String {
    join_lines(entries.iter().map(format_unix_line))
}

pub fn format_name_listing(entries: &[DirEntry]) -> String {
    join_lines(entries.iter().map(|entry| entry.name.clone()))
}

pub fn format_machine_listing(entries: &[DirEntry]) -> String {
    join_lines(entries.iter().map(|entry| {
        format!(
            "{} {}",
            format_facts(entry.is_directory, entry.size, &entry.modified),
            entry.name
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_entries() -> Vec<DirEntry> {
        vec![
            DirEntry {
                name: "incoming".to_string(),
                is_directory: true,
                size: 4096,
                modified: Utc.with_ymd_and_hms(2024, 1, 5, 14, 30, 0).unwrap(),
            },
            DirEntry {
                name: "read me.txt".to_string(),
                is_directory: false,
                size: 1234,
                modified: Utc.with_ymd_and_hms(2023, 11, 20, 8, 5, 9).unwrap(),
            },
        ]
    }

    #[test]
    fn test_unix_listing() {
        let listing = format_unix_listing(&sample_entries());
        assert_eq!(
            listing,
            "drwxr-xr-x 1 user group         4096 Jan 05 14:30 incoming\r\n\
             -rw-r--r-- 1 user group         1234 Nov 20 08:05 read me.txt\r\n"
        );
    }

    #[test]
    fn test_name_listing() {
        assert_eq!(format_name_listing(&sample_entries()), "incoming\r\nread me.txt\r\n");
    }

    #[test]
    fn test_machine_listing() {
        assert_eq!(
            format_machine_listing(&sample_entries()),
            "type=dir;size=4096;modify=20240105143000 incoming\r\n\
             type=file;size=1234;modify=20231120080509 read me.txt\r\n"
        );
    }

    #[test]
    fn test_empty_listing_is_empty() {
        assert_eq!(format_unix_listing(&[]), "");
        assert_eq!(format_name_listing(&[]), "");
        assert_eq!(format_machine_listing(&[]), "");
    }

    #[test]
    fn test_formatters_are_deterministic() {
        let entries = sample_entries();
        assert_eq!(format_unix_listing(&entries), format_unix_listing(&entries.clone()));
        assert_eq!(format_name_listing(&entries), format_name_listing(&entries.clone()));
        assert_eq!(format_machine_listing(&entries), format_machine_listing(&entries.clone()));
    }

    #[test]
    fn test_large_sizes_widen_the_column() {
        let entry = DirEntry {
            name: "huge.iso".to_string(),
            is_directory: false,
            size: 12_345_678_901_234,
            modified: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        };
        assert_eq!(
            format_unix_line(&entry),
            "-rw-r--r-- 1 user group 12345678901234 Mar 01 00:00 huge.iso"
        );
    }
}
