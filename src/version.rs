use std::cmp::Ordering;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Order `remote` relative to `current`, segment by segment.
///
/// Segments are compared as strings, not numbers, so `"10"` sorts before
/// `"9"`. When every shared segment matches, the version with more segments
/// is the greater one.
pub fn compare_versions(current: &str, remote: &str) -> Ordering {
    if current == remote {
        return Ordering::Equal;
    }

    let current_parts: Vec<&str> = current.split('.').collect();
    let remote_parts: Vec<&str> = remote.split('.').collect();

    for (cur, rem) in current_parts.iter().zip(remote_parts.iter()) {
        match rem.cmp(cur) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    remote_parts.len().cmp(&current_parts.len())
}

/// True when `remote` is strictly newer than `current`.
pub fn is_newer(current: &str, remote: &str) -> bool {
    compare_versions(current, remote) == Ordering::Greater
}
