// Author field parsing.
//
// The scraper captures the author block as rendered text: display name on
// the first line, @handle on the second, sometimes followed by timestamps.

use crate::models::UNKNOWN_USERNAME;

/// Handle and display name split out of a raw author field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInfo {
    pub username: String,
    pub display_name: String,
}

/// Split a raw author field into handle and display name.
///
/// With fewer than two lines the handle is `"unknown"` and the whole input
/// becomes the display name.
pub fn parse_author(raw: &str) -> AuthorInfo {
    let mut lines = raw.split('\n');
    match (lines.next(), lines.next()) {
        (Some(display_name), Some(handle)) => {
            let handle = handle.trim();
            let handle = handle.strip_prefix('@').unwrap_or(handle);
            AuthorInfo {
                username: if handle.is_empty() {
                    UNKNOWN_USERNAME.to_string()
                } else {
                    handle.to_string()
                },
                display_name: display_name.trim().to_string(),
            }
        }
        _ => AuthorInfo {
            username: UNKNOWN_USERNAME.to_string(),
            display_name: raw.to_string(),
        },
    }
}
