//! Path construction for diff records.
//!
//! Paths are plain strings built from the root down: the root is the empty
//! string, object members append `.key` (or `["key"]` when the key is not a
//! bare identifier) and array elements append `[index]`. They are
//! informational output only and are never parsed back.

/// Append an object member segment to `parent`.
///
/// Keys matching identifier syntax (`[A-Za-z_$][A-Za-z0-9_$]*`) use dot
/// notation; anything else is bracket-quoted verbatim.
///
/// # Example
///
/// ```
/// use json_lens_diff::member_path;
///
/// assert_eq!(member_path("", "user"), "user");
/// assert_eq!(member_path("user", "name"), "user.name");
/// assert_eq!(member_path("user", "my-key"), "user[\"my-key\"]");
/// assert_eq!(member_path("", "my-key"), "[\"my-key\"]");
/// ```
pub fn member_path(parent: &str, key: &str) -> String {
    if is_identifier(key) {
        if parent.is_empty() {
            key.to_string()
        } else {
            format!("{parent}.{key}")
        }
    } else {
        format!("{parent}[\"{key}\"]")
    }
}

/// Append an array element segment to `parent`.
///
/// # Example
///
/// ```
/// use json_lens_diff::index_path;
///
/// assert_eq!(index_path("", 0), "[0]");
/// assert_eq!(index_path("items", 2), "items[2]");
/// ```
pub fn index_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
