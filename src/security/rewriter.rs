//! Replaces the leading command name of a matched redirect.

/// Swap the command name ending at `matched_prefix_end` for `canonical_name`.
///
/// Redirect patterns may consume one whitespace character after the command
/// name. That character belongs to the argument tail, so it is handed back
/// before splitting. Everything after the command name is kept byte-for-byte.
/// An index past the end or off a character boundary returns `command`
/// unchanged.
///
/// # Examples
/// ```
/// use trash_guard::security::rewrite;
///
/// assert_eq!(rewrite("rm -rf ./build", 3, "trash"), "trash -rf ./build");
/// assert_eq!(rewrite("/bin/rmdir", 10, "trash"), "trash");
/// ```
pub fn rewrite(command: &str, matched_prefix_end: usize, canonical_name: &str) -> String {
    let Some(matched) = command.get(..matched_prefix_end) else {
        return command.to_string();
    };
    let name_end = match matched.chars().next_back() {
        Some(c) if c.is_whitespace() => matched.len() - c.len_utf8(),
        _ => matched.len(),
    };

    let mut out = String::with_capacity(canonical_name.len() + command.len() - name_end);
    out.push_str(canonical_name);
    out.push_str(&command[name_end..]);
    out
}

/// Bare program name of the token ending at `matched_prefix_end`, e.g. `rm` for `/bin/rm `.
pub(crate) fn original_name(command: &str, matched_prefix_end: usize) -> &str {
    let matched = command.get(..matched_prefix_end).unwrap_or(command).trim_end();
    matched.rsplit('/').next().unwrap_or(matched)
}
