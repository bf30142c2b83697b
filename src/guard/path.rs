//! Lexical path normalization.
//!
//! Resolves `~`, relative prefixes, `.` and `..` segments purely as text.
//! Nothing here touches the real filesystem: symlinks are not followed and
//! paths are never required to exist. Normalization always produces a
//! string and never fails.

/// Expands a leading `~` to the user's home directory.
///
/// If the home directory cannot be determined, the path is returned
/// unmodified rather than treated as an error; tilde expansion is the one
/// sub-step of normalization that is allowed to silently fall through.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return format!("{}{}", home.display(), rest);
        }
    }
    path.to_string()
}

/// Normalizes a path to a canonical absolute form, purely lexically.
///
/// A leading `~` is expanded, relative paths are anchored at `working_dir`,
/// and `.` / `..` segments are collapsed with a segment stack. A `..` at
/// the root is a no-op rather than an error, mirroring lexical collapsing
/// instead of filesystem-aware resolution. Repeated and trailing
/// separators are discarded.
#[must_use]
pub fn normalize(path: &str, working_dir: &str) -> String {
    let expanded = expand_tilde(path);
    let absolute = if expanded.starts_with('/') {
        expanded
    } else {
        format!("{working_dir}/{expanded}")
    };

    let mut stack: Vec<&str> = Vec::new();
    for segment in absolute.split('/').filter(|s| !s.is_empty()) {
        match segment {
            "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }

    format!("/{}", stack.join("/"))
}
