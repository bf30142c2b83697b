//! Candidate path extraction from shell command strings.
//!
//! This is intentionally a heuristic lexical scan, not a shell parser: it
//! errs toward flagging too many tokens as paths rather than missing a real
//! path reference. Subshells, variable expansion, globbing, and command
//! substitution are out of scope.

/// Redirection operators whose following token is a path target.
const REDIRECT_TOKENS: &[&str] = &[">", ">>", "<"];

/// Splits a command into whitespace-separated tokens, treating single- and
/// double-quoted runs as atomic so that quoted arguments with embedded
/// whitespace survive as one token. Quote characters are kept in place;
/// [`strip_quotes`] removes the surrounding layer later.
fn tokenize(command: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut buf = String::new();
    let (mut in_single, mut in_double) = (false, false);

    for c in command.chars() {
        match c {
            '\'' if !in_double => {
                in_single = !in_single;
                buf.push(c);
            }
            '"' if !in_single => {
                in_double = !in_double;
                buf.push(c);
            }
            c if c.is_whitespace() && !in_single && !in_double => {
                if !buf.is_empty() {
                    tokens.push(std::mem::take(&mut buf));
                }
            }
            c => buf.push(c),
        }
    }
    if !buf.is_empty() {
        tokens.push(buf);
    }

    tokens
}

/// Strips a single layer of surrounding matching quote characters.
fn strip_quotes(token: &str) -> &str {
    let bytes = token.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'\'' || first == b'"') {
            return &token[1..token.len() - 1];
        }
    }
    token
}

fn push_unique(paths: &mut Vec<String>, candidate: &str) {
    if !paths.iter().any(|p| p == candidate) {
        paths.push(candidate.to_string());
    }
}

/// Extracts the distinct candidate paths a command string references.
///
/// The first token (the program name) and tokens beginning with `-`
/// (flags) are never candidates, even when they contain slashes: the
/// primary risk is data destinations and sources, not option values.
/// Every other token is a candidate when it contains a `/`, starts with
/// `.` or `~`, contains `..`, or immediately follows a redirection
/// operator. Spaceless redirections such as `>out.log` yield their target,
/// and `cd <target>` yields the target unless it is exactly `-`.
///
/// Candidates are deduplicated; insertion order is preserved.
#[must_use]
pub fn extract_paths(command: &str) -> Vec<String> {
    let tokens = tokenize(command);
    let mut paths: Vec<String> = Vec::new();

    for (i, raw) in tokens.iter().enumerate() {
        let token = strip_quotes(raw);

        if i == 0 || token.starts_with('-') {
            continue;
        }

        let follows_redirect = REDIRECT_TOKENS.contains(&tokens[i - 1].as_str());
        if token.contains('/')
            || token.starts_with('.')
            || token.contains("..")
            || token.starts_with('~')
            || follows_redirect
        {
            push_unique(&mut paths, token);
        }

        // Redirection without a space, e.g. `>file.txt` or `>>file.txt`.
        let target = token.trim_start_matches('>');
        if target.len() < token.len() && !target.is_empty() {
            push_unique(&mut paths, target);
        }
    }

    if let Some(rest) = command.strip_prefix("cd ") {
        let target = strip_quotes(rest.trim());
        if !target.is_empty() && target != "-" {
            push_unique(&mut paths, target);
        }
    }

    paths
}
