//! Slash-separated URI path joining.
//!
//! Rules are simple and deterministic:
//! - always forward slashes (`/`), regardless of host platform
//! - empty elements are ignored; all-empty input joins to `""`
//! - the joined path is lexically cleaned (`.`, `..`, repeated `/`)

/// Joins `base` and `uri` with `/` and cleans the result.
pub fn join_uri(base: &str, uri: &str) -> String {
    let joined = match (base.is_empty(), uri.is_empty()) {
        (true, true) => return String::new(),
        (true, false) => uri.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{base}/{uri}"),
    };
    clean(&joined)
}

/// Lexically normalizes a slash-separated path.
///
/// `..` at the root of an absolute path is dropped; in a relative path it is
/// kept once nothing is left to pop. An empty result becomes `.`.
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let body = parts.join("/");
    match (rooted, body.is_empty()) {
        (true, _) => format!("/{body}"),
        (false, true) => ".".to_string(),
        (false, false) => body,
    }
}
