//! Console output helpers

use std::path::{Path, PathBuf};

const SEPARATOR: &str = "==========================================";

/// Prints `body` between two separator lines
pub fn section<F: FnOnce()>(body: F) {
    println!("{}", SEPARATOR);
    body();
    println!("{}", SEPARATOR);
}

/// Replaces the last `scope` characters of `secret` with `*`.
///
/// Secrets no longer than `scope` are masked entirely.
pub fn mask_secret(secret: &str, scope: usize) -> String {
    let len = secret.chars().count();
    let keep = len.saturating_sub(scope);
    secret
        .chars()
        .enumerate()
        .map(|(i, c)| if i < keep { c } else { '*' })
        .collect()
}

/// Absolute form of `path`, or `path` itself when it cannot be resolved
pub fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
