//! Filesystem path resolution for engine data.
//!
//! This module locates the directory where Marquee keeps its own files
//! (currently the trace export). Resolution follows the XDG convention with
//! a home-relative fallback, and degrades to the working directory when no
//! home is available (e.g. minimal containers).

use std::path::PathBuf;

/// Returns the data directory for Marquee files.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/marquee`
/// 2. `$HOME/.local/share/marquee`
/// 3. `./.marquee`
///
/// The directory is not created here; callers create it when first writing.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
        let base = PathBuf::from(xdg);
        if !base.as_os_str().is_empty() {
            return base.join("marquee");
        }
    }
    if let Some(home) = std::env::var_os("HOME") {
        let base = PathBuf::from(home);
        if !base.as_os_str().is_empty() {
            return base.join(".local/share/marquee");
        }
    }
    PathBuf::from(".marquee")
}

/// Expands a leading tilde to the user's home directory.
///
/// Host-supplied paths (e.g. a custom theme file) may use `~/` shorthand.
/// Paths without a tilde pass through unchanged, as does everything when no
/// home directory is set.
///
/// # Examples
///
/// ```
/// use marquee::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/path"), "relative/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = std::env::var_os("HOME") else {
        return path.to_string();
    };
    let home = home.to_string_lossy();

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else if path == "~" {
        home.to_string()
    } else {
        path.to_string()
    }
}
