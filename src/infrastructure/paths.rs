//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, so paths
//! written by users (`~/themes/dark.toml`) have to be rewritten before they
//! can be opened.

use std::path::PathBuf;

/// Returns the directory zcalc writes its trace file to.
///
/// Resolves to `/host/.local/share/zellij/zcalc`. `/host` points to the cwd of
/// the last focused terminal, or the folder Zellij was started in, which is
/// usually the user's home directory.
///
/// # Examples
///
/// ```
/// use zcalc::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/zcalc");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zcalc")
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// # Examples
///
/// ```
/// use zcalc::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/zcalc.toml"), "/etc/zcalc.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_users_home_untouched() {
        assert_eq!(expand_tilde("~alice/theme.toml"), "~alice/theme.toml");
    }

    #[test]
    fn test_relative_path_untouched() {
        assert_eq!(expand_tilde("themes/~x.toml"), "themes/~x.toml");
    }
}
