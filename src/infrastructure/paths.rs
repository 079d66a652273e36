//! Sandbox path helpers.
//!
//! Zellij mounts the directory it was started from (normally the user's home)
//! at `/host`, so `~` in user-supplied paths has to be rewritten before the
//! plugin can open them.

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Returns the plugin's data directory, `/host/.local/share/zellij/showcase`.
///
/// Trace files are written here.
///
/// ```
/// use showcase::infrastructure::get_data_dir;
///
/// assert_eq!(
///     get_data_dir().to_str(),
///     Some("/host/.local/share/zellij/showcase")
/// );
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("showcase")
}

/// Rewrites a leading `~` to the sandbox host mount.
///
/// ```
/// use showcase::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/mine.toml"), "/host/themes/mine.toml");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_bare_tilde() {
        assert_eq!(expand_tilde("~"), "/host");
    }

    #[test]
    fn test_expand_leaves_other_users_alone() {
        assert_eq!(expand_tilde("~alice/theme.toml"), "~alice/theme.toml");
        assert_eq!(expand_tilde("relative/theme.toml"), "relative/theme.toml");
    }

    #[test]
    fn test_data_dir_is_under_host() {
        assert!(get_data_dir().starts_with("/host"));
        assert!(get_data_dir().ends_with("showcase"));
    }
}
