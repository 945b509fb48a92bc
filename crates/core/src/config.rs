//! Configuration path utilities for dnsrecord.
//!
//! Resolves the location of the command definition file and expands shell
//! variables like `~` in it.

/// Default path for the command definitions file
const DEFAULT_CONFIG_PATH: &str = "~/.dnsrec/commands.yml";

/// Resolves the command definitions file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use dnsrecord_core::config::get_config_path;
///
/// let default_path = get_config_path(None);
/// let custom_path = get_config_path(Some("/etc/dnsrec/commands.yml"));
/// assert_eq!(custom_path, "/etc/dnsrec/commands.yml");
/// ```
pub fn get_config_path(config_path_arg: Option<&str>) -> String {
    let config_path = config_path_arg.unwrap_or(DEFAULT_CONFIG_PATH);

    shellexpand::tilde(config_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let result = get_config_path(Some("/custom/path/commands.yml"));
        assert_eq!(result, "/custom/path/commands.yml");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".dnsrec/commands.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_config_path_with_tilde() {
        let result = get_config_path(Some("~/my-commands.yml"));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-commands.yml"));
    }
}
