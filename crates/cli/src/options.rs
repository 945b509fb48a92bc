//! Parsing of `-p key=value` command-line options.

use dnsrecord_core::error::Error::ParameterFormat;
use dnsrecord_core::error::Result;
use dnsrecord_core::params::Options;
use log::debug;

/// Parses named options in the format `key=value` into an ordered [`Options`] map.
///
/// The value is everything after the first `=` and may be empty. A repeated
/// key keeps its first position and takes the last value.
///
/// # Errors
///
/// Returns [`ParameterFormat`] if an option has no `=` or an empty key.
///
/// # Examples
///
/// ```rust
/// use dnsrecord_cli::options::parse_options;
///
/// let options = parse_options(&["mxrecord=".to_string(), "dnsttl=300".to_string()]).unwrap();
/// assert_eq!(options["mxrecord"], "");
/// assert_eq!(options["dnsttl"], "300");
/// ```
pub fn parse_options(named_params: &[String]) -> Result<Options> {
    let mut options = Options::new();

    for param_str in named_params {
        let Some((key, value)) = param_str.split_once('=') else {
            return Err(ParameterFormat(param_str.to_string()));
        };

        if key.is_empty() {
            return Err(ParameterFormat(param_str.to_string()));
        }

        if let Some(previous) = options.insert(key.to_string(), value.to_string()) {
            debug!("Option `{key}` given more than once, replacing `{previous}`");
        }
    }

    Ok(options)
}
