//! Helpers for interpreting DNS record command parameters.
//!
//! Composite record parameters are named `<rrtype>record` (`mxrecord`,
//! `arecord`). Their fields are exposed as separate part parameters
//! (`mx_part_preference`), plus optional extra parameters, each of which
//! names its parent record parameter. These helpers map between the two and
//! check that an invocation carries enough record data to act on.

use std::collections::HashSet;
use std::iter::FusedIterator;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::{Error, Result};
use crate::params::{Command, Options, Parameter};

/// Options that switch a command into generic attribute modification, which
/// skips the record specific checks entirely.
pub const MODIFIER_OPTIONS: [&str; 4] = ["setattr", "addattr", "delattr", "rename"];

const RECORD_NAME_SUFFIX: &str = "record";

// Underscores are excluded so part and extra names never look like records.
static RECORD_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^_]+)record$").expect("record name pattern is valid")
});

/// Returns the upper-cased rrtype of a composite record parameter name, or
/// `None` if the name does not follow the `<rrtype>record` convention.
///
/// # Examples
///
/// ```
/// use dnsrecord_core::dns::record_rrtype;
///
/// assert_eq!(record_rrtype("mxrecord").as_deref(), Some("MX"));
/// assert_eq!(record_rrtype("mx_part_preference"), None);
/// assert_eq!(record_rrtype("record"), None);
/// ```
pub fn record_rrtype(name: &str) -> Option<String> {
    RECORD_NAME
        .captures(name)
        .and_then(|captures| captures.get(1))
        .map(|rrtype| rrtype.as_str().to_uppercase())
}

/// Formats the composite record parameter name for an rrtype.
///
/// ```
/// use dnsrecord_core::dns::record_param_name;
///
/// assert_eq!(record_param_name("MX"), "mxrecord");
/// ```
pub fn record_param_name(rrtype: &str) -> String {
    format!("{}{RECORD_NAME_SUFFIX}", rrtype.to_lowercase())
}

/// Checks that the options hold enough record data for the command to proceed.
///
/// Any of the [`MODIFIER_OPTIONS`] makes the check pass. Otherwise at least
/// one option must name a record parameter or a record part and carry a
/// non-empty value. With `allow_empty_attrs` an empty value counts too.
/// Extra parameters never count.
///
/// # Errors
///
/// Returns [`Error::InsufficientOptions`] carrying `no_option_msg` when no
/// option qualifies.
pub fn check_cli_options(
    command: &Command,
    options: &Options,
    no_option_msg: &str,
    allow_empty_attrs: bool,
) -> Result<()> {
    if MODIFIER_OPTIONS.iter().any(|k| options.contains_key(*k)) {
        debug!("Attribute modifier option present, skipping record option check");
        return Ok(());
    }

    let obj_params: HashSet<&str> = command
        .params()
        .filter(|p| record_rrtype(&p.name).is_some() || p.capability.is_part())
        .map(|p| p.name.as_str())
        .collect();

    let has_options = options.iter().any(|(attr, value)| {
        obj_params.contains(attr.as_str()) && (!value.is_empty() || allow_empty_attrs)
    });

    if has_options {
        Ok(())
    } else {
        Err(Error::InsufficientOptions(no_option_msg.to_string()))
    }
}

/// Returns the composite record parameter that `part_name` is a part or extra of.
///
/// `None` when the name is unknown, is not a part or extra parameter, or its
/// parent hint is missing or names no parameter of the command.
pub fn parent_of_part<'a>(command: &'a Command, part_name: &str) -> Option<&'a Parameter> {
    let param = command.get(part_name)?;
    let parent = param.capability.parent()?;

    let rrparam = command.get(parent);
    if rrparam.is_none() {
        debug!("Parent `{parent}` of `{part_name}` is not a parameter of {command}");
    }

    rrparam
}

/// Iterates the distinct record parameters that have at least one part or
/// extra option among `options`, in order of first occurrence.
///
/// With `skip_extra` only real record parts select a record parameter.
pub fn record_params_by_parts<'a>(
    command: &'a Command,
    options: &'a Options,
    skip_extra: bool,
) -> RecordParams<'a> {
    RecordParams {
        command,
        keys: options.keys(),
        skip_extra,
        processed: HashSet::new(),
    }
}

/// Iterator returned by [`record_params_by_parts`].
pub struct RecordParams<'a> {
    command: &'a Command,
    keys: indexmap::map::Keys<'a, String, String>,
    skip_extra: bool,
    processed: HashSet<&'a str>,
}

impl<'a> Iterator for RecordParams<'a> {
    type Item = &'a Parameter;

    fn next(&mut self) -> Option<Self::Item> {
        for opt in self.keys.by_ref() {
            let Some(rrparam) = parent_of_part(self.command, opt) else {
                continue;
            };

            if self.skip_extra
                && self
                    .command
                    .get(opt)
                    .is_some_and(|param| param.capability.is_extra())
            {
                continue;
            }

            if self.processed.insert(rrparam.name.as_str()) {
                return Some(rrparam);
            }
        }

        None
    }
}

impl FusedIterator for RecordParams<'_> {}
