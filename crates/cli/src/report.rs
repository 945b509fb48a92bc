//! Text output for the `dnsrec` subcommands.

use indexmap::IndexMap;
use itertools::Itertools;

use dnsrecord_core::dns::{parent_of_part, record_rrtype};
use dnsrecord_core::params::{Command, Parameter};

#[derive(Default, Debug, PartialEq)]
struct RecordLayout<'a> {
    parts: Vec<&'a str>,
    extras: Vec<&'a str>,
}

/// One line per record parameter: its name and, when it follows the naming
/// convention, its record type.
pub fn format_record(param: &Parameter) -> String {
    match record_rrtype(&param.name) {
        Some(rrtype) => format!("{} ({rrtype})", param.name),
        None => param.name.clone(),
    }
}

/// Describes the record parameters of a command with the parts and extras
/// that resolve to them, in registration order.
pub fn format_layout(command: &Command) -> String {
    let mut layouts: IndexMap<&str, RecordLayout> = command
        .params()
        .filter(|p| record_rrtype(&p.name).is_some())
        .map(|p| (p.name.as_str(), RecordLayout::default()))
        .collect();

    for param in command.params() {
        let Some(rrparam) = parent_of_part(command, &param.name) else {
            continue;
        };

        let layout = layouts.entry(rrparam.name.as_str()).or_default();
        if param.capability.is_extra() {
            layout.extras.push(&param.name);
        } else {
            layout.parts.push(&param.name);
        }
    }

    layouts
        .iter()
        .map(|(name, layout)| {
            let heading = command
                .get(name)
                .map_or_else(|| (*name).to_string(), format_record);
            format!(
                "{heading}\n    parts: {}\n    extras: {}",
                join_or_dash(&layout.parts),
                join_or_dash(&layout.extras)
            )
        })
        .join("\n")
}

fn join_or_dash(names: &[&str]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.iter().join(", ")
    }
}
