//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure of the `dnsrec`
//! binary using the `clap` crate.

use clap::{Parser, Subcommand};

/// Message reported when an invocation carries no record data.
pub const DEFAULT_NO_OPTION_MSG: &str = "No options to add a specific record provided.\n\
    Command help may be consulted for all supported record types.";

/// Command-line arguments for the `dnsrec` tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use dnsrecord_cli::cli_args::Args;
///
/// let args = Args::parse_from(["dnsrec", "rrtype", "mxrecord"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the command definitions config file YAML.
    ///
    /// If not provided, defaults to `~/.dnsrec/commands.yml`.
    #[arg(long, short = 'c', global = true)]
    pub config_path: Option<String>,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Action {
    /// Print the record type of a record parameter name, e.g. `mxrecord` -> `MX`.
    Rrtype {
        /// The parameter name to inspect.
        name: String,
    },

    /// Print the record parameter a part or extra parameter belongs to.
    Parent {
        /// Name of the command owning the parameter.
        command: String,

        /// The part or extra parameter name.
        param: String,
    },

    /// List the record parameters of a command with their parts and extras.
    Show {
        /// Name of the command to describe.
        command: String,
    },

    /// Check that the given options carry enough record data.
    Check {
        /// Name of the command the options are for.
        command: String,

        /// Options in the format key=value. Repeat `-p` for more.
        ///
        /// # Examples
        /// ```bash
        /// dnsrec check dnsrecord-add -p mx_part_preference=10 -p mx_part_exchanger=mail
        /// ```
        #[arg(long = "param", short = 'p', action = clap::ArgAction::Append)]
        parameters: Vec<String>,

        /// Count record options given with an empty value.
        #[arg(long, short = 'e', action)]
        allow_empty_attrs: bool,

        /// Message reported when the check fails.
        #[arg(long, short = 'm')]
        message: Option<String>,
    },

    /// List the distinct record parameters referenced by the given parts and extras.
    Records {
        /// Name of the command the options are for.
        command: String,

        /// Options in the format key=value. Repeat `-p` for more.
        #[arg(long = "param", short = 'p', action = clap::ArgAction::Append)]
        parameters: Vec<String>,

        /// Ignore extra options, only real record parts select a record.
        #[arg(long, short = 's', action)]
        skip_extra: bool,
    },
}
