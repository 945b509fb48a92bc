//! dnsrecord CLI Library
//!
//! This crate provides the command-line interface for the DNS record
//! parameter helpers in `dnsrecord-core`. It loads command definitions,
//! parses `key=value` options, and reports how those options map onto the
//! record parameters of a command.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`options`]: Parsing of `-p key=value` options into an ordered map
//! - [`report`]: Text output of the subcommands
//!
//! # Examples
//!
//! The CLI binary (`dnsrec`) can be used in several ways:
//!
//! ```bash
//! # Record type of a record parameter name
//! dnsrec rrtype mxrecord
//!
//! # Record parameter a part belongs to
//! dnsrec parent dnsrecord-add mx_part_preference
//!
//! # Check that an invocation carries record data
//! dnsrec check dnsrecord-add -p mx_part_preference=10 -p mx_part_exchanger=mail.example.com.
//!
//! # Records referenced by the given parts, ignoring extras
//! dnsrec records dnsrecord-add -p a_part_ip_address=192.0.2.1 --skip-extra
//! ```

pub mod cli_args;
pub mod options;
pub mod report;
