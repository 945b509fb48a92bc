//! DNS record parameter helpers
//!
//! This crate provides the pieces an administration CLI needs to interpret
//! DNS record command parameters: a typed parameter registry, helpers that
//! relate composite record parameters (`mxrecord`) to their part and extra
//! parameters (`mx_part_preference`), and a check that an invocation carries
//! enough record data to act on.
//!
//! # Examples
//!
//! ```
//! use dnsrecord_core::dns::{check_cli_options, record_params_by_parts};
//! use dnsrecord_core::params::{Command, Options, Parameter};
//!
//! let command = Command::new(
//!     "dnsrecord-add",
//!     [
//!         Parameter::plain("mxrecord"),
//!         Parameter::part("mx_part_preference", "mxrecord"),
//!         Parameter::part("mx_part_exchanger", "mxrecord"),
//!     ],
//! )?;
//!
//! let mut options = Options::new();
//! options.insert("mx_part_preference".to_string(), "10".to_string());
//! options.insert("mx_part_exchanger".to_string(), "mail.example.com.".to_string());
//!
//! check_cli_options(&command, &options, "No record options given", false)?;
//!
//! let records: Vec<_> = record_params_by_parts(&command, &options, false).collect();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].name, "mxrecord");
//! # Ok::<(), dnsrecord_core::error::Error>(())
//! ```

pub mod config;
pub mod dns;
pub mod error;
pub mod file_handling;
pub mod params;
