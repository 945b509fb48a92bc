//! Integration tests for dnsrecord-core
//!
//! These tests load command definitions from YAML and run the record
//! parameter helpers against them, the way the CLI does.

use dnsrecord_core::{
    config::get_config_path,
    dns::{check_cli_options, parent_of_part, record_params_by_parts, record_rrtype},
    error::Error,
    file_handling::{find_command, get_commands},
    params::{Command, Options},
};
use std::io::Write;
use tempfile::NamedTempFile;

const DNSRECORD_COMMANDS: &str = r#"
- name: "dnsrecord-add"
  description: "Add new DNS resource record"
  parameters:
    - name: idnsname
    - name: dnsttl
    - name: arecord
    - name: a_part_ip_address
      kind: part
      hint: arecord
    - name: a_extra_create_reverse
      kind: extra
      hint: arecord
    - name: mxrecord
    - name: mx_part_preference
      kind: part
      hint: mxrecord
    - name: mx_part_exchanger
      kind: part
      hint: mxrecord
    - name: srvrecord
    - name: srv_extra_note
      kind: extra
      hint: srvrecord
    - name: txt_part_data
      kind: part
      hint: txtrecord

- name: "dnsrecord-del"
  parameters:
    - name: idnsname
    - name: mxrecord
    - name: del_all
"#;

fn load_commands() -> Vec<Command> {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{DNSRECORD_COMMANDS}").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    get_commands(&get_config_path(Some(temp_path.as_str()))).unwrap()
}

fn options(pairs: &[(&str, &str)]) -> Options {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Record parameters are recognised by name across a loaded command
#[test]
fn test_record_parameters_of_loaded_command() {
    let commands = load_commands();
    let command = find_command(&commands, "dnsrecord-add").unwrap();

    let rrtypes: Vec<String> = command
        .params()
        .filter_map(|p| record_rrtype(&p.name))
        .collect();
    assert_eq!(rrtypes, ["A", "MX", "SRV"]);
}

/// A typical `dnsrecord-add` invocation with MX parts
#[test]
fn test_add_mx_record_by_parts_workflow() {
    let commands = load_commands();
    let command = find_command(&commands, "dnsrecord-add").unwrap();
    let opts = options(&[
        ("idnsname", "www"),
        ("mx_part_preference", "10"),
        ("mx_part_exchanger", "mail.example.com."),
        ("a_part_ip_address", "192.0.2.1"),
    ]);

    check_cli_options(command, &opts, "No options to add a specific record provided.", false)
        .unwrap();

    let records: Vec<&str> = record_params_by_parts(command, &opts, false)
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(records, ["mxrecord", "arecord"]);
}

/// Only extras were given: the check fails, but the iterator still sees the record
#[test]
fn test_extras_only_workflow() {
    let commands = load_commands();
    let command = find_command(&commands, "dnsrecord-add").unwrap();
    let opts = options(&[("srv_extra_note", "backup"), ("dnsttl", "300")]);

    let err = check_cli_options(command, &opts, "No record options given", false).unwrap_err();
    assert!(matches!(err, Error::InsufficientOptions(_)));
    assert_eq!(err.to_string(), "No record options given");

    let records: Vec<&str> = record_params_by_parts(command, &opts, false)
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(records, ["srvrecord"]);
    assert_eq!(record_params_by_parts(command, &opts, true).count(), 0);
}

/// A part whose hint names a record parameter the command lacks
#[test]
fn test_dangling_hint_workflow() {
    let commands = load_commands();
    let command = find_command(&commands, "dnsrecord-add").unwrap();

    assert!(parent_of_part(command, "txt_part_data").is_none());

    let opts = options(&[("txt_part_data", "v=spf1 -all")]);
    assert_eq!(record_params_by_parts(command, &opts, false).count(), 0);
    // still a part, so it counts as record data
    assert!(check_cli_options(command, &opts, "No record options given", false).is_ok());
}

/// `dnsrecord-del` with an empty record value
#[test]
fn test_delete_with_empty_attrs_workflow() {
    let commands = load_commands();
    let command = find_command(&commands, "dnsrecord-del").unwrap();
    let opts = options(&[("mxrecord", "")]);

    assert!(check_cli_options(command, &opts, "Nothing to delete", false).is_err());
    assert!(check_cli_options(command, &opts, "Nothing to delete", true).is_ok());

    let opts = options(&[("del_all", "true"), ("setattr", "")]);
    assert!(check_cli_options(command, &opts, "Nothing to delete", false).is_ok());
}

#[test]
fn test_unknown_command() {
    let commands = load_commands();
    let result = find_command(&commands, "dnsrecord-show");
    assert!(matches!(result, Err(Error::CommandNotFound(name)) if name == "dnsrecord-show"));
}
