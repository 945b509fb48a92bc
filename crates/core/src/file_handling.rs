//! File handling and validation for dnsrecord command definitions.
//!
//! This module reads command definitions from YAML, validates command and
//! parameter names, and turns the definitions into [`Command`] registries.

use std::collections::HashSet;
use std::fs::File;

use log::{info, warn};

use crate::error::Error::{CommandNotFound, EmptyName, NameWithSpace, NonUniqueCommandName};
use crate::error::{Error, Result};
use crate::params::{Command, CommandDefinition, ParameterDefinition, ParameterKind};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(EmptyName);
    }

    if name.contains(char::is_whitespace) {
        return Err(NameWithSpace(name.to_string()));
    }

    Ok(())
}

fn validate_parameters(
    command: &CommandDefinition,
    parameters: &[ParameterDefinition],
) -> Result<()> {
    let names: HashSet<&str> = parameters.iter().map(|p| p.name.as_str()).collect();

    for parameter in parameters {
        validate_name(&parameter.name)?;

        if parameter.kind == ParameterKind::Plain {
            continue;
        }

        // Dangling hints are tolerated, the part simply resolves to no record.
        match &parameter.hint {
            None => warn!(
                "Parameter `{}` of `{}` has no hint naming its record parameter",
                parameter.name, command.name
            ),
            Some(hint) if !names.contains(hint.as_str()) => warn!(
                "Parameter `{}` of `{}` names unknown record parameter `{}`",
                parameter.name, command.name, hint
            ),
            Some(_) => {}
        }
    }

    Ok(())
}

fn validate_command_names(commands: &[CommandDefinition]) -> Result<()> {
    let mut names = HashSet::new();

    for cmd in commands {
        validate_name(&cmd.name)?;

        if !names.insert(cmd.name.as_str()) {
            return Err(NonUniqueCommandName(cmd.name.clone()));
        }

        if let Some(parameters) = &cmd.parameters {
            validate_parameters(cmd, parameters)?;
        }
    }

    Ok(())
}

/// Loads and validates command definitions from a configuration file.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The configuration file is empty
/// - Command or parameter names are invalid or non-unique
///
/// # Examples
///
/// ```no_run
/// use dnsrecord_core::file_handling::get_commands;
///
/// let commands = get_commands("/etc/dnsrec/commands.yml")?;
/// println!("Loaded {} commands", commands.len());
/// # Ok::<(), dnsrecord_core::error::Error>(())
/// ```
pub fn get_commands(config_path: &str) -> Result<Vec<Command>> {
    let config_reader = get_reader("config", config_path)?;

    let parsed_command_defs: Vec<CommandDefinition> = serde_yaml::from_reader(config_reader)
        .map_err(|e| {
            Error::yaml_error(
                "reading".to_string(),
                "config".to_string(),
                config_path.to_string(),
                e,
            )
        })?;

    if parsed_command_defs.is_empty() {
        return Err(Error::empty_command_definition(config_path.to_string()));
    }

    validate_command_names(&parsed_command_defs)?;

    let commands = parsed_command_defs
        .into_iter()
        .map(Command::try_from)
        .collect::<Result<Vec<_>>>()?;

    info!("Loaded {} commands from `{}`", commands.len(), config_path);

    Ok(commands)
}

/// Finds a command by name.
///
/// # Errors
///
/// Returns [`CommandNotFound`] if no command has that name.
pub fn find_command<'a>(commands: &'a [Command], name: &str) -> Result<&'a Command> {
    commands
        .iter()
        .find(|cmd| cmd.name() == name)
        .ok_or_else(|| CommandNotFound(name.to_string()))
}
