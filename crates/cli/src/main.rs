use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use dnsrecord_cli::cli_args::{Action, Args, DEFAULT_NO_OPTION_MSG};
use dnsrecord_cli::options::parse_options;
use dnsrecord_cli::report::{format_layout, format_record};
use dnsrecord_core::dns::{
    check_cli_options, parent_of_part, record_params_by_parts, record_rrtype,
};
use dnsrecord_core::error::Result;
use dnsrecord_core::file_handling::{find_command, get_commands};
use dnsrecord_core::params::Command;

/// Load command definitions from the configured path
fn initialize_config(args: &Args) -> Result<Vec<Command>> {
    let config_path = dnsrecord_core::config::get_config_path(args.config_path.as_deref());
    debug!("Config path: `{}`", config_path);

    get_commands(&config_path)
}

fn execute() -> Result<()> {
    let args = Args::parse();

    match &args.action {
        Action::Rrtype { name } => {
            match record_rrtype(name) {
                Some(rrtype) => println!("{rrtype}"),
                None => println!("`{name}` is not a record parameter name"),
            }
            Ok(())
        }
        Action::Parent { command, param } => {
            let commands = initialize_config(&args)?;
            let command = find_command(&commands, command)?;

            match parent_of_part(command, param) {
                Some(rrparam) => println!("{}", format_record(rrparam)),
                None => println!("`{param}` is not a part of any record parameter of {command}"),
            }
            Ok(())
        }
        Action::Show { command } => {
            let commands = initialize_config(&args)?;
            let command = find_command(&commands, command)?;

            println!("{}", format_layout(command));
            Ok(())
        }
        Action::Check {
            command,
            parameters,
            allow_empty_attrs,
            message,
        } => {
            let commands = initialize_config(&args)?;
            let command = find_command(&commands, command)?;
            let options = parse_options(parameters)?;

            let no_option_msg = message.as_deref().unwrap_or(DEFAULT_NO_OPTION_MSG);
            check_cli_options(command, &options, no_option_msg, *allow_empty_attrs)?;

            info!("Options for {command} carry record data");
            Ok(())
        }
        Action::Records {
            command,
            parameters,
            skip_extra,
        } => {
            let commands = initialize_config(&args)?;
            let command = find_command(&commands, command)?;
            let options = parse_options(parameters)?;

            for rrparam in record_params_by_parts(command, &options, *skip_extra) {
                println!("{}", format_record(rrparam));
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
