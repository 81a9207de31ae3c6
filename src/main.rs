//! # Command Line Interface
//!
//! Argument definitions are in `cli.rs`, the subcommands run in the `commands` module.

use env_logger;
#[cfg(windows)]
use colored;
use log::error;
use a2bas::commands;
use a2bas::commands::CommandError;

mod cli;

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let main_cmd = cli::build_cli();
    let matches = main_cmd.clone().get_matches();

    if let Some(cmd) = matches.subcommand_matches("lex") {
        return commands::langx::lex(cmd);
    }
    if let Some(cmd) = matches.subcommand_matches("tokenize") {
        return commands::langx::tokenize(cmd);
    }
    if let Some(cmd) = matches.subcommand_matches("renumber") {
        return commands::langx::renumber(cmd);
    }
    if let Some(cmd) = matches.subcommand_matches("list") {
        return commands::langx::list(cmd);
    }
    if let Some(cmd) = matches.subcommand_matches("completions") {
        return commands::completions::generate(main_cmd,cmd);
    }

    error!("No subcommand was found, try `a2bas --help`");
    return Err(Box::new(CommandError::InvalidCommand));
}
