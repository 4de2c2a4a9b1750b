use anyhow::Result;

use boardgame_catalog::cli::Command;
use boardgame_catalog::{
    handle_browse, handle_categories, handle_completions, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Browse { json, .. } => match command.page_request() {
            Some(request) => handle_browse(&request, *json),
            None => anyhow::bail!("browse arguments could not be read"),
        },
        Command::Categories => handle_categories(),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
