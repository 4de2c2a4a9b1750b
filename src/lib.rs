pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod ranking;
pub mod report;
pub mod scan;
pub mod services;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::api::CatalogClient;
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::PageRequest;
use crate::errors::CatalogError;
use crate::services::server::ServerService;
use crate::services::CatalogService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_browse(request: &PageRequest, json: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let catalog = CatalogClient::new(&config.catalog).map_err(CatalogError::Unhandled)?;
        let page = CatalogService::new(&config, &catalog)
            .fetch_page(request)
            .await?;

        if json {
            let body = serde_json::to_string_pretty(&page).context("Failed to serialize page")?;
            println!("{body}");
        } else {
            println!("{}", report::format_page(&page, request.page, config.paging.target_size));
        }
        Ok(())
    })
}

pub fn handle_categories() -> Result<()> {
    println!("{}", report::format_categories(config::get_categories()));
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
