use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::PageRequest;

#[derive(Parser, Debug)]
#[command(author, version, about = "board game catalog backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Fetch one page of games and print it
    Browse {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Category label (see `categories`)
        #[arg(short, long)]
        category: Option<String>,
        /// Player count the game must support
        #[arg(long)]
        min_players: Option<i64>,
        /// Minimum age the game must require at least
        #[arg(long)]
        min_age: Option<i64>,
        /// Free-text search instead of ranked browsing
        #[arg(short, long)]
        query: Option<String>,
        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// List category labels and their ranking columns
    Categories,
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Command {
    /// Page request for `browse`, `None` for other commands
    pub fn page_request(&self) -> Option<PageRequest> {
        let Command::Browse {
            page,
            category,
            min_players,
            min_age,
            query,
            ..
        } = self
        else {
            return None;
        };

        Some(PageRequest {
            query: query.clone().filter(|q| !q.is_empty()),
            category: category.clone().filter(|c| !c.is_empty()),
            page: (*page).max(1),
            min_players: min_players.filter(|n| *n > 0),
            min_age: min_age.filter(|n| *n > 0),
        })
    }
}
