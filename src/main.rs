mod adapters;
mod cli;
mod config;
mod core;
mod logging;
#[cfg(test)]
mod test_support;

use clap::Parser;

use cli::commands::logs::LogsArgs;
use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    logging::init_logging(args.verbose, args.quiet);
    cli::context::init(args.state_dir.as_deref(), args.api_url.as_deref());

    let result = match &args.command {
        Commands::Login {
            username,
            password_stdin,
            remember,
        } => cli::commands::login::execute(username.as_deref(), *password_stdin, *remember),
        Commands::Logout => cli::commands::logout::execute(),
        Commands::Whoami => cli::commands::whoami::execute(),
        Commands::Dashboard { watch, iterations } => {
            cli::commands::dashboard::execute(*watch, *iterations)
        }
        Commands::Decisions { limit, offset } => cli::commands::decisions::execute(*limit, *offset),
        Commands::Metrics => cli::commands::metrics::execute(),
        Commands::Analyze { dataset } => cli::commands::analyze::execute(dataset),
        Commands::Logs {
            page,
            level,
            since,
            until,
            search,
        } => cli::commands::logs::execute(&LogsArgs {
            page: *page,
            level: level.as_deref(),
            since: since.as_deref(),
            until: until.as_deref(),
            search: search.as_deref(),
        }),
        Commands::Reports { page } => cli::commands::reports::execute(*page),
        Commands::Report { action } => cli::commands::report::execute(action),
        Commands::Config { action } => cli::commands::config::execute(action),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
