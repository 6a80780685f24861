pub mod commands;
pub mod context;
pub mod output;
pub mod views;

use clap::{Parser, Subcommand};

/// Watch fairness metrics, AI decisions and audit logs from the terminal.
#[derive(Parser, Debug)]
#[command(name = "ethics-monitor", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding config.toml and the session file
    #[arg(long, global = true)]
    pub state_dir: Option<String>,

    /// Backend base URL (overrides api.base_url)
    #[arg(long, global = true, env = "ETHICS_MONITOR_API_URL")]
    pub api_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        /// Username (prompted when omitted)
        #[arg(long)]
        username: Option<String>,
        /// Read the password from stdin instead of prompting
        #[arg(long)]
        password_stdin: bool,
        /// Keep the identity across reboots
        #[arg(long)]
        remember: bool,
    },

    /// Sign out and clear the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show stats, recent decisions and charts
    Dashboard {
        /// Keep refreshing on the configured interval
        #[arg(long)]
        watch: bool,
        /// Stop watching after N refreshes
        #[arg(long, requires = "watch")]
        iterations: Option<u64>,
    },

    /// List AI decisions
    Decisions {
        /// Number of decisions to fetch
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Number of decisions to skip
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },

    /// Show fairness metrics
    Metrics,

    /// Run a fairness analysis on a dataset
    Analyze {
        /// Dataset name known to the backend
        dataset: String,
    },

    /// Browse the audit log (admin only)
    Logs {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Filter by level (info, warning, error, critical)
        #[arg(long)]
        level: Option<String>,
        /// Entries on or after this date (YYYY-MM-DD)
        #[arg(long)]
        since: Option<String>,
        /// Entries on or before this date (YYYY-MM-DD)
        #[arg(long)]
        until: Option<String>,
        /// Free-text search
        #[arg(long)]
        search: Option<String>,
    },

    /// List decision reports (admin only)
    Reports {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Work with a single report
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReportAction {
    /// Download a report blob
    Download {
        /// Report id
        id: String,
        /// Output file (default: report_<id>.pdf)
        #[arg(long, short)]
        output: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
}
