//! Clap derive structures for the `lunance` CLI.
//!
//! Defines the command tree, global flags, and shared value types.

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};

use lunance_api::TransactionType;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// lunance -- student finance tracker from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "lunance",
    version,
    about = "Track income, expenses and categories on a Lunance backend",
    long_about = "Command-line client for the Lunance personal-finance API.\n\n\
        Every command checks connectivity first and reports failures as\n\
        plain messages; nothing is cached locally except the login session.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// API root URL (overrides config)
    #[arg(long, env = "LUNANCE_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "LUNANCE_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "LUNANCE_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides config)
    #[arg(long, env = "LUNANCE_TIMEOUT_SECS", global = true)]
    pub timeout: Option<u64>,

    /// Behave as if the network were down
    #[arg(long, global = true)]
    pub offline: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// `income` or `expense` as a command-line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Income,
    Expense,
}

impl From<Kind> for TransactionType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Income => Self::Income,
            Kind::Expense => Self::Expense,
        }
    }
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in, register, log out
    Auth(AuthArgs),

    /// Manage income and expense categories
    #[command(alias = "cat")]
    Categories(CategoriesArgs),

    /// Period summary and monthly trend
    #[command(alias = "dash")]
    Dashboard(DashboardArgs),

    /// Transaction history
    #[command(alias = "tx")]
    History(HistoryArgs),

    /// Profile, password and app preferences
    Settings(SettingsArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ── Auth ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Log in and remember the session
    Login {
        /// Account email (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Password (prompted if omitted)
        #[arg(long, env = "LUNANCE_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create an account and log in
    Register {
        #[arg(long)]
        name: String,

        #[arg(long, short = 'e')]
        email: String,

        #[arg(long)]
        university: Option<String>,

        /// Password (prompted if omitted)
        #[arg(long, env = "LUNANCE_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Log out and forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,
}

// ── Categories ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub command: CategoriesCommand,
}

#[derive(Debug, Subcommand)]
pub enum CategoriesCommand {
    /// List categories
    #[command(alias = "ls")]
    List {
        #[arg(long = "type", short = 't')]
        kind: Option<Kind>,
    },

    /// Show one category
    Get { id: String },

    /// Search categories by name or keyword
    Search {
        /// Search text (may be empty)
        #[arg(default_value = "")]
        query: String,

        #[arg(long = "type", short = 't')]
        kind: Option<Kind>,
    },

    /// Most-used categories
    Popular {
        #[arg(long, short = 'l', default_value = "5")]
        limit: u32,
    },

    /// Categories with usage statistics
    Stats {
        #[arg(long = "type", short = 't')]
        kind: Option<Kind>,
    },

    /// Create a category
    Create {
        #[arg(long)]
        name: String,

        #[arg(long = "type", short = 't')]
        kind: Kind,

        #[arg(long)]
        icon: Option<String>,

        #[arg(long)]
        color: Option<String>,

        /// Comma-separated keywords
        #[arg(long, value_delimiter = ',')]
        keywords: Option<Vec<String>>,
    },

    /// Update a category; only given fields change
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "type", short = 't')]
        kind: Option<Kind>,

        #[arg(long)]
        icon: Option<String>,

        #[arg(long)]
        color: Option<String>,

        #[arg(long, value_delimiter = ',')]
        keywords: Option<Vec<String>>,
    },

    /// Delete a category
    #[command(alias = "rm")]
    Delete { id: String },
}

// ── Dashboard ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DashboardArgs {
    #[command(subcommand)]
    pub command: DashboardCommand,
}

#[derive(Debug, Subcommand)]
pub enum DashboardCommand {
    /// Totals and top categories for a period
    Summary {
        /// e.g. daily, weekly, monthly, yearly
        #[arg(long, short = 'p', default_value = "monthly")]
        period: String,
    },

    /// Income and expense per month
    Trend {
        #[arg(long, short = 'm', default_value = "6")]
        months: u32,
    },
}

// ── History ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommand,
}

#[derive(Debug, Args)]
pub struct HistoryFilterArgs {
    #[arg(long = "type", short = 't')]
    pub kind: Option<Kind>,

    #[arg(long)]
    pub category: Option<String>,

    /// First day, YYYY-MM-DD
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day, YYYY-MM-DD
    #[arg(long)]
    pub to: Option<NaiveDate>,

    #[arg(long)]
    pub page: Option<u32>,

    #[arg(long, short = 'l')]
    pub limit: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// List transactions
    #[command(alias = "ls")]
    List(HistoryFilterArgs),

    /// Show one transaction
    Get { id: String },

    /// Search transactions by description
    Search {
        #[arg(default_value = "")]
        query: String,
    },

    /// Record a transaction
    Add {
        #[arg(long = "type", short = 't')]
        kind: Kind,

        #[arg(long, short = 'a')]
        amount: f64,

        #[arg(long, short = 'c')]
        category: String,

        #[arg(long, short = 'd')]
        description: String,

        #[arg(long)]
        notes: Option<String>,

        /// RFC 3339 timestamp; server time if omitted
        #[arg(long)]
        date: Option<DateTime<Utc>>,
    },

    /// Update a transaction; only given fields change
    Update {
        id: String,

        #[arg(long = "type", short = 't')]
        kind: Option<Kind>,

        #[arg(long, short = 'a')]
        amount: Option<f64>,

        #[arg(long, short = 'c')]
        category: Option<String>,

        #[arg(long, short = 'd')]
        description: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        date: Option<DateTime<Utc>>,
    },

    /// Delete a transaction
    #[command(alias = "rm")]
    Delete { id: String },
}

// ── Settings ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Show the user profile
    Profile,

    /// Change profile fields
    UpdateProfile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        university: Option<String>,
    },

    /// Change the account password (prompts for both)
    Password,

    /// Show app preferences
    Show,

    /// Change app preferences
    Set {
        #[arg(long)]
        currency: Option<String>,

        #[arg(long)]
        language: Option<String>,

        #[arg(long, value_parser = ["light", "dark", "system"])]
        theme: Option<String>,

        #[arg(long)]
        notifications: Option<bool>,

        #[arg(long)]
        monthly_budget: Option<f64>,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Set the API root URL
    SetUrl { url: String },
}
