//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate the API key (see `login` module).

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "evaldash")]
#[command(about = "evaldash - Hackathon evaluation dashboard for the terminal", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  evaldash hackathons\n  evaldash stats hack-2025-spring\n  evaldash --base-url https://eval.example.com leaderboard hack-2025-spring\n  evaldash -o json scorecard sub-001\n  evaldash shell\n"
)]
pub struct Cli {
    /// Base URL of the evaluation service (e.g., http://localhost:8000)
    #[arg(short, long, global = true, env = "EVALDASH_BASE_URL")]
    pub base_url: Option<String>,

    /// API key for the evaluation service; prompted for when omitted
    #[arg(
        short = 'k',
        long,
        global = true,
        env = "EVALDASH_API_KEY",
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Log output format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Expose Prometheus metrics on this address (e.g., 127.0.0.1:9000)
    #[arg(long, global = true, value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    /// Never ask whether to retry a failed request
    #[arg(long, global = true)]
    pub no_retry_prompt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List hackathons
    Hackathons,

    /// Show one hackathon
    Hackathon {
        /// Hackathon identifier
        id: String,
    },

    /// Show submission statistics for a hackathon
    Stats {
        /// Hackathon identifier
        hackathon_id: String,
    },

    /// Show the status of an evaluation job
    Job {
        /// Job identifier
        job_id: String,
    },

    /// Estimate the cost of evaluating a hackathon
    Estimate {
        /// Hackathon identifier
        hackathon_id: String,

        /// Restrict the estimate to these agents (repeatable)
        #[arg(long = "agent", value_name = "NAME")]
        agents: Vec<String>,
    },

    /// Show the leaderboard of a hackathon
    Leaderboard {
        /// Hackathon identifier
        hackathon_id: String,
    },

    /// Show the scorecard of a submission
    Scorecard {
        /// Submission identifier
        submission_id: String,
    },

    /// Start an interactive session (supports logout and re-login)
    Shell,
}

impl Commands {
    /// Label used for retry prompts, logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hackathons => "list hackathons",
            Self::Hackathon { .. } => "get hackathon",
            Self::Stats { .. } => "get stats",
            Self::Job { .. } => "get job status",
            Self::Estimate { .. } => "estimate cost",
            Self::Leaderboard { .. } => "get leaderboard",
            Self::Scorecard { .. } => "get scorecard",
            Self::Shell => "shell",
        }
    }
}
