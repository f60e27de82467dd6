//! Interactive shell.
//!
//! Responsibilities:
//! - Run dashboard commands against one session until the operator exits.
//! - Support `logout` and `login [URL]` without restarting the process.
//!
//! Invariants:
//! - Data commands are refused while the session is unauthenticated.
//! - A failing command never ends the shell; its error is printed instead.

use std::io::{BufRead, Write};

use anyhow::Result;
use evaldash_client::Session;
use evaldash_config::validate_base_url;

use crate::commands::{AppContext, hackathons, jobs, submissions};
use crate::interactive;
use crate::login;

const HELP: &str = "\
Commands:
  hackathons                 List hackathons
  hackathon <id>             Show one hackathon
  stats <hackathon-id>       Submission statistics
  estimate <hackathon-id> [agent...]
                             Estimate evaluation cost
  leaderboard <hackathon-id> Leaderboard
  job <job-id>               Evaluation job status
  scorecard <submission-id>  Submission scorecard
  refresh                    Forget cached results
  logout                     End the session
  login [base-url]           Start a new session
  help                       Show this help
  exit                       Leave the shell
";

/// One parsed shell line.
#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    Help,
    Exit,
    Logout,
    Login(Option<String>),
    Refresh,
    Hackathons,
    Hackathon(String),
    Stats(String),
    Estimate(String, Vec<String>),
    Leaderboard(String),
    Job(String),
    Scorecard(String),
    /// Unknown command or missing argument; carries the message to show.
    Invalid(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Self::Empty;
        };
        let arg = words.next().map(str::to_string);

        let needs_id = |build: fn(String) -> Self| match arg.clone() {
            Some(id) => build(id),
            None => Self::Invalid(format!("Usage: {name} <id>")),
        };

        match name {
            "help" | "?" => Self::Help,
            "exit" | "quit" => Self::Exit,
            "logout" => Self::Logout,
            "login" => Self::Login(arg),
            "refresh" => Self::Refresh,
            "hackathons" => Self::Hackathons,
            "hackathon" => needs_id(Self::Hackathon),
            "stats" => needs_id(Self::Stats),
            "leaderboard" => needs_id(Self::Leaderboard),
            "job" => needs_id(Self::Job),
            "scorecard" => needs_id(Self::Scorecard),
            "estimate" => match arg {
                Some(id) => Self::Estimate(id, words.map(str::to_string).collect()),
                None => Self::Invalid("Usage: estimate <hackathon-id> [agent...]".to_string()),
            },
            other => Self::Invalid(format!("Unknown command: {other}. Type `help` for commands.")),
        }
    }

    fn needs_session(&self) -> bool {
        matches!(
            self,
            Self::Hackathons
                | Self::Hackathon(_)
                | Self::Stats(_)
                | Self::Estimate(..)
                | Self::Leaderboard(_)
                | Self::Job(_)
                | Self::Scorecard(_)
        )
    }
}

pub async fn run(ctx: &AppContext, session: &mut Session, lines: &mut dyn BufRead) -> Result<()> {
    let interactive = interactive::stdin_is_terminal();
    if interactive {
        println!("Type `help` for commands.");
    }

    loop {
        if interactive {
            print!("evaldash> ");
            std::io::stdout().flush()?;
        }

        let mut line = String::new();
        if lines.read_line(&mut line)? == 0 {
            break;
        }

        let command = ShellCommand::parse(&line);
        if command.needs_session() && !session.is_authenticated() {
            eprintln!("Please log in first (type `login`).");
            continue;
        }

        let result = match command {
            ShellCommand::Empty => Ok(()),
            ShellCommand::Help => {
                print!("{HELP}");
                Ok(())
            }
            ShellCommand::Exit => break,
            ShellCommand::Logout => {
                session.logout();
                println!("Logged out.");
                Ok(())
            }
            ShellCommand::Login(None) => login::login(ctx, session, None, None, lines).await,
            ShellCommand::Login(Some(raw)) => match validate_base_url(&raw) {
                Ok(base_url) => login::login(ctx, session, None, Some(&base_url), lines).await,
                Err(e) => {
                    eprintln!("Invalid base URL: {e}");
                    Ok(())
                }
            },
            ShellCommand::Refresh => {
                session.clear_cache();
                println!("Cached results cleared.");
                Ok(())
            }
            ShellCommand::Hackathons => hackathons::list(ctx, session).await,
            ShellCommand::Hackathon(id) => hackathons::show(ctx, session, &id).await,
            ShellCommand::Stats(id) => hackathons::stats(ctx, session, &id).await,
            ShellCommand::Estimate(id, agents) => {
                hackathons::estimate(ctx, session, &id, &agents).await
            }
            ShellCommand::Leaderboard(id) => hackathons::leaderboard(ctx, session, &id).await,
            ShellCommand::Job(id) => jobs::status(ctx, session, &id).await,
            ShellCommand::Scorecard(id) => submissions::scorecard(ctx, session, &id).await,
            ShellCommand::Invalid(message) => {
                eprintln!("{message}");
                Ok(())
            }
        };

        if let Err(e) = result {
            eprintln!("{e:#}");
        }
    }

    session.logout();
    Ok(())
}
