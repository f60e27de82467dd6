//! REST API endpoint implementations.
//!
//! Each function performs exactly one HTTP request. None of them retry:
//! re-execution is always an explicit operator decision (see [`crate::retry`]).

mod hackathons;
mod health;
mod jobs;
mod request;
mod submissions;
mod url_encoding;

pub use hackathons::{estimate_cost, get_hackathon, get_leaderboard, get_stats, list_hackathons};
pub use health::check_health;
pub use jobs::get_job_status;
pub use request::{RequestContext, send_request};
pub use submissions::get_scorecard;
pub use url_encoding::encode_path_segment;
