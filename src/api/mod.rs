//! HTTP API module.
//!
//! Routes: `/` and `/ping` health checks, `/search` proxied to LibAnswers.

mod health;
mod search;

pub use health::*;
pub use search::*;
