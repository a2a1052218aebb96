//! Data models for the FAQ search proxy.
//!
//! `upstream` mirrors what the LibAnswers API sends; `search` is the contract
//! this service exposes.

mod search;
mod upstream;

pub use search::*;
pub use upstream::*;
