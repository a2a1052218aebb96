//! Payload returned by the LibAnswers search API.
//!
//! Every level is optional: a missing key means "unknown", never a failed search.

use serde::Deserialize;
use serde_json::Value;

/// Top-level upstream document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamResponse {
    #[serde(default)]
    pub search: Option<UpstreamSearch>,
}

/// The `search` object of the upstream document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamSearch {
    /// Total hit count; integer or numeric string
    #[serde(rename = "numFound", default)]
    pub num_found: Option<Value>,
    #[serde(default)]
    pub results: Option<Vec<UpstreamItem>>,
}

/// One FAQ entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamItem {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

impl UpstreamResponse {
    /// Total hit count reported upstream, `None` when the path is absent or not numeric.
    pub fn total(&self) -> Option<i64> {
        let found = self.search.as_ref()?.num_found.as_ref()?;
        match found {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Result items in upstream order; empty when absent.
    pub fn into_items(self) -> Vec<UpstreamItem> {
        self.search.and_then(|s| s.results).unwrap_or_default()
    }
}
