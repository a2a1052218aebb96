//! Search request and response models.

use serde::{Deserialize, Serialize};

use super::upstream::{UpstreamItem, UpstreamResponse};
use crate::errors::{AppError, ENDPOINT};

/// Default page size.
pub const DEFAULT_PER_PAGE: i64 = 3;
/// Default page number.
pub const DEFAULT_PAGE: i64 = 1;

/// `item_format` of every normalized result.
pub const ITEM_FORMAT: &str = "web_page";
/// Message attached to an empty result set.
pub const NO_RESULTS_MSG: &str = "No Results";

/// Raw query string of `GET /search`, before validation.
#[derive(Debug, Default)]
pub struct SearchParams {
    pub q: Option<String>,
    pub per_page: Option<String>,
    pub page: Option<String>,
}

impl SearchParams {
    /// Collect the known keys from decoded query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut params.q,
                "per_page" => &mut params.per_page,
                "page" => &mut params.page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Validated search request with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Client query with spaces turned into `+`
    pub query: String,
    pub per_page: i64,
    pub page: i64,
}

impl SearchRequest {
    /// Validate raw parameters.
    pub fn from_params(params: SearchParams) -> Result<Self, AppError> {
        let q = match params.q {
            Some(q) if !q.is_empty() => q,
            _ => return Err(AppError::MissingQuery),
        };

        Ok(Self {
            query: q.replace(' ', "+"),
            per_page: parse_int("per_page", params.per_page, DEFAULT_PER_PAGE)?,
            page: parse_int("page", params.page, DEFAULT_PAGE)?,
        })
    }

    /// Offset of the first record on the requested page.
    ///
    /// Only logged; the upstream API is not asked for it.
    pub fn offset(&self) -> i64 {
        if self.page > 1 {
            self.per_page
                .saturating_mul(self.page - 1)
                .saturating_add(1)
        } else {
            0
        }
    }
}

fn parse_int(name: &'static str, raw: Option<String>, default: i64) -> Result<i64, AppError> {
    match raw {
        Some(value) if !value.is_empty() => value
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidParameter { name, value }),
        _ => Ok(default),
    }
}

/// A FAQ entry in the shape every search endpoint returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedResult {
    pub title: String,
    pub item_format: String,
    pub link: String,
    pub description: Option<String>,
}

impl From<UpstreamItem> for NormalizedResult {
    fn from(item: UpstreamItem) -> Self {
        Self {
            title: item.question.unwrap_or_default(),
            item_format: ITEM_FORMAT.to_string(),
            link: item.url.unwrap_or_default(),
            description: item.topics.map(|topics| topics.join(", ")),
        }
    }
}

/// Error object returned in place of results when nothing matched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoResults {
    pub msg: String,
    pub no_results_url: String,
}

/// Body of a successful `GET /search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub endpoint: String,
    pub query: String,
    pub per_page: i64,
    pub page: i64,
    pub total: Option<i64>,
    pub module_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<NormalizedResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<NoResults>,
}

impl SearchResponse {
    /// Reshape an upstream document.
    ///
    /// Only a total of exactly zero takes the no-results branch; an unknown
    /// total still lists whatever items came back.
    pub fn from_upstream(
        request: &SearchRequest,
        upstream: UpstreamResponse,
        module_url: &str,
        no_results_url: &str,
    ) -> Self {
        let total = upstream.total();

        let (results, error) = if total != Some(0) {
            let results = upstream
                .into_items()
                .into_iter()
                .map(NormalizedResult::from)
                .collect();
            (Some(results), None)
        } else {
            let error = NoResults {
                msg: NO_RESULTS_MSG.to_string(),
                no_results_url: no_results_url.to_string(),
            };
            (None, Some(error))
        };

        Self {
            endpoint: ENDPOINT.to_string(),
            query: request.query.clone(),
            per_page: request.per_page,
            page: request.page,
            total,
            module_link: format!("{}{}", module_url, request.query),
            results,
            error,
        }
    }
}
