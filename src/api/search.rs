//! Search API endpoint.

use axum::extract::{Query, State};
use axum::Json;

use crate::errors::AppError;
use crate::models::{SearchParams, SearchRequest, SearchResponse};
use crate::AppState;

/// GET /search - Search the FAQ knowledge base.
pub async fn search_faq(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, AppError> {
    let request = SearchRequest::from_params(SearchParams::from_pairs(pairs))?;

    tracing::debug!(
        "Pagination debug offset={} page={} limit={}",
        request.offset(),
        request.page,
        request.per_page
    );

    let upstream = state
        .search
        .search(&request.query, request.per_page)
        .await?;

    Ok(Json(SearchResponse::from_upstream(
        &request,
        upstream,
        &state.config.module_url,
        &state.config.no_results_url,
    )))
}
