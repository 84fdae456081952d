use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chain_data::{fetch_all, resolve_addresses, SearchScope};
use market_core::{
    compute_interest_reserve, filter_and_sort, format_display, FilterSpec, MarketView, SortKey,
};

use crate::error::HubError;
use crate::state::AppState;

fn now_s() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Build markets sub-router.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/markets", get(list_markets))
        .route("/api/interest", get(interest_quote))
}

// ── Query params ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MarketsQuery {
    #[serde(default = "default_scope")]
    scope: String,
    /// Connected wallet address, when the frontend has one.
    #[serde(default)]
    user: Option<String>,
    #[serde(default)]
    search: String,
    #[serde(default = "default_category")]
    category: String,
    #[serde(default = "default_sort")]
    sort: String,
}

fn default_scope() -> String {
    "all".to_string()
}

fn default_category() -> String {
    "all".to_string()
}

fn default_sort() -> String {
    "volume".to_string()
}

#[derive(Debug, Deserialize)]
pub struct InterestQuery {
    total_raise: u64,
    rate_bps: u32,
    start_ts: u64,
    end_ts: u64,
}

// ── Handlers ─────────────────────────────────────────────────────────────

/// GET /api/markets — fetch, project, filter and sort bond markets.
///
/// An empty list with a 200 means nothing was found; lookup failure is
/// always a typed error response, never an empty success.
async fn list_markets(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MarketsQuery>,
) -> Result<Json<Value>, HubError> {
    let scope = SearchScope::parse(&q.scope)
        .ok_or_else(|| HubError::BadRequest(format!("unknown scope: {}", q.scope)))?;
    let sort_key = SortKey::parse(&q.sort)
        .ok_or_else(|| HubError::BadRequest(format!("unknown sort key: {}", q.sort)))?;

    let addresses = resolve_addresses(scope, &state.config.module_address, q.user.as_deref());
    tracing::debug!("fetching bonds from {} source(s)", addresses.len());

    let records = fetch_all(&state.chain, &addresses).await?;

    let now = now_s();
    let views: Vec<MarketView> = records.iter().map(|r| MarketView::project(r, now)).collect();

    let spec = FilterSpec {
        search_term: q.search,
        category: q.category,
        sort_key,
    };
    let shown = filter_and_sort(&views, &spec);

    Ok(Json(json!({
        "total": views.len(),
        "shown": shown.len(),
        "sources": addresses.len(),
        "markets": shown,
    })))
}

/// GET /api/interest — interest reserve a creator must lock for a window.
async fn interest_quote(Query(q): Query<InterestQuery>) -> Result<Json<Value>, HubError> {
    if q.rate_bps > 10_000 {
        return Err(HubError::BadRequest(format!(
            "rate_bps out of range: {}",
            q.rate_bps
        )));
    }
    let reserve = compute_interest_reserve(q.total_raise, q.rate_bps, q.start_ts, q.end_ts)?;

    Ok(Json(json!({
        "reserve": reserve,
        "reserve_display": format_display(reserve),
    })))
}
