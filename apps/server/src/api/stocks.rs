use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use stockview_core::{GainersLosers, StockList, SymbolDetail};

async fn get_all_stocks(State(state): State<Arc<AppState>>) -> ApiResult<Json<StockList>> {
    let stocks = state
        .quote_service
        .get_all_stocks()
        .await
        .map_err(ApiError::StockData)?;
    Ok(Json(stocks))
}

async fn get_gainers_losers(State(state): State<Arc<AppState>>) -> ApiResult<Json<GainersLosers>> {
    let ranked = state
        .quote_service
        .get_gainers_losers()
        .await
        .map_err(ApiError::StockData)?;
    Ok(Json(ranked))
}

async fn get_symbol_detail(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SymbolDetail>> {
    let detail = state
        .quote_service
        .get_symbol_detail(&symbol)
        .await
        .map_err(ApiError::StockDetails)?;
    Ok(Json(detail))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stocks/all", get(get_all_stocks))
        .route("/stocks/gainers-losers", get(get_gainers_losers))
        .route("/stocks/{symbol}", get(get_symbol_detail))
}
