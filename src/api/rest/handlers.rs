//! # REST Handlers
//!
//! Request handlers for REST endpoints.
//!
//! This module provides axum handlers for the trade query endpoints,
//! the wire DTOs and the parameter structs. The wire field names
//! (`tradeId`, `assetClass`, `tradeDateTime`, ...) are mapped here, in
//! one place, via `rename_all = "camelCase"` and the `From<&Trade>`
//! conversions; the domain types keep their internal identifiers.
//!
//! # Endpoints
//!
//! ## Trades
//! - `GET /api/v1/trades` - Paginated listing
//! - `GET /api/v1/trades/search` - Free-text search
//! - `GET /api/v1/trades/filter` - Multi-field filtering
//! - `GET /api/v1/trades/{id}` - Get trade by ID

use crate::application::error::ApplicationError;
use crate::application::queries::{TradeFilter, TradeQueryEngine};
use crate::domain::entities::trade::Trade;
use crate::domain::value_objects::{Price, Side, Timestamp};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for REST handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Query engine over the seeded record store.
    pub engine: TradeQueryEngine,
}

impl AppState {
    /// Creates the shared state from a query engine.
    #[must_use]
    pub const fn new(engine: TradeQueryEngine) -> Self {
        Self { engine }
    }
}

// ============================================================================
// Error Response
// ============================================================================

/// Standard error response format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Creates a new error response.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates an error response with details.
    #[must_use]
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

impl From<ApplicationError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: ApplicationError) -> Self {
        let (status, code) = match &err {
            ApplicationError::TradeNotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApplicationError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApplicationError::DomainError(domain) if domain.is_validation_error() => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        (status, Json(ErrorResponse::new(code, err.to_string())))
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// Pagination parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page, in `[1, 100]`.
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_size() -> u32 {
    10
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_size(),
        }
    }
}

impl PaginationParams {
    /// Checks the parameter ranges before they reach the engine.
    ///
    /// Out-of-range values are rejected, not clamped: the engine assumes
    /// validated inputs.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::ValidationError` if `page < 1` or
    /// `size` lies outside `[1, 100]`.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.page < 1 {
            return Err(ApplicationError::validation("page must be >= 1"));
        }
        if !(1..=100).contains(&self.size) {
            return Err(ApplicationError::validation(
                "size must be between 1 and 100",
            ));
        }
        Ok(())
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    /// The data items.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct PaginationMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub size: u32,
    /// Total number of items.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u32,
}

impl PaginationMeta {
    /// Creates pagination metadata.
    #[must_use]
    pub fn new(page: u32, size: u32, total_items: u64) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            total_items.div_ceil(u64::from(size)) as u32
        };

        Self {
            page,
            size,
            total_items,
            total_pages,
        }
    }
}

// ============================================================================
// Trade DTOs
// ============================================================================

/// Search parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Free-text term matched against the searchable fields.
    #[serde(default)]
    pub search: String,
}

/// Filter parameters, wire-named.
///
/// Unparseable values (bad timestamp, bad decimal, unknown side) are
/// rejected by the deserializer before any handler runs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    /// Exact asset class.
    pub asset_class: Option<String>,
    /// Inclusive lower execution-time bound.
    pub start: Option<Timestamp>,
    /// Inclusive upper execution-time bound.
    pub end: Option<Timestamp>,
    /// Inclusive lower price bound.
    pub min_price: Option<Price>,
    /// Inclusive upper price bound.
    pub max_price: Option<Price>,
    /// Exact buy/sell indicator.
    pub trade_type: Option<Side>,
}

impl FilterParams {
    /// Converts the wire parameters into domain filter criteria.
    #[must_use]
    pub fn into_filter(self) -> TradeFilter {
        let mut filter = TradeFilter::new();
        if let Some(asset_class) = self.asset_class {
            filter = filter.with_asset_class(asset_class);
        }
        if let Some(start) = self.start {
            filter = filter.with_start(start);
        }
        if let Some(end) = self.end {
            filter = filter.with_end(end);
        }
        if let Some(min_price) = self.min_price {
            filter = filter.with_min_price(min_price);
        }
        if let Some(max_price) = self.max_price {
            filter = filter.with_max_price(max_price);
        }
        if let Some(trade_type) = self.trade_type {
            filter = filter.with_trade_type(trade_type);
        }
        filter
    }
}

/// Trade details response DTO.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeDetailsResponse {
    /// `BUY` or `SELL`.
    pub buy_sell_indicator: Side,
    /// Execution price, as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Amount of units traded.
    pub quantity: u64,
}

/// Trade response DTO.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResponse {
    /// Trade ID.
    pub trade_id: String,
    /// Asset class; null when unclassified.
    pub asset_class: Option<String>,
    /// Counterparty name; empty when unknown.
    pub counterparty: String,
    /// Instrument ID.
    pub instrument_id: String,
    /// Instrument name.
    pub instrument_name: String,
    /// Execution timestamp (ISO 8601, no offset).
    pub trade_date_time: String,
    /// Execution details.
    pub trade_details: TradeDetailsResponse,
    /// Trader name.
    pub trader: String,
}

impl From<&Trade> for TradeResponse {
    fn from(trade: &Trade) -> Self {
        let details = trade.trade_details();
        Self {
            trade_id: trade.trade_id().to_string(),
            asset_class: trade.asset_class().map(ToOwned::to_owned),
            counterparty: trade.counterparty().to_owned(),
            instrument_id: trade.instrument_id().to_string(),
            instrument_name: trade.instrument_name().to_owned(),
            trade_date_time: trade.trade_date_time().to_string(),
            trade_details: TradeDetailsResponse {
                buy_sell_indicator: details.buy_sell_indicator(),
                price: details.price().get(),
                quantity: details.quantity().get(),
            },
            trader: trade.trader().to_owned(),
        }
    }
}

// ============================================================================
// Trade Handlers
// ============================================================================

/// List trades with pagination.
///
/// # Errors
///
/// Returns `VALIDATION_ERROR` if `page` or `size` is out of range.
#[instrument(skip(state))]
pub async fn list_trades(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<TradeResponse>>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        "Listing trades page={} size={}",
        pagination.page, pagination.size
    );

    pagination.validate()?;

    let total_items = state.engine.store().len() as u64;
    let data: Vec<TradeResponse> = state
        .engine
        .paginate(pagination.page, pagination.size)
        .iter()
        .map(TradeResponse::from)
        .collect();

    Ok(Json(PaginatedResponse {
        data,
        pagination: PaginationMeta::new(pagination.page, pagination.size, total_items),
    }))
}

/// Get trade by ID.
///
/// # Errors
///
/// Returns `NOT_FOUND` if no trade carries the ID.
#[instrument(skip(state))]
pub async fn get_trade(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TradeResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!("Getting trade: {}", id);

    let trade = state
        .engine
        .get_by_id(&id)
        .ok_or_else(|| ApplicationError::trade_not_found(&id))?;

    Ok(Json(TradeResponse::from(trade)))
}

/// Search trades by free-text term.
#[instrument(skip(state))]
pub async fn search_trades(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<TradeResponse>> {
    info!("Searching trades for: {:?}", params.search);

    let results: Vec<TradeResponse> = state
        .engine
        .search(&params.search)
        .into_iter()
        .map(TradeResponse::from)
        .collect();

    Json(results)
}

/// Filter trades by optional criteria.
#[instrument(skip(state))]
pub async fn filter_trades(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Json<Vec<TradeResponse>> {
    info!("Filtering trades with: {:?}", params);

    let criteria = params.into_filter();
    let results: Vec<TradeResponse> = state
        .engine
        .filter(&criteria)
        .into_iter()
        .map(TradeResponse::from)
        .collect();

    Json(results)
}

// ============================================================================
// Health Check
// ============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::trade::TradeDetails;
    use crate::domain::value_objects::Quantity;

    fn sample_trade() -> Trade {
        Trade::builder(
            "1",
            "AAPL",
            "Apple Inc.",
            Timestamp::parse("2023-05-01T10:30").unwrap(),
            TradeDetails::new(Side::Buy, Price::new(150.0).unwrap(), Quantity::new(100)),
            "John Doe",
        )
        .asset_class("Equity")
        .counterparty("ABC Corp")
        .build()
    }

    mod error_response {
        use super::*;

        #[test]
        fn new_sets_fields() {
            let err = ErrorResponse::new("TEST_ERROR", "test message");
            assert_eq!(err.code, "TEST_ERROR");
            assert_eq!(err.message, "test message");
            assert!(err.details.is_none());
        }

        #[test]
        fn with_details_carries_payload() {
            let details = serde_json::json!({"field": "size"});
            let err = ErrorResponse::with_details("VALIDATION_ERROR", "invalid field", details.clone());
            assert_eq!(err.code, "VALIDATION_ERROR");
            assert_eq!(err.details, Some(details));
        }

        #[test]
        fn absent_details_are_skipped_in_serialization() {
            let json = serde_json::to_string(&ErrorResponse::new("NOT_FOUND", "missing")).unwrap();
            assert!(!json.contains("details"));
        }

        #[test]
        fn not_found_maps_to_404() {
            let (status, Json(body)) =
                <(StatusCode, Json<ErrorResponse>)>::from(ApplicationError::trade_not_found("99"));
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body.code, "NOT_FOUND");
            assert!(body.message.contains("99"));
        }

        #[test]
        fn validation_maps_to_400() {
            let (status, Json(body)) =
                <(StatusCode, Json<ErrorResponse>)>::from(ApplicationError::validation("bad size"));
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.code, "VALIDATION_ERROR");
        }

        #[test]
        fn internal_maps_to_500() {
            let (status, Json(body)) =
                <(StatusCode, Json<ErrorResponse>)>::from(ApplicationError::internal("boom"));
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body.code, "INTERNAL_ERROR");
        }
    }

    mod pagination {
        use super::*;

        #[test]
        fn serde_defaults() {
            let params: PaginationParams = serde_json::from_str("{}").unwrap();
            assert_eq!(params.page, 1);
            assert_eq!(params.size, 10);
        }

        #[test]
        fn validate_accepts_bounds() {
            assert!(PaginationParams { page: 1, size: 1 }.validate().is_ok());
            assert!(PaginationParams { page: 1, size: 100 }.validate().is_ok());
            assert!(
                PaginationParams {
                    page: 1000,
                    size: 50
                }
                .validate()
                .is_ok()
            );
        }

        #[test]
        fn validate_rejects_page_zero() {
            let result = PaginationParams { page: 0, size: 10 }.validate();
            assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        }

        #[test]
        fn validate_rejects_size_zero() {
            let result = PaginationParams { page: 1, size: 0 }.validate();
            assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        }

        #[test]
        fn validate_rejects_oversized_page() {
            let result = PaginationParams { page: 1, size: 101 }.validate();
            assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        }

        #[test]
        fn meta_counts_pages() {
            let meta = PaginationMeta::new(2, 10, 45);
            assert_eq!(meta.page, 2);
            assert_eq!(meta.size, 10);
            assert_eq!(meta.total_items, 45);
            assert_eq!(meta.total_pages, 5);
        }

        #[test]
        fn meta_empty_store_has_one_page() {
            let meta = PaginationMeta::new(1, 10, 0);
            assert_eq!(meta.total_pages, 1);
        }

        #[test]
        fn meta_exact_division() {
            let meta = PaginationMeta::new(1, 10, 50);
            assert_eq!(meta.total_pages, 5);
        }
    }

    mod trade_dto {
        use super::*;

        #[test]
        fn maps_domain_fields() {
            let response = TradeResponse::from(&sample_trade());

            assert_eq!(response.trade_id, "1");
            assert_eq!(response.asset_class.as_deref(), Some("Equity"));
            assert_eq!(response.counterparty, "ABC Corp");
            assert_eq!(response.instrument_id, "AAPL");
            assert_eq!(response.instrument_name, "Apple Inc.");
            assert_eq!(response.trade_date_time, "2023-05-01T10:30:00");
            assert_eq!(response.trade_details.buy_sell_indicator, Side::Buy);
            assert_eq!(response.trade_details.quantity, 100);
            assert_eq!(response.trader, "John Doe");
        }

        #[test]
        fn serializes_with_wire_names() {
            let value = serde_json::to_value(TradeResponse::from(&sample_trade())).unwrap();

            assert_eq!(value["tradeId"], "1");
            assert_eq!(value["assetClass"], "Equity");
            assert_eq!(value["instrumentId"], "AAPL");
            assert_eq!(value["instrumentName"], "Apple Inc.");
            assert_eq!(value["tradeDateTime"], "2023-05-01T10:30:00");
            assert_eq!(value["tradeDetails"]["buySellIndicator"], "BUY");
            assert_eq!(value["tradeDetails"]["quantity"], 100);
            assert_eq!(value["trader"], "John Doe");
        }

        #[test]
        fn price_serializes_as_number() {
            let value = serde_json::to_value(TradeResponse::from(&sample_trade())).unwrap();
            assert!(value["tradeDetails"]["price"].is_number());
            assert_eq!(value["tradeDetails"]["price"], 150.0);
        }

        #[test]
        fn unclassified_asset_class_serializes_as_null() {
            let trade = Trade::builder(
                "5",
                "EURUSD",
                "Euro / US Dollar",
                Timestamp::parse("2023-05-04T08:15").unwrap(),
                TradeDetails::new(Side::Sell, Price::new(1.09).unwrap(), Quantity::new(1000)),
                "Jane Smith",
            )
            .build();

            let value = serde_json::to_value(TradeResponse::from(&trade)).unwrap();
            assert!(value["assetClass"].is_null());
            assert_eq!(value["counterparty"], "");
        }
    }

    mod filter_params {
        use super::*;

        #[test]
        fn deserializes_wire_names() {
            let params: FilterParams = serde_json::from_str(
                r#"{
                    "assetClass": "Equity",
                    "start": "2023-05-01T00:00",
                    "end": "2023-05-02T23:59",
                    "minPrice": 100,
                    "maxPrice": "900",
                    "tradeType": "SELL"
                }"#,
            )
            .unwrap();

            assert_eq!(params.asset_class.as_deref(), Some("Equity"));
            assert_eq!(params.start, Some(Timestamp::parse("2023-05-01T00:00").unwrap()));
            assert_eq!(params.end, Some(Timestamp::parse("2023-05-02T23:59").unwrap()));
            assert_eq!(params.min_price, Some(Price::new(100.0).unwrap()));
            assert_eq!(params.max_price, Some(Price::new(900.0).unwrap()));
            assert_eq!(params.trade_type, Some(Side::Sell));
        }

        #[test]
        fn all_fields_optional() {
            let params: FilterParams = serde_json::from_str("{}").unwrap();
            assert!(params.into_filter().is_unconstrained());
        }

        #[test]
        fn rejects_bad_timestamp() {
            let result: Result<FilterParams, _> =
                serde_json::from_str(r#"{"start": "01/05/2023"}"#);
            assert!(result.is_err());
        }

        #[test]
        fn rejects_bad_side() {
            let result: Result<FilterParams, _> = serde_json::from_str(r#"{"tradeType": "HOLD"}"#);
            assert!(result.is_err());
        }

        #[test]
        fn into_filter_carries_every_criterion() {
            let params = FilterParams {
                asset_class: Some("Equity".to_string()),
                start: None,
                end: None,
                min_price: Some(Price::new(100.0).unwrap()),
                max_price: None,
                trade_type: Some(Side::Buy),
            };

            let filter = params.into_filter();
            assert!(filter.matches(&sample_trade()));
            assert_eq!(
                filter,
                TradeFilter::new()
                    .with_asset_class("Equity")
                    .with_min_price(Price::new(100.0).unwrap())
                    .with_trade_type(Side::Buy)
            );
        }
    }

    #[tokio::test]
    async fn health_check_returns_healthy() {
        let response = health_check().await;
        assert_eq!(response.status, "healthy");
    }
}
