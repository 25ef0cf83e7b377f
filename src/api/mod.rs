mod presets;
mod view;

use axum::{
    Router,
    extract::{Json, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::config::{DashboardConfig, ServeConfig};
use crate::core::{
    ErrorKind, ImpactCalculator, ImpactSummary, InputError, InputField, RetailerInputs,
};

pub use presets::{
    BASELINE_RETAILERS, CUSTOM_COMPETITOR, RetailerPreset, default_scenario, parse_competitor_names,
};
pub use view::{ChartSeries, KpiCard, build_chart, build_kpis, format_dollars, format_percent};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared handler state. The calculator is chosen once at start-up and
/// handed to every request.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<dyn ImpactCalculator>,
    config: Arc<DashboardConfig>,
}

impl AppState {
    pub fn new(calculator: Arc<dyn ImpactCalculator>, config: DashboardConfig) -> Self {
        Self {
            calculator,
            config: Arc::new(config),
        }
    }
}

/// One retailer row as sent by the browser. Numeric fields are optional on
/// the wire so a missing value is reported against its field rather than
/// as an opaque parse failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RetailerPayload {
    pub name: String,
    pub total_sales: Option<f64>,
    pub taxes: Option<f64>,
    pub shipping: Option<f64>,
    pub local_rate: Option<f64>,
    pub multiplier: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImpactPayload {
    pub retailers: Vec<RetailerPayload>,
    pub competitors: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScenarioQuery {
    competitors: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactResponse {
    pub summaries: Vec<ImpactSummary>,
    pub kpis: Vec<KpiCard>,
    pub chart: ChartSeries,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigResponse<'a> {
    #[serde(flatten)]
    dashboard: &'a DashboardConfig,
    baseline: &'a [RetailerPreset],
    custom_defaults: RetailerPreset,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    retailer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<InputField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ErrorKind>,
}

/// Why a submitted retailer could not be turned into [`RetailerInputs`].
#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    #[error("{retailer}: {field} is required")]
    Missing {
        retailer: String,
        field: InputField,
    },
    #[error("{retailer}: {source}")]
    Invalid {
        retailer: String,
        #[source]
        source: InputError,
    },
    #[error("at least one retailer is required")]
    NoRetailers,
}

impl RequestError {
    fn into_response_body(self) -> ErrorResponse {
        let error = self.to_string();
        match self {
            RequestError::Missing { retailer, field } => ErrorResponse {
                error,
                retailer: Some(retailer),
                field: Some(field),
                kind: Some(ErrorKind::Type),
            },
            RequestError::Invalid { retailer, source } => ErrorResponse {
                error,
                retailer: Some(retailer),
                field: Some(source.field()),
                kind: Some(source.kind()),
            },
            RequestError::NoRetailers => ErrorResponse {
                error,
                retailer: None,
                field: None,
                kind: Some(ErrorKind::Value),
            },
        }
    }
}

impl TryFrom<&RetailerPayload> for RetailerInputs {
    type Error = RequestError;

    fn try_from(payload: &RetailerPayload) -> Result<Self, Self::Error> {
        let retailer = payload.name.trim().to_string();
        let require = |field: InputField, value: Option<f64>| {
            value.ok_or_else(|| RequestError::Missing {
                retailer: retailer.clone(),
                field,
            })
        };

        let total_sales = require(InputField::TotalSales, payload.total_sales)?;
        let taxes = require(InputField::Taxes, payload.taxes)?;
        let shipping = require(InputField::Shipping, payload.shipping)?;
        let local_rate = require(InputField::LocalRate, payload.local_rate)?;
        let multiplier = require(InputField::Multiplier, payload.multiplier)?;

        RetailerInputs::new(
            payload.name.as_str(),
            total_sales,
            taxes,
            shipping,
            local_rate,
            multiplier,
        )
        .map_err(|source| RequestError::Invalid { retailer, source })
    }
}

/// Validates every retailer, then summarizes each one. Any invalid retailer
/// fails the whole request.
pub fn compute_impact(
    calculator: &dyn ImpactCalculator,
    retailers: &[RetailerPayload],
) -> Result<ImpactResponse, RequestError> {
    if retailers.is_empty() {
        return Err(RequestError::NoRetailers);
    }

    let inputs = retailers
        .iter()
        .map(RetailerInputs::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let summaries: Vec<ImpactSummary> = inputs
        .iter()
        .map(|retailer| calculator.summarize(retailer))
        .collect();

    Ok(ImpactResponse {
        kpis: build_kpis(&summaries),
        chart: build_chart(&summaries),
        summaries,
    })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route("/api/config", get(config_handler))
        .route(
            "/api/impact",
            get(impact_get_handler).post(impact_post_handler),
        )
        .fallback(not_found_handler)
        .with_state(state)
}

pub async fn run_http_server(
    config: ServeConfig,
    calculator: Arc<dyn ImpactCalculator>,
) -> Result<(), ServeError> {
    let addr = config.addr;
    let app = router(AppState::new(calculator, config.dashboard));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    info!(%addr, "local impact dashboard listening");
    info!("local access: http://127.0.0.1:{}/", addr.port());

    axum::serve(listener, app).await?;
    Ok(())
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn config_handler(State(state): State<AppState>) -> Response {
    json_response(
        StatusCode::OK,
        ConfigResponse {
            dashboard: &state.config,
            baseline: &BASELINE_RETAILERS,
            custom_defaults: CUSTOM_COMPETITOR,
        },
    )
}

async fn impact_get_handler(
    State(state): State<AppState>,
    Query(query): Query<ScenarioQuery>,
) -> Response {
    let competitors = query.competitors.unwrap_or_default();
    let retailers = default_scenario(&state.config, &competitors);
    impact_handler_impl(&state, &retailers)
}

async fn impact_post_handler(
    State(state): State<AppState>,
    payload: Result<Json<ImpactPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejected impact payload");
            return json_response(
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: rejection.body_text(),
                    retailer: None,
                    field: None,
                    kind: Some(ErrorKind::Type),
                },
            );
        }
    };

    let mut retailers = payload.retailers;
    if let Some(raw) = payload.competitors.as_deref() {
        let names = parse_competitor_names(raw, retailers.iter().map(|r| r.name.trim()));
        let multiplier = state.config.multiplier.default;
        retailers.extend(
            names
                .iter()
                .map(|name| CUSTOM_COMPETITOR.to_payload(name, multiplier)),
        );
    }
    impact_handler_impl(&state, &retailers)
}

fn impact_handler_impl(state: &AppState, retailers: &[RetailerPayload]) -> Response {
    match compute_impact(state.calculator.as_ref(), retailers) {
        Ok(response) => {
            debug!(retailers = retailers.len(), "computed local impact");
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(error = %err, "rejected retailer inputs");
            json_response(StatusCode::BAD_REQUEST, err.into_response_body())
        }
    }
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
            retailer: None,
            field: None,
            kind: None,
        },
    )
}
