// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{
        Query, State as AxumState,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use rental_insights_api::{
    ApiError, IndexResponse, ListRentalsQuery, ListRentalsResponse, PredictionResponse,
    PricingModel, SummaryResponse, ThresholdAnalysisResponse, ThresholdQuery, TreeEnsemble,
    analyze_threshold_impacts, describe_rentals, index, list_rentals, load_rentals,
    predict_price, require_rentals,
};
use rental_insights_domain::{CarFeatures, Rental};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Rental Insights Server - car price estimates and late-checkout analysis
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the pricing model artifact (JSON tree ensemble)
    #[arg(short, long, default_value = "pricing_model.json")]
    model: PathBuf,

    /// Path to a rental history CSV or .xlsx workbook. Without it the analysis
    /// endpoints answer 404.
    #[arg(short, long)]
    rentals: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 4000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,
}

/// Application state shared across handlers.
///
/// Both the model and the rental table are loaded once at startup and
/// never change, so handlers share them without locking.
#[derive(Clone)]
struct AppState {
    /// The pricing model.
    model: Arc<dyn PricingModel>,
    /// The rental history, if a rental file was given.
    rentals: Option<Arc<Vec<Rental>>>,
}

impl AppState {
    fn rentals(&self) -> Result<&[Rental], HttpError> {
        require_rentals(self.rentals.as_deref().map(Vec::as_slice)).map_err(HttpError::from)
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. }
            | ApiError::InvalidCsvFormat { .. }
            | ApiError::InvalidWorkbook { .. }
            | ApiError::InvalidCsvRows { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DataIntegrity { .. } | ApiError::Internal { .. } => {
                error!(error = %err, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Handler for GET `/` endpoint.
async fn handle_index() -> Json<IndexResponse> {
    info!("Handling index request");
    Json(index())
}

/// Handler for POST `/predict` endpoint.
///
/// Estimates the daily rental price of the submitted car. Missing fields
/// take their defaults; unknown categorical values are rejected with 422.
async fn handle_predict(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CarFeatures>, JsonRejection>,
) -> Result<Json<PredictionResponse>, HttpError> {
    let Json(features) = payload?;
    info!(
        model_key = %features.model_key,
        car_type = %features.car_type,
        "Handling predict request"
    );

    let response: PredictionResponse = predict_price(app_state.model.as_ref(), &features)?;
    Ok(Json(response))
}

/// Handler for GET `/analysis/thresholds` endpoint.
///
/// Runs the late-checkout threshold sweep over the loaded rentals.
async fn handle_threshold_analysis(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<ThresholdQuery>, QueryRejection>,
) -> Result<Json<ThresholdAnalysisResponse>, HttpError> {
    let Query(query) = query?;
    info!(
        start = ?query.start,
        step = ?query.step,
        end = ?query.end,
        "Handling threshold_analysis request"
    );

    let rentals: &[Rental] = app_state.rentals()?;
    let response: ThresholdAnalysisResponse = analyze_threshold_impacts(rentals, &query)?;
    Ok(Json(response))
}

/// Handler for GET `/analysis/summary` endpoint.
///
/// Returns the descriptive breakdowns of the loaded rentals.
async fn handle_summary(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<SummaryResponse>, HttpError> {
    info!("Handling summary request");

    let rentals: &[Rental] = app_state.rentals()?;
    let response: SummaryResponse = describe_rentals(rentals)?;
    Ok(Json(response))
}

/// Handler for GET `/rentals` endpoint.
///
/// Lists the first rows of the loaded rentals.
async fn handle_list_rentals(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<ListRentalsQuery>, QueryRejection>,
) -> Result<Json<ListRentalsResponse>, HttpError> {
    let Query(query) = query?;
    info!(limit = ?query.limit, "Handling list_rentals request");

    let rentals: &[Rental] = app_state.rentals()?;
    Ok(Json(list_rentals(rentals, &query)))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/predict", post(handle_predict))
        .route("/analysis/thresholds", get(handle_threshold_analysis))
        .route("/analysis/summary", get(handle_summary))
        .route("/rentals", get(handle_list_rentals))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Rental Insights Server");

    let model: TreeEnsemble = TreeEnsemble::load(&args.model)?;

    let rentals: Option<Arc<Vec<Rental>>> = if let Some(rentals_path) = &args.rentals {
        Some(Arc::new(load_rentals(rentals_path)?))
    } else {
        warn!("No rental file given, analysis endpoints are disabled");
        None
    };

    let app_state: AppState = AppState {
        model: Arc::new(model),
        rentals,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
