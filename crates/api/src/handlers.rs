// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for prediction and rental analysis.
//!
//! Handlers are synchronous and never mutate their inputs. The transport
//! layer owns the loaded model and rental table and passes them in.

use rental_insights::{ImpactReport, RentalSummary};
use rental_insights_domain::{CarFeatures, Rental, ThresholdRange};
use tracing::debug;

use crate::error::ApiError;
use crate::pricing::PricingModel;
use crate::request_response::{
    DEFAULT_RENTAL_LIMIT, IndexResponse, ListRentalsQuery, ListRentalsResponse, PredictionResponse,
    SummaryResponse, ThresholdAnalysisResponse, ThresholdQuery,
};

/// Returns the greeting served at the API root.
#[must_use]
pub fn index() -> IndexResponse {
    IndexResponse {
        message: String::from(
            "Rental Insights API. POST car features to /predict, or GET /analysis/thresholds, /analysis/summary and /rentals.",
        ),
    }
}

/// Returns the loaded rental table, or an error if none was loaded.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if `rentals` is `None`.
pub fn require_rentals(rentals: Option<&[Rental]>) -> Result<&[Rental], ApiError> {
    rentals.ok_or_else(|| ApiError::ResourceNotFound {
        resource_type: String::from("Rental data"),
        message: String::from("No rental file was loaded at startup"),
    })
}

/// Estimates the daily rental price of a car.
///
/// # Arguments
///
/// * `model` - The pricing model
/// * `features` - The car features, with defaults already applied
///
/// # Errors
///
/// Returns an error if:
/// - mileage is zero or negative
/// - engine power is negative
/// - the model cannot evaluate the features
pub fn predict_price(
    model: &dyn PricingModel,
    features: &CarFeatures,
) -> Result<PredictionResponse, ApiError> {
    features.validate()?;
    let price: f64 = model.predict(features)?;
    debug!(
        model_key = %features.model_key,
        mileage = features.mileage,
        price,
        "Estimated rental price"
    );
    Ok(PredictionResponse {
        prediction: vec![price],
    })
}

/// Runs the late-checkout threshold sweep over the loaded rentals.
///
/// # Arguments
///
/// * `rentals` - The rental table
/// * `query` - The requested threshold range
///
/// # Errors
///
/// Returns an error if:
/// - the threshold range is invalid
/// - the rental table is inconsistent (duplicate ids, dangling references)
pub fn analyze_threshold_impacts(
    rentals: &[Rental],
    query: &ThresholdQuery,
) -> Result<ThresholdAnalysisResponse, ApiError> {
    let range: ThresholdRange = query.to_range()?;
    let thresholds: Vec<u32> = range.thresholds();
    let report: ImpactReport = rental_insights::analyze_thresholds(rentals, &thresholds)?;
    Ok(ThresholdAnalysisResponse { range, report })
}

/// Computes the descriptive breakdowns of the loaded rentals.
///
/// # Errors
///
/// Returns an error if the rental table is inconsistent.
pub fn describe_rentals(rentals: &[Rental]) -> Result<SummaryResponse, ApiError> {
    let summary: RentalSummary = rental_insights::summarize_rentals(rentals)?;
    Ok(SummaryResponse { summary })
}

/// Returns the first rows of the loaded rentals.
///
/// The limit defaults to `DEFAULT_RENTAL_LIMIT` and is capped at the table size.
#[must_use]
pub fn list_rentals(rentals: &[Rental], query: &ListRentalsQuery) -> ListRentalsResponse {
    let limit: usize = query.limit.unwrap_or(DEFAULT_RENTAL_LIMIT);
    ListRentalsResponse {
        total: rentals.len(),
        rentals: rentals.iter().take(limit).cloned().collect(),
    }
}
