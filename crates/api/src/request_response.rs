// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use rental_insights::{ImpactReport, RentalSummary};
use rental_insights_domain::{
    DEFAULT_THRESHOLD_END, DEFAULT_THRESHOLD_START, DEFAULT_THRESHOLD_STEP, DomainError, Rental,
    ThresholdRange,
};
use serde::{Deserialize, Serialize};

/// Default number of rows returned by a rental listing.
pub const DEFAULT_RENTAL_LIMIT: usize = 100;

/// API response for the index endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexResponse {
    /// A greeting pointing to the API.
    pub message: String,
}

/// API response for a price estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// The estimated daily rental price, one value per submitted car.
    pub prediction: Vec<f64>,
}

/// API request to run a threshold sweep.
///
/// Missing bounds take the defaults `0`, `30` and `750`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdQuery {
    /// The first threshold, in minutes.
    pub start: Option<u32>,
    /// The spacing between thresholds, in minutes.
    pub step: Option<u32>,
    /// The exclusive upper bound, in minutes.
    pub end: Option<u32>,
}

impl ThresholdQuery {
    /// Builds the validated threshold range for this query.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is zero, the range is empty, or the
    /// range holds too many thresholds.
    pub fn to_range(&self) -> Result<ThresholdRange, DomainError> {
        ThresholdRange::new(
            self.start.unwrap_or(DEFAULT_THRESHOLD_START),
            self.step.unwrap_or(DEFAULT_THRESHOLD_STEP),
            self.end.unwrap_or(DEFAULT_THRESHOLD_END),
        )
    }
}

/// API response for a threshold sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdAnalysisResponse {
    /// The range the thresholds were drawn from.
    pub range: ThresholdRange,
    /// The impact curves.
    #[serde(flatten)]
    pub report: ImpactReport,
}

/// API response for the descriptive summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The breakdowns.
    #[serde(flatten)]
    pub summary: RentalSummary,
}

/// API request to list raw rental rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRentalsQuery {
    /// Maximum number of rows to return.
    pub limit: Option<usize>,
}

/// API response for a rental listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRentalsResponse {
    /// Number of rentals in the loaded table.
    pub total: usize,
    /// The first rows of the table, in file order.
    pub rentals: Vec<Rental>,
}
