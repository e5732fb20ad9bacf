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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod csv_import;
mod error;
mod handlers;
mod pricing;
mod request_response;
mod xlsx_import;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use csv_import::{import_rentals_csv, load_rentals, load_rentals_csv};
pub use error::{
    ApiError, CsvRowError, translate_core_error, translate_domain_error, translate_model_error,
};
pub use handlers::{
    analyze_threshold_impacts, describe_rentals, index, list_rentals, predict_price,
    require_rentals,
};
pub use pricing::{ModelArtifact, ModelError, NodeArtifact, PricingModel, TreeArtifact, TreeEnsemble};
pub use request_response::{
    DEFAULT_RENTAL_LIMIT, IndexResponse, ListRentalsQuery, ListRentalsResponse, PredictionResponse,
    SummaryResponse, ThresholdAnalysisResponse, ThresholdQuery,
};
pub use xlsx_import::{import_rentals_xlsx, load_rentals_xlsx};
