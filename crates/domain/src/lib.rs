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

mod car;
mod error;
mod rental;
mod thresholds;

#[cfg(test)]
mod tests;

// Re-export public types
pub use car::{CarFeatures, CarType, Fuel, ModelKey, PaintColor};
pub use error::DomainError;
pub use rental::{CheckinType, Rental, RentalId, RentalState};
pub use thresholds::{
    DEFAULT_THRESHOLD_END, DEFAULT_THRESHOLD_START, DEFAULT_THRESHOLD_STEP, MAX_THRESHOLDS,
    ThresholdRange,
};
