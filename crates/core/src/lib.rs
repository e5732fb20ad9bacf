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

mod aggregate;
mod error;
mod index;
mod link;
mod stats;
mod sweep;

#[cfg(test)]
mod tests;

use rental_insights_domain::Rental;
use tracing::debug;

// Re-export public types and functions
pub use aggregate::{
    CheckinPartition, ImpactKind, ImpactReport, ImpactRow, RevenueImpactRow, aggregate_impacts,
    percent_of,
};
pub use error::CoreError;
pub use index::RentalIndex;
pub use link::{LinkedRental, link_previous_rentals, link_with_index};
pub use stats::{
    LateCheckinCount, RentalSummary, StateCheckinCount, TimeDeltaLateCount, summarize,
};
pub use sweep::{
    SweepRow, SweepTable, ThresholdOutcome, checkin_solved, in_scope, late_solved,
    sweep_thresholds,
};

/// Runs the late-checkout impact simulation over a rental table.
///
/// This is a pure function of its inputs: the linked view is derived,
/// evaluated at every threshold and aggregated, then discarded.
///
/// # Arguments
///
/// * `rentals` - The full rental table
/// * `thresholds` - The minimum-gap thresholds to evaluate, in minutes
///
/// # Errors
///
/// Returns an error if:
/// - two rentals share an identifier
/// - a previous-rental reference does not resolve
/// - a linked rental has no time delta
pub fn analyze_thresholds(
    rentals: &[Rental],
    thresholds: &[u32],
) -> Result<ImpactReport, CoreError> {
    let linked: Vec<LinkedRental> = link_previous_rentals(rentals)?;
    debug!(
        rentals = rentals.len(),
        linked = linked.len(),
        thresholds = thresholds.len(),
        "Sweeping thresholds"
    );

    let sweep: SweepTable = sweep_thresholds(&linked, thresholds);
    Ok(aggregate_impacts(&sweep, rentals.len()))
}

/// Computes the descriptive breakdowns of a rental table.
///
/// # Errors
///
/// Returns an error if the linked view cannot be derived.
/// See [`analyze_thresholds`].
pub fn summarize_rentals(rentals: &[Rental]) -> Result<RentalSummary, CoreError> {
    let linked: Vec<LinkedRental> = link_previous_rentals(rentals)?;
    Ok(summarize(rentals, &linked))
}
