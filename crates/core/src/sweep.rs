// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Evaluation of minimum-gap thresholds against linked rentals.
//!
//! A threshold is the minimum number of minutes the operator would enforce
//! between two rentals of the same car. For each threshold every linked
//! rental is evaluated independently; comparisons are strict, so a delay
//! equal to the threshold is not absorbed by it.

use crate::link::LinkedRental;
use rental_insights_domain::{CheckinType, RentalId, RentalState};
use serde::{Deserialize, Serialize};

/// Returns whether a late checkin would have been absorbed by the threshold.
///
/// True iff the checkin was late and the previous checkout delay is known
/// and strictly below the threshold.
#[must_use]
pub fn late_solved(previous_delay: Option<i64>, threshold: u32, late_checkin: bool) -> bool {
    late_checkin && previous_delay.is_some_and(|delay| delay < i64::from(threshold))
}

/// Returns whether a cancellation would have been avoided by the threshold.
///
/// A subset of [`late_solved`]: the rental must also have been canceled.
#[must_use]
pub fn checkin_solved(
    previous_delay: Option<i64>,
    threshold: u32,
    state: &RentalState,
    late_checkin: bool,
) -> bool {
    state.is_canceled() && late_solved(previous_delay, threshold, late_checkin)
}

/// Returns whether the scheduled gap is below the threshold.
///
/// Such a rental could not have been booked under the threshold.
#[must_use]
pub fn in_scope(time_delta: i64, threshold: u32) -> bool {
    time_delta < i64::from(threshold)
}

/// The three indicators of one linked rental at one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdOutcome {
    /// The threshold, in minutes.
    pub threshold: u32,
    /// The scheduled gap is below the threshold.
    pub in_scope: bool,
    /// A canceled late checkin would have been avoided.
    pub checkin_solved: bool,
    /// A late checkin would have been absorbed.
    pub late_solved: bool,
}

impl ThresholdOutcome {
    /// Evaluates one linked rental at one threshold.
    #[must_use]
    pub fn evaluate(rental: &LinkedRental, threshold: u32) -> Self {
        let previous_delay: Option<i64> = rental.previous_delay_at_checkout_in_minutes;
        Self {
            threshold,
            in_scope: in_scope(rental.time_delta_with_previous_rental_in_minutes, threshold),
            checkin_solved: checkin_solved(
                previous_delay,
                threshold,
                &rental.state,
                rental.late_checkin,
            ),
            late_solved: late_solved(previous_delay, threshold, rental.late_checkin),
        }
    }
}

/// All threshold outcomes of one linked rental.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepRow {
    /// The linked rental.
    pub rental_id: RentalId,
    /// How the driver of the linked rental checked in.
    pub checkin_type: CheckinType,
    /// One outcome per threshold, in sweep order.
    pub outcomes: Vec<ThresholdOutcome>,
}

/// Outcomes of every linked rental at every threshold of a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepTable {
    /// The thresholds, in sweep order.
    pub thresholds: Vec<u32>,
    /// One row per linked rental, in link order.
    pub rows: Vec<SweepRow>,
}

/// Evaluates every linked rental at every threshold.
///
/// # Arguments
///
/// * `linked` - The linked rentals
/// * `thresholds` - The thresholds to evaluate, in minutes
#[must_use]
pub fn sweep_thresholds(linked: &[LinkedRental], thresholds: &[u32]) -> SweepTable {
    let rows: Vec<SweepRow> = linked
        .iter()
        .map(|rental| SweepRow {
            rental_id: rental.rental_id,
            checkin_type: rental.checkin_type,
            outcomes: thresholds
                .iter()
                .map(|&threshold| ThresholdOutcome::evaluate(rental, threshold))
                .collect(),
        })
        .collect();

    SweepTable {
        thresholds: thresholds.to_vec(),
        rows,
    }
}
