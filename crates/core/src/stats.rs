// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Descriptive breakdowns of cancellations and late checkins.

use crate::link::LinkedRental;
use rental_insights_domain::{CheckinType, Rental, RentalState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of rentals in one (state, checkin type) group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCheckinCount {
    /// The rental state.
    pub state: RentalState,
    /// The checkin type the group is keyed on.
    pub checkin_type: CheckinType,
    /// Number of rentals in the group.
    pub count: u64,
}

/// Number of linked rentals in one (late checkin, previous checkin type) group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateCheckinCount {
    /// Whether the checkin was late.
    pub late_checkin: bool,
    /// How the driver of the previous rental checked in.
    pub previous_checkin_type: CheckinType,
    /// Number of linked rentals in the group.
    pub count: u64,
}

/// Late checkins among linked rentals sharing a scheduled gap and checkin type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDeltaLateCount {
    /// Scheduled minutes between the previous checkout and the checkin.
    pub time_delta_with_previous_rental_in_minutes: i64,
    /// How the driver checked in.
    pub checkin_type: CheckinType,
    /// Number of late checkins in the group.
    pub late_checkin_count: u64,
}

/// Descriptive statistics over a rental table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalSummary {
    /// Size of the full rental table.
    pub total_rental_count: usize,
    /// Number of rentals that follow another rental.
    pub linked_rental_count: usize,
    /// Number of linked rentals whose checkin was late.
    pub late_checkin_count: usize,
    /// Number of linked rentals whose previous checkout delay is unknown.
    pub unknown_previous_delay_count: usize,
    /// All rentals by state and checkin type.
    pub by_state_and_checkin_type: Vec<StateCheckinCount>,
    /// Linked rentals by state and previous checkin type.
    ///
    /// `checkin_type` holds the previous rental's checkin type.
    pub linked_by_state_and_previous_checkin_type: Vec<StateCheckinCount>,
    /// Linked rentals by late checkin and previous checkin type.
    pub linked_by_late_checkin_and_previous_checkin_type: Vec<LateCheckinCount>,
    /// Late linked rentals by state and checkin type.
    pub late_by_state_and_checkin_type: Vec<StateCheckinCount>,
    /// Late checkins by scheduled gap and checkin type, ascending gap.
    pub late_checkins_by_time_delta: Vec<TimeDeltaLateCount>,
}

fn count_by_state_and_checkin_type<'a>(
    groups: impl Iterator<Item = (&'a RentalState, CheckinType)>,
) -> Vec<StateCheckinCount> {
    let mut counts: BTreeMap<(&RentalState, CheckinType), u64> = BTreeMap::new();
    for key in groups {
        *counts.entry(key).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|((state, checkin_type), count)| StateCheckinCount {
            state: state.clone(),
            checkin_type,
            count,
        })
        .collect()
}

/// Computes the descriptive breakdowns.
///
/// Groups are reported in ascending key order. Only groups with at least
/// one member appear, except in `late_checkins_by_time_delta` where every
/// (gap, checkin type) group present among linked rentals is reported,
/// including those without a late checkin.
///
/// # Arguments
///
/// * `rentals` - The full rental table
/// * `linked` - The linked rentals derived from `rentals`
#[must_use]
pub fn summarize(rentals: &[Rental], linked: &[LinkedRental]) -> RentalSummary {
    let by_state_and_checkin_type: Vec<StateCheckinCount> = count_by_state_and_checkin_type(
        rentals
            .iter()
            .map(|rental| (&rental.state, rental.checkin_type)),
    );

    let linked_by_state_and_previous_checkin_type: Vec<StateCheckinCount> =
        count_by_state_and_checkin_type(
            linked
                .iter()
                .map(|rental| (&rental.state, rental.previous_checkin_type)),
        );

    let late_by_state_and_checkin_type: Vec<StateCheckinCount> = count_by_state_and_checkin_type(
        linked
            .iter()
            .filter(|rental| rental.late_checkin)
            .map(|rental| (&rental.state, rental.checkin_type)),
    );

    let mut late_counts: BTreeMap<(bool, CheckinType), u64> = BTreeMap::new();
    let mut by_time_delta: BTreeMap<(i64, CheckinType), u64> = BTreeMap::new();
    for rental in linked {
        *late_counts
            .entry((rental.late_checkin, rental.previous_checkin_type))
            .or_default() += 1;
        *by_time_delta
            .entry((
                rental.time_delta_with_previous_rental_in_minutes,
                rental.checkin_type,
            ))
            .or_default() += u64::from(rental.late_checkin);
    }

    RentalSummary {
        total_rental_count: rentals.len(),
        linked_rental_count: linked.len(),
        late_checkin_count: linked.iter().filter(|rental| rental.late_checkin).count(),
        unknown_previous_delay_count: linked
            .iter()
            .filter(|rental| rental.has_unknown_previous_delay())
            .count(),
        by_state_and_checkin_type,
        linked_by_state_and_previous_checkin_type,
        linked_by_late_checkin_and_previous_checkin_type: late_counts
            .into_iter()
            .map(
                |((late_checkin, previous_checkin_type), count)| LateCheckinCount {
                    late_checkin,
                    previous_checkin_type,
                    count,
                },
            )
            .collect(),
        late_by_state_and_checkin_type,
        late_checkins_by_time_delta: by_time_delta
            .into_iter()
            .map(
                |((time_delta, checkin_type), late_checkin_count)| TimeDeltaLateCount {
                    time_delta_with_previous_rental_in_minutes: time_delta,
                    checkin_type,
                    late_checkin_count,
                },
            )
            .collect(),
    }
}
