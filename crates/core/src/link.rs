// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of previous-rental references.
//!
//! Each rental that follows another rental of the same car is paired with
//! that previous rental, and the lateness of the handover is derived from
//! the previous checkout delay and the scheduled gap between the two.

use crate::error::CoreError;
use crate::index::RentalIndex;
use rental_insights_domain::{CheckinType, Rental, RentalId, RentalState};
use serde::{Deserialize, Serialize};

/// A rental joined with the rental that preceded it on the same car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedRental {
    /// The current rental.
    pub rental_id: RentalId,
    /// The final state of the current rental.
    pub state: RentalState,
    /// How the driver of the current rental checked in.
    pub checkin_type: CheckinType,
    /// The previous rental of the same car.
    pub previous_ended_rental_id: RentalId,
    /// Scheduled minutes between the previous checkout and this checkin.
    pub time_delta_with_previous_rental_in_minutes: i64,
    /// Checkout delay of the previous rental. `None` when it was not recorded.
    pub previous_delay_at_checkout_in_minutes: Option<i64>,
    /// How the driver of the previous rental checked in.
    pub previous_checkin_type: CheckinType,
    /// Minutes by which the previous checkout overran this checkin.
    ///
    /// Positive means the car was not back in time. `None` when the
    /// previous delay is unknown.
    pub delay_checkin: Option<i64>,
    /// Whether the previous checkout overran this checkin.
    pub late_checkin: bool,
}

impl LinkedRental {
    /// Joins a rental with its previous rental.
    fn join(current: &Rental, previous: &Rental, time_delta: i64) -> Self {
        let previous_delay: Option<i64> = previous.delay_at_checkout_in_minutes;
        let delay_checkin: Option<i64> = previous_delay.map(|delay| delay.saturating_sub(time_delta));

        Self {
            rental_id: current.rental_id,
            state: current.state.clone(),
            checkin_type: current.checkin_type,
            previous_ended_rental_id: previous.rental_id,
            time_delta_with_previous_rental_in_minutes: time_delta,
            previous_delay_at_checkout_in_minutes: previous_delay,
            previous_checkin_type: previous.checkin_type,
            delay_checkin,
            late_checkin: delay_checkin.is_some_and(|delay| delay > 0),
        }
    }

    /// Returns whether the previous checkout delay is unknown.
    #[must_use]
    pub const fn has_unknown_previous_delay(&self) -> bool {
        self.previous_delay_at_checkout_in_minutes.is_none()
    }
}

/// Links every rental that references a previous rental.
///
/// Rentals without a previous rental are skipped. Output follows table order.
///
/// # Arguments
///
/// * `index` - The index over the full rental table
///
/// # Errors
///
/// Returns an error if:
/// - a reference does not resolve to a rental in the table
/// - a linked rental has no time delta
pub fn link_with_index(index: &RentalIndex<'_>) -> Result<Vec<LinkedRental>, CoreError> {
    let mut linked: Vec<LinkedRental> = Vec::new();

    for rental in index.rentals() {
        let Some(previous_rental_id) = rental.previous_ended_rental_id else {
            continue;
        };

        let previous: &Rental =
            index
                .get(previous_rental_id)
                .ok_or(CoreError::UnresolvedPreviousRental {
                    rental_id: rental.rental_id,
                    previous_rental_id,
                })?;

        let time_delta: i64 = rental.time_delta_with_previous_rental_in_minutes.ok_or(
            CoreError::MissingTimeDelta {
                rental_id: rental.rental_id,
            },
        )?;

        linked.push(LinkedRental::join(rental, previous, time_delta));
    }

    Ok(linked)
}

/// Builds the rental index and links every rental with a previous rental.
///
/// # Errors
///
/// Returns an error if the index cannot be built or a link cannot be resolved.
/// See [`RentalIndex::build`] and [`link_with_index`].
pub fn link_previous_rentals(rentals: &[Rental]) -> Result<Vec<LinkedRental>, CoreError> {
    let index: RentalIndex<'_> = RentalIndex::build(rentals)?;
    link_with_index(&index)
}
