// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::LinkedRental;
use rental_insights_domain::{CheckinType, Rental, RentalId, RentalState};

/// A rental with no previous rental.
pub fn create_first_rental(id: u64, checkin_type: CheckinType, delay: Option<i64>) -> Rental {
    Rental::new(RentalId::new(id), RentalState::Ended, checkin_type, delay)
}

/// A rental following `previous_id` after a scheduled gap of `time_delta` minutes.
pub fn create_following_rental(
    id: u64,
    state: RentalState,
    checkin_type: CheckinType,
    previous_id: u64,
    time_delta: i64,
) -> Rental {
    Rental::new(RentalId::new(id), state, checkin_type, None)
        .with_previous_rental(RentalId::new(previous_id), Some(time_delta))
}

/// A linked rental built directly, bypassing the resolver.
pub fn create_linked_rental(
    id: u64,
    state: RentalState,
    checkin_type: CheckinType,
    previous_delay: Option<i64>,
    time_delta: i64,
) -> LinkedRental {
    let delay_checkin: Option<i64> = previous_delay.map(|delay| delay - time_delta);
    LinkedRental {
        rental_id: RentalId::new(id),
        state,
        checkin_type,
        previous_ended_rental_id: RentalId::new(id + 10_000),
        time_delta_with_previous_rental_in_minutes: time_delta,
        previous_delay_at_checkout_in_minutes: previous_delay,
        previous_checkin_type: checkin_type,
        delay_checkin,
        late_checkin: delay_checkin.is_some_and(|delay| delay > 0),
    }
}

/// A small fleet history with both checkin types, a cancellation and
/// previous rentals whose checkout delay was not recorded.
///
/// | id | type    | state    | prev | gap | prev delay | late |
/// |----|---------|----------|------|-----|------------|------|
/// | 1  | mobile  | ended    |      |     |            |      |
/// | 2  | mobile  | canceled | 1    | 30  | 45         | yes  |
/// | 3  | connect | ended    |      |     |            |      |
/// | 4  | connect | ended    | 3    | 120 | 100        | no   |
/// | 5  | connect | ended    |      |     |            |      |
/// | 6  | mobile  | ended    | 5    | 60  | unknown    | no   |
/// | 7  | connect | ended    | 2    | 0   | unknown    | no   |
/// | 8  | connect | canceled |      |     |            |      |
pub fn create_fleet() -> Vec<Rental> {
    vec![
        create_first_rental(1, CheckinType::Mobile, Some(45)),
        create_following_rental(2, RentalState::Canceled, CheckinType::Mobile, 1, 30),
        create_first_rental(3, CheckinType::Connect, Some(100)),
        create_following_rental(4, RentalState::Ended, CheckinType::Connect, 3, 120),
        create_first_rental(5, CheckinType::Connect, None),
        create_following_rental(6, RentalState::Ended, CheckinType::Mobile, 5, 60),
        create_following_rental(7, RentalState::Ended, CheckinType::Connect, 2, 0),
        Rental::new(
            RentalId::new(8),
            RentalState::Canceled,
            CheckinType::Connect,
            Some(-10),
        ),
    ]
}
