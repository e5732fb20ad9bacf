// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique identifier of a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RentalId(u64);

impl RentalId {
    /// Creates a new rental identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RentalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the driver checked in to the car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckinType {
    /// Checkin through the mobile app, with the owner present.
    Mobile,
    /// Keyless checkin through the connected-car box.
    Connect,
}

impl CheckinType {
    /// Converts this checkin type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Connect => "connect",
        }
    }
}

impl FromStr for CheckinType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mobile" => Ok(Self::Mobile),
            "connect" => Ok(Self::Connect),
            _ => Err(DomainError::InvalidCheckinType(s.to_string())),
        }
    }
}

impl std::fmt::Display for CheckinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Final state of a rental.
///
/// States other than `ended` and `canceled` are kept verbatim so that
/// breakdowns reflect the source data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RentalState {
    /// The rental took place.
    Ended,
    /// The rental was canceled.
    Canceled,
    /// Any other state found in the data.
    Other(String),
}

impl RentalState {
    /// Parses a state value. Matching is case-insensitive.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        let normalized: String = value.trim().to_lowercase();
        match normalized.as_str() {
            "ended" => Self::Ended,
            "canceled" => Self::Canceled,
            _ => Self::Other(normalized),
        }
    }

    /// Returns the string representation of this state.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ended => "ended",
            Self::Canceled => "canceled",
            Self::Other(value) => value,
        }
    }

    /// Returns whether this rental was canceled.
    #[must_use]
    pub const fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }
}

impl From<String> for RentalState {
    fn from(value: String) -> Self {
        Self::from_value(&value)
    }
}

impl From<RentalState> for String {
    fn from(state: RentalState) -> Self {
        state.as_str().to_string()
    }
}

impl std::fmt::Display for RentalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One rental transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    /// The rental identifier.
    pub rental_id: RentalId,
    /// The rented car, when known.
    pub car_id: Option<u64>,
    /// The final state of the rental.
    pub state: RentalState,
    /// How the driver checked in.
    pub checkin_type: CheckinType,
    /// Minutes between the scheduled and the actual checkout.
    ///
    /// Positive means the car was returned late. `None` when not recorded.
    pub delay_at_checkout_in_minutes: Option<i64>,
    /// The rental of the same car that ended immediately before this one.
    pub previous_ended_rental_id: Option<RentalId>,
    /// Scheduled minutes between the previous checkout and this checkin.
    pub time_delta_with_previous_rental_in_minutes: Option<i64>,
}

impl Rental {
    /// Creates a rental without a previous rental.
    ///
    /// # Arguments
    ///
    /// * `rental_id` - The rental identifier
    /// * `state` - The final state of the rental
    /// * `checkin_type` - How the driver checked in
    /// * `delay_at_checkout_in_minutes` - The recorded checkout delay, if any
    #[must_use]
    pub const fn new(
        rental_id: RentalId,
        state: RentalState,
        checkin_type: CheckinType,
        delay_at_checkout_in_minutes: Option<i64>,
    ) -> Self {
        Self {
            rental_id,
            car_id: None,
            state,
            checkin_type,
            delay_at_checkout_in_minutes,
            previous_ended_rental_id: None,
            time_delta_with_previous_rental_in_minutes: None,
        }
    }

    /// Links this rental to the previous rental of the same car.
    #[must_use]
    pub const fn with_previous_rental(
        mut self,
        previous_ended_rental_id: RentalId,
        time_delta_in_minutes: Option<i64>,
    ) -> Self {
        self.previous_ended_rental_id = Some(previous_ended_rental_id);
        self.time_delta_with_previous_rental_in_minutes = time_delta_in_minutes;
        self
    }

    /// Sets the car identifier.
    #[must_use]
    pub const fn with_car_id(mut self, car_id: u64) -> Self {
        self.car_id = Some(car_id);
        self
    }

    /// Returns whether this rental references a previous rental.
    #[must_use]
    pub const fn has_previous_rental(&self) -> bool {
        self.previous_ended_rental_id.is_some()
    }
}
