// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rental_insights_domain::{DomainError, RentalId};

/// Errors that can occur while analyzing a rental table.
///
/// Every variant except `DomainViolation` indicates corrupt input data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// Two rentals share the same identifier.
    DuplicateRentalId(RentalId),
    /// A rental references a previous rental that is not in the table.
    UnresolvedPreviousRental {
        /// The rental holding the reference.
        rental_id: RentalId,
        /// The referenced rental that could not be found.
        previous_rental_id: RentalId,
    },
    /// A rental references a previous rental but has no scheduled gap.
    MissingTimeDelta {
        /// The rental missing the time delta.
        rental_id: RentalId,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::DuplicateRentalId(rental_id) => {
                write!(f, "Rental id {rental_id} appears more than once")
            }
            Self::UnresolvedPreviousRental {
                rental_id,
                previous_rental_id,
            } => {
                write!(
                    f,
                    "Rental {rental_id} references previous rental {previous_rental_id}, which does not exist"
                )
            }
            Self::MissingTimeDelta { rental_id } => {
                write!(
                    f,
                    "Rental {rental_id} has a previous rental but no time delta"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
