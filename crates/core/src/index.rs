// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use rental_insights_domain::{Rental, RentalId};
use std::collections::HashMap;

/// Lookup of rentals by identifier over a borrowed rental table.
#[derive(Debug)]
pub struct RentalIndex<'a> {
    rentals: &'a [Rental],
    positions: HashMap<RentalId, usize>,
}

impl<'a> RentalIndex<'a> {
    /// Builds the index in one pass over the table.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateRentalId` if two rentals share an identifier.
    pub fn build(rentals: &'a [Rental]) -> Result<Self, CoreError> {
        let mut positions: HashMap<RentalId, usize> = HashMap::with_capacity(rentals.len());
        for (position, rental) in rentals.iter().enumerate() {
            if positions.insert(rental.rental_id, position).is_some() {
                return Err(CoreError::DuplicateRentalId(rental.rental_id));
            }
        }
        Ok(Self { rentals, positions })
    }

    /// Returns the rental with the given identifier.
    #[must_use]
    pub fn get(&self, rental_id: RentalId) -> Option<&'a Rental> {
        self.positions
            .get(&rental_id)
            .and_then(|&position| self.rentals.get(position))
    }

    /// Returns the indexed table.
    #[must_use]
    pub const fn rentals(&self) -> &'a [Rental] {
        self.rentals
    }

    /// Returns the number of indexed rentals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
