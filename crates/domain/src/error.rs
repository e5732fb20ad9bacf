// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Checkin type is not one of the known values.
    InvalidCheckinType(String),
    /// Car model key is not one of the known brands.
    InvalidModelKey(String),
    /// Fuel is not one of the known values.
    InvalidFuel(String),
    /// Paint color is not one of the known values.
    InvalidPaintColor(String),
    /// Car type is not one of the known values.
    InvalidCarType(String),
    /// Mileage must be strictly positive.
    ///
    /// A zero mileage would make the inverse-mileage feature undefined.
    NonPositiveMileage {
        /// The rejected mileage.
        mileage: i64,
    },
    /// Threshold step must be positive.
    InvalidThresholdStep {
        /// The rejected step.
        step: u32,
    },
    /// Threshold range contains no values.
    EmptyThresholdRange {
        /// The inclusive start of the range.
        start: u32,
        /// The exclusive end of the range.
        end: u32,
    },
    /// Threshold range would produce too many values.
    TooManyThresholds {
        /// The number of thresholds the range would produce.
        count: usize,
        /// The maximum allowed.
        max: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCheckinType(value) => {
                write!(
                    f,
                    "Invalid checkin type: '{value}' (must be mobile or connect)"
                )
            }
            Self::InvalidModelKey(value) => write!(f, "Invalid model key: '{value}'"),
            Self::InvalidFuel(value) => write!(f, "Invalid fuel: '{value}'"),
            Self::InvalidPaintColor(value) => write!(f, "Invalid paint color: '{value}'"),
            Self::InvalidCarType(value) => write!(f, "Invalid car type: '{value}'"),
            Self::NonPositiveMileage { mileage } => {
                write!(f, "Invalid mileage: {mileage}. Must be greater than 0")
            }
            Self::InvalidThresholdStep { step } => {
                write!(f, "Invalid threshold step: {step}. Must be greater than 0")
            }
            Self::EmptyThresholdRange { start, end } => {
                write!(
                    f,
                    "Threshold range {start}..{end} is empty. Start must be below end"
                )
            }
            Self::TooManyThresholds { count, max } => {
                write!(
                    f,
                    "Threshold range produces {count} thresholds. At most {max} are allowed"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
