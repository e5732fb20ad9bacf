// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::pricing::ModelError;
use rental_insights::CoreError;
use rental_insights_domain::DomainError;

/// Validation errors for a single CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRowError {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// One or more validation errors.
    pub errors: Vec<String>,
}

impl std::fmt::Display for CsvRowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}: {}", self.row_number, self.errors.join("; "))
    }
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The loaded rental table is inconsistent.
    DataIntegrity {
        /// A description of the inconsistency.
        message: String,
    },
    /// The CSV could not be read as a table.
    InvalidCsvFormat {
        /// The reason the CSV is invalid.
        reason: String,
    },
    /// The workbook could not be opened or holds no usable worksheet.
    InvalidWorkbook {
        /// The reason the workbook is invalid.
        reason: String,
    },
    /// One or more CSV rows failed validation.
    InvalidCsvRows {
        /// The rejected rows, in file order.
        rows: Vec<CsvRowError>,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::DataIntegrity { message } => {
                write!(f, "Data integrity error: {message}")
            }
            Self::InvalidCsvFormat { reason } => {
                write!(f, "Invalid CSV format: {reason}")
            }
            Self::InvalidWorkbook { reason } => {
                write!(f, "Invalid workbook: {reason}")
            }
            Self::InvalidCsvRows { rows } => {
                let details: Vec<String> = rows.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "CSV contains {} invalid row(s): {}",
                    rows.len(),
                    details.join(", ")
                )
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        translate_model_error(err)
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidCheckinType(_) => ApiError::InvalidInput {
            field: String::from("checkin_type"),
            message: err.to_string(),
        },
        DomainError::InvalidModelKey(_) => ApiError::InvalidInput {
            field: String::from("model_key"),
            message: err.to_string(),
        },
        DomainError::InvalidFuel(_) => ApiError::InvalidInput {
            field: String::from("fuel"),
            message: err.to_string(),
        },
        DomainError::InvalidPaintColor(_) => ApiError::InvalidInput {
            field: String::from("paint_color"),
            message: err.to_string(),
        },
        DomainError::InvalidCarType(_) => ApiError::InvalidInput {
            field: String::from("car_type"),
            message: err.to_string(),
        },
        DomainError::NonPositiveMileage { .. } => ApiError::DomainRuleViolation {
            rule: String::from("positive_mileage"),
            message: err.to_string(),
        },
        DomainError::InvalidThresholdStep { .. } => ApiError::InvalidInput {
            field: String::from("step"),
            message: err.to_string(),
        },
        DomainError::EmptyThresholdRange { .. } | DomainError::TooManyThresholds { .. } => {
            ApiError::InvalidInput {
                field: String::from("end"),
                message: err.to_string(),
            }
        }
    }
}

/// Translates a core error into an API error.
///
/// Every core error other than a domain violation means the loaded rental
/// table is corrupt.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::DuplicateRentalId(_)
        | CoreError::UnresolvedPreviousRental { .. }
        | CoreError::MissingTimeDelta { .. } => ApiError::DataIntegrity {
            message: err.to_string(),
        },
    }
}

/// Translates a pricing model error into an API error.
#[must_use]
pub fn translate_model_error(err: ModelError) -> ApiError {
    match err {
        ModelError::InvalidFeatures(domain_err) => translate_domain_error(domain_err),
        other => ApiError::Internal {
            message: format!("Pricing model error: {other}"),
        },
    }
}
