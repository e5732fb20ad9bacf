// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV import of rental history.
//!
//! Headers are matched case-insensitively, in any order, and extra columns
//! are ignored. Empty cells mean the value is absent. Every row is
//! validated before anything is returned, so a file either loads completely
//! or fails with the full list of bad rows.
//!
//! Workbook import reuses the header and row rules defined here.

use csv::StringRecord;
use rental_insights_domain::{CheckinType, Rental, RentalId, RentalState};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

use crate::error::{ApiError, CsvRowError};
use crate::xlsx_import::load_rentals_xlsx;

/// Required CSV column headers (case-insensitive, normalized).
const REQUIRED_HEADERS: &[&str] = &[
    "rental_id",
    "checkin_type",
    "state",
    "delay_at_checkout_in_minutes",
    "previous_ended_rental_id",
    "time_delta_with_previous_rental_in_minutes",
];

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Validates that all required headers are present.
///
/// Returns the header positions.
///
/// # Errors
///
/// Returns the list of missing headers as a message.
pub fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, String> {
    let mut header_map: HashMap<String, usize> = HashMap::new();

    for (idx, header) in headers.iter().enumerate() {
        let normalized: String = normalize_header(header);
        header_map.insert(normalized, idx);
    }

    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|required| !header_map.contains_key(*required))
        .collect();

    if !missing.is_empty() {
        return Err(format!("Missing required headers: {}", missing.join(", ")));
    }

    Ok(header_map)
}

/// Parses an integer cell.
///
/// Spreadsheet exports write integer columns that contain blanks as
/// floats, so `45.0` is accepted. Fractional values are not.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn parse_integer(value: &str) -> Option<i64> {
    if let Ok(number) = value.parse::<i64>() {
        return Some(number);
    }
    let float: f64 = value.parse::<f64>().ok()?;
    // Beyond 2^53 floats no longer represent every integer
    if float.is_finite() && float.fract() == 0.0 && float.abs() < 9_007_199_254_740_992.0 {
        Some(float as i64)
    } else {
        None
    }
}

fn parse_identifier(value: &str) -> Option<u64> {
    parse_integer(value).and_then(|number| u64::try_from(number).ok())
}

/// Parses a CSV row into a `Rental`.
///
/// Returns `Err(Vec<String>)` with every problem found in the row.
fn parse_csv_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
) -> Result<Rental, Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    let get_field = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let optional_integer = |name: &str, errors: &mut Vec<String>| -> Option<i64> {
        let value: String = get_field(name)?;
        let parsed: Option<i64> = parse_integer(&value);
        if parsed.is_none() {
            errors.push(format!("{name}: invalid integer '{value}'"));
        }
        parsed
    };

    let delay_at_checkout: Option<i64> =
        optional_integer("delay_at_checkout_in_minutes", &mut errors);
    let time_delta: Option<i64> =
        optional_integer("time_delta_with_previous_rental_in_minutes", &mut errors);

    let identifier = |name: &str, errors: &mut Vec<String>| -> Option<u64> {
        let value: String = get_field(name)?;
        let parsed: Option<u64> = parse_identifier(&value);
        if parsed.is_none() {
            errors.push(format!("{name}: invalid identifier '{value}'"));
        }
        parsed
    };

    let rental_id: Option<u64> = identifier("rental_id", &mut errors);
    if rental_id.is_none() && get_field("rental_id").is_none() {
        errors.push(String::from("rental_id: required field is missing or empty"));
    }
    let previous_rental_id: Option<u64> = identifier("previous_ended_rental_id", &mut errors);
    let car_id: Option<u64> = identifier("car_id", &mut errors);

    let checkin_type: Option<CheckinType> = match get_field("checkin_type") {
        Some(value) => match CheckinType::from_str(&value) {
            Ok(checkin_type) => Some(checkin_type),
            Err(e) => {
                errors.push(format!("checkin_type: {e}"));
                None
            }
        },
        None => {
            errors.push(String::from(
                "checkin_type: required field is missing or empty",
            ));
            None
        }
    };

    let state: Option<RentalState> =
        get_field("state").map(|value| RentalState::from_value(&value));
    if state.is_none() {
        errors.push(String::from("state: required field is missing or empty"));
    }

    let has_previous: bool = get_field("previous_ended_rental_id").is_some();
    let has_time_delta: bool = get_field("time_delta_with_previous_rental_in_minutes").is_some();
    if has_previous && !has_time_delta {
        errors.push(String::from(
            "time_delta_with_previous_rental_in_minutes: required when previous_ended_rental_id is set",
        ));
    }
    if has_time_delta && !has_previous {
        errors.push(String::from(
            "time_delta_with_previous_rental_in_minutes: set without previous_ended_rental_id",
        ));
    }

    match (rental_id, state, checkin_type) {
        (Some(rental_id), Some(state), Some(checkin_type)) if errors.is_empty() => {
            let mut rental: Rental = Rental::new(
                RentalId::new(rental_id),
                state,
                checkin_type,
                delay_at_checkout,
            );
            if let Some(previous_rental_id) = previous_rental_id {
                rental =
                    rental.with_previous_rental(RentalId::new(previous_rental_id), time_delta);
            }
            if let Some(car_id) = car_id {
                rental = rental.with_car_id(car_id);
            }
            Ok(rental)
        }
        _ => Err(errors),
    }
}

/// Imports a rental table from CSV content.
///
/// # Arguments
///
/// * `csv_content` - The raw CSV content as a string
///
/// # Errors
///
/// Returns an error if:
/// - the headers cannot be read or a required header is missing
/// - any row is malformed, has an invalid value, or repeats a rental id
pub fn import_rentals_csv(csv_content: &str) -> Result<Vec<Rental>, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(csv_content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();

    let header_map: HashMap<String, usize> =
        validate_headers(&headers).map_err(|reason| ApiError::InvalidCsvFormat { reason })?;

    collect_rentals(
        &header_map,
        reader
            .records()
            .map(|result| result.map_err(|e| format!("CSV parse error: {e}"))),
    )
}

/// Parses data records into rentals, collecting every row error.
///
/// Row numbers count data rows from 1. A record that could not be read
/// carries its error message instead.
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvRows` if any row is unreadable, invalid, or
/// repeats a rental id.
pub fn collect_rentals<I>(
    header_map: &HashMap<String, usize>,
    records: I,
) -> Result<Vec<Rental>, ApiError>
where
    I: Iterator<Item = Result<StringRecord, String>>,
{
    let mut rentals: Vec<Rental> = Vec::new();
    let mut row_errors: Vec<CsvRowError> = Vec::new();
    let mut seen_ids: HashSet<RentalId> = HashSet::new();

    for (idx, result) in records.enumerate() {
        let row_number: usize = idx + 1;

        let record: StringRecord = match result {
            Ok(rec) => rec,
            Err(message) => {
                row_errors.push(CsvRowError {
                    row_number,
                    errors: vec![message],
                });
                continue;
            }
        };

        match parse_csv_row(&record, header_map) {
            Ok(rental) => {
                if seen_ids.insert(rental.rental_id) {
                    rentals.push(rental);
                } else {
                    row_errors.push(CsvRowError {
                        row_number,
                        errors: vec![format!(
                            "rental_id: duplicate within file - '{}' appears multiple times",
                            rental.rental_id
                        )],
                    });
                }
            }
            Err(errors) => row_errors.push(CsvRowError { row_number, errors }),
        }
    }

    if !row_errors.is_empty() {
        debug!(invalid_rows = row_errors.len(), "Rejecting rental table");
        return Err(ApiError::InvalidCsvRows { rows: row_errors });
    }

    Ok(rentals)
}

/// Reads and imports a rental table from a CSV file.
///
/// # Arguments
///
/// * `path` - Path to the CSV file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is invalid.
/// See [`import_rentals_csv`].
pub fn load_rentals_csv(path: &Path) -> Result<Vec<Rental>, ApiError> {
    let csv_content: String =
        std::fs::read_to_string(path).map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read '{}': {e}", path.display()),
        })?;
    let rentals: Vec<Rental> = import_rentals_csv(&csv_content)?;
    info!(
        path = %path.display(),
        rentals = rentals.len(),
        "Loaded rental history"
    );
    Ok(rentals)
}

/// Reads a rental table, choosing the reader by file extension.
///
/// `.xlsx` and `.xlsm` files are read as workbooks; anything else as CSV.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is invalid.
pub fn load_rentals(path: &Path) -> Result<Vec<Rental>, ApiError> {
    let is_workbook: bool = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            extension.eq_ignore_ascii_case("xlsx") || extension.eq_ignore_ascii_case("xlsm")
        });
    if is_workbook {
        load_rentals_xlsx(path)
    } else {
        load_rentals_csv(path)
    }
}
