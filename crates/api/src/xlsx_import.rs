// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Excel workbook import of rental history.
//!
//! The first worksheet holds the table, with the headers in its first row.
//! Header matching and row validation follow the CSV import. Numeric cells
//! come back as floats, so an integer column reads as `45` and a fractional
//! value such as `12.5` is rejected the same way it is in a CSV file.

use calamine::{Data, Range, Reader, Xlsx};
use csv::StringRecord;
use rental_insights_domain::Rental;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use tracing::info;

use crate::csv_import::{collect_rentals, validate_headers};
use crate::error::ApiError;

/// Renders a worksheet row as text cells. Empty cells become empty strings.
fn to_record(row: &[Data]) -> StringRecord {
    row.iter().map(ToString::to_string).collect()
}

/// Imports a rental table from the bytes of an `.xlsx` workbook.
///
/// # Arguments
///
/// * `workbook_bytes` - The raw workbook content
///
/// # Errors
///
/// Returns an error if:
/// - the workbook cannot be opened or has no worksheet
/// - a required header is missing from the first row
/// - any row is invalid or repeats a rental id
pub fn import_rentals_xlsx(workbook_bytes: &[u8]) -> Result<Vec<Rental>, ApiError> {
    let mut workbook: Xlsx<Cursor<&[u8]>> =
        Xlsx::new(Cursor::new(workbook_bytes)).map_err(|e| ApiError::InvalidWorkbook {
            reason: format!("Failed to open workbook: {e}"),
        })?;

    let sheet: Range<Data> = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ApiError::InvalidWorkbook {
            reason: String::from("Workbook has no worksheets"),
        })?
        .map_err(|e| ApiError::InvalidWorkbook {
            reason: format!("Failed to read first worksheet: {e}"),
        })?;

    let mut rows = sheet.rows();
    let headers: StringRecord = rows.next().map(to_record).unwrap_or_default();
    let header_map: HashMap<String, usize> =
        validate_headers(&headers).map_err(|reason| ApiError::InvalidWorkbook { reason })?;

    collect_rentals(&header_map, rows.map(|row| Ok(to_record(row))))
}

/// Reads and imports a rental table from an `.xlsx` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is invalid.
/// See [`import_rentals_xlsx`].
pub fn load_rentals_xlsx(path: &Path) -> Result<Vec<Rental>, ApiError> {
    let workbook_bytes: Vec<u8> =
        std::fs::read(path).map_err(|e| ApiError::InvalidWorkbook {
            reason: format!("Failed to read '{}': {e}", path.display()),
        })?;
    let rentals: Vec<Rental> = import_rentals_xlsx(&workbook_bytes)?;
    info!(
        path = %path.display(),
        rentals = rentals.len(),
        "Loaded rental history workbook"
    );
    Ok(rentals)
}
