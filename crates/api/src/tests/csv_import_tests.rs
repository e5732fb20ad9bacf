// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rental_insights_domain::{CheckinType, Rental, RentalId, RentalState};

use super::helpers::{TEST_RENTALS_CSV, create_test_rentals};
use crate::{ApiError, CsvRowError, import_rentals_csv, load_rentals, load_rentals_csv};

const HEADER: &str = "rental_id,checkin_type,state,delay_at_checkout_in_minutes,previous_ended_rental_id,time_delta_with_previous_rental_in_minutes";

fn invalid_rows(csv_content: &str) -> Vec<CsvRowError> {
    match import_rentals_csv(csv_content) {
        Err(ApiError::InvalidCsvRows { rows }) => rows,
        other => panic!("Expected InvalidCsvRows, got {other:?}"),
    }
}

#[test]
fn test_import_valid_csv() {
    let rentals: Vec<Rental> = create_test_rentals();

    assert_eq!(rentals.len(), 4);

    let first: &Rental = &rentals[0];
    assert_eq!(first.rental_id, RentalId::new(1));
    assert_eq!(first.car_id, Some(10));
    assert_eq!(first.checkin_type, CheckinType::Mobile);
    assert_eq!(first.state, RentalState::Ended);
    assert_eq!(first.delay_at_checkout_in_minutes, Some(45));
    assert!(!first.has_previous_rental());

    let second: &Rental = &rentals[1];
    assert_eq!(second.state, RentalState::Canceled);
    assert_eq!(second.delay_at_checkout_in_minutes, None);
    assert_eq!(second.previous_ended_rental_id, Some(RentalId::new(1)));
    assert_eq!(second.time_delta_with_previous_rental_in_minutes, Some(30));

    assert_eq!(rentals[3].delay_at_checkout_in_minutes, Some(-5));
}

#[test]
fn test_headers_are_case_insensitive_and_order_independent() {
    let csv_content: &str = "\
 State ,Time Delta With Previous Rental In Minutes,Checkin_Type,RENTAL_ID,Previous Ended Rental Id,Delay At Checkout In Minutes,notes
ended,,Connect,7,,12,first rental
";
    let rentals: Vec<Rental> = import_rentals_csv(csv_content).unwrap();

    assert_eq!(rentals.len(), 1);
    assert_eq!(rentals[0].rental_id, RentalId::new(7));
    assert_eq!(rentals[0].checkin_type, CheckinType::Connect);
    assert_eq!(rentals[0].delay_at_checkout_in_minutes, Some(12));
    assert_eq!(rentals[0].car_id, None);
}

#[test]
fn test_missing_header_is_rejected() {
    let csv_content: &str = "rental_id,checkin_type,delay_at_checkout_in_minutes\n1,mobile,5\n";

    let result: Result<Vec<Rental>, ApiError> = import_rentals_csv(csv_content);
    assert_eq!(
        result,
        Err(ApiError::InvalidCsvFormat {
            reason: String::from(
                "Missing required headers: state, previous_ended_rental_id, time_delta_with_previous_rental_in_minutes"
            ),
        })
    );
}

#[test]
fn test_headers_only_yields_empty_table() {
    let rentals: Vec<Rental> = import_rentals_csv(&format!("{HEADER}\n")).unwrap();
    assert!(rentals.is_empty());
}

#[test]
fn test_invalid_checkin_type_is_reported_with_row_number() {
    let csv_content: String = format!("{HEADER}\n1,mobile,ended,,,\n2,scooter,ended,,,\n");

    let rows: Vec<CsvRowError> = invalid_rows(&csv_content);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].row_number, 2);
    assert_eq!(
        rows[0].errors,
        vec![String::from(
            "checkin_type: Invalid checkin type: 'scooter' (must be mobile or connect)"
        )]
    );
}

#[test]
fn test_every_problem_in_a_row_is_reported() {
    let csv_content: String = format!("{HEADER}\n,,,12.5,abc,\n");

    let rows: Vec<CsvRowError> = invalid_rows(&csv_content);

    assert_eq!(rows.len(), 1);
    let errors: &[String] = &rows[0].errors;
    assert!(errors.iter().any(|e| e.starts_with("delay_at_checkout_in_minutes")));
    assert!(errors.iter().any(|e| e.starts_with("rental_id")));
    assert!(errors.iter().any(|e| e.starts_with("previous_ended_rental_id")));
    assert!(errors.iter().any(|e| e.starts_with("checkin_type")));
    assert!(errors.iter().any(|e| e.starts_with("state")));
}

#[test]
fn test_fractional_minutes_are_rejected() {
    let csv_content: String = format!("{HEADER}\n1,mobile,ended,45.5,,\n");

    let rows: Vec<CsvRowError> = invalid_rows(&csv_content);
    assert_eq!(
        rows[0].errors,
        vec![String::from(
            "delay_at_checkout_in_minutes: invalid integer '45.5'"
        )]
    );
}

#[test]
fn test_negative_identifier_is_rejected() {
    let csv_content: String = format!("{HEADER}\n-1,mobile,ended,,,\n");

    let rows: Vec<CsvRowError> = invalid_rows(&csv_content);
    assert_eq!(
        rows[0].errors,
        vec![String::from("rental_id: invalid identifier '-1'")]
    );
}

#[test]
fn test_previous_rental_requires_time_delta() {
    let csv_content: String = format!("{HEADER}\n1,mobile,ended,,,\n2,mobile,ended,,1,\n");

    let rows: Vec<CsvRowError> = invalid_rows(&csv_content);
    assert_eq!(rows[0].row_number, 2);
    assert!(rows[0].errors[0].starts_with("time_delta_with_previous_rental_in_minutes"));
}

#[test]
fn test_time_delta_requires_previous_rental() {
    let csv_content: String = format!("{HEADER}\n1,mobile,ended,,,\n2,mobile,ended,,,45\n");

    let rows: Vec<CsvRowError> = invalid_rows(&csv_content);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].row_number, 2);
    assert_eq!(
        rows[0].errors,
        vec![String::from(
            "time_delta_with_previous_rental_in_minutes: set without previous_ended_rental_id"
        )]
    );
}

#[test]
fn test_duplicate_rental_id_is_rejected() {
    let csv_content: String = format!("{HEADER}\n1,mobile,ended,,,\n1,connect,ended,,,\n");

    let rows: Vec<CsvRowError> = invalid_rows(&csv_content);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].row_number, 2);
    assert!(rows[0].errors[0].contains("duplicate"));
}

#[test]
fn test_wrong_field_count_is_a_row_error() {
    let csv_content: String = format!("{HEADER}\n1,mobile,ended\n");

    let rows: Vec<CsvRowError> = invalid_rows(&csv_content);
    assert_eq!(rows[0].row_number, 1);
    assert!(rows[0].errors[0].starts_with("CSV parse error"));
}

#[test]
fn test_unknown_states_are_kept() {
    let csv_content: String = format!("{HEADER}\n1,mobile,Pending,,,\n");

    let rentals: Vec<Rental> = import_rentals_csv(&csv_content).unwrap();
    assert_eq!(rentals[0].state, RentalState::Other(String::from("pending")));
}

#[test]
fn test_load_from_file() {
    let path: std::path::PathBuf =
        std::env::temp_dir().join(format!("rental-insights-{}.csv", std::process::id()));
    std::fs::write(&path, TEST_RENTALS_CSV).unwrap();

    let rentals: Vec<Rental> = load_rentals_csv(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(rentals.len(), 4);
}

#[test]
fn test_load_reads_other_extensions_as_csv() {
    let path: std::path::PathBuf =
        std::env::temp_dir().join(format!("rental-insights-{}.txt", std::process::id()));
    std::fs::write(&path, TEST_RENTALS_CSV).unwrap();

    let rentals: Vec<Rental> = load_rentals(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(rentals.len(), 4);
}

#[test]
fn test_load_missing_file_fails() {
    let result: Result<Vec<Rental>, ApiError> =
        load_rentals_csv(std::path::Path::new("/nonexistent/rentals.csv"));
    assert!(matches!(result, Err(ApiError::InvalidCsvFormat { .. })));
}
