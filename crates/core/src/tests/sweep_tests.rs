// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    LinkedRental, SweepTable, ThresholdOutcome, checkin_solved, in_scope, late_solved,
    sweep_thresholds,
};
use rental_insights_domain::{CheckinType, RentalState, ThresholdRange};

use super::helpers::create_linked_rental;

#[test]
fn test_canceled_late_rental_solved_only_above_previous_delay() {
    let canceled: RentalState = RentalState::Canceled;

    assert!(!checkin_solved(Some(45), 30, &canceled, true));
    assert!(checkin_solved(Some(45), 60, &canceled, true));
}

#[test]
fn test_delay_equal_to_threshold_is_not_solved() {
    assert!(!late_solved(Some(60), 60, true));
    assert!(!checkin_solved(Some(60), 60, &RentalState::Canceled, true));
    assert!(late_solved(Some(60), 61, true));
}

#[test]
fn test_zero_threshold_solves_nothing() {
    for delay in [0, 1, 45, 720] {
        assert!(!late_solved(Some(delay), 0, true));
        assert!(!checkin_solved(Some(delay), 0, &RentalState::Canceled, true));
    }
}

#[test]
fn test_zero_previous_delay_solved_by_any_positive_threshold() {
    for threshold in [1, 30, 720] {
        assert!(late_solved(Some(0), threshold, true));
        assert!(!late_solved(Some(0), threshold, false));
    }
}

#[test]
fn test_rentals_that_were_not_late_are_never_solved() {
    assert!(!late_solved(Some(10), 720, false));
    assert!(!checkin_solved(Some(10), 720, &RentalState::Canceled, false));
}

#[test]
fn test_ended_rentals_are_never_checkin_solved() {
    assert!(late_solved(Some(10), 30, true));
    assert!(!checkin_solved(Some(10), 30, &RentalState::Ended, true));
    assert!(!checkin_solved(
        Some(10),
        30,
        &RentalState::Other(String::from("pending")),
        true
    ));
}

#[test]
fn test_unknown_previous_delay_is_never_solved() {
    assert!(!late_solved(None, 720, true));
    assert!(!checkin_solved(None, 720, &RentalState::Canceled, true));
}

#[test]
fn test_in_scope_is_strict() {
    assert!(in_scope(29, 30));
    assert!(!in_scope(30, 30));
    assert!(!in_scope(0, 0));
}

#[test]
fn test_late_solved_is_monotonic_in_threshold() {
    let thresholds: Vec<u32> = ThresholdRange::default().thresholds();
    for delay in [-30, 0, 15, 29, 30, 31, 359, 719, 720, 5000] {
        for late in [true, false] {
            for pair in thresholds.windows(2) {
                if late_solved(Some(delay), pair[0], late) {
                    assert!(late_solved(Some(delay), pair[1], late));
                }
            }
        }
    }
}

#[test]
fn test_checkin_solved_implies_late_solved() {
    let thresholds: Vec<u32> = ThresholdRange::default().thresholds();
    let states: [RentalState; 3] = [
        RentalState::Ended,
        RentalState::Canceled,
        RentalState::Other(String::from("unknown")),
    ];
    for state in &states {
        for delay in [None, Some(0), Some(45), Some(200)] {
            for late in [true, false] {
                for &threshold in &thresholds {
                    if checkin_solved(delay, threshold, state, late) {
                        assert!(late_solved(delay, threshold, late));
                    }
                }
            }
        }
    }
}

#[test]
fn test_outcome_evaluation() {
    // Previous delay 45, gap 30: late by 15
    let rental: LinkedRental = create_linked_rental(
        1,
        RentalState::Canceled,
        CheckinType::Mobile,
        Some(45),
        30,
    );

    let at_30: ThresholdOutcome = ThresholdOutcome::evaluate(&rental, 30);
    assert_eq!(
        at_30,
        ThresholdOutcome {
            threshold: 30,
            in_scope: false,
            checkin_solved: false,
            late_solved: false,
        }
    );

    let at_60: ThresholdOutcome = ThresholdOutcome::evaluate(&rental, 60);
    assert_eq!(
        at_60,
        ThresholdOutcome {
            threshold: 60,
            in_scope: true,
            checkin_solved: true,
            late_solved: true,
        }
    );
}

#[test]
fn test_sweep_produces_one_outcome_per_threshold_per_rental() {
    let linked: Vec<LinkedRental> = vec![
        create_linked_rental(1, RentalState::Canceled, CheckinType::Mobile, Some(45), 30),
        create_linked_rental(2, RentalState::Ended, CheckinType::Connect, Some(10), 0),
    ];
    let thresholds: Vec<u32> = vec![0, 30, 60];

    let sweep: SweepTable = sweep_thresholds(&linked, &thresholds);

    assert_eq!(sweep.thresholds, thresholds);
    assert_eq!(sweep.rows.len(), 2);
    for row in &sweep.rows {
        let seen: Vec<u32> = row.outcomes.iter().map(|o| o.threshold).collect();
        assert_eq!(seen, thresholds);
    }
    assert_eq!(sweep.rows[1].checkin_type, CheckinType::Connect);
    assert!(sweep.rows[1].outcomes[1].late_solved);
    assert!(!sweep.rows[1].outcomes[1].checkin_solved);
}

#[test]
fn test_sweep_is_deterministic() {
    let linked: Vec<LinkedRental> = vec![
        create_linked_rental(1, RentalState::Canceled, CheckinType::Mobile, Some(45), 30),
        create_linked_rental(2, RentalState::Ended, CheckinType::Connect, None, 90),
    ];
    let thresholds: Vec<u32> = ThresholdRange::default().thresholds();

    assert_eq!(
        sweep_thresholds(&linked, &thresholds),
        sweep_thresholds(&linked, &thresholds)
    );
}
