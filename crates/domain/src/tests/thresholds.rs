// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, MAX_THRESHOLDS, ThresholdRange};

#[test]
fn test_default_range_has_twenty_five_thresholds() {
    let thresholds: Vec<u32> = ThresholdRange::default().thresholds();
    assert_eq!(thresholds.len(), 25);
    assert_eq!(thresholds.first(), Some(&0));
    assert_eq!(thresholds.last(), Some(&720));
    assert!(thresholds.windows(2).all(|w| w[1] - w[0] == 30));
}

#[test]
fn test_end_is_exclusive() {
    let range: ThresholdRange = ThresholdRange::new(0, 30, 90).unwrap();
    assert_eq!(range.thresholds(), vec![0, 30, 60]);
}

#[test]
fn test_uneven_range_includes_last_step_below_end() {
    let range: ThresholdRange = ThresholdRange::new(10, 25, 61).unwrap();
    assert_eq!(range.thresholds(), vec![10, 35, 60]);
}

#[test]
fn test_zero_step_rejected() {
    let result: Result<ThresholdRange, DomainError> = ThresholdRange::new(0, 0, 100);
    assert_eq!(result, Err(DomainError::InvalidThresholdStep { step: 0 }));
}

#[test]
fn test_empty_range_rejected() {
    let result: Result<ThresholdRange, DomainError> = ThresholdRange::new(30, 30, 30);
    assert_eq!(
        result,
        Err(DomainError::EmptyThresholdRange { start: 30, end: 30 })
    );
}

#[test]
fn test_too_many_thresholds_rejected() {
    let result: Result<ThresholdRange, DomainError> = ThresholdRange::new(0, 1, 5000);
    assert!(matches!(
        result,
        Err(DomainError::TooManyThresholds { count: 5000, max }) if max == MAX_THRESHOLDS
    ));
}
