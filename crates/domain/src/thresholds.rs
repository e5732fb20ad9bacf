// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Default first threshold, in minutes.
pub const DEFAULT_THRESHOLD_START: u32 = 0;
/// Default spacing between thresholds, in minutes.
pub const DEFAULT_THRESHOLD_STEP: u32 = 30;
/// Default exclusive upper bound, in minutes.
pub const DEFAULT_THRESHOLD_END: u32 = 750;
/// Upper bound on the number of thresholds in one sweep.
pub const MAX_THRESHOLDS: usize = 1000;

/// An evenly spaced range of minimum-gap thresholds, in minutes.
///
/// The range is half-open: `start` is included, `end` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdRange {
    start: u32,
    step: u32,
    end: u32,
}

impl Default for ThresholdRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_THRESHOLD_START,
            step: DEFAULT_THRESHOLD_STEP,
            end: DEFAULT_THRESHOLD_END,
        }
    }
}

impl ThresholdRange {
    /// Creates a validated threshold range.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `step` is zero
    /// - `start` is not below `end`
    /// - the range would produce more than `MAX_THRESHOLDS` values
    pub fn new(start: u32, step: u32, end: u32) -> Result<Self, DomainError> {
        if step == 0 {
            return Err(DomainError::InvalidThresholdStep { step });
        }
        if start >= end {
            return Err(DomainError::EmptyThresholdRange { start, end });
        }
        let count: usize = ((end - start).div_ceil(step)) as usize;
        if count > MAX_THRESHOLDS {
            return Err(DomainError::TooManyThresholds {
                count,
                max: MAX_THRESHOLDS,
            });
        }
        Ok(Self { start, step, end })
    }

    /// Returns the inclusive start.
    #[must_use]
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Returns the spacing between thresholds.
    #[must_use]
    pub const fn step(&self) -> u32 {
        self.step
    }

    /// Returns the exclusive end.
    #[must_use]
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Returns the thresholds in ascending order.
    #[must_use]
    pub fn thresholds(&self) -> Vec<u32> {
        (self.start..self.end).step_by(self.step as usize).collect()
    }
}
