// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aggregation of sweep outcomes into per-checkin-type impact curves.
//!
//! Affected revenue is approximated by the share of affected rentals: every
//! rental is assumed to bring the same revenue.

use crate::sweep::{SweepTable, ThresholdOutcome};
use rental_insights_domain::CheckinType;
use serde::{Deserialize, Serialize};

/// Family of threshold indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImpactKind {
    /// Rentals whose scheduled gap is below the threshold.
    #[serde(rename = "threshold")]
    InScope,
    /// Canceled late checkins the threshold would have avoided.
    #[serde(rename = "checkin_solved")]
    CheckinSolved,
    /// Late checkins the threshold would have absorbed.
    #[serde(rename = "late_solved")]
    LateSolved,
}

impl ImpactKind {
    /// All impact kinds, in reporting order.
    pub const ALL: [Self; 3] = [Self::InScope, Self::CheckinSolved, Self::LateSolved];

    /// Converts this impact kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InScope => "threshold",
            Self::CheckinSolved => "checkin_solved",
            Self::LateSolved => "late_solved",
        }
    }

    const fn indicator(self, outcome: &ThresholdOutcome) -> bool {
        match self {
            Self::InScope => outcome.in_scope,
            Self::CheckinSolved => outcome.checkin_solved,
            Self::LateSolved => outcome.late_solved,
        }
    }
}

/// Checkin type partition of the aggregated counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckinPartition {
    /// Connect checkins only.
    #[serde(rename = "connect")]
    Connect,
    /// Mobile checkins only.
    #[serde(rename = "mobile")]
    Mobile,
    /// Both checkin types.
    #[serde(rename = "connect + mobile")]
    Combined,
}

impl CheckinPartition {
    /// All partitions, in reporting order.
    pub const ALL: [Self; 3] = [Self::Connect, Self::Mobile, Self::Combined];

    /// Converts this partition to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Mobile => "mobile",
            Self::Combined => "connect + mobile",
        }
    }
}

impl From<CheckinType> for CheckinPartition {
    fn from(checkin_type: CheckinType) -> Self {
        match checkin_type {
            CheckinType::Connect => Self::Connect,
            CheckinType::Mobile => Self::Mobile,
        }
    }
}

/// One row of the long-form impact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactRow {
    /// The checkin type partition.
    pub checkin_type: CheckinPartition,
    /// The indicator family.
    pub impact_kind: ImpactKind,
    /// The threshold, in minutes.
    pub threshold_value: u32,
    /// Number of linked rentals with the indicator set.
    pub count_affected: u64,
}

/// Revenue share affected by a threshold, for one partition.
///
/// Percentages are `None` when their denominator is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueImpactRow {
    /// The checkin type partition.
    pub checkin_type: CheckinPartition,
    /// The threshold, in minutes.
    pub threshold_value: u32,
    /// Number of linked rentals whose gap is below the threshold.
    pub count_affected: u64,
    /// Share of all rentals, in percent.
    pub affected_revenue_in_percent_total_rentals: Option<f64>,
    /// Share of rentals that follow another rental, in percent.
    pub affected_revenue_in_percent_successive_rentals: Option<f64>,
}

/// Aggregated threshold impacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    /// The thresholds, in sweep order.
    pub thresholds: Vec<u32>,
    /// Size of the full rental table.
    pub total_rental_count: usize,
    /// Number of linked rentals.
    pub linked_rental_count: usize,
    /// Long-form counts, grouped by impact kind, then threshold, then partition.
    pub impacts: Vec<ImpactRow>,
    /// Revenue shares of the in-scope counts, grouped by threshold, then partition.
    pub revenue: Vec<RevenueImpactRow>,
}

impl ImpactReport {
    /// Returns the count for one partition, impact kind and threshold.
    #[must_use]
    pub fn count(
        &self,
        checkin_type: CheckinPartition,
        impact_kind: ImpactKind,
        threshold_value: u32,
    ) -> Option<u64> {
        self.impacts
            .iter()
            .find(|row| {
                row.checkin_type == checkin_type
                    && row.impact_kind == impact_kind
                    && row.threshold_value == threshold_value
            })
            .map(|row| row.count_affected)
    }
}

/// Returns `count / denominator * 100`, or `None` when the denominator is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percent_of(count: u64, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        return None;
    }
    Some(count as f64 * 100.0 / denominator as f64)
}

/// Per-threshold sums for one checkin type, indexed by `ImpactKind::ALL` order.
type KindCounts = [u64; 3];

/// Collapses the sweep into long-form counts and revenue shares.
///
/// Both checkin types are always reported, with zero counts when no linked
/// rental has that type. The combined partition is the sum of the two.
///
/// # Arguments
///
/// * `sweep` - The sweep table
/// * `total_rental_count` - Size of the full rental table
#[must_use]
pub fn aggregate_impacts(sweep: &SweepTable, total_rental_count: usize) -> ImpactReport {
    let threshold_count: usize = sweep.thresholds.len();
    let mut connect: Vec<KindCounts> = vec![[0; 3]; threshold_count];
    let mut mobile: Vec<KindCounts> = vec![[0; 3]; threshold_count];

    for row in &sweep.rows {
        let sums: &mut Vec<KindCounts> = match row.checkin_type {
            CheckinType::Connect => &mut connect,
            CheckinType::Mobile => &mut mobile,
        };
        for (sum, outcome) in sums.iter_mut().zip(&row.outcomes) {
            for (slot, kind) in sum.iter_mut().zip(ImpactKind::ALL) {
                *slot += u64::from(kind.indicator(outcome));
            }
        }
    }

    let count_for = |partition: CheckinPartition, position: usize, kind_slot: usize| -> u64 {
        match partition {
            CheckinPartition::Connect => connect[position][kind_slot],
            CheckinPartition::Mobile => mobile[position][kind_slot],
            CheckinPartition::Combined => {
                connect[position][kind_slot] + mobile[position][kind_slot]
            }
        }
    };

    let mut impacts: Vec<ImpactRow> = Vec::with_capacity(threshold_count * 9);
    for (kind_slot, impact_kind) in ImpactKind::ALL.into_iter().enumerate() {
        for (position, &threshold_value) in sweep.thresholds.iter().enumerate() {
            for checkin_type in CheckinPartition::ALL {
                impacts.push(ImpactRow {
                    checkin_type,
                    impact_kind,
                    threshold_value,
                    count_affected: count_for(checkin_type, position, kind_slot),
                });
            }
        }
    }

    let linked_rental_count: usize = sweep.rows.len();
    let mut revenue: Vec<RevenueImpactRow> = Vec::with_capacity(threshold_count * 3);
    for (position, &threshold_value) in sweep.thresholds.iter().enumerate() {
        for checkin_type in CheckinPartition::ALL {
            let count_affected: u64 = count_for(checkin_type, position, 0);
            revenue.push(RevenueImpactRow {
                checkin_type,
                threshold_value,
                count_affected,
                affected_revenue_in_percent_total_rentals: percent_of(
                    count_affected,
                    total_rental_count,
                ),
                affected_revenue_in_percent_successive_rentals: percent_of(
                    count_affected,
                    linked_rental_count,
                ),
            });
        }
    }

    ImpactReport {
        thresholds: sweep.thresholds.clone(),
        total_rental_count,
        linked_rental_count,
        impacts,
        revenue,
    }
}
