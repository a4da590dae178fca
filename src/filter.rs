//! Multi-axis numeric range filtering (brushing).
//!
//! Each chart axis owns one inclusive `[min, max]` constraint on a metric;
//! the active constraints AND together to narrow the visible record set.
//! Clearing one axis resets only that axis, not the whole filter.

use crate::core::{Metric, Record};
use std::collections::HashMap;

/// A set of simultaneous inclusive range constraints, one per metric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeFilter {
    ranges: HashMap<Metric, (f64, f64)>,
}

impl RangeFilter {
    /// A filter with no constraints; passes every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the constraint for one metric. Bounds are inclusive;
    /// `(-INFINITY, INFINITY)` is equivalent to no constraint and is not
    /// stored.
    pub fn set(&mut self, metric: Metric, min: f64, max: f64) {
        if min == f64::NEG_INFINITY && max == f64::INFINITY {
            self.ranges.remove(&metric);
        } else {
            self.ranges.insert(metric, (min, max));
        }
    }

    /// Remove the constraint for one metric, leaving the others intact.
    pub fn clear(&mut self, metric: Metric) {
        self.ranges.remove(&metric);
    }

    /// Remove every constraint.
    pub fn clear_all(&mut self) {
        self.ranges.clear();
    }

    /// The active constraint on a metric, if any.
    pub fn range(&self, metric: Metric) -> Option<(f64, f64)> {
        self.ranges.get(&metric).copied()
    }

    /// Number of constrained metrics.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether no constraints are active.
    pub fn is_unconstrained(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Whether a record satisfies every active constraint.
    pub fn matches(&self, record: &Record) -> bool {
        self.ranges.iter().all(|(metric, (min, max))| {
            let v = record.metric(*metric);
            v >= *min && v <= *max
        })
    }

    /// The passing subset of a record set, in input order.
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
