//! Group-by and reduce utilities over record tables.
//!
//! Groups are emitted in discovery order (the order their keys first appear
//! in the input), so derived series are stable across calls. Reducers receive
//! the group's records with no ordering guarantee and must be
//! order-independent (mean and sum are).

use crate::core::{Metric, Record};
use std::collections::HashMap;
use std::hash::Hash;

/// Group records by a key and reduce each group to a scalar.
///
/// Returns `(key, reduced)` pairs in discovery order. Empty groups cannot
/// occur: every emitted key comes from at least one record.
pub fn group_reduce<K, F, R>(records: &[Record], key_fn: F, reduce_fn: R) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
    F: Fn(&Record) -> K,
    R: Fn(&[&Record]) -> f64,
{
    group_records(records, key_fn)
        .into_iter()
        .map(|(key, group)| {
            let reduced = reduce_fn(&group);
            (key, reduced)
        })
        .collect()
}

/// Group records by a key, preserving discovery order of the keys.
pub fn group_records<K, F>(records: &[Record], key_fn: F) -> Vec<(K, Vec<&Record>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&Record) -> K,
{
    let refs: Vec<&Record> = records.iter().collect();
    group_refs(&refs, key_fn)
}

/// Group an already-borrowed record set, preserving discovery order.
///
/// Used where a subset is regrouped without copying (nested hierarchy
/// levels, filtered views).
pub fn group_refs<'a, K, F>(records: &[&'a Record], key_fn: F) -> Vec<(K, Vec<&'a Record>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&Record) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a Record>)> = Vec::new();

    for &record in records {
        let key = key_fn(record);
        match index.get(&key) {
            Some(&i) => groups[i].1.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![record]));
            }
        }
    }

    groups
}

/// Sum of one metric over a set of records.
pub fn sum_metric(records: &[&Record], metric: Metric) -> f64 {
    records.iter().map(|r| r.metric(metric)).sum()
}

/// Mean of one metric over a set of records. NaN on an empty set.
pub fn mean_metric(records: &[&Record], metric: Metric) -> f64 {
    if records.is_empty() {
        return f64::NAN;
    }
    sum_metric(records, metric) / records.len() as f64
}

/// Group by a key and take the mean of a metric per group.
pub fn mean_by<K, F>(records: &[Record], key_fn: F, metric: Metric) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
    F: Fn(&Record) -> K,
{
    group_reduce(records, key_fn, |group| mean_metric(group, metric))
}

/// Group by a key and take the sum of a metric per group.
pub fn sum_by<K, F>(records: &[Record], key_fn: F, metric: Metric) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
    F: Fn(&Record) -> K,
{
    group_reduce(records, key_fn, |group| sum_metric(group, metric))
}
