//! Nested group trees for sunburst-style aggregates.
//!
//! Folds flat records into a tree by successive grouping levels (artist then
//! platform, or year then artist then track). Branch magnitudes are computed
//! on demand from leaf values, never stored alongside children, so a tree
//! whose leaves are filtered later cannot go stale.

use crate::aggregate::group_refs;
use crate::core::{Metric, Record};
use crate::error::{Result, StatsError};
use std::collections::HashMap;

/// One node of a built hierarchy.
///
/// A node is a leaf iff it carries a value and no children. A branch whose
/// children were all truncated away stays a valid node with empty children,
/// so traversal never special-cases absence.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    /// Group key or leaf label.
    pub name: String,
    /// Leaf value; `None` on branches.
    pub value: Option<f64>,
    /// Child nodes, in group-discovery order (or truncation order).
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty() && self.value.is_some()
    }

    /// Effective magnitude: the leaf value, or the sum of all leaf values
    /// below this branch.
    pub fn total(&self) -> f64 {
        match self.value {
            Some(v) if self.children.is_empty() => v,
            _ => self.children.iter().map(|c| c.total()).sum(),
        }
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(|c| c.leaf_count()).sum()
        }
    }

    /// Depth of the subtree (a leaf has depth 0).
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

type KeyFn = Box<dyn Fn(&Record) -> String>;
type ValueFn = Box<dyn Fn(&Record) -> f64>;

/// Builder for [`HierarchyNode`] trees.
///
/// Levels are applied outermost-first. By default each record at the deepest
/// level becomes its own leaf labelled by track title; `leaf_per_group`
/// collapses each deepest bucket into a single summed leaf instead.
pub struct HierarchyBuilder {
    levels: Vec<KeyFn>,
    leaf_value: ValueFn,
    leaf_label: KeyFn,
    collapse_leaves: bool,
    top_n: HashMap<usize, usize>,
}

impl Default for HierarchyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self {
            levels: Vec::new(),
            leaf_value: Box::new(|_| 1.0),
            leaf_label: Box::new(|r| r.track.clone()),
            collapse_leaves: false,
            top_n: HashMap::new(),
        }
    }

    /// Add a grouping level (outermost first).
    pub fn level(mut self, key_fn: impl Fn(&Record) -> String + 'static) -> Self {
        self.levels.push(Box::new(key_fn));
        self
    }

    /// Set the leaf value function. Defaults to 1.0 per record (count).
    pub fn leaf_value(mut self, value_fn: impl Fn(&Record) -> f64 + 'static) -> Self {
        self.leaf_value = Box::new(value_fn);
        self
    }

    /// Use a metric as the leaf value.
    pub fn leaf_metric(self, metric: Metric) -> Self {
        self.leaf_value(move |r| r.metric(metric))
    }

    /// Set the leaf label function. Defaults to the track title.
    pub fn leaf_label(mut self, label_fn: impl Fn(&Record) -> String + 'static) -> Self {
        self.leaf_label = Box::new(label_fn);
        self
    }

    /// Collapse each deepest-level bucket into a single leaf holding the sum
    /// of its records' leaf values.
    pub fn leaf_per_group(mut self) -> Self {
        self.collapse_leaves = true;
        self
    }

    /// Keep only the `n` largest groups (by aggregated value, descending,
    /// ties in discovery order) at the given level depth. Depth 0 is the
    /// outermost level.
    pub fn top_n(mut self, depth: usize, n: usize) -> Self {
        self.top_n.insert(depth, n);
        self
    }

    /// Build the tree. The returned root is a branch named `"root"` whose
    /// children are the outermost groups.
    pub fn build(&self, records: &[Record]) -> Result<HierarchyNode> {
        if self.levels.is_empty() {
            return Err(StatsError::InvalidParameter(
                "hierarchy needs at least one grouping level".to_string(),
            ));
        }
        for (&depth, &n) in &self.top_n {
            if n == 0 {
                return Err(StatsError::InvalidParameter(format!(
                    "top-n at depth {} must be at least 1",
                    depth
                )));
            }
            if depth >= self.levels.len() {
                return Err(StatsError::InvalidParameter(format!(
                    "top-n depth {} exceeds deepest level {}",
                    depth,
                    self.levels.len() - 1
                )));
            }
        }

        let refs: Vec<&Record> = records.iter().collect();
        Ok(HierarchyNode {
            name: "root".to_string(),
            value: None,
            children: self.build_level(&refs, 0),
        })
    }

    fn build_level(&self, records: &[&Record], depth: usize) -> Vec<HierarchyNode> {
        if depth == self.levels.len() {
            return records
                .iter()
                .map(|r| HierarchyNode {
                    name: (self.leaf_label)(r),
                    value: Some((self.leaf_value)(r)),
                    children: Vec::new(),
                })
                .collect();
        }

        let last_level = depth == self.levels.len() - 1;
        let groups = group_refs(records, &self.levels[depth]);

        let mut nodes: Vec<HierarchyNode> = groups
            .into_iter()
            .map(|(name, bucket)| {
                if last_level && self.collapse_leaves {
                    let sum = bucket.iter().map(|r| (self.leaf_value)(r)).sum();
                    HierarchyNode {
                        name,
                        value: Some(sum),
                        children: Vec::new(),
                    }
                } else {
                    HierarchyNode {
                        name,
                        value: None,
                        children: self.build_level(&bucket, depth + 1),
                    }
                }
            })
            .collect();

        if let Some(&n) = self.top_n.get(&depth) {
            // Stable sort keeps discovery order among equal totals
            nodes.sort_by(|a, b| {
                b.total()
                    .partial_cmp(&a.total())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            nodes.truncate(n);
        }

        nodes
    }
}
