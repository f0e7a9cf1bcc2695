//! Network graph structure and random topology generation.
//!
//! A [`Network`] is a fixed set of nodes, each carrying a scalar value, plus
//! a symmetric link relation between node indices. Node identity is the index
//! itself: node `n` is entry `n` of the value sequence. Links are undirected,
//! duplicate-free, and never connect a node to itself.
//!
//! Topology generation ([`Network::random_connect`]) draws each node's target
//! degree from a Poisson distribution, then attempts random links until the
//! target is met or the node is saturated (linked to every other node).

use std::collections::BTreeSet;

use log::{debug, info};

use crate::rng::Sampler;

/// Errors that can occur when accessing network nodes
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("Node index {index} out of range for network of {size} nodes")]
    IndexOutOfRange { index: usize, size: usize },
}

/// An undirected graph of value-carrying nodes.
///
/// Links are stored as directed index pairs in a sorted set, both directions
/// inserted together, so the relation stays symmetric by construction and
/// neighbor queries iterate in ascending index order.
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// One value per node; the index is the node's identity
    values: Vec<f64>,
    /// Directed link entries; (a, b) present iff (b, a) present, never (a, a)
    links: BTreeSet<(usize, usize)>,
}

impl Network {
    /// Create an empty network with no nodes and no links.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the node set with `new_size` freshly sampled nodes.
    ///
    /// Every node value is an independent draw from a standard normal
    /// distribution (mean 0, standard deviation 1). All existing links are
    /// discarded.
    pub fn resize(&mut self, new_size: usize, rng: &mut dyn Sampler) {
        self.links.clear();
        self.values.clear();
        self.values.resize(new_size, 0.0);
        rng.fill_normal(&mut self.values, 0.0, 1.0);
    }

    /// Add a bidirectional link between two nodes.
    ///
    /// # Arguments
    /// * `a`, `b` - the indexes of the two nodes to link
    ///
    /// # Returns
    /// `true` if the link was inserted; `false` for a self-loop, an
    /// out-of-range endpoint, or a link that already exists.
    pub fn add_link(&mut self, a: usize, b: usize) -> bool {
        if a == b || a >= self.values.len() || b >= self.values.len() {
            return false;
        }
        // One directed probe suffices: both directions are always inserted together.
        if self.links.contains(&(a, b)) {
            return false;
        }
        self.links.insert((a, b));
        self.links.insert((b, a));
        true
    }

    /// Create random connections between nodes, replacing any existing links.
    ///
    /// Each node draws a Poisson-distributed target degree with mean
    /// `mean_degree`, then attempts that many random links. A failed attempt
    /// (self-loop or duplicate) is redrawn, unless the node is already linked
    /// to every other node, in which case its remaining attempts are
    /// abandoned. Links are symmetric, so nodes processed later may find part
    /// of their target already satisfied by earlier nodes.
    ///
    /// # Arguments
    /// * `mean_degree` - the average of the Poisson distribution
    /// * `rng` - sampler supplying the degree and candidate draws
    ///
    /// # Returns
    /// The number of undirected links created.
    pub fn random_connect(&mut self, mean_degree: f64, rng: &mut dyn Sampler) -> usize {
        self.links.clear();
        let n = self.values.len();
        for node in 0..n {
            let target = rng.poisson(mean_degree) as usize;
            debug!("Node {} target degree {}", node, target);
            'attempts: for _ in 0..target {
                loop {
                    // A saturated node cannot take more links; abandon its
                    // remaining attempts.
                    if self.degree(node) >= n - 1 {
                        break 'attempts;
                    }
                    // Uniform draw over [0, n), truncated toward zero.
                    let candidate = rng.uniform(0.0, n as f64) as usize;
                    if self.add_link(node, candidate) {
                        break;
                    }
                }
            }
        }
        let created = self.link_count();
        info!(
            "Created {} random links across {} nodes (mean degree {})",
            created, n, mean_degree
        );
        created
    }

    /// Replace all node values with the given sequence.
    ///
    /// The new sequence's length becomes the node count. If that length
    /// differs from the previous count, all links are cleared so no link can
    /// reference a node that no longer exists.
    ///
    /// # Returns
    /// The number of values set.
    pub fn set_values(&mut self, new_values: &[f64]) -> usize {
        if new_values.len() != self.values.len() {
            self.links.clear();
        }
        self.values = new_values.to_vec();
        self.values.len()
    }

    /// Number of nodes
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Number of undirected links
    pub fn link_count(&self) -> usize {
        self.links.len() / 2
    }

    /// Degree (number of links) of node `n`; 0 for an unknown index
    pub fn degree(&self, n: usize) -> usize {
        self.links.range((n, 0)..=(n, usize::MAX)).count()
    }

    /// Value of node `n`
    pub fn value(&self, n: usize) -> Result<f64, NetworkError> {
        self.values
            .get(n)
            .copied()
            .ok_or(NetworkError::IndexOutOfRange {
                index: n,
                size: self.values.len(),
            })
    }

    /// All node values, in node-index order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// All node values in descending order.
    ///
    /// The sort is stable and total: duplicates are preserved and NaN orders
    /// below every other value in the descending output.
    pub fn sorted_values(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        sorted
    }

    /// All neighbors of node `n`, in ascending index order; empty for an
    /// unknown index.
    pub fn neighbors(&self, n: usize) -> Vec<usize> {
        self.links
            .range((n, 0)..=(n, usize::MAX))
            .map(|&(_, neighbor)| neighbor)
            .collect()
    }
}
