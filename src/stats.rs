//! Degree-distribution analysis for generated topologies.
//!
//! Summarizes a built [`Network`] as a degree histogram with a statistical
//! summary and a listing of isolated nodes. Report types are serializable so
//! consumers can export them alongside other simulation results.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::network::Network;

/// Degree distribution of a network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegreeDistribution {
    /// Histogram (degree -> count of nodes)
    pub histogram: HashMap<usize, usize>,
    /// Statistical summary
    pub stats: DegreeStats,
    /// Nodes with no links, in ascending index order
    pub isolated_nodes: Vec<usize>,
}

/// Statistical summary of degrees
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegreeStats {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// Compute the degree distribution of a network.
///
/// An empty network yields an empty histogram and the all-zero summary.
pub fn degree_distribution(network: &Network) -> DegreeDistribution {
    let degrees: Vec<usize> = (0..network.size()).map(|n| network.degree(n)).collect();

    let mut histogram: HashMap<usize, usize> = HashMap::new();
    for &degree in &degrees {
        *histogram.entry(degree).or_insert(0) += 1;
    }

    let isolated_nodes: Vec<usize> = degrees
        .iter()
        .enumerate()
        .filter(|(_, &degree)| degree == 0)
        .map(|(node, _)| node)
        .collect();

    DegreeDistribution {
        histogram,
        stats: calculate_stats(&degrees),
        isolated_nodes,
    }
}

/// Calculate statistical summary
fn calculate_stats(values: &[usize]) -> DegreeStats {
    if values.is_empty() {
        return DegreeStats {
            min: 0,
            max: 0,
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
        };
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let sum: usize = sorted.iter().sum();
    let mean = sum as f64 / sorted.len() as f64;

    let median = if sorted.len() % 2 == 0 {
        (sorted[sorted.len() / 2 - 1] + sorted[sorted.len() / 2]) as f64 / 2.0
    } else {
        sorted[sorted.len() / 2] as f64
    };

    let variance: f64 = sorted
        .iter()
        .map(|&v| {
            let diff = v as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / sorted.len() as f64;

    DegreeStats {
        min,
        max,
        mean,
        median,
        std_dev: variance.sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_network_yields_zero_summary() {
        let report = degree_distribution(&Network::new());
        assert!(report.histogram.is_empty());
        assert!(report.isolated_nodes.is_empty());
        assert_eq!(report.stats.min, 0);
        assert_eq!(report.stats.max, 0);
        assert_eq!(report.stats.mean, 0.0);
        assert_eq!(report.stats.median, 0.0);
        assert_eq!(report.stats.std_dev, 0.0);
    }

    #[test]
    fn test_path_graph_distribution() {
        // Path 0-1-2 with node 3 isolated: degrees [1, 2, 1, 0].
        let mut network = Network::new();
        network.set_values(&[0.0; 4]);
        assert!(network.add_link(0, 1));
        assert!(network.add_link(1, 2));

        let report = degree_distribution(&network);

        assert_eq!(report.histogram.get(&0), Some(&1));
        assert_eq!(report.histogram.get(&1), Some(&2));
        assert_eq!(report.histogram.get(&2), Some(&1));
        assert_eq!(report.isolated_nodes, vec![3]);

        assert_eq!(report.stats.min, 0);
        assert_eq!(report.stats.max, 2);
        assert_eq!(report.stats.mean, 1.0);
        assert_eq!(report.stats.median, 1.0);
        assert!((report.stats.std_dev - 0.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_histogram_counts_every_node() {
        let mut network = Network::new();
        network.set_values(&[0.0; 5]);
        network.add_link(0, 1);
        network.add_link(2, 3);

        let report = degree_distribution(&network);
        let counted: usize = report.histogram.values().sum();
        assert_eq!(counted, network.size());
    }

    #[test]
    fn test_even_count_median_averages_middle_pair() {
        // Degrees [1, 1, 2, 2]: median is 1.5.
        let mut network = Network::new();
        network.set_values(&[0.0; 4]);
        network.add_link(0, 2);
        network.add_link(1, 3);
        network.add_link(2, 3);

        let report = degree_distribution(&network);
        assert_eq!(report.stats.median, 1.5);
    }
}
