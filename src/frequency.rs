//! Symbol occurrence counts.

use crate::node::Node;
use total_float_wrap::TotalF64;

/// Collapses runs of equal neighbours in `sorted` into `(count, symbol)` pairs.
pub fn count_runs<S>(sorted: &[S]) -> Vec<(usize, S)>
where
    S: PartialEq + Clone,
{
    let mut runs: Vec<(usize, S)> = Vec::new();
    for s in sorted {
        match runs.last_mut() {
            Some((count, last)) if last == s => *count += 1,
            _ => runs.push((1, s.clone())),
        }
    }

    runs
}

/// Distinct symbols with their counts, in ascending count order.
///
/// Symbols with equal counts stay in ascending symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S> {
    entries: Vec<(usize, S)>,
    total: usize,
}

impl<S> FrequencyTable<S>
where
    S: Ord + Clone,
{
    pub fn from_symbols(symbols: &[S]) -> Self {
        let mut sorted = symbols.to_vec();
        sorted.sort_unstable();

        let mut entries = count_runs(&sorted);
        entries.sort_by_key(|(count, _)| *count);

        Self {
            entries,
            total: symbols.len(),
        }
    }

    pub fn entries(&self) -> &[(usize, S)] {
        &self.entries
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of symbols counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Count-weighted leaves, ready for tree construction.
    pub fn leaves(&self) -> Vec<Node<usize, S>> {
        self.entries
            .iter()
            .map(|(count, s)| Node::leaf(*count, s.clone()))
            .collect()
    }

    /// Probability-weighted leaves, in the same order as [`Self::leaves`].
    pub fn probabilities(&self) -> Vec<Node<TotalF64, S>> {
        self.entries
            .iter()
            .map(|(count, s)| Node::leaf(TotalF64(*count as f64 / self.total as f64), s.clone()))
            .collect()
    }

    /// Shannon entropy in bits per symbol.
    pub fn entropy(&self) -> f64 {
        self.probabilities()
            .iter()
            .map(|n| n.weight().0)
            .map(|p| -p * p.log2())
            .sum()
    }
}
