use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::scorer::{Cost, Scorer};

/// Costs between every pair of a set of nodes.
/// Stored as a flat vector, row `i` holding the costs from node `i`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CostMatrix {
    size: usize,
    costs: Vec<Cost>,
}

impl CostMatrix {
    /// Scores every ordered pair of `nodes`, rows in parallel.
    pub fn compute<N, S>(scorer: &S, nodes: &[N]) -> Self
    where
        N: Sync,
        S: Scorer<N> + Sync + ?Sized,
    {
        let size = nodes.len();
        let mut costs = vec![0.0; size * size];

        if size > 0 {
            costs
                .par_chunks_mut(size)
                .zip(nodes.par_iter())
                .for_each(|(row, from)| {
                    for (cost, to) in row.iter_mut().zip(nodes) {
                        *cost = scorer.compute_cost(from, to);
                    }
                });
        }

        info!("Computed {}x{} cost matrix", size, size);

        CostMatrix { size, costs }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline(always)]
    pub fn cost(&self, from: usize, to: usize) -> Cost {
        assert!(
            from < self.size && to < self.size,
            "index ({from}, {to}) out of bounds for {} nodes",
            self.size
        );
        self.costs[from * self.size + to]
    }

    pub fn get(&self, from: usize, to: usize) -> Option<Cost> {
        if from < self.size && to < self.size {
            Some(self.costs[from * self.size + to])
        } else {
            None
        }
    }

    pub fn row(&self, from: usize) -> &[Cost] {
        assert!(from < self.size, "row {from} out of bounds for {} nodes", self.size);
        let start = from * self.size;
        &self.costs[start..start + self.size]
    }
}
