//! Executable checks of the properties a [`Scorer`] is expected to have.
//!
//! Totality and determinism are required of every scorer. The remaining laws
//! are optional; a scorer advertising them can be used as a consistent A*
//! heuristic.

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::LawViolation,
    node::GraphNode,
    scorer::{Cost, Scorer},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Law {
    /// Every pair yields a finite cost.
    Totality,
    /// Equal inputs yield bit-identical costs.
    Determinism,
    /// cost(a, b) >= 0
    NonNegativity,
    /// cost(a, a) == 0
    Identity,
    /// cost(a, b) == cost(b, a)
    Symmetry,
    /// cost(a, c) <= cost(a, b) + cost(b, c)
    TriangleInequality,
}

impl Law {
    pub const REQUIRED: [Law; 2] = [Law::Totality, Law::Determinism];

    pub const METRIC: [Law; 6] = [
        Law::Totality,
        Law::Determinism,
        Law::NonNegativity,
        Law::Identity,
        Law::Symmetry,
        Law::TriangleInequality,
    ];
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LawChecker {
    /// Allowed floating point slack, relative to the magnitude of the costs
    /// being compared (absolute below 1.0).
    pub tolerance: f64,
}

impl Default for LawChecker {
    fn default() -> Self {
        LawChecker { tolerance: 1e-9 }
    }
}

impl LawChecker {
    pub fn new(tolerance: f64) -> Self {
        debug_assert!(tolerance >= 0.0, "tolerance must be non-negative, got {tolerance}");
        LawChecker { tolerance }
    }

    /// Checks every law in order and stops at the first violation.
    pub fn check_all<N, S>(
        &self,
        scorer: &S,
        nodes: &[N],
        laws: &[Law],
    ) -> Result<(), LawViolation>
    where
        N: GraphNode,
        S: Scorer<N> + ?Sized,
    {
        laws.iter()
            .try_for_each(|law| self.check(scorer, nodes, *law))
    }

    /// Checks a single law over every pair (or triple) of `nodes`.
    pub fn check<N, S>(&self, scorer: &S, nodes: &[N], law: Law) -> Result<(), LawViolation>
    where
        N: GraphNode,
        S: Scorer<N> + ?Sized,
    {
        match law {
            Law::Totality => self.check_pairs(nodes, law, |a, b| {
                let cost = scorer.compute_cost(a, b);
                cost.is_finite().then_some(()).ok_or(vec![cost])
            }),
            Law::Determinism => self.check_determinism(scorer, nodes),
            Law::NonNegativity => self.check_pairs(nodes, law, |a, b| {
                let cost = scorer.compute_cost(a, b);
                (cost >= -self.slack(cost)).then_some(()).ok_or(vec![cost])
            }),
            Law::Identity => nodes.iter().try_for_each(|a| {
                let cost = scorer.compute_cost(a, a);
                if cost.abs() <= self.tolerance {
                    Ok(())
                } else {
                    Err(violation(law, &[a], vec![cost]))
                }
            }),
            Law::Symmetry => self.check_pairs(nodes, law, |a, b| {
                let forward = scorer.compute_cost(a, b);
                let backward = scorer.compute_cost(b, a);
                if (forward - backward).abs() <= self.slack(forward.max(backward)) {
                    Ok(())
                } else {
                    Err(vec![forward, backward])
                }
            }),
            Law::TriangleInequality => self.check_triangles(scorer, nodes),
        }
    }

    fn slack(&self, magnitude: Cost) -> f64 {
        self.tolerance * magnitude.abs().max(1.0)
    }

    fn check_pairs<N, F>(&self, nodes: &[N], law: Law, mut check: F) -> Result<(), LawViolation>
    where
        N: GraphNode,
        F: FnMut(&N, &N) -> Result<(), Vec<Cost>>,
    {
        for a in nodes {
            for b in nodes {
                check(a, b).map_err(|costs| violation(law, &[a, b], costs))?;
            }
        }
        Ok(())
    }

    fn check_determinism<N, S>(&self, scorer: &S, nodes: &[N]) -> Result<(), LawViolation>
    where
        N: GraphNode,
        S: Scorer<N> + ?Sized,
    {
        let mut seen: FxHashMap<(N::Id, N::Id), Cost> = FxHashMap::default();

        for a in nodes {
            for b in nodes {
                let first = scorer.compute_cost(a, b);
                let second = scorer.compute_cost(a, b);
                if first.to_bits() != second.to_bits() {
                    return Err(violation(Law::Determinism, &[a, b], vec![first, second]));
                }

                // Nodes sharing an id are the same input
                match seen.get(&(a.id(), b.id())) {
                    Some(previous) if previous.to_bits() != first.to_bits() => {
                        return Err(violation(
                            Law::Determinism,
                            &[a, b],
                            vec![*previous, first],
                        ));
                    }
                    Some(_) => {}
                    None => {
                        seen.insert((a.id(), b.id()), first);
                    }
                }
            }
        }

        Ok(())
    }

    fn check_triangles<N, S>(&self, scorer: &S, nodes: &[N]) -> Result<(), LawViolation>
    where
        N: GraphNode,
        S: Scorer<N> + ?Sized,
    {
        for a in nodes {
            for b in nodes {
                let ab = scorer.compute_cost(a, b);
                for c in nodes {
                    let bc = scorer.compute_cost(b, c);
                    let ac = scorer.compute_cost(a, c);
                    let broken = ab.is_nan() || bc.is_nan() || ac.is_nan();
                    if broken || ac > ab + bc + self.slack(ac) {
                        return Err(violation(
                            Law::TriangleInequality,
                            &[a, b, c],
                            vec![ab, bc, ac],
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}

fn violation<N: GraphNode>(law: Law, nodes: &[&N], costs: Vec<Cost>) -> LawViolation {
    let nodes: Vec<String> = nodes.iter().map(|node| format!("{:?}", node.id())).collect();
    debug!("{:?} violated by {:?} with costs {:?}", law, nodes, costs);

    LawViolation { law, nodes, costs }
}
