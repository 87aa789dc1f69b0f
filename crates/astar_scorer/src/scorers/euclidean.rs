use crate::{
    node::Planar,
    scorer::{Cost, Scorer},
};

/// Straight-line distance. Admissible for any graph whose edge costs are at
/// least the euclidean length of the edge.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Euclidean;

impl<N: Planar + ?Sized> Scorer<N> for Euclidean {
    fn compute_cost(&self, from: &N, to: &N) -> Cost {
        let dx = to.x() - from.x();
        let dy = to.y() - from.y();
        (dx * dx + dy * dy).sqrt()
    }
}
