use crate::{
    node::Planar,
    scorer::{Cost, Scorer},
};

/// Chessboard distance, for grids where a diagonal move costs the same as a
/// straight one.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Chebyshev;

impl<N: Planar + ?Sized> Scorer<N> for Chebyshev {
    fn compute_cost(&self, from: &N, to: &N) -> Cost {
        (to.x() - from.x()).abs().max((to.y() - from.y()).abs())
    }
}
