use crate::{
    node::Planar,
    scorer::{Cost, Scorer},
};

/// Taxicab distance, for grids that only allow axis-aligned moves.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Manhattan;

impl<N: Planar + ?Sized> Scorer<N> for Manhattan {
    fn compute_cost(&self, from: &N, to: &N) -> Cost {
        (to.x() - from.x()).abs() + (to.y() - from.y()).abs()
    }
}
