use crate::scorer::{Cost, Scorer};

/// Multiplies the cost of the inner scorer by a constant factor, e.g. to turn
/// a distance into a duration or to weight a heuristic.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Scaled<S> {
    inner: S,
    factor: f64,
}

impl<S> Scaled<S> {
    pub fn new(inner: S, factor: f64) -> Self {
        Scaled { inner, factor }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<N: ?Sized, S: Scorer<N>> Scorer<N> for Scaled<S> {
    #[inline(always)]
    fn compute_cost(&self, from: &N, to: &N) -> Cost {
        self.factor * self.inner.compute_cost(from, to)
    }
}
