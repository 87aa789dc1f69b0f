use crate::scorer::{Cost, Scorer};

/// Largest of two estimates. If both are admissible, so is their maximum, and
/// it is at least as informed as either of them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MaxOf<A, B> {
    first: A,
    second: B,
}

impl<A, B> MaxOf<A, B> {
    pub fn new(first: A, second: B) -> Self {
        MaxOf { first, second }
    }
}

impl<N: ?Sized, A: Scorer<N>, B: Scorer<N>> Scorer<N> for MaxOf<A, B> {
    fn compute_cost(&self, from: &N, to: &N) -> Cost {
        let first = self.first.compute_cost(from, to);
        let second = self.second.compute_cost(from, to);

        // f64::max would hide a NaN coming from either side
        if first.is_nan() || second.is_nan() {
            return f64::NAN;
        }

        first.max(second)
    }
}
