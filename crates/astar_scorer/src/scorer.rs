use std::{convert::Infallible, rc::Rc, sync::Arc};

/// Cost between two nodes. Heuristic estimate or real edge cost, depending on
/// the scorer producing it.
pub type Cost = f64;

/// Computes a cost between two nodes of the graph.
///
/// Used by A* both as the heuristic (`from` is the current node, `to` the
/// goal) and as the edge weighting (`from` and `to` are adjacent).
/// Implementations should be deterministic, pure and total over `N`.
pub trait Scorer<N: ?Sized> {
    fn compute_cost(&self, from: &N, to: &N) -> Cost;
}

/// Scorer that can reject its inputs.
pub trait TryScorer<N: ?Sized> {
    type Error;

    fn try_compute_cost(&self, from: &N, to: &N) -> Result<Cost, Self::Error>;
}

/// Scorer backed by a closure, see [`from_fn`].
#[derive(Debug, Copy, Clone)]
pub struct FnScorer<F>(F);

/// Creates a scorer from a closure computing the cost between two nodes.
pub fn from_fn<N, F>(f: F) -> FnScorer<F>
where
    N: ?Sized,
    F: Fn(&N, &N) -> Cost,
{
    FnScorer(f)
}

impl<N, F> Scorer<N> for FnScorer<F>
where
    N: ?Sized,
    F: Fn(&N, &N) -> Cost,
{
    #[inline(always)]
    fn compute_cost(&self, from: &N, to: &N) -> Cost {
        (self.0)(from, to)
    }
}

impl<N: ?Sized, S: Scorer<N> + ?Sized> Scorer<N> for &S {
    fn compute_cost(&self, from: &N, to: &N) -> Cost {
        (**self).compute_cost(from, to)
    }
}

impl<N: ?Sized, S: Scorer<N> + ?Sized> Scorer<N> for Box<S> {
    fn compute_cost(&self, from: &N, to: &N) -> Cost {
        (**self).compute_cost(from, to)
    }
}

impl<N: ?Sized, S: Scorer<N> + ?Sized> Scorer<N> for Arc<S> {
    fn compute_cost(&self, from: &N, to: &N) -> Cost {
        (**self).compute_cost(from, to)
    }
}

impl<N: ?Sized, S: Scorer<N> + ?Sized> Scorer<N> for Rc<S> {
    fn compute_cost(&self, from: &N, to: &N) -> Cost {
        (**self).compute_cost(from, to)
    }
}

/// Wraps an infallible scorer so it can be used where a [`TryScorer`] is expected.
#[derive(Debug, Copy, Clone, Default)]
pub struct Infallibly<S>(pub S);

impl<N: ?Sized, S: Scorer<N>> TryScorer<N> for Infallibly<S> {
    type Error = Infallible;

    fn try_compute_cost(&self, from: &N, to: &N) -> Result<Cost, Infallible> {
        Ok(self.0.compute_cost(from, to))
    }
}
