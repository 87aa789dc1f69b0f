use tracing::debug;

use crate::{
    error::ScoreError,
    scorer::{Cost, Scorer, TryScorer},
};

/// Rejects costs a search cannot order: NaN, infinities and negative values.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Checked<S>(pub S);

impl<S> Checked<S> {
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<N: ?Sized, S: Scorer<N>> TryScorer<N> for Checked<S> {
    type Error = ScoreError;

    fn try_compute_cost(&self, from: &N, to: &N) -> Result<Cost, ScoreError> {
        let cost = self.0.compute_cost(from, to);

        if !cost.is_finite() {
            debug!("Rejected non-finite cost {}", cost);
            return Err(ScoreError::NonFinite { cost });
        }

        if cost < 0.0 {
            debug!("Rejected negative cost {}", cost);
            return Err(ScoreError::Negative { cost });
        }

        Ok(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{scorer::from_fn, scorers::Euclidean};

    #[test]
    fn accepts_finite_non_negative_costs() {
        let scorer = Checked(Euclidean);
        assert_eq!(scorer.try_compute_cost(&(0.0, 0.0), &(3.0, 4.0)), Ok(5.0));
        assert_eq!(scorer.try_compute_cost(&(1.0, 1.0), &(1.0, 1.0)), Ok(0.0));
    }

    #[test]
    fn rejects_negative_costs() {
        let scorer = Checked(from_fn(|a: &f64, b: &f64| b - a));
        assert_eq!(
            scorer.try_compute_cost(&5.0, &2.0),
            Err(ScoreError::Negative { cost: -3.0 })
        );
    }

    #[test]
    fn rejects_non_finite_costs() {
        let scorer = Checked(from_fn(|a: &f64, b: &f64| b / a));
        assert_eq!(
            scorer.try_compute_cost(&0.0, &1.0),
            Err(ScoreError::NonFinite {
                cost: f64::INFINITY
            })
        );

        let result = scorer.try_compute_cost(&0.0, &0.0);
        assert!(matches!(result, Err(ScoreError::NonFinite { cost }) if cost.is_nan()));
    }

    #[test]
    fn unwraps_inner_scorer() {
        assert_eq!(Checked(Euclidean).into_inner(), Euclidean);
    }
}
