use serde::{Deserialize, Serialize};

use crate::{
    error::ScoreError,
    geo_point::{GeoPoint, haversine_distance},
    node::Geodesic,
    scorer::{Cost, Scorer, TryScorer},
};

/// Great-circle distance between two geographic nodes.
///
/// Without a speed the cost is in meters. With a speed it is the travel time
/// in seconds at that speed, which stays admissible as long as no edge of the
/// graph can be travelled faster.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Haversine {
    pub speed_kmh: Option<f64>,
}

impl Haversine {
    pub fn meters() -> Self {
        Haversine { speed_kmh: None }
    }

    /// `speed_kmh` must be positive; [`TryScorer`] rejects anything else.
    pub fn seconds_at(speed_kmh: f64) -> Self {
        Haversine {
            speed_kmh: Some(speed_kmh),
        }
    }

    fn validate<N: Geodesic + ?Sized>(node: &N) -> Result<(), ScoreError> {
        let point = GeoPoint::new(node.lat(), node.lng());
        if point.is_valid() {
            Ok(())
        } else {
            Err(ScoreError::InvalidCoordinate {
                lat: point.lat,
                lng: point.lng,
            })
        }
    }
}

impl<N: Geodesic + ?Sized> Scorer<N> for Haversine {
    fn compute_cost(&self, from: &N, to: &N) -> Cost {
        let distance = haversine_distance(from.lat(), from.lng(), to.lat(), to.lng());

        match self.speed_kmh {
            Some(speed_kmh) => distance / (speed_kmh / 3.6),
            None => distance,
        }
    }
}

impl<N: Geodesic + ?Sized> TryScorer<N> for Haversine {
    type Error = ScoreError;

    fn try_compute_cost(&self, from: &N, to: &N) -> Result<Cost, ScoreError> {
        match self.speed_kmh {
            Some(speed_kmh) if !(speed_kmh > 0.0 && speed_kmh.is_finite()) => {
                return Err(ScoreError::InvalidSpeed { speed_kmh });
            }
            _ => {}
        }

        Self::validate(from)?;
        Self::validate(to)?;
        Ok(self.compute_cost(from, to))
    }
}
