pub mod config;
pub mod error;
pub mod geo_point;
pub mod laws;
pub mod matrix;
pub mod node;
pub mod scorer;
pub mod scorers;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{BoxedScorer, ScorerConfig};
pub use error::{ConfigError, LawViolation, ScoreError};
pub use geo_point::GeoPoint;
pub use laws::{Law, LawChecker};
pub use matrix::CostMatrix;
pub use node::{Geodesic, GraphNode, Planar, PlanarNode};
pub use scorer::{Cost, Scorer, TryScorer};
pub use scorers::{Chebyshev, Checked, Euclidean, Haversine, Manhattan, MaxOf, Scaled};
