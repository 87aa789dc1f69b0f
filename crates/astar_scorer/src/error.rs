use thiserror::Error;

use crate::laws::Law;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("Scorer produced a non-finite cost ({cost})")]
    NonFinite { cost: f64 },
    #[error("Scorer produced a negative cost ({cost})")]
    Negative { cost: f64 },
    #[error("Invalid coordinate (lat {lat}, lng {lng})")]
    InvalidCoordinate { lat: f64, lng: f64 },
    #[error("Invalid speed {speed_kmh} km/h")]
    InvalidSpeed { speed_kmh: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{law:?} violated by {nodes:?}: costs {costs:?}")]
pub struct LawViolation {
    pub law: Law,
    /// Debug representation of the ids of the nodes involved.
    pub nodes: Vec<String>,
    pub costs: Vec<f64>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse scorer config")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("Scorer {scorer} cannot score {node} nodes")]
    IncompatibleNode {
        scorer: &'static str,
        node: &'static str,
    },
}
