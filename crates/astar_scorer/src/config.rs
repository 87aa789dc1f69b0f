use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::ConfigError,
    node::{Geodesic, Planar},
    scorer::Scorer,
    scorers::{Chebyshev, Euclidean, Haversine, Manhattan, Scaled},
};

pub type BoxedScorer<N> = Box<dyn Scorer<N> + Send + Sync>;

fn default_scale() -> f64 {
    1.0
}

/// Serialized description of a scorer, e.g.
/// `{ "type": "haversine", "speed_kmh": 120.0 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScorerConfig {
    Euclidean {
        #[serde(default = "default_scale")]
        scale: f64,
    },
    Manhattan {
        #[serde(default = "default_scale")]
        scale: f64,
    },
    Chebyshev {
        #[serde(default = "default_scale")]
        scale: f64,
    },
    Haversine {
        /// Turns the distance in meters into a travel time in seconds
        #[serde(default, skip_serializing_if = "Option::is_none")]
        speed_kmh: Option<f64>,
        #[serde(default = "default_scale")]
        scale: f64,
    },
}

impl ScorerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ScorerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScorerConfig::Euclidean { .. } => "euclidean",
            ScorerConfig::Manhattan { .. } => "manhattan",
            ScorerConfig::Chebyshev { .. } => "chebyshev",
            ScorerConfig::Haversine { .. } => "haversine",
        }
    }

    pub fn scale(&self) -> f64 {
        match *self {
            ScorerConfig::Euclidean { scale }
            | ScorerConfig::Manhattan { scale }
            | ScorerConfig::Chebyshev { scale }
            | ScorerConfig::Haversine { scale, .. } => scale,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let scale = self.scale();
        if !scale.is_finite() || scale < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "scale",
                value: scale,
            });
        }

        if let ScorerConfig::Haversine {
            speed_kmh: Some(speed_kmh),
            ..
        } = *self
        {
            if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
                return Err(ConfigError::InvalidParameter {
                    name: "speed_kmh",
                    value: speed_kmh,
                });
            }
        }

        Ok(())
    }

    /// Builds a scorer for nodes with cartesian coordinates.
    pub fn build_planar<N>(&self) -> Result<BoxedScorer<N>, ConfigError>
    where
        N: Planar,
    {
        self.validate()?;
        debug!("Building planar scorer from {:?}", self);

        let scale = self.scale();
        let scorer: BoxedScorer<N> = match *self {
            ScorerConfig::Euclidean { .. } => Box::new(Scaled::new(Euclidean, scale)),
            ScorerConfig::Manhattan { .. } => Box::new(Scaled::new(Manhattan, scale)),
            ScorerConfig::Chebyshev { .. } => Box::new(Scaled::new(Chebyshev, scale)),
            ScorerConfig::Haversine { .. } => {
                return Err(ConfigError::IncompatibleNode {
                    scorer: self.name(),
                    node: "planar",
                });
            }
        };

        Ok(scorer)
    }

    /// Builds a scorer for nodes with geographic coordinates.
    pub fn build_geodesic<N>(&self) -> Result<BoxedScorer<N>, ConfigError>
    where
        N: Geodesic,
    {
        self.validate()?;
        debug!("Building geodesic scorer from {:?}", self);

        match *self {
            ScorerConfig::Haversine { speed_kmh, scale } => {
                Ok(Box::new(Scaled::new(Haversine { speed_kmh }, scale)))
            }
            _ => Err(ConfigError::IncompatibleNode {
                scorer: self.name(),
                node: "geodesic",
            }),
        }
    }
}

impl Default for ScorerConfig {
    fn default() -> Self {
        ScorerConfig::Euclidean {
            scale: default_scale(),
        }
    }
}
