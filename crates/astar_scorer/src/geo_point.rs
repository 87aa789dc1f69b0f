use serde::{Deserialize, Serialize};

use crate::node::{Geodesic, GraphNode};

pub(crate) const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    /// Great-circle distance in meters.
    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        haversine_distance(self.lat, self.lng, other.lat, other.lng)
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl Geodesic for GeoPoint {
    #[inline(always)]
    fn lat(&self) -> f64 {
        self.lat
    }

    #[inline(always)]
    fn lng(&self) -> f64 {
        self.lng
    }
}

impl From<GeoPoint> for geo_types::Point<f64> {
    fn from(value: GeoPoint) -> Self {
        geo_types::Point::new(value.lng, value.lat)
    }
}

impl From<geo_types::Point<f64>> for GeoPoint {
    fn from(value: geo_types::Point<f64>) -> Self {
        GeoPoint::new(value.y(), value.x())
    }
}

/// A geographic graph node, e.g. a station on a transit network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoNode {
    pub id: String,
    pub point: GeoPoint,
}

impl GeoNode {
    pub fn new(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        GeoNode {
            id: id.into(),
            point: GeoPoint::new(lat, lng),
        }
    }
}

impl GraphNode for GeoNode {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

impl Geodesic for GeoNode {
    fn lat(&self) -> f64 {
        self.point.lat
    }

    fn lng(&self) -> f64 {
        self.point.lng
    }
}

pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();

    let delta_lat = lat2_rad - lat1_rad;
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}
