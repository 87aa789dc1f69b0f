use std::{fmt::Debug, hash::Hash};

use geo_types::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A vertex of a graph, identified by an opaque id.
///
/// Scorers never need more than this from a node unless they also ask for a
/// coordinate capability such as [`Planar`] or [`Geodesic`].
pub trait GraphNode {
    type Id: Clone + Eq + Hash + Debug;

    fn id(&self) -> Self::Id;
}

/// Node with cartesian coordinates.
pub trait Planar {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

/// Node with geographic coordinates, in degrees.
pub trait Geodesic {
    fn lat(&self) -> f64;
    fn lng(&self) -> f64;
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanarNode {
    pub id: u64,
    pub x: f64,
    pub y: f64,
}

impl PlanarNode {
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        PlanarNode { id, x, y }
    }
}

impl GraphNode for PlanarNode {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Planar for PlanarNode {
    #[inline(always)]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline(always)]
    fn y(&self) -> f64 {
        self.y
    }
}

impl Planar for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl Planar for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}

impl Planar for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Planar for Point<f64> {
    fn x(&self) -> f64 {
        self.0.x
    }

    fn y(&self) -> f64 {
        self.0.y
    }
}

// geo-types points are (x = longitude, y = latitude)
impl Geodesic for Point<f64> {
    fn lat(&self) -> f64 {
        self.0.y
    }

    fn lng(&self) -> f64 {
        self.0.x
    }
}

impl<T: Planar + ?Sized> Planar for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl<T: Geodesic + ?Sized> Geodesic for &T {
    fn lat(&self) -> f64 {
        (**self).lat()
    }

    fn lng(&self) -> f64 {
        (**self).lng()
    }
}

impl<T: GraphNode + ?Sized> GraphNode for &T {
    type Id = T::Id;

    fn id(&self) -> Self::Id {
        (**self).id()
    }
}
