use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{geo_point::GeoNode, node::PlanarNode};

pub fn random_planar_nodes(count: usize, seed: u64) -> Vec<PlanarNode> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|id| {
            PlanarNode::new(
                id as u64,
                rng.random_range(-1000.0..1000.0),
                rng.random_range(-1000.0..1000.0),
            )
        })
        .collect()
}

pub fn random_geo_nodes(count: usize, seed: u64) -> Vec<GeoNode> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|id| {
            GeoNode::new(
                format!("n{id}"),
                rng.random_range(-80.0..80.0),
                rng.random_range(-179.0..179.0),
            )
        })
        .collect()
}
