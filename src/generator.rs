//! Seeded random connected graphs.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::graph::{Node, Weight};

/// Shape of the random spanning tree every generated graph contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeShape {
    /// Each node attaches to a uniformly random earlier node.
    Random,
    /// A single path 1 - 2 - ... - n, the deepest possible tree.
    Path,
    /// Every node attaches to node 1.
    Star,
}

impl TreeShape {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Path => "path",
            Self::Star => "star",
        }
    }
}

/// A connected edge list on nodes 1..=n: a tree of the given shape plus `extra_edges` uniformly
/// random edges, which may be parallel edges or self loops. Weights are in 0..=max_weight.
/// Edges are shuffled so that the tree is not given first.
pub fn connected_graph(
    n: usize,
    shape: TreeShape,
    extra_edges: usize,
    max_weight: Weight,
    seed: u64,
) -> Vec<(Node, Node, Weight)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(n.saturating_sub(1) + extra_edges);
    for v in 2..=n {
        let u = match shape {
            TreeShape::Random => rng.gen_range(1..v),
            TreeShape::Path => v - 1,
            TreeShape::Star => 1,
        };
        edges.push((u, v, rng.gen_range(0..=max_weight)));
    }
    if n > 0 {
        for _ in 0..extra_edges {
            let u = rng.gen_range(1..=n);
            let v = rng.gen_range(1..=n);
            edges.push((u, v, rng.gen_range(0..=max_weight)));
        }
    }
    edges.shuffle(&mut rng);
    log::debug!("generated {} edges on {n} nodes ({})", edges.len(), shape.label());
    edges
}

/// `count` uniformly random query pairs on nodes 1..=n.
pub fn queries(n: usize, count: usize, seed: u64) -> Vec<(Node, Node)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(1..=n), rng.gen_range(1..=n)))
        .collect()
}
