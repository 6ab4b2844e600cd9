pub mod bottleneck;
pub mod generator;
pub mod graph;
pub mod lifting;
pub mod spanning_tree;
pub use bottleneck::BottleneckSolver;

use bottleneck::LiftingSolver;
use spanning_tree::Prim;

/// The default solver: Prim's spanning tree with a binary lifting index.
pub type FastBottleneckSolver = LiftingSolver<Prim>;

/// A solver for a graph on nodes 1..=n and no edges yet.
pub fn bottleneck_solver(n: usize) -> FastBottleneckSolver {
    FastBottleneckSolver::new(n)
}
