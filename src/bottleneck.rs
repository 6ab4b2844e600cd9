//! Minimax path queries over a whole test case: collect edges, build once, query many times.

use std::marker::PhantomData;

use derivative::Derivative;

use crate::graph::{Graph, Node, Weight, ROOT};
use crate::lifting::LiftingIndex;
use crate::spanning_tree::{BuildError, SpanningTree, SpanningTreeAlgorithm};

pub trait BottleneckSolver {
    /// New solver for a graph on nodes 1..=n and no edges.
    fn new(n: usize) -> Self;
    /// Forgets every edge and built structure, and starts over with n nodes.
    fn reset(&mut self, n: usize);
    /// Adds the undirected edge u-v. Must be called before building.
    fn add_edge(&mut self, u: Node, v: Node, weight: Weight);
    /// Builds the spanning tree and the query index. Errors if the graph is disconnected.
    fn try_build(&mut self) -> Result<(), BuildError>;
    /// Same as `try_build`, but panics on a disconnected graph.
    fn build(&mut self) {
        if let Err(e) = self.try_build() {
            panic!("{e}");
        }
    }
    /// Minimum, over all paths from u to v, of the heaviest edge on the path.
    fn query(&self, u: Node, v: Node) -> Weight;
    /// Lowest common ancestor of u and v in the spanning tree rooted at `ROOT`.
    fn lca(&self, u: Node, v: Node) -> Node;
}

#[derive(Debug)]
struct Built {
    tree: SpanningTree,
    index: LiftingIndex,
}

#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct LiftingSolver<S: SpanningTreeAlgorithm> {
    graph: Graph,
    /// None until built.
    built: Option<Built>,
    #[derivative(Debug = "ignore")]
    _algorithm: PhantomData<S>,
}

impl<S: SpanningTreeAlgorithm> LiftingSolver<S> {
    fn built(&self) -> &Built {
        self.built.as_ref().expect("query before build")
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The spanning tree, once built.
    pub fn tree(&self) -> Option<&SpanningTree> {
        self.built.as_ref().map(|b| &b.tree)
    }

    /// The lifting index, once built.
    pub fn index(&self) -> Option<&LiftingIndex> {
        self.built.as_ref().map(|b| &b.index)
    }
}

impl<S: SpanningTreeAlgorithm> BottleneckSolver for LiftingSolver<S> {
    fn new(n: usize) -> Self {
        Self {
            graph: Graph::new(n),
            built: None,
            _algorithm: PhantomData,
        }
    }

    fn reset(&mut self, n: usize) {
        log::trace!("reset to {n} nodes");
        self.graph = Graph::new(n);
        self.built = None;
    }

    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) {
        assert!(self.built.is_none(), "edge {u}-{v} added after build");
        self.graph.add_edge(u, v, weight);
    }

    fn try_build(&mut self) -> Result<(), BuildError> {
        assert!(self.built.is_none(), "built twice without reset");
        log::debug!(
            "building on {} nodes and {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        let tree = S::spanning_tree(&self.graph)?;
        let index = LiftingIndex::build(&tree, ROOT);
        self.built = Some(Built { tree, index });
        Ok(())
    }

    fn query(&self, u: Node, v: Node) -> Weight {
        let w = self.built().index.bottleneck(u, v);
        log::trace!("query({u}, {v}) = {w}");
        w
    }

    fn lca(&self, u: Node, v: Node) -> Node {
        self.built().index.lca(u, v)
    }
}
