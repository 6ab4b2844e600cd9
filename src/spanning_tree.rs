//! Minimum spanning trees. Any minimum spanning tree keeps the minimax path value between
//! every pair of nodes, which is what lets bottleneck queries run on a tree.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::{Display, Formatter};

use crate::graph::{node_of, slot_of, Edge, Graph, Node, Slot, Weight, ROOT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Only `reached` of the `nodes` nodes are connected to the root.
    Disconnected { reached: usize, nodes: usize },
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disconnected { reached, nodes } => write!(
                f,
                "graph is disconnected: {reached} of {nodes} nodes reachable from node {ROOT}"
            ),
        }
    }
}

impl std::error::Error for BuildError {}

/// An algorithm producing a minimum spanning tree of a connected graph.
pub trait SpanningTreeAlgorithm {
    /// Errors if the graph is not connected.
    fn spanning_tree(graph: &Graph) -> Result<SpanningTree, BuildError>;
}

/// Undirected weighted tree on the same nodes as the graph it was built from.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    adj: Vec<Vec<(Slot, Weight)>>,
    edges: Vec<Edge>,
}

impl SpanningTree {
    fn empty(n: usize) -> Self {
        Self {
            adj: vec![vec![]; n],
            edges: Vec::with_capacity(n.saturating_sub(1)),
        }
    }

    fn add_edge(&mut self, u: Slot, v: Slot, weight: Weight) {
        self.adj[u].push((v, weight));
        self.adj[v].push((u, weight));
        self.edges.push(Edge {
            u: node_of(u),
            v: node_of(v),
            weight,
        });
    }

    /// `reached` is the number of nodes connected to the root.
    fn check_spanning(self, reached: usize) -> Result<Self, BuildError> {
        let nodes = self.node_count();
        if reached < nodes {
            return Err(BuildError::Disconnected { reached, nodes });
        }
        log::debug!(
            "spanning tree on {nodes} nodes, total weight {}",
            self.total_weight()
        );
        Ok(self)
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Each tree edge once, in the order it was chosen.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight).sum()
    }

    pub fn neighbors(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.adj[slot_of(u, self.node_count())]
            .iter()
            .map(|&(v, w)| (node_of(v), w))
    }

    pub(crate) fn slot_neighbors(&self, s: Slot) -> &[(Slot, Weight)] {
        &self.adj[s]
    }
}

/// Frontier expansion from `ROOT` with a lazily cleaned priority queue.
#[derive(Debug)]
pub struct Prim;

impl SpanningTreeAlgorithm for Prim {
    fn spanning_tree(graph: &Graph) -> Result<SpanningTree, BuildError> {
        let n = graph.node_count();
        let mut tree = SpanningTree::empty(n);
        if n == 0 {
            return Ok(tree);
        }
        let mut included = vec![false; n];
        // (weight, node, where it was reached from)
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0, slot_of(ROOT, n), None)));
        while let Some(Reverse((w, u, from))) = heap.pop() {
            if included[u] {
                // Stale, u was reached through a lighter edge already.
                continue;
            }
            included[u] = true;
            if let Some(p) = from {
                log::trace!("tree edge {} - {} ({w})", node_of(p), node_of(u));
                tree.add_edge(p, u, w);
            }
            for &(v, wv) in graph.slot_neighbors(u) {
                if !included[v] {
                    heap.push(Reverse((wv, v, Some(u))));
                }
            }
        }
        tree.check_spanning(included.iter().filter(|&&i| i).count())
    }
}

/// Edges by increasing weight, joined with a disjoint set.
#[derive(Debug)]
pub struct Kruskal;

struct DisjointSet {
    parent: Vec<Slot>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut u: Slot) -> Slot {
        while self.parent[u] != u {
            self.parent[u] = self.parent[self.parent[u]];
            u = self.parent[u];
        }
        u
    }

    /// Returns false if they were already joined.
    fn join(&mut self, u: Slot, v: Slot) -> bool {
        let (mut a, mut b) = (self.find(u), self.find(v));
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        true
    }
}

impl SpanningTreeAlgorithm for Kruskal {
    fn spanning_tree(graph: &Graph) -> Result<SpanningTree, BuildError> {
        let n = graph.node_count();
        let mut tree = SpanningTree::empty(n);
        let mut edges = graph.edges().to_vec();
        edges.sort_by_key(|e| e.weight);
        let mut dset = DisjointSet::new(n);
        for Edge { u, v, weight } in edges {
            if tree.edges.len() + 1 >= n {
                break;
            }
            let (su, sv) = (slot_of(u, n), slot_of(v, n));
            if dset.join(su, sv) {
                log::trace!("tree edge {u} - {v} ({weight})");
                tree.add_edge(su, sv, weight);
            }
        }
        let reached = if n == 0 {
            0
        } else {
            let root = dset.find(slot_of(ROOT, n));
            dset.size[root]
        };
        tree.check_spanning(reached)
    }
}
