//! Weighted undirected input graph.

/// Node label, in `1..=n`.
pub type Node = usize;
/// Non-negative integer edge weight ("danger value").
pub type Weight = u64;

/// 0-based position of a node inside the internal tables.
pub(crate) type Slot = usize;

/// The node every rooted structure in this crate hangs from.
pub const ROOT: Node = 1;

pub(crate) fn slot_of(u: Node, n: usize) -> Slot {
    assert!(
        (1..=n).contains(&u),
        "node {u} out of range, expected 1..={n}"
    );
    u - 1
}

pub(crate) fn node_of(s: Slot) -> Node {
    s + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub u: Node,
    pub v: Node,
    pub weight: Weight,
}

/// Adjacency list over nodes `1..=n`. Parallel edges and self loops are kept as given.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adj: Vec<Vec<(Slot, Weight)>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Graph on n nodes and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![vec![]; n],
            edges: vec![],
        }
    }

    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = (Node, Node, Weight)>) -> Self {
        let mut g = Self::new(n);
        for (u, v, w) in edges {
            g.add_edge(u, v, w);
        }
        g
    }

    /// Adds the undirected edge u-v. Panics if either endpoint is out of range.
    pub fn add_edge(&mut self, u: Node, v: Node, weight: Weight) {
        let n = self.node_count();
        let (su, sv) = (slot_of(u, n), slot_of(v, n));
        self.adj[su].push((sv, weight));
        if su != sv {
            self.adj[sv].push((su, weight));
        }
        self.edges.push(Edge { u, v, weight });
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Neighbors of u with the weight of the connecting edge.
    pub fn neighbors(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.adj[slot_of(u, self.node_count())]
            .iter()
            .map(|&(v, w)| (node_of(v), w))
    }

    pub(crate) fn slot_neighbors(&self, s: Slot) -> &[(Slot, Weight)] {
        &self.adj[s]
    }
}
