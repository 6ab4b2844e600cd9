//! Binary lifting over a rooted spanning tree: 2^i-th ancestors together with the heaviest
//! edge on each jump. Answers LCA and path maximum queries in O(log n).

use std::fmt::{Debug, Display, Formatter};

use debug_tree::{add_branch_to, add_leaf_to, AsTree, TreeBuilder};

use crate::graph::{node_of, slot_of, Node, Slot, Weight};
use crate::spanning_tree::SpanningTree;

/// Used to pretty print an optional node, outputting ∅ for the parent of the root.
pub struct PrettyNode(pub Option<Node>);

impl Display for PrettyNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(u) => write!(f, "{u}"),
            None => write!(f, "∅"),
        }
    }
}

impl Debug for PrettyNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

use PrettyNode as P;

/// Number of lifting levels needed for a tree on n nodes. Depth differences are at most
/// n - 1, so the bit length of n is always enough.
pub fn levels_for(n: usize) -> usize {
    ((usize::BITS - n.leading_zeros()) as usize).max(1)
}

/// DFS frame for the explicit traversal stack.
struct Frame {
    u: Slot,
    parent: Slot,
    next_child: usize,
}

pub struct LiftingIndex {
    n: usize,
    root: Slot,
    /// depth[virtual] = 0, depth[root] = 1.
    depth: Vec<usize>,
    /// up[i][u] is the 2^i-th ancestor of u, or the virtual parent if there is none.
    up: Vec<Vec<Slot>>,
    /// max_up[i][u] is the heaviest edge on the jump up[i][u].
    max_up: Vec<Vec<Weight>>,
}

impl LiftingIndex {
    /// Roots the tree at `root` and fills every table with a single traversal.
    pub fn build(tree: &SpanningTree, root: Node) -> Self {
        let n = tree.node_count();
        let levels = levels_for(n);
        // Slot n is the virtual parent of the root. It points to itself with no weight.
        let virt = n;
        let mut index = Self {
            n,
            root: if n == 0 { virt } else { slot_of(root, n) },
            depth: vec![0; n + 1],
            up: vec![vec![virt; n + 1]; levels],
            max_up: vec![vec![0; n + 1]; levels],
        };
        if n == 0 {
            return index;
        }
        let mut stack = vec![];
        index.attach(index.root, virt, 0);
        stack.push(Frame {
            u: index.root,
            parent: virt,
            next_child: 0,
        });
        let mut visited = 1;
        while let Some(top) = stack.last_mut() {
            let Some(&(v, w)) = tree.slot_neighbors(top.u).get(top.next_child) else {
                stack.pop();
                continue;
            };
            top.next_child += 1;
            if v == top.parent {
                continue;
            }
            let u = top.u;
            index.attach(v, u, w);
            visited += 1;
            stack.push(Frame {
                u: v,
                parent: u,
                next_child: 0,
            });
        }
        debug_assert_eq!(visited, n, "spanning tree does not reach every node");
        log::debug!(
            "lifting index on {n} nodes with {levels} levels, max depth {}",
            index.depth.iter().max().copied().unwrap_or(0)
        );
        index
    }

    /// Fills u's row given its already filled parent p.
    fn attach(&mut self, u: Slot, p: Slot, w: Weight) {
        self.depth[u] = self.depth[p] + 1;
        self.up[0][u] = p;
        self.max_up[0][u] = w;
        for i in 1..self.levels() {
            let mid = self.up[i - 1][u];
            self.up[i][u] = self.up[i - 1][mid];
            self.max_up[i][u] = self.max_up[i - 1][u].max(self.max_up[i - 1][mid]);
        }
        log::trace!(
            "attach {} to {} depth {} weight {w}",
            node_of(u),
            self.pretty(p),
            self.depth[u]
        );
    }

    fn virt(&self) -> Slot {
        self.n
    }

    fn to_node(&self, s: Slot) -> Option<Node> {
        (s != self.virt()).then(|| node_of(s))
    }

    fn pretty(&self, s: Slot) -> PrettyNode {
        P(self.to_node(s))
    }

    fn slot(&self, u: Node) -> Slot {
        slot_of(u, self.n)
    }

    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Number of lifting levels L, jumps are by 2^0..2^(L-1).
    pub fn levels(&self) -> usize {
        self.up.len()
    }

    pub fn root(&self) -> Node {
        node_of(self.root)
    }

    /// Root has depth 1.
    pub fn depth(&self, u: Node) -> usize {
        self.depth[self.slot(u)]
    }

    pub fn parent(&self, u: Node) -> Option<Node> {
        self.ancestor(u, 0)
    }

    /// The 2^i-th ancestor of u. None if the jump goes above the root.
    pub fn ancestor(&self, u: Node, i: usize) -> Option<Node> {
        self.to_node(self.up[i][self.slot(u)])
    }

    /// Heaviest edge on the jump to the 2^i-th ancestor of u (or to the root, if that is closer).
    pub fn max_edge(&self, u: Node, i: usize) -> Weight {
        self.max_up[i][self.slot(u)]
    }

    /// The k-th ancestor of u, k = 0 being u itself.
    pub fn kth_ancestor(&self, u: Node, k: usize) -> Option<Node> {
        let u = self.slot(u);
        if k >= self.depth[u] {
            return None;
        }
        let (a, _) = self.lift(u, k);
        self.to_node(a)
    }

    /// Jumps k levels up from u. Returns the reached slot and the heaviest edge crossed.
    fn lift(&self, mut u: Slot, k: usize) -> (Slot, Weight) {
        let mut best = 0;
        for i in (0..self.levels()).rev() {
            if k & (1 << i) != 0 {
                best = best.max(self.max_up[i][u]);
                u = self.up[i][u];
            }
        }
        (u, best)
    }

    fn lca_slot(&self, mut u: Slot, mut v: Slot) -> Slot {
        if self.depth[u] < self.depth[v] {
            std::mem::swap(&mut u, &mut v);
        }
        for i in (0..self.levels()).rev() {
            if self.depth[self.up[i][u]] >= self.depth[v] {
                u = self.up[i][u];
            }
        }
        if u == v {
            return u;
        }
        for i in (0..self.levels()).rev() {
            if self.up[i][u] != self.up[i][v] {
                u = self.up[i][u];
                v = self.up[i][v];
            }
        }
        self.up[0][u]
    }

    /// Lowest common ancestor of u and v in the rooted tree.
    pub fn lca(&self, u: Node, v: Node) -> Node {
        let l = self.lca_slot(self.slot(u), self.slot(v));
        log::trace!("lca({u}, {v}) = {}", node_of(l));
        node_of(l)
    }

    fn max_edge_to_ancestor_slot(&self, u: Slot, a: Slot) -> Weight {
        assert!(
            self.depth[a] <= self.depth[u],
            "{} is deeper than {}",
            self.pretty(a),
            self.pretty(u)
        );
        let (reached, best) = self.lift(u, self.depth[u] - self.depth[a]);
        debug_assert_eq!(reached, a, "not an ancestor");
        best
    }

    /// Heaviest edge on the tree path from u up to its ancestor a. 0 if u == a.
    pub fn max_edge_to_ancestor(&self, u: Node, a: Node) -> Weight {
        self.max_edge_to_ancestor_slot(self.slot(u), self.slot(a))
    }

    /// Heaviest edge on the tree path between u and v.
    pub fn bottleneck(&self, u: Node, v: Node) -> Weight {
        let (su, sv) = (self.slot(u), self.slot(v));
        let l = self.lca_slot(su, sv);
        self.max_edge_to_ancestor_slot(su, l)
            .max(self.max_edge_to_ancestor_slot(sv, l))
    }

    fn tree_dbg<T: AsTree>(&self, u: Slot, children: &[Vec<Slot>], tree: &T) {
        let (label, depth, w) = (node_of(u), self.depth[u], self.max_up[0][u]);
        add_branch_to!(*tree, "[{label}] depth {depth} edge {w}");
        if children[u].is_empty() {
            add_leaf_to!(*tree, "<leaf>");
        }
        for &c in &children[u] {
            self.tree_dbg(c, children, tree);
        }
    }
}

impl Debug for LiftingIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let builder = TreeBuilder::new();
        let _b = builder.add_branch(&format!("LiftingIndex ({} levels)", self.levels()));
        if self.n > 0 {
            let mut children = vec![vec![]; self.n];
            for u in 0..self.n {
                if u != self.root {
                    children[self.up[0][u]].push(u);
                }
            }
            self.tree_dbg(self.root, &children, &builder);
        }
        writeln!(f, "{}", builder.string())
    }
}
