use bottleneck_paths::{
    graph::{Node, Weight},
    spanning_tree::BuildError,
    BottleneckSolver,
};

/// Tries every simple path. Only usable on tiny graphs.
#[allow(dead_code)]
#[derive(Debug)]
pub struct PathEnumeration {
    adj: Vec<Vec<(Node, Weight)>>,
}

#[allow(dead_code)]
impl PathEnumeration {
    fn search(
        &self,
        u: Node,
        target: Node,
        cur: Weight,
        seen: &mut [bool],
        best: &mut Option<Weight>,
    ) {
        if u == target {
            *best = Some(best.map_or(cur, |b| b.min(cur)));
            return;
        }
        seen[u] = true;
        for &(v, w) in &self.adj[u] {
            if !seen[v] {
                self.search(v, target, cur.max(w), seen, best);
            }
        }
        seen[u] = false;
    }
}

impl BottleneckSolver for PathEnumeration {
    fn new(n: usize) -> Self {
        Self {
            adj: vec![vec![]; n + 1],
        }
    }

    fn reset(&mut self, n: usize) {
        *self = Self::new(n);
    }

    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) {
        self.adj[u].push((v, weight));
        self.adj[v].push((u, weight));
    }

    fn try_build(&mut self) -> Result<(), BuildError> {
        Ok(())
    }

    fn query(&self, u: Node, v: Node) -> Weight {
        let mut best = None;
        self.search(u, v, 0, &mut vec![false; self.adj.len()], &mut best);
        best.expect("disconnected")
    }

    fn lca(&self, _u: Node, _v: Node) -> Node {
        unimplemented!("no rooted tree")
    }
}

/// Smallest weight under which u and v become connected, found by binary search.
#[allow(dead_code)]
#[derive(Debug)]
pub struct Threshold {
    adj: Vec<Vec<(Node, Weight)>>,
    weights: Vec<Weight>,
}

#[allow(dead_code)]
impl Threshold {
    fn connected_under(&self, u: Node, v: Node, limit: Weight) -> bool {
        let mut seen = vec![false; self.adj.len()];
        let mut stack = vec![u];
        seen[u] = true;
        while let Some(x) = stack.pop() {
            if x == v {
                return true;
            }
            stack.extend(self.adj[x].iter().filter_map(|&(y, w)| {
                if w <= limit && !seen[y] {
                    seen[y] = true;
                    Some(y)
                } else {
                    None
                }
            }));
        }
        false
    }
}

impl BottleneckSolver for Threshold {
    fn new(n: usize) -> Self {
        Self {
            adj: vec![vec![]; n + 1],
            weights: vec![],
        }
    }

    fn reset(&mut self, n: usize) {
        *self = Self::new(n);
    }

    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) {
        self.adj[u].push((v, weight));
        self.adj[v].push((u, weight));
        self.weights.push(weight);
    }

    fn try_build(&mut self) -> Result<(), BuildError> {
        self.weights.sort_unstable();
        self.weights.dedup();
        Ok(())
    }

    fn query(&self, u: Node, v: Node) -> Weight {
        if u == v {
            return 0;
        }
        let i = self
            .weights
            .partition_point(|&w| !self.connected_under(u, v, w));
        self.weights[i]
    }

    fn lca(&self, _u: Node, _v: Node) -> Node {
        unimplemented!("no rooted tree")
    }
}
