//! Reads test cases from stdin until EOF and answers their bottleneck queries.
//!
//! Each test case is `n m`, then m lines `u v w`, then `q`, then q lines `s t`.
//! With `--self-check ROUNDS` it instead compares the Prim and Kruskal solvers on random graphs.

use std::error::Error;
use std::fmt::Display;
use std::io::{self, BufWriter, Read, Write};
use std::str::{FromStr, SplitAsciiWhitespace};

use bottleneck_paths::{
    bottleneck::LiftingSolver,
    bottleneck_solver,
    generator::{connected_graph, queries, TreeShape},
    graph::Node,
    spanning_tree::Kruskal,
    BottleneckSolver, FastBottleneckSolver,
};
use clap::Parser;
use flexi_logger::Logger;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Compare the Prim and Kruskal solvers on this many random graphs instead of reading stdin.
    #[arg(long, value_name = "ROUNDS")]
    self_check: Option<usize>,
    /// Seed for the self check.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

struct Tokens<'a>(SplitAsciiWhitespace<'a>);

impl Tokens<'_> {
    fn next<T>(&mut self, what: &str) -> Result<Option<T>, Box<dyn Error>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.0
            .next()
            .map(|tok| {
                tok.parse()
                    .map_err(|e| Box::<dyn Error>::from(format!("invalid {what} {tok:?}: {e}")))
            })
            .transpose()
    }

    fn expect<T>(&mut self, what: &str) -> Result<T, Box<dyn Error>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.next(what)?
            .ok_or_else(|| format!("unexpected end of input, expected {what}").into())
    }

    fn node(&mut self, what: &str, n: usize) -> Result<Node, Box<dyn Error>> {
        let u = self.expect(what)?;
        if !(1..=n).contains(&u) {
            return Err(format!("{what} {u} out of range 1..={n}").into());
        }
        Ok(u)
    }
}

/// Answers one test case whose node count was already read.
fn answer_case(
    tokens: &mut Tokens,
    solver: &mut impl BottleneckSolver,
    case: usize,
    n: usize,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let m: usize = tokens.expect("edge count")?;
    log::info!("case {case}: {n} nodes, {m} edges");
    solver.reset(n);
    for _ in 0..m {
        let u = tokens.node("edge endpoint", n)?;
        let v = tokens.node("edge endpoint", n)?;
        let w = tokens.expect("edge weight")?;
        solver.add_edge(u, v, w);
    }
    solver.try_build()?;
    writeln!(out, "Case {case}:")?;
    let q: usize = tokens.expect("query count")?;
    for _ in 0..q {
        let s = tokens.node("query node", n)?;
        let t = tokens.node("query node", n)?;
        writeln!(out, "{}", solver.query(s, t))?;
    }
    Ok(())
}

fn run(input: &str, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let mut tokens = Tokens(input.split_ascii_whitespace());
    let mut solver = bottleneck_solver(0);
    let mut case = 0;
    while let Some(n) = tokens.next("node count")? {
        case += 1;
        answer_case(&mut tokens, &mut solver, case, n, out)
            .map_err(|e| format!("case {case}: {e}"))?;
    }
    Ok(())
}

fn self_check(rounds: usize, seed: u64, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    const SHAPES: [TreeShape; 3] = [TreeShape::Random, TreeShape::Path, TreeShape::Star];
    let mut rng = StdRng::seed_from_u64(seed);
    for round in 0..rounds {
        let n = rng.gen_range(1..=200);
        let shape = SHAPES[round % SHAPES.len()];
        // Few distinct weights, so the two algorithms often pick different trees.
        let edges = connected_graph(n, shape, 2 * n, 20, rng.gen());
        let mut prim = FastBottleneckSolver::new(n);
        let mut kruskal = LiftingSolver::<Kruskal>::new(n);
        for &(u, v, w) in &edges {
            prim.add_edge(u, v, w);
            kruskal.add_edge(u, v, w);
        }
        prim.try_build()?;
        kruskal.try_build()?;
        for (u, v) in queries(n, 200, rng.gen()) {
            let (a, b) = (prim.query(u, v), kruskal.query(u, v));
            if a != b {
                return Err(format!(
                    "round {round} ({} tree, {n} nodes): query({u}, {v}) prim {a} kruskal {b}",
                    shape.label()
                )
                .into());
            }
        }
        log::debug!("round {round} ok");
    }
    writeln!(out, "self check passed: {rounds} graphs, seed {seed}")?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_env_or_str("warn")?.log_to_stderr().start()?;
    let args = Args::parse();
    let mut out = BufWriter::new(io::stdout().lock());
    if let Some(rounds) = args.self_check {
        self_check(rounds, args.seed, &mut out)?;
    } else {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        run(&input, &mut out)?;
    }
    out.flush()?;
    Ok(())
}
