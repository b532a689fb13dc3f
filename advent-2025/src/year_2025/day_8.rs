//! Day 8: stringing junction boxes into circuits

use advent_kit::{ParseError, PartSolver, PuzzleParser, RegisterSolver, SolveError, Solver};
use anyhow::{Context, anyhow, ensure};
use itertools::Itertools;

use super::{failed, parse_lines};

/// Connections made for part 1 on the real input
pub const CONNECTIONS: usize = 1000;

#[derive(Solver, RegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2025, day = 8, tags = ["graph", "union-find"])]
pub struct Day8;

type Point = [i64; 3];

#[derive(Debug)]
pub struct Playground {
    boxes: Vec<Point>,
    /// Every pair `(distance², i, j)` with `i < j`, closest first
    pairs: Vec<(u64, usize, usize)>,
}

impl PuzzleParser for Day8 {
    type Shared<'a> = Playground;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let boxes = parse_lines(input, |line| {
            let coords: Vec<i64> = line
                .split(',')
                .map(|c| c.trim().parse().with_context(|| format!("bad coordinate {c:?}")))
                .collect::<anyhow::Result<_>>()?;
            ensure!(coords.len() == 3, "expected X,Y,Z, got {} values", coords.len());
            Ok([coords[0], coords[1], coords[2]])
        })?;

        let pairs = (0..boxes.len())
            .tuple_combinations()
            .map(|(i, j)| (distance_squared(&boxes[i], &boxes[j]), i, j))
            .sorted_unstable()
            .collect();

        Ok(Playground { boxes, pairs })
    }
}

impl PartSolver<1> for Day8 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        largest_circuits_product(shared, CONNECTIONS).map(|p| p.to_string())
    }
}

impl PartSolver<2> for Day8 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let mut circuits = DisjointSet::new(shared.boxes.len());
        for &(_, i, j) in &shared.pairs {
            if circuits.union(i, j) && circuits.components() == 1 {
                return Ok((shared.boxes[i][0] * shared.boxes[j][0]).to_string());
            }
        }
        Err(failed(anyhow!(
            "{} boxes never form a single circuit",
            shared.boxes.len()
        )))
    }
}

fn distance_squared(a: &Point, b: &Point) -> u64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.abs_diff(*y).pow(2))
        .sum()
}

/// Product of the three largest circuit sizes after the `connections`
/// closest pairs are joined (already-connected pairs still count)
fn largest_circuits_product(playground: &Playground, connections: usize) -> Result<u64, SolveError> {
    let mut circuits = DisjointSet::new(playground.boxes.len());
    for &(_, i, j) in playground.pairs.iter().take(connections) {
        circuits.union(i, j);
    }

    let sizes: Vec<u64> = circuits
        .sizes()
        .into_iter()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .take(3)
        .map(|s| s as u64)
        .collect();
    if sizes.len() < 3 {
        return Err(failed(anyhow!("only {} circuits, need 3", sizes.len())));
    }
    Ok(sizes.iter().product())
}

/// Union-find with path halving and union by size
#[derive(Debug)]
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Join the sets of `a` and `b`; `false` if they were already joined
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut a, mut b) = (self.find(a), self.find(b));
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        self.components -= 1;
        true
    }

    fn components(&self) -> usize {
        self.components
    }

    fn sizes(&mut self) -> Vec<usize> {
        let roots: Vec<usize> = (0..self.parent.len())
            .filter(|&x| self.find(x) == x)
            .collect();
        roots.into_iter().map(|root| self.size[root]).collect()
    }
}
