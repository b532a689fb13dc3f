//! Day 11: counting paths through the reactor's device graph

use std::collections::{HashMap, HashSet};

use advent_kit::{ParseError, PartSolver, PuzzleParser, RegisterSolver, SolveError, Solver};
use anyhow::anyhow;

use super::{failed, parse_lines};
use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};

#[derive(Solver, RegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2025, day = 11, tags = ["graph", "dp"])]
pub struct Day11;

/// Device graph with names interned to dense ids
#[derive(Debug, Default)]
pub struct Reactor<'a> {
    ids: HashMap<&'a str, usize>,
    outputs: Vec<Vec<usize>>,
}

impl<'a> Reactor<'a> {
    fn intern(&mut self, name: &'a str) -> usize {
        let next = self.ids.len();
        let id = *self.ids.entry(name).or_insert(next);
        if id == next {
            self.outputs.push(Vec::new());
        }
        id
    }

    fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// A device that can reach itself; path counts would be infinite
    fn find_cycle(&self) -> Option<&'a str> {
        let mut indegree = vec![0usize; self.outputs.len()];
        for &to in self.outputs.iter().flatten() {
            indegree[to] += 1;
        }
        let mut ready: Vec<usize> = (0..indegree.len()).filter(|&n| indegree[n] == 0).collect();
        let mut visited = 0;
        while let Some(node) = ready.pop() {
            visited += 1;
            for &to in &self.outputs[node] {
                indegree[to] -= 1;
                if indegree[to] == 0 {
                    ready.push(to);
                }
            }
        }
        if visited == self.outputs.len() {
            return None;
        }
        let stuck = indegree.iter().position(|&d| d > 0)?;
        self.ids
            .iter()
            .find(|&(_, &id)| id == stuck)
            .map(|(&name, _)| name)
    }

    /// Paths from `from` to `out` that pass through every device in `via`
    fn count_paths(&self, from: &str, via: &[&str]) -> Result<u64, SolveError> {
        let start = self
            .id(from)
            .ok_or_else(|| failed(anyhow!("no device named {from:?}")))?;
        let (Some(out), Some(via)) = (
            self.id("out"),
            via.iter().map(|name| self.id(name)).collect::<Option<Vec<_>>>(),
        ) else {
            return Ok(0);
        };

        let paths = DpCache::with_problem(
            HashMapBackend::new(),
            PathCount {
                reactor: self,
                out,
                via,
            },
        );
        let start_mask = paths.problem().visit(0, start);
        Ok(paths.get(&(start, start_mask)))
    }
}

impl PuzzleParser for Day11 {
    type Shared<'a> = Reactor<'a>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let mut reactor = Reactor::default();
        let lines = parse_lines(input, |line| {
            let (device, outputs) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("expected 'name: outputs', got {line:?}"))?;
            let device = device.trim();
            if device.is_empty() {
                return Err(anyhow!("missing device name"));
            }
            Ok((device, outputs.split_whitespace().collect::<Vec<_>>()))
        })?;

        let mut declared = HashSet::new();
        for (device, outputs) in lines {
            let from = reactor.intern(device);
            if !declared.insert(from) {
                return Err(ParseError::InvalidFormat(format!(
                    "device {device:?} listed twice"
                )));
            }
            let to: Vec<usize> = outputs.into_iter().map(|name| reactor.intern(name)).collect();
            reactor.outputs[from] = to;
        }

        if let Some(device) = reactor.find_cycle() {
            return Err(ParseError::InvalidFormat(format!(
                "devices form a loop through {device:?}"
            )));
        }
        Ok(reactor)
    }
}

impl PartSolver<1> for Day11 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        shared.count_paths("you", &[]).map(|n| n.to_string())
    }
}

impl PartSolver<2> for Day11 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        shared
            .count_paths("svr", &["dac", "fft"])
            .map(|n| n.to_string())
    }
}

/// Keyed by `(device, mask of required devices seen so far)`
struct PathCount<'r, 'a> {
    reactor: &'r Reactor<'a>,
    out: usize,
    via: Vec<usize>,
}

impl PathCount<'_, '_> {
    fn visit(&self, mask: u8, device: usize) -> u8 {
        self.via
            .iter()
            .position(|&v| v == device)
            .map_or(mask, |bit| mask | 1 << bit)
    }

    fn all_seen(&self) -> u8 {
        ((1u16 << self.via.len()) - 1) as u8
    }
}

impl DpProblem<(usize, u8), u64> for PathCount<'_, '_> {
    fn deps(&self, &(device, mask): &(usize, u8)) -> Vec<(usize, u8)> {
        if device == self.out {
            return vec![];
        }
        self.reactor.outputs[device]
            .iter()
            .map(|&next| (next, self.visit(mask, next)))
            .collect()
    }

    fn compute(&self, &(device, mask): &(usize, u8), deps: Vec<u64>) -> u64 {
        if device == self.out {
            u64::from(mask == self.all_seen())
        } else {
            deps.iter().sum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YOU_EXAMPLE: &str = "\
aaa: you hhh
you: bbb ccc
bbb: ddd eee
ccc: ddd eee fff
ddd: ggg
eee: out
fff: out
ggg: out
hhh: ccc fff iii
iii: out
";

    const SERVER_EXAMPLE: &str = "\
svr: aaa bbb
aaa: fft
fft: ccc
bbb: tty
tty: ccc
ccc: ddd eee
ddd: hub
hub: fff
eee: dac
dac: fff
fff: ggg hhh
ggg: out
hhh: out
";

    #[test]
    fn test_paths_from_you() {
        let mut shared = Day11::parse(YOU_EXAMPLE).unwrap();
        assert_eq!(Day11::solve_part(&mut shared, 1).unwrap(), "5");
    }

    #[test]
    fn test_paths_through_dac_and_fft() {
        let mut shared = Day11::parse(SERVER_EXAMPLE).unwrap();
        assert_eq!(Day11::solve_part(&mut shared, 2).unwrap(), "2");
        assert_eq!(shared.count_paths("svr", &[]).unwrap(), 8);
    }

    #[test]
    fn test_missing_start() {
        let mut shared = Day11::parse(SERVER_EXAMPLE).unwrap();
        assert!(Day11::solve_part(&mut shared, 1).is_err());
    }

    #[test]
    fn test_missing_required_device() {
        let shared = Day11::parse("svr: out\n").unwrap();
        assert_eq!(shared.count_paths("svr", &["dac"]).unwrap(), 0);
        assert_eq!(shared.count_paths("svr", &[]).unwrap(), 1);
    }

    #[test]
    fn test_loop_rejected() {
        let err = Day11::parse("a: b\nb: c\nc: a out\n").unwrap_err();
        assert!(err.to_string().contains("loop"));
        assert!(Day11::parse("a: b\na: c\n").is_err());
    }

    #[test]
    fn test_device_listed_twice() {
        // the first listing has no outputs
        let err = Day11::parse("x:\nx: out\n").unwrap_err();
        assert!(err.to_string().contains("listed twice"));

        let err = Day11::parse("you: x\nx: out\ny: out\nx:\n").unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }
}
