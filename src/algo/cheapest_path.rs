use alloc::vec;
use alloc::vec::Vec;

use crate::amount::Amount;
use crate::graph::Graph;

/// Cheapest distances and predecessors from the source over the residual graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths<A> {
    source: usize,
    dist: Vec<Option<A>>,
    pred: Vec<Option<usize>>,
}

impl<A: Copy> ShortestPaths<A> {
    /// Cost of the cheapest path to `v`, `None` if `v` is unreachable.
    pub fn distance(&self, v: usize) -> Option<A> {
        self.dist[v]
    }

    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.pred[v]
    }

    pub fn reaches(&self, v: usize) -> bool {
        v != self.source && self.dist[v].is_some()
    }

    /// The vertices of the cheapest path from the source to `target`, source first.
    ///
    /// Returns `None` if `target` is not reachable, or if the predecessor chain does not lead
    /// back to the source within `N` steps (which only happens on negative-cost cycles).
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.reaches(target) {
            return None;
        }

        let mut path = vec![target];
        let mut v = target;
        while v != self.source {
            if path.len() > self.pred.len() {
                return None;
            }
            v = self.pred[v]?;
            path.push(v);
        }
        path.reverse();
        Some(path)
    }
}

/// Moore-Bellman-Ford over every ordered vertex pair with positive residual capacity.
///
/// Reverse residual edges carry negative costs, so a Dijkstra-style search would be wrong here.
/// Pairs are scanned `u`-major in ascending order and only a strictly cheaper distance replaces
/// the current one, which makes the predecessor chosen on ties deterministic. Self-loops are
/// skipped; they can never be part of a cheapest path.
pub fn cheapest_path<A: Amount>(graph: &Graph<A>) -> ShortestPaths<A> {
    let n = graph.vertex_count();
    let source = graph.source();
    let mut dist = vec![None; n];
    let mut pred = vec![None; n];
    dist[source] = Some(A::zero());

    for pass in 0..n {
        let mut changed = false;
        for (u, v) in graph.pairs() {
            if u == v || graph.residual_of(u, v) <= A::zero() {
                continue;
            }
            let Some(du) = dist[u] else {
                continue;
            };

            let candidate = du + graph.cost_of(u, v);
            if dist[v].map_or(true, |dv| candidate < dv) {
                dist[v] = Some(candidate);
                pred[v] = Some(u);
                changed = true;
            }
        }

        log::trace!("relaxation pass {pass}: changed = {changed}");
        if !changed {
            break;
        }
    }

    ShortestPaths { source, dist, pred }
}

/// Whether the residual graph contains a cycle of negative total cost.
///
/// A flow of maximum value has minimum cost iff its residual graph has no such cycle. All
/// distances start at zero, as if a virtual root were connected to every vertex.
pub fn has_negative_cycle<A: Amount>(graph: &Graph<A>) -> bool {
    let n = graph.vertex_count();
    let mut dist = vec![A::zero(); n];

    for _ in 0..n {
        let mut changed = false;
        for (u, v) in graph.pairs() {
            if u == v || graph.residual_of(u, v) <= A::zero() {
                continue;
            }
            let candidate = dist[u] + graph.cost_of(u, v);
            if candidate < dist[v] {
                dist[v] = candidate;
                changed = true;
            }
        }
        if !changed {
            return false;
        }
    }

    true
}
