use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use itertools::Itertools;
use mcmf::{Capacity, Cost, GraphBuilder, Vertex};

use crate::algo::mcmf::MinCostFlow;
use crate::error::Error;
use crate::graph::Graph;
use crate::path::AugmentingPath;

pub type EdgeCapacity = i32;

/// Solves with the network simplex implementation from LEMON (C++), then replays the resulting
/// path decomposition onto the residual graph.
#[derive(Clone, Copy, Debug, Default)]
pub struct NetworkSimplex;

fn to_vertex(graph: &Graph<EdgeCapacity>, v: usize) -> Vertex<usize> {
    if v == graph.source() {
        Vertex::Source
    } else if v == graph.sink() {
        Vertex::Sink
    } else {
        Vertex::Node(v)
    }
}

fn from_vertex(graph: &Graph<EdgeCapacity>, v: &Vertex<usize>) -> usize {
    match v {
        Vertex::Source => graph.source(),
        Vertex::Sink => graph.sink(),
        Vertex::Node(id) => *id,
    }
}

impl MinCostFlow for NetworkSimplex {
    type Amount = EdgeCapacity;
    type Error = Error;
    type Paths = Vec<AugmentingPath<EdgeCapacity>>;

    fn min_cost_flow(
        &mut self,
        graph: &mut Graph<Self::Amount>,
    ) -> Result<(Self::Amount, Self::Paths), Self::Error> {
        if graph.vertex_count() < 2 {
            return Ok((0, Vec::new()));
        }

        // build a graph from the original edges only, LEMON adds its own reverse arcs
        let builder = graph
            .edges()
            .fold(GraphBuilder::new(), |mut acc, (u, v)| {
                acc.add_edge(
                    to_vertex(graph, u),
                    to_vertex(graph, v),
                    Capacity(graph.capacity_of(u, v)),
                    Cost(graph.cost_of(u, v)),
                );
                acc
            });
        let (_, lemon_paths) = builder.mcmf();

        let mut max_flow = 0;
        let mut paths = Vec::new();
        for path in lemon_paths {
            let vertices: Vec<usize> = path
                .vertices()
                .into_iter()
                .map(|v| from_vertex(graph, v))
                .collect();
            let amount = path
                .flows
                .first()
                .ok_or_else(|| Error::AlgoSpecific("empty path in decomposition".to_string()))
                .and_then(|f| {
                    EdgeCapacity::try_from(f.amount).map_err(|e| Error::AlgoSpecific(format!("{e}")))
                })?;

            let mut cost = 0;
            for (&u, &v) in vertices.iter().tuple_windows() {
                if graph.residual_of(u, v) < amount {
                    return Err(Error::AlgoSpecific(format!(
                        "path {vertices:?} exceeds residual capacity of {u} -> {v}"
                    )));
                }
                cost += graph.cost_of(u, v);
                graph.saturate(u, v, amount);
            }

            max_flow += amount;
            paths.push(AugmentingPath::new(vertices, amount, amount, cost));
        }

        Ok((max_flow, paths))
    }
}
