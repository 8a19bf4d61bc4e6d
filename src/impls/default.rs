use alloc::format;
use alloc::vec::Vec;

use petgraph::algo::has_path_connecting;
use petgraph::graphmap::DiGraphMap;

use crate::algo::cheapest_path::has_negative_cycle;
use crate::algo::mcmf::MinCostFlow;
use crate::amount::Amount;
use crate::error::Error;
use crate::graph::Graph;
use crate::path::AugmentingPath;
use crate::{Solution, Solver};

#[derive(Clone, Debug, Default)]
pub struct DefaultSolver<Algo> {
    algo: Algo,
}

impl<Algo> DefaultSolver<Algo> {
    pub fn new(algo: Algo) -> Self {
        Self { algo }
    }
}

impl<A, Algo> Solver for DefaultSolver<Algo>
where
    A: Amount,
    Algo: MinCostFlow<Amount = A, Paths = Vec<AugmentingPath<A>>>,
{
    type Amount = A;
    type Error = Error;

    fn run(&mut self, graph: &mut Graph<A>) -> Result<Solution<A>, Self::Error> {
        let (flow, paths) = self
            .algo
            .min_cost_flow(graph)
            .map_err(|e| Error::AlgoSpecific(format!("{e:?}")))?;
        let cost = graph.total_cost();

        log::info!("----------------------------------");
        log::info!("          Graph = {}", graph.name());
        log::info!("     Total flow = {flow}");
        log::info!("     Total cost = {cost}");
        log::info!("Augmenting paths = {}", paths.len());

        Ok(Solution { flow, cost, paths })
    }

    fn check(&self, graph: &Graph<A>) -> Result<(), Self::Error> {
        let zero = A::zero();

        for (u, v) in graph.pairs() {
            let capacity = graph.capacity_of(u, v);
            let back_capacity = graph.capacity_of(v, u);
            let residual = graph.residual_of(u, v);
            let flow = graph.forward_flow(u, v);

            if residual < zero || residual > capacity + back_capacity {
                return Err(Error::InvariantViolated(format!(
                    "residual {residual} of {u} -> {v} outside [0, {}]",
                    capacity + back_capacity
                )));
            }
            if residual + graph.residual_of(v, u) != capacity + back_capacity {
                return Err(Error::InvariantViolated(format!(
                    "residual mass of {u} <-> {v} is not conserved"
                )));
            }
            if flow > capacity {
                return Err(Error::InvariantViolated(format!(
                    "flow {flow} on {u} -> {v} exceeds capacity {capacity}"
                )));
            }
            if u != v && residual != capacity - flow + graph.forward_flow(v, u) {
                return Err(Error::InvariantViolated(format!(
                    "residual {residual} of {u} -> {v} does not match its flows"
                )));
            }
            if u != v
                && (capacity > zero || back_capacity > zero)
                && graph.cost_of(u, v) != -graph.cost_of(v, u)
            {
                return Err(Error::InvariantViolated(format!(
                    "costs of {u} -> {v} and {v} -> {u} are not opposite"
                )));
            }
        }

        // flow conservation on every vertex but the source and the sink
        let n = graph.vertex_count();
        for w in (0..n).filter(|&w| w != graph.source() && w != graph.sink()) {
            let inflow: A = (0..n).map(|u| graph.forward_flow(u, w)).sum();
            let outflow: A = (0..n).map(|v| graph.forward_flow(w, v)).sum();
            if inflow != outflow {
                return Err(Error::InvariantViolated(format!(
                    "vertex {w} receives {inflow} but sends {outflow}"
                )));
            }
        }

        // max flow: the sink must be cut off from the source in the residual graph
        let mut residual_graph = DiGraphMap::<usize, ()>::new();
        for v in 0..n {
            residual_graph.add_node(v);
        }
        for (u, v) in graph.pairs().filter(|&(u, v)| graph.residual_of(u, v) > zero) {
            residual_graph.add_edge(u, v, ());
        }
        if n > 1 && has_path_connecting(&residual_graph, graph.source(), graph.sink(), None) {
            return Err(Error::NotMaximal);
        }

        // min cost: no negative cycle left to cancel
        if has_negative_cycle(graph) {
            return Err(Error::NotMinimal);
        }

        log::debug!("       vertices: {n}");
        log::debug!("  residual arcs: {}", residual_graph.edge_count());
        log::debug!("     flow value: {}", graph.flow_value());
        log::debug!("     total cost: {}", graph.total_cost());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::mcmf::successive_shortest_path::SuccessiveShortestPath;
    use crate::algo::mcmf::Augmentation;
    use crate::loader::parse;

    fn solver(mode: Augmentation) -> DefaultSolver<SuccessiveShortestPath<i32>> {
        DefaultSolver::new(SuccessiveShortestPath::new(mode))
    }

    #[test]
    fn run_then_check() {
        let mut g: Graph<i32> = parse("routes", "4 0 1 2 1 1 3 2 1 0 2 3 5 2 3 3 5").unwrap();
        let mut s = solver(Augmentation::Bottleneck);
        let solution = s.run(&mut g).unwrap();
        assert_eq!(solution.flow, 5);
        assert_eq!(solution.cost, 34);
        assert_eq!(solution.paths.len(), 2);
        assert_eq!(s.check(&g), Ok(()));
    }

    #[test]
    fn unit_steps_pass_check() {
        let mut g: Graph<i32> =
            parse("reverse", "4 0 1 1 1 0 2 1 100 1 2 1 1 1 3 1 100 2 3 1 1").unwrap();
        let mut s = solver(Augmentation::UnitStep);
        let solution = s.run(&mut g).unwrap();
        assert_eq!(solution.flow, 2);
        assert_eq!(solution.cost, 202);
        assert_eq!(s.check(&g), Ok(()));
    }

    #[test]
    fn check_rejects_unfinished_flow() {
        let g: Graph<i32> = parse("untouched", "2 0 1 5 3").unwrap();
        assert_eq!(solver(Augmentation::Bottleneck).check(&g), Err(Error::NotMaximal));
    }

    #[test]
    fn check_rejects_expensive_flow() {
        let mut g: Graph<i32> = parse("detour", "4 0 1 1 0 1 2 1 10 2 3 1 0 1 3 1 1").unwrap();
        // the only unit goes the long way round while 1 -> 3 stays unused
        for (u, v) in [(0, 1), (1, 2), (2, 3)] {
            g.saturate(u, v, 1);
        }
        assert_eq!(solver(Augmentation::Bottleneck).check(&g), Err(Error::NotMinimal));
    }

    #[test]
    fn check_rejects_broken_conservation() {
        let mut g: Graph<i32> = parse("leak", "3 0 1 2 1 1 2 2 1").unwrap();
        g.saturate(0, 1, 2);
        g.saturate(1, 2, 1);
        assert!(matches!(
            solver(Augmentation::Bottleneck).check(&g),
            Err(Error::InvariantViolated(_))
        ));
    }
}
