use alloc::vec::Vec;
use core::marker::PhantomData;

use itertools::Itertools;

use crate::algo::cheapest_path::cheapest_path;
use crate::algo::mcmf::{Augmentation, MinCostFlow};
use crate::amount::Amount;
use crate::graph::Graph;
use crate::path::AugmentingPath;

#[derive(Clone, Copy, Debug, Default)]
pub struct SuccessiveShortestPath<A> {
    mode: Augmentation,
    _amount: PhantomData<A>,
}

impl<A> SuccessiveShortestPath<A> {
    pub fn new(mode: Augmentation) -> Self {
        Self {
            mode,
            _amount: PhantomData,
        }
    }
}

impl<A: Amount> MinCostFlow for SuccessiveShortestPath<A> {
    type Amount = A;
    type Error = ();
    type Paths = Vec<AugmentingPath<A>>;

    fn min_cost_flow(
        &mut self,
        graph: &mut Graph<A>,
    ) -> Result<(Self::Amount, Self::Paths), Self::Error> {
        Ok(min_cost_max_flow(graph, self.mode))
    }
}

/// Augments along cheapest residual paths until the sink is cut off from the source.
///
/// Returns the total flow pushed and every augmenting path in the order it was found.
pub fn min_cost_max_flow<A: Amount>(
    graph: &mut Graph<A>,
    mode: Augmentation,
) -> (A, Vec<AugmentingPath<A>>) {
    let sink = graph.sink();
    let mut max_flow = A::zero();
    let mut paths = Vec::new();

    loop {
        let Some(vertices) = cheapest_path(graph).path_to(sink) else {
            break;
        };

        let Some(bottleneck) = vertices
            .iter()
            .tuple_windows()
            .map(|(&u, &v)| graph.residual_of(u, v))
            .min()
        else {
            break;
        };
        let amount = match mode {
            Augmentation::Bottleneck => bottleneck,
            Augmentation::UnitStep => A::one(),
        };
        let cost: A = vertices
            .iter()
            .tuple_windows()
            .map(|(&u, &v)| graph.cost_of(u, v))
            .sum();

        for (&u, &v) in vertices.iter().tuple_windows() {
            log::trace!("{u} --> {v}");
            graph.saturate(u, v, amount);
        }
        log::debug!("augmented {vertices:?} by {amount} (bottleneck {bottleneck}) at {cost} per unit");

        max_flow += amount;
        paths.push(AugmentingPath::new(vertices, bottleneck, amount, cost));
    }

    (max_flow, paths)
}
