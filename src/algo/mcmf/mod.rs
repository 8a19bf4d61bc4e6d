#[cfg(feature = "lemon-cpp")]
pub mod network_simplex;

pub mod successive_shortest_path;

use core::fmt::Debug;

use crate::graph::Graph;

/// How much flow a single augmentation pushes along the chosen path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Augmentation {
    /// Push the full bottleneck of the path.
    #[default]
    Bottleneck,
    /// Push exactly one unit, recording one path per unit.
    UnitStep,
}

/// The minimum cost max flow algorithm.
pub trait MinCostFlow {
    type Amount;
    type Error: Debug;
    type Paths;

    /// Run the algorithm over the specified graph, leaving the resulting flow in its residual
    /// capacities, and return the max-flow value along with the list of paths that were used.
    fn min_cost_flow(
        &mut self,
        graph: &mut Graph<Self::Amount>,
    ) -> Result<(Self::Amount, Self::Paths), Self::Error>;
}
