//! Minimum-cost maximum-flow on small dense networks.
//!
//! A [`Graph`] holds capacity, residual capacity and cost matrices for vertices `0..N`, with
//! vertex `0` as the source and `N - 1` as the sink. The successive shortest path engine keeps
//! augmenting along the cheapest residual path (found with Moore-Bellman-Ford, since reverse
//! residual edges carry negative costs) until the sink is cut off.
//!
//! ```
//! use cheapflow::algo::mcmf::{successive_shortest_path::SuccessiveShortestPath, Augmentation};
//! use cheapflow::impls::default::DefaultSolver;
//! use cheapflow::{loader, Graph, Solver};
//!
//! let mut graph: Graph<i32> = loader::parse("example", "4 0 1 2 1 1 3 2 1 0 2 3 5 2 3 3 5")?;
//! let mut solver = DefaultSolver::new(SuccessiveShortestPath::new(Augmentation::Bottleneck));
//! let solution = solver.run(&mut graph)?;
//! assert_eq!((solution.flow, solution.cost), (5, 34));
//! solver.check(&graph)?;
//! # Ok::<(), cheapflow::Error>(())
//! ```

#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod algo;
mod amount;
mod error;
mod graph;
pub mod impls;
pub mod loader;
mod path;
pub mod report;

use alloc::vec::Vec;

pub use crate::amount::Amount;
pub use crate::error::Error;
pub use crate::graph::{Graph, Matrix};
pub use crate::path::{AugmentingPath, EdgeFlow};

/// The outcome of one min-cost max-flow run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<A> {
    /// Value of the maximum flow.
    pub flow: A,
    /// Cost of that flow over the original edges.
    pub cost: A,
    pub paths: Vec<AugmentingPath<A>>,
}

pub trait Solver {
    type Amount;
    type Error;

    /// Pushes a minimum-cost maximum flow through `graph`, leaving it in the residual capacities.
    fn run(&mut self, graph: &mut Graph<Self::Amount>)
        -> Result<Solution<Self::Amount>, Self::Error>;

    /// Verifies that the residual state of `graph` describes a feasible flow of maximum value
    /// and minimum cost.
    fn check(&self, graph: &Graph<Self::Amount>) -> Result<(), Self::Error>;
}
