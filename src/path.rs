use alloc::vec::Vec;
use core::fmt;

use itertools::Itertools;
use serde::Serialize;

/// One augmentation: the vertices walked from source to sink, the bottleneck residual capacity
/// at the time the path was chosen, the amount actually pushed along it and the per-unit cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AugmentingPath<A> {
    vertices: Vec<usize>,
    bottleneck: A,
    flow: A,
    cost: A,
}

impl<A: Copy> AugmentingPath<A> {
    pub fn new(vertices: Vec<usize>, bottleneck: A, flow: A, cost: A) -> Self {
        Self {
            vertices,
            bottleneck,
            flow,
            cost,
        }
    }

    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Consecutive `(u, v)` pairs along the path.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.iter().copied().tuple_windows()
    }

    pub fn bottleneck(&self) -> A {
        self.bottleneck
    }

    pub fn flow(&self) -> A {
        self.flow
    }

    /// Sum of the edge costs along the path, i.e. the price of one unit of flow.
    pub fn cost(&self) -> A {
        self.cost
    }
}

impl<A: fmt::Display> fmt::Display for AugmentingPath<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) ({}) ${}",
            self.vertices.iter().join(" -> "),
            self.bottleneck,
            self.cost
        )
    }
}

/// Final flow over one original edge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EdgeFlow<A> {
    pub from: usize,
    pub to: usize,
    pub capacity: A,
    pub flow: A,
    pub cost: A,
}

impl<A: fmt::Display> fmt::Display for EdgeFlow<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flow {} -> {} ({}) ${}",
            self.from, self.to, self.capacity, self.cost
        )
    }
}
