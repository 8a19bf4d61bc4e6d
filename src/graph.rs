use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::max;
use core::ops::{Index, IndexMut};

use itertools::iproduct;

use crate::amount::Amount;
use crate::error::Error;

/// A dense square matrix addressed by `(row, column)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<A> {
    order: usize,
    cells: Vec<A>,
}

impl<A: Copy + Default> Matrix<A> {
    /// An `order x order` matrix of default values, `None` if it cannot be allocated.
    pub fn new(order: usize) -> Option<Self> {
        let len = order.checked_mul(order)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, A::default());
        Some(Self { order, cells })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn rows(&self) -> impl Iterator<Item = &[A]> + '_ {
        self.cells.chunks_exact(max(self.order, 1))
    }
}

impl<A> Index<(usize, usize)> for Matrix<A> {
    type Output = A;

    fn index(&self, (row, col): (usize, usize)) -> &A {
        &self.cells[row * self.order + col]
    }
}

impl<A> IndexMut<(usize, usize)> for Matrix<A> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut A {
        &mut self.cells[row * self.order + col]
    }
}

/// A flow network stored as three dense `N x N` matrices.
///
/// Vertex `0` is the source and vertex `N - 1` the sink. Adding an edge `u -> v` with cost `c`
/// also installs `-c` as the cost of `v -> u`, so that pushing flow back along a reverse residual
/// edge refunds what was paid for it.
#[derive(Clone, Debug)]
pub struct Graph<A> {
    name: String,
    capacity: Matrix<A>,
    residual: Matrix<A>,
    cost: Matrix<A>,
}

impl<A: Amount> Graph<A> {
    pub fn new(name: impl Into<String>, vertex_count: usize) -> Result<Self, Error> {
        if vertex_count == 0 {
            return Err(Error::NoVertices);
        }
        let matrix = || Matrix::new(vertex_count).ok_or(Error::TooManyVertices(vertex_count));
        Ok(Self {
            name: name.into(),
            capacity: matrix()?,
            residual: matrix()?,
            cost: matrix()?,
        })
    }

    /// Sets (or overwrites) the edge `from -> to`.
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: A, cost: A) -> Result<(), Error> {
        let n = self.vertex_count();
        if from >= n || to >= n {
            return Err(Error::OutOfRange {
                from: from as i64,
                to: to as i64,
                vertex_count: n,
            });
        }
        if capacity < A::zero() {
            return Err(Error::NegativeCapacity { from, to });
        }

        self.capacity[(from, to)] = capacity;
        self.residual[(from, to)] = capacity;
        self.cost[(from, to)] = cost;
        self.cost[(to, from)] = -cost;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertex_count(&self) -> usize {
        self.capacity.order()
    }

    pub fn source(&self) -> usize {
        0
    }

    pub fn sink(&self) -> usize {
        self.vertex_count() - 1
    }

    pub fn capacity_of(&self, u: usize, v: usize) -> A {
        self.capacity[(u, v)]
    }

    pub fn residual_of(&self, u: usize, v: usize) -> A {
        self.residual[(u, v)]
    }

    pub fn cost_of(&self, u: usize, v: usize) -> A {
        self.cost[(u, v)]
    }

    /// Moves `amount` units of residual capacity from `u -> v` over to `v -> u`.
    pub fn saturate(&mut self, u: usize, v: usize, amount: A) {
        debug_assert!(amount > A::zero());
        debug_assert!(amount <= self.residual[(u, v)]);

        self.residual[(u, v)] -= amount;
        self.residual[(v, u)] += amount;
    }

    pub fn forward_flow(&self, u: usize, v: usize) -> A {
        max(A::zero(), self.capacity[(u, v)] - self.residual[(u, v)])
    }

    /// All ordered vertex pairs in row-major order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + Clone {
        let n = self.vertex_count();
        iproduct!(0..n, 0..n)
    }

    /// The original edges, i.e. pairs with positive capacity, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs()
            .filter(move |&(u, v)| self.capacity[(u, v)] > A::zero())
    }

    /// Net amount of flow leaving the source.
    pub fn flow_value(&self) -> A {
        let s = self.source();
        let out: A = (0..self.vertex_count())
            .map(|v| self.forward_flow(s, v))
            .sum();
        let back: A = (0..self.vertex_count())
            .map(|u| self.forward_flow(u, s))
            .sum();
        out - back
    }

    pub fn total_cost(&self) -> A {
        self.edges()
            .map(|(u, v)| self.forward_flow(u, v) * self.cost[(u, v)])
            .sum()
    }

    pub fn capacities(&self) -> &Matrix<A> {
        &self.capacity
    }

    pub fn residuals(&self) -> &Matrix<A> {
        &self.residual
    }

    pub fn costs(&self) -> &Matrix<A> {
        &self.cost
    }

    /// Restores every residual capacity to the original capacity.
    pub fn reset(&mut self) {
        self.residual = self.capacity.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn two_routes() -> Graph<i32> {
        let mut g = Graph::new("two-routes", 4).unwrap();
        g.add_edge(0, 1, 2, 1).unwrap();
        g.add_edge(1, 3, 2, 1).unwrap();
        g.add_edge(0, 2, 3, 5).unwrap();
        g.add_edge(2, 3, 3, 5).unwrap();
        g
    }

    #[test]
    fn add_edge_installs_skew_cost() {
        let g = two_routes();
        assert_eq!(g.cost_of(0, 2), 5);
        assert_eq!(g.cost_of(2, 0), -5);
        assert_eq!(g.capacity_of(0, 2), 3);
        assert_eq!(g.capacity_of(2, 0), 0);
        assert_eq!(g.residual_of(0, 2), 3);
        assert_eq!(g.residual_of(2, 0), 0);
    }

    #[test]
    fn rejects_bad_edges() {
        let mut g = Graph::<i32>::new("bad", 3).unwrap();
        assert_eq!(
            g.add_edge(0, 3, 1, 1),
            Err(Error::OutOfRange {
                from: 0,
                to: 3,
                vertex_count: 3
            })
        );
        assert_eq!(
            g.add_edge(1, 2, -1, 1),
            Err(Error::NegativeCapacity { from: 1, to: 2 })
        );
        assert_eq!(g.edges().count(), 0);
        assert!(matches!(Graph::<i32>::new("empty", 0), Err(Error::NoVertices)));
    }

    #[test]
    fn rejects_overflowing_vertex_count() {
        assert!(Matrix::<i32>::new(usize::MAX).is_none());
        assert!(matches!(
            Graph::<i32>::new("huge", usize::MAX),
            Err(Error::TooManyVertices(n)) if n == usize::MAX
        ));
    }

    #[test]
    fn last_edge_wins() {
        let mut g = Graph::<i32>::new("dup", 2).unwrap();
        g.add_edge(0, 1, 4, 2).unwrap();
        g.add_edge(0, 1, 7, 3).unwrap();
        assert_eq!(g.capacity_of(0, 1), 7);
        assert_eq!(g.residual_of(0, 1), 7);
        assert_eq!(g.cost_of(1, 0), -3);
    }

    #[test]
    fn antiparallel_edge_overwrites_reverse_cost() {
        let mut g = Graph::<i32>::new("anti", 2).unwrap();
        g.add_edge(0, 1, 2, 5).unwrap();
        g.add_edge(1, 0, 1, 3).unwrap();
        assert_eq!(g.cost_of(1, 0), 3);
        assert_eq!(g.cost_of(0, 1), -3);
        assert_eq!(g.capacity_of(0, 1), 2);
        assert_eq!(g.edges().count(), 2);
    }

    #[test]
    fn saturate_moves_residual_mass() {
        let mut g = two_routes();
        g.saturate(0, 2, 2);
        assert_eq!(g.residual_of(0, 2), 1);
        assert_eq!(g.residual_of(2, 0), 2);
        assert_eq!(g.forward_flow(0, 2), 2);
        assert_eq!(g.forward_flow(2, 0), 0);

        g.saturate(2, 0, 1);
        assert_eq!(g.forward_flow(0, 2), 1);
        assert_eq!(g.residual_of(0, 2) + g.residual_of(2, 0), 3);
    }

    #[test]
    fn edges_in_row_major_order() {
        let g = two_routes();
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn flow_value_and_cost() {
        let mut g = two_routes();
        g.saturate(0, 1, 2);
        g.saturate(1, 3, 2);
        assert_eq!(g.flow_value(), 2);
        assert_eq!(g.total_cost(), 4);

        g.reset();
        assert_eq!(g.flow_value(), 0);
        assert_eq!(g.residuals(), g.capacities());
    }

    #[test]
    fn matrix_rows() {
        let g = two_routes();
        let rows: Vec<_> = g.capacities().rows().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], &[0, 2, 3, 0]);
    }
}
