//! Console rendering of a finished run.

use alloc::vec::Vec;
use core::fmt;

use crate::amount::Amount;
use crate::graph::{Graph, Matrix};
use crate::path::{AugmentingPath, EdgeFlow};

/// A labelled matrix printed with every number right-aligned in a 5 character column.
pub struct MatrixView<'a, A> {
    label: &'a str,
    matrix: &'a Matrix<A>,
}

impl<'a, A> MatrixView<'a, A> {
    pub fn new(label: &'a str, matrix: &'a Matrix<A>) -> Self {
        Self { label, matrix }
    }
}

impl<A: Copy + Default + fmt::Display> fmt::Display for MatrixView<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n {} \n     ", self.label)?;
        for col in 0..self.matrix.order() {
            write!(f, "{col:5}")?;
        }
        writeln!(f)?;
        for (row, cells) in self.matrix.rows().enumerate() {
            write!(f, "{row:5}")?;
            for cell in cells {
                write!(f, "{cell:5}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Every original edge that ended up carrying flow, in row-major order.
pub fn edge_flows<A: Amount>(graph: &Graph<A>) -> Vec<EdgeFlow<A>> {
    graph
        .edges()
        .filter(|&(u, v)| graph.forward_flow(u, v) > A::zero())
        .map(|(from, to)| EdgeFlow {
            from,
            to,
            capacity: graph.capacity_of(from, to),
            flow: graph.forward_flow(from, to),
            cost: graph.cost_of(from, to),
        })
        .collect()
}

/// The complete console report of one solved graph.
pub struct Report<'a, A> {
    graph: &'a Graph<A>,
    paths: &'a [AugmentingPath<A>],
}

impl<'a, A> Report<'a, A> {
    pub fn new(graph: &'a Graph<A>, paths: &'a [AugmentingPath<A>]) -> Self {
        Self { graph, paths }
    }
}

impl<A: Amount> fmt::Display for Report<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.graph;

        writeln!(f)?;
        writeln!(
            f,
            "************ Find Flow {} ***************************",
            graph.name()
        )?;
        writeln!(f, "{}", MatrixView::new("Edge Cost", graph.costs()))?;
        writeln!(f, "{}", MatrixView::new("Capacity", graph.capacities()))?;
        for path in self.paths {
            writeln!(f, "{path}")?;
        }
        // only edges that are paid for are listed
        for flow in edge_flows(graph)
            .into_iter()
            .filter(|flow| flow.cost > A::zero())
        {
            writeln!(f, "{flow}")?;
        }
        writeln!(f, "{}", MatrixView::new("Residual", graph.residuals()))
    }
}
