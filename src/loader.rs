//! Reading and writing graphs in the plain edge-list format.
//!
//! The format is a whitespace separated stream of integers: the vertex count `N` followed by any
//! number of `u v capacity weight` quadruples. Line breaks carry no meaning.

use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use core::iter;
use core::str::FromStr;

use itertools::Itertools;

use crate::amount::Amount;
use crate::error::Error;
use crate::graph::Graph;

type Token<'a> = (usize, &'a str);

fn read<T: FromStr>((position, token): Token<'_>) -> Result<T, Error> {
    token.parse().map_err(|_| Error::InvalidToken {
        token: token.to_string(),
        position,
    })
}

fn read_next<'a, T, I>(tokens: &mut I) -> Result<T, Error>
where
    T: FromStr,
    I: Iterator<Item = Token<'a>>,
{
    tokens.next().ok_or(Error::TruncatedEdge).and_then(read)
}

fn vertex(id: i64, vertex_count: usize) -> Option<usize> {
    usize::try_from(id).ok().filter(|&v| v < vertex_count)
}

/// Builds a graph named `name` from the edge-list text `text`.
///
/// A repeated `(u, v)` pair overwrites the earlier entry.
pub fn parse<A: Amount>(name: &str, text: &str) -> Result<Graph<A>, Error> {
    let mut tokens = text.split_whitespace().enumerate();

    let vertex_count: usize = tokens
        .next()
        .ok_or(Error::MissingVertexCount)
        .and_then(read)?;
    let mut graph = Graph::new(name, vertex_count)?;
    let mut seen = BTreeSet::new();

    while let Some(head) = tokens.next() {
        let from: i64 = read(head)?;
        let to: i64 = read_next(&mut tokens)?;
        let capacity: A = read_next(&mut tokens)?;
        let weight: A = read_next(&mut tokens)?;

        let (u, v) = match (vertex(from, vertex_count), vertex(to, vertex_count)) {
            (Some(u), Some(v)) => (u, v),
            _ => {
                return Err(Error::OutOfRange {
                    from,
                    to,
                    vertex_count,
                })
            }
        };

        if !seen.insert((u, v)) {
            log::warn!("{name}: edge {u} -> {v} given more than once, keeping the last entry");
        }
        graph.add_edge(u, v, capacity, weight)?;
    }

    log::debug!(
        "{name}: loaded {vertex_count} vertices, {} edges",
        graph.edges().count()
    );
    Ok(graph)
}

/// Reads and parses the file at `path`; the graph is named after the path.
#[cfg(feature = "std")]
pub fn load_file<A, P>(path: P) -> Result<Graph<A>, Error>
where
    A: Amount,
    P: AsRef<std::path::Path>,
{
    let path = path.as_ref();
    let name = path.display().to_string();
    let text =
        std::fs::read_to_string(path).map_err(|e| Error::Io(alloc::format!("{name}: {e}")))?;
    parse(&name, &text)
}

/// Renders `graph` back into the edge-list format, one line per edge with positive capacity.
pub fn serialize<A: Amount>(graph: &Graph<A>) -> String {
    let mut lines = iter::once(graph.vertex_count().to_string()).chain(graph.edges().map(|(u, v)| {
        alloc::format!(
            "{u} {v} {} {}",
            graph.capacity_of(u, v),
            graph.cost_of(u, v)
        )
    }));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
