//! Graph source parser.
//!
//! Input is whitespace-separated unsigned integers:
//!
//! ```text
//! vertexCount width height
//! v1 v2
//! v1 v2
//! ...
//! ```
//!
//! Line breaks carry no meaning beyond separating tokens, and `#` starts a
//! comment that runs to the end of the line.

use crate::error::{Error, Result};
use crate::graph::Graph;

// ─── GraphSource ─────────────────────────────────────────────────────────────

/// Parsed input: vertex count, canvas size and raw edge index pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSource {
    pub vertex_count: usize,
    pub width: usize,
    pub height: usize,
    pub edges: Vec<(usize, usize)>,
}

impl GraphSource {
    /// Build the graph, labelling vertex `i` with `"i"`.
    ///
    /// Fails with `InvalidGraph` if any edge index is out of range.
    pub fn to_graph(&self) -> Result<Graph> {
        let mut graph = Graph::with_index_labels(self.vertex_count)?;
        graph.extend_edges(&self.edges)?;
        Ok(graph)
    }
}

// ─── Tokens ──────────────────────────────────────────────────────────────────

/// Integer tokens tagged with their 1-based line number.
struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(src: &'a str) -> Self {
        let inner = src.lines().enumerate().flat_map(|(i, line)| {
            let code = line.split('#').next().unwrap_or("");
            code.split_whitespace().map(move |tok| (i + 1, tok))
        });
        Self {
            inner: Box::new(inner),
            last_line: 1,
        }
    }

    /// Next integer, `None` at end of input.
    fn next_int(&mut self) -> Result<Option<(usize, usize)>> {
        let Some((line, tok)) = self.inner.next() else {
            return Ok(None);
        };
        self.last_line = line;
        let value = tok.parse::<usize>().map_err(|_| Error::Parse {
            line,
            message: format!("expected a non-negative integer, found '{tok}'"),
        })?;
        Ok(Some((line, value)))
    }

    fn expect_int(&mut self, what: &str) -> Result<usize> {
        match self.next_int()? {
            Some((_, v)) => Ok(v),
            None => Err(Error::Parse {
                line: self.last_line,
                message: format!("missing {what}"),
            }),
        }
    }
}

// ─── Parser ──────────────────────────────────────────────────────────────────

/// Parse graph source text.
pub fn parse(src: &str) -> Result<GraphSource> {
    let mut tokens = Tokens::new(src);
    let vertex_count = tokens.expect_int("vertex count")?;
    let width = tokens.expect_int("canvas width")?;
    let height = tokens.expect_int("canvas height")?;

    let mut edges = Vec::new();
    while let Some((line, a)) = tokens.next_int()? {
        let Some((_, b)) = tokens.next_int()? else {
            return Err(Error::Parse {
                line,
                message: format!("edge starting at vertex {a} has no second endpoint"),
            });
        };
        edges.push((a, b));
    }

    Ok(GraphSource {
        vertex_count,
        width,
        height,
        edges,
    })
}

#[cfg(test)]
#[path = "../tests/rust/test_parser.rs"]
mod tests;
