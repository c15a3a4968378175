//! Graph: ordered vertex collection plus validated undirected edges.
//!
//! Wraps a petgraph `UnGraph`. A vertex identifier is its position in the
//! collection, which is also its petgraph `NodeIndex`, so an edge can only
//! exist between vertices that exist.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::error::{Error, Result};
use crate::layout::types::Point;

/// A vertex with its computed position and optional display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub id: usize,
    pub position: Point,
    pub label: Option<String>,
}

impl Vertex {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            position: Point::default(),
            label: None,
        }
    }
}

/// Unordered pair of vertex identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub vertex1: usize,
    pub vertex2: usize,
}

/// Largest vertex count a graph accepts. The layout is quadratic in the
/// vertex count, so anything near this is already impractical to render.
pub const MAX_VERTICES: usize = 1 << 16;

#[derive(Debug, Clone)]
pub struct Graph {
    inner: UnGraph<Vertex, ()>,
}

impl Graph {
    /// Create `vertex_count` unlabelled vertices and no edges.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count < 1 {
            return Err(Error::InvalidGraph(
                "graph must have at least one vertex".to_string(),
            ));
        }
        if vertex_count > MAX_VERTICES {
            return Err(Error::InvalidGraph(format!(
                "{vertex_count} vertices exceeds the limit of {MAX_VERTICES}"
            )));
        }
        let mut inner = UnGraph::default();
        for id in 0..vertex_count {
            inner.add_node(Vertex::new(id));
        }
        Ok(Self { inner })
    }

    /// Create `vertex_count` vertices where vertex `i` is labelled `"i"`.
    pub fn with_index_labels(vertex_count: usize) -> Result<Self> {
        let mut g = Self::new(vertex_count)?;
        for v in g.inner.node_weights_mut() {
            v.label = Some(v.id.to_string());
        }
        Ok(g)
    }

    /// Build a graph, rejecting the whole edge list if any index is out of range.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut g = Self::new(vertex_count)?;
        g.extend_edges(edges)?;
        Ok(g)
    }

    /// Add edges after checking every endpoint; nothing is added on error.
    pub fn extend_edges(&mut self, edges: &[(usize, usize)]) -> Result<()> {
        for &(a, b) in edges {
            self.check_vertex(a)?;
            self.check_vertex(b)?;
        }
        self.inner.reserve_edges(edges.len());
        for &(a, b) in edges {
            self.inner.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
        }
        Ok(())
    }

    pub fn add_edge(&mut self, vertex1: usize, vertex2: usize) -> Result<()> {
        self.extend_edges(&[(vertex1, vertex2)])
    }

    fn check_vertex(&self, id: usize) -> Result<()> {
        if id < self.vertex_count() {
            Ok(())
        } else {
            Err(Error::InvalidGraph(format!(
                "edge references vertex {id}, but only vertices 0..{} exist",
                self.vertex_count()
            )))
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Vertices in identifier order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.inner.raw_nodes().iter().map(|n| &n.weight)
    }

    pub fn vertex(&self, id: usize) -> Option<&Vertex> {
        self.inner.node_weight(NodeIndex::new(id))
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.inner.edge_references().map(|e| Edge {
            vertex1: e.source().index(),
            vertex2: e.target().index(),
        })
    }

    pub fn set_label(&mut self, id: usize, label: impl Into<String>) -> Result<()> {
        self.check_vertex(id)?;
        self.inner[NodeIndex::new(id)].label = Some(label.into());
        Ok(())
    }

    /// Overwrite every vertex position, in identifier order.
    pub(crate) fn set_positions(&mut self, positions: &[Point]) {
        for (v, p) in self.inner.node_weights_mut().zip(positions) {
            v.position = *p;
        }
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_graph.rs"]
mod tests;
