//! Layout engine: convenience API for placing a whole graph.

pub mod force;
pub mod types;

pub use force::ForceLayout;
pub use types::Point;

use rand::Rng;

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::graph::Graph;

/// Run the force layout with custom parameters.
pub fn full_layout_with_config<R: Rng + ?Sized>(
    graph: &mut Graph,
    width: usize,
    height: usize,
    config: &LayoutConfig,
    rng: &mut R,
) -> Result<()> {
    ForceLayout::new(config.clone()).apply(graph, width, height, rng)
}
