//! graph-raster: force-directed graph layout rendered to black/white BMP images.
//!
//! Pipeline: validate → layout → draw → encode → write.
//!
//! Every structural problem (bad edge index, too few vertices, unusable
//! canvas width, bad layout parameters) is reported before any drawing
//! happens. Encoded bytes are buffered and handed to the sink in one write.

pub mod config;
pub mod error;
pub mod graph;
pub mod layout;
pub mod parser;
pub mod renderers;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::io::Write;

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use crate::config::{LayoutConfig, RenderConfig, RowPadding};
pub use crate::error::{Error, Result};
pub use crate::graph::{Edge, Graph, Vertex};
pub use crate::renderers::{BmpEncoder, Canvas, Encoder};

use crate::layout::full_layout_with_config;
use crate::renderers::draw_graph;

/// Lay out `graph` on a `width × height` canvas and draw it.
///
/// Vertex positions in `graph` are overwritten by the layout.
pub fn render_graph<R: Rng + ?Sized>(
    graph: &mut Graph,
    width: usize,
    height: usize,
    config: &RenderConfig,
    rng: &mut R,
) -> Result<Canvas> {
    config.validate(width, height)?;
    full_layout_with_config(graph, width, height, &config.layout, rng)?;

    let mut canvas = Canvas::new(width, height);
    draw_graph(&mut canvas, graph);
    debug!(
        "drew {} vertices and {} edges, {} foreground pixels",
        graph.vertex_count(),
        graph.edge_count(),
        canvas.count_set()
    );
    Ok(canvas)
}

/// Encode a finished canvas as BMP using the configured row padding.
pub fn encode(canvas: &Canvas, config: &RenderConfig) -> Vec<u8> {
    BmpEncoder::new(config.row_padding).encode(canvas)
}

/// Render `graph` and write the BMP bytes to `out`. Returns the byte count.
pub fn render_to_writer<W: Write, R: Rng + ?Sized>(
    graph: &mut Graph,
    width: usize,
    height: usize,
    config: &RenderConfig,
    rng: &mut R,
    mut out: W,
) -> Result<usize> {
    let canvas = render_graph(graph, width, height, config, rng)?;
    let bytes = encode(&canvas, config);
    out.write_all(&bytes)?;
    out.flush()?;
    info!("wrote {} bytes ({}x{} image)", bytes.len(), width, height);
    Ok(bytes.len())
}

/// Generator behind every seeded entry point. ChaCha output does not depend
/// on the target, so a seed reproduces the same image natively and in wasm.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Parse graph source text and render it to BMP bytes with a seeded RNG.
pub fn render_source(src: &str, config: &RenderConfig, seed: u64) -> Result<Vec<u8>> {
    let source = parser::parse(src)?;
    let mut graph = source.to_graph()?;
    let mut rng = seeded_rng(seed);
    let canvas = render_graph(&mut graph, source.width, source.height, config, &mut rng)?;
    Ok(encode(&canvas, config))
}
