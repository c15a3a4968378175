//! Rasterizer and encoders.
//!
//! `draw_graph` composites a laid-out graph onto a `Canvas`; an `Encoder`
//! then turns the finished canvas into bytes.

pub mod bmp;
pub mod canvas;
pub mod glyph;
pub mod raster;

pub use bmp::BmpEncoder;
pub use canvas::Canvas;

use crate::graph::Graph;

/// Radius of the disk drawn for every vertex.
pub const VERTEX_RADIUS: i64 = 8;
/// Offset from a vertex position to the top-left corner of its label box.
pub const LABEL_OFFSET: i64 = 7;

/// Trait for canvas encoders.
pub trait Encoder {
    /// Serialize a finished canvas.
    fn encode(&self, canvas: &Canvas) -> Vec<u8>;
}

/// Encodes the canvas as `#`/space text, one line per row.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPreview;

impl Encoder for TextPreview {
    fn encode(&self, canvas: &Canvas) -> Vec<u8> {
        canvas.render_to_string().into_bytes()
    }
}

/// Draw every edge, then every vertex marker and label, onto `canvas`.
pub fn draw_graph(canvas: &mut Canvas, graph: &Graph) {
    for edge in graph.edges() {
        let (Some(a), Some(b)) = (graph.vertex(edge.vertex1), graph.vertex(edge.vertex2)) else {
            continue;
        };
        raster::draw_line(
            canvas,
            a.position.x,
            a.position.y,
            b.position.x,
            b.position.y,
        );
    }

    for v in graph.vertices() {
        let p = v.position;
        raster::draw_disk(canvas, p.x, p.y, VERTEX_RADIUS);
        if let Some(label) = &v.label {
            glyph::draw_label(canvas, label, p.x + LABEL_OFFSET, p.y + LABEL_OFFSET);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_scene.rs"]
mod tests;
