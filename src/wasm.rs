//! WASM bindings for graph-raster.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.
//! Both return the BMP file as a byte array.

use wasm_bindgen::prelude::*;

use crate::config::{RenderConfig, RowPadding};

/// Render graph source text to a BMP with default settings.
#[wasm_bindgen]
pub fn render(src: &str, seed: u64) -> Result<Vec<u8>, JsError> {
    crate::render_source(src, &RenderConfig::default(), seed)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Render graph source text with control over the simulation and row layout.
///
/// - `iterations`: number of layout steps
/// - `pad_rows`: pad BMP rows to 4 bytes so any width is accepted
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(
    src: &str,
    seed: u64,
    iterations: usize,
    pad_rows: bool,
) -> Result<Vec<u8>, JsError> {
    let mut config = RenderConfig::default();
    config.layout.iterations = iterations;
    if pad_rows {
        config.row_padding = RowPadding::Aligned;
    }
    crate::render_source(src, &config, seed).map_err(|e| JsError::new(&e.to_string()))
}
