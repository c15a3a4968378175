//! Configuration for the layout engine and the render pipeline.

use crate::error::{Error, Result};
use crate::renderers::BmpEncoder;

/// Default number of simulation steps.
pub const DEFAULT_ITERATIONS: usize = 1000;
/// Default multiplicative temperature decay per step.
pub const DEFAULT_COOLING_FACTOR: f64 = 0.99;

/// Parameters of the force simulation.
///
/// `ideal_edge_length` and `initial_temperature` are derived from the canvas
/// when left as `None`: `k = sqrt(W·H / n)` and `T0 = W / 10`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub iterations: usize,
    pub cooling_factor: f64,
    pub ideal_edge_length: Option<f64>,
    pub initial_temperature: Option<f64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            cooling_factor: DEFAULT_COOLING_FACTOR,
            ideal_edge_length: None,
            initial_temperature: None,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        let c = self.cooling_factor;
        if !c.is_finite() || c <= 0.0 || c > 1.0 {
            return Err(Error::InvalidConfig(format!(
                "cooling factor must be in (0, 1], got {c}"
            )));
        }
        check_positive("ideal edge length", self.ideal_edge_length)?;
        check_positive("initial temperature", self.initial_temperature)?;
        Ok(())
    }
}

fn check_positive(name: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(Error::InvalidConfig(format!(
            "{name} must be a positive finite number, got {v}"
        ))),
        _ => Ok(()),
    }
}

/// How BMP rows are laid out in the pixel data section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPadding {
    /// Rows are written unpadded; widths with `width * 3 % 4 != 0` are rejected.
    #[default]
    Strict,
    /// Rows are zero-padded to a 4-byte boundary; any width is accepted.
    Aligned,
}

/// Configuration for the whole pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderConfig {
    pub layout: LayoutConfig,
    pub row_padding: RowPadding,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the canvas size and every parameter before any work is done.
    pub fn validate(&self, width: usize, height: usize) -> Result<()> {
        let encoder = BmpEncoder::new(self.row_padding);
        if width == 0 || height == 0 || encoder.checked_encoded_len(width, height).is_none() {
            return Err(Error::InvalidCanvas { width, height });
        }
        let row_bytes = width.saturating_mul(3);
        if self.row_padding == RowPadding::Strict && row_bytes % 4 != 0 {
            return Err(Error::EncodingPrecondition { width, row_bytes });
        }
        self.layout.validate()
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
