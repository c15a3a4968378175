//! 5×5 digit font and label compositing.
//!
//! Glyphs are subtractive: they clear pixels, so a label is a filled halo
//! with the digits punched out of it. `draw_label` performs the two passes
//! in order (halo first, then every glyph).

use super::canvas::Canvas;
use super::raster::draw_disk;
use super::VERTEX_RADIUS;

pub const GLYPH_SIZE: usize = 5;
/// Horizontal distance between the left edges of consecutive glyphs.
pub const GLYPH_ADVANCE: i64 = 6;
/// Height of a label's bounding box.
pub const LABEL_HEIGHT: i64 = 8;
/// Vertical offset of the glyph row inside the label box.
pub const GLYPH_TOP: i64 = 2;

/// One row per entry; bit 4 is the leftmost column.
const DIGITS: [[u8; GLYPH_SIZE]; 10] = [
    [0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
    [0b00100, 0b01100, 0b00100, 0b00100, 0b01110],
    [0b11100, 0b00100, 0b01000, 0b10000, 0b11110],
    [0b01110, 0b00010, 0b01110, 0b00010, 0b01110],
    [0b01010, 0b01010, 0b01110, 0b00010, 0b00010],
    [0b00110, 0b00100, 0b00110, 0b00010, 0b00110],
    [0b01110, 0b01000, 0b01110, 0b01010, 0b01110],
    [0b01110, 0b01010, 0b00010, 0b00010, 0b00010],
    [0b01110, 0b01010, 0b01110, 0b01010, 0b01110],
    [0b01110, 0b01010, 0b01110, 0b00010, 0b01110],
];

/// Template for `ch`, or `None` if it is not an ASCII digit.
pub fn glyph(ch: char) -> Option<&'static [u8; GLYPH_SIZE]> {
    ch.to_digit(10).map(|d| &DIGITS[d as usize])
}

/// `(col, row)` offsets of every "on" cell of `ch`'s template.
pub fn glyph_cells(ch: char) -> Vec<(i64, i64)> {
    let Some(rows) = glyph(ch) else {
        return Vec::new();
    };
    let mut cells = Vec::new();
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_SIZE {
            if bits & (1 << (GLYPH_SIZE - 1 - col)) != 0 {
                cells.push((col as i64, row as i64));
            }
        }
    }
    cells
}

/// Clear the pixels of `ch`'s template with its top-left cell at `(x, y)`.
pub fn draw_glyph(canvas: &mut Canvas, ch: char, x: i64, y: i64) {
    for (col, row) in glyph_cells(ch) {
        canvas.set(x + col, y + row, false);
    }
}

/// Radius of the halo behind a label of `len` characters.
pub fn halo_radius(len: usize) -> i64 {
    let half_width = len as i64 * GLYPH_ADVANCE / 2;
    VERTEX_RADIUS.max(half_width + 1)
}

/// Draw a halo disk over the label box at `(x, y)`, then cut each glyph out of it.
pub fn draw_label(canvas: &mut Canvas, text: &str, x: i64, y: i64) {
    let len = text.chars().count();
    if len == 0 {
        return;
    }
    let text_width = len as i64 * GLYPH_ADVANCE;
    draw_disk(
        canvas,
        x + text_width / 2,
        y + LABEL_HEIGHT / 2,
        halo_radius(len),
    );
    for (i, ch) in text.chars().enumerate() {
        draw_glyph(canvas, ch, x + i as i64 * GLYPH_ADVANCE, y + GLYPH_TOP);
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_glyph.rs"]
mod tests;
