//! Canvas: 2D boolean pixel grid used as the drawing surface.
//!
//! Pixels live in one contiguous row-major buffer (`row * width + col`).
//! `true` is foreground (black), `false` is background (white).

pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Canvas {
    /// A `width × height` canvas with every pixel set to background.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (col, row) = (x as usize, y as usize);
        if col < self.width && row < self.height {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    /// Pixel state at `(x, y)`; out-of-range reads are background.
    pub fn get(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some_and(|i| self.pixels[i])
    }

    /// Set the pixel at `(x, y)`; out-of-range writes are ignored.
    pub fn set(&mut self, x: i64, y: i64, on: bool) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = on;
        }
    }

    /// One slice per row, top row first.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[bool]> + '_ {
        // chunks() panics on zero; a zero-width canvas has no pixels anyway.
        self.pixels.chunks(self.width.max(1))
    }

    /// Number of foreground pixels.
    pub fn count_set(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// Coordinates of every foreground pixel, row by row.
    pub fn set_pixels(&self) -> Vec<(i64, i64)> {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, p)| **p)
            .map(|(i, _)| ((i % self.width) as i64, (i / self.width) as i64))
            .collect()
    }

    /// Render as text: `#` for foreground, trailing blanks and blank lines trimmed.
    pub fn render_to_string(&self) -> String {
        let mut lines: Vec<String> = self
            .rows()
            .map(|row| {
                row.iter()
                    .map(|&p| if p { '#' } else { ' ' })
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_canvas.rs"]
mod tests;
