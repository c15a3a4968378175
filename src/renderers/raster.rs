//! Line and disk rasterization. Everything clips to the canvas silently.
//!
//! Arithmetic is done in 128-bit integers and the walk is restricted to the
//! part that can land on the canvas, so any `i64` input is accepted.

use super::canvas::Canvas;

/// Bresenham's line from `(x0, y0)` towards `(x1, y1)`.
///
/// The walk stops as soon as it reaches the endpoint, so the endpoint
/// itself is never painted and a zero-length line paints nothing.
/// Step `j` along the major axis lands on minor offset `j * n / m` rounded
/// to nearest with ties toward the start, which is the pixel the classic
/// error-accumulating loop visits.
pub fn draw_line(canvas: &mut Canvas, x0: i64, y0: i64, x1: i64, y1: i64) {
    let dx = i128::from(x1) - i128::from(x0);
    let dy = i128::from(y1) - i128::from(y0);
    let x_major = dx.abs() >= dy.abs();
    let (major, minor, start_major, start_minor, size) = if x_major {
        (dx, dy, i128::from(x0), i128::from(y0), canvas.width() as i128)
    } else {
        (dy, dx, i128::from(y0), i128::from(x0), canvas.height() as i128)
    };
    let (m, n) = (major.unsigned_abs(), minor.unsigned_abs());
    let (step_major, step_minor) = (major.signum(), minor.signum());

    // Steps whose major coordinate falls inside 0..size.
    let (first, last) = if step_major > 0 {
        (-start_major, size - start_major)
    } else {
        (start_major - size + 1, start_major + 1)
    };
    let first = first.max(0);
    let last = last.min(m as i128);

    for j in first..last {
        let t = n * j as u128;
        let k = t / m + u128::from(2 * (t % m) > m);
        let a = start_major + step_major * j;
        let b = start_minor + step_minor * k as i128;
        let (x, y) = if x_major { (a, b) } else { (b, a) };
        if let (Ok(x), Ok(y)) = (i64::try_from(x), i64::try_from(y)) {
            canvas.set(x, y, true);
        }
    }
}

/// Fill every pixel within Euclidean distance `radius` of `(cx, cy)`.
pub fn draw_disk(canvas: &mut Canvas, cx: i64, cy: i64, radius: i64) {
    if radius < 0 || canvas.width() == 0 || canvas.height() == 0 {
        return;
    }
    let (cx, cy, r) = (i128::from(cx), i128::from(cy), i128::from(radius));
    let r_sq = r.unsigned_abs().pow(2);
    let (x_lo, x_hi) = ((cx - r).max(0), (cx + r).min(canvas.width() as i128 - 1));
    let (y_lo, y_hi) = ((cy - r).max(0), (cy + r).min(canvas.height() as i128 - 1));

    for y in y_lo..=y_hi {
        let dy_sq = (y - cy).unsigned_abs().pow(2);
        for x in x_lo..=x_hi {
            let dx_sq = (x - cx).unsigned_abs().pow(2);
            if dx_sq.saturating_add(dy_sq) <= r_sq {
                canvas.set(x as i64, y as i64, true);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_raster.rs"]
mod tests;
