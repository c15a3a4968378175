use super::*;

#[test]
fn test_glyph_lookup() {
    assert!(glyph('0').is_some());
    assert!(glyph('9').is_some());
    assert!(glyph('a').is_none());
    assert!(glyph(' ').is_none());
    // Non-ASCII digits have no template.
    assert!(glyph('٣').is_none());
}

#[test]
fn test_glyph_cells_seven() {
    assert_eq!(
        glyph_cells('7'),
        vec![(1, 0), (2, 0), (3, 0), (1, 1), (3, 1), (3, 2), (3, 3), (3, 4)]
    );
}

#[test]
fn test_every_digit_fits_the_advance() {
    for ch in '0'..='9' {
        let cells = glyph_cells(ch);
        assert!(!cells.is_empty(), "digit {ch} has no cells");
        assert!(cells.iter().all(|&(c, r)| c < GLYPH_ADVANCE && r < GLYPH_SIZE as i64));
    }
}

#[test]
fn test_glyph_cutout_inside_disk() {
    let mut c = Canvas::new(40, 40);
    draw_disk(&mut c, 20, 20, 8);
    let before = c.count_set();
    draw_glyph(&mut c, '7', 18, 18);

    let holes: Vec<(i64, i64)> = glyph_cells('7')
        .into_iter()
        .map(|(col, row)| (18 + col, 18 + row))
        .collect();
    assert_eq!(c.count_set(), before - holes.len());
    for y in 0..40 {
        for x in 0..40 {
            let in_disk = (x - 20) * (x - 20) + (y - 20) * (y - 20) <= 64;
            let expected = in_disk && !holes.contains(&(x, y));
            assert_eq!(c.get(x, y), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn test_glyph_on_background_changes_nothing() {
    let mut c = Canvas::new(10, 10);
    draw_glyph(&mut c, '8', 2, 2);
    assert_eq!(c.count_set(), 0);
}

#[test]
fn test_non_digit_glyph_is_noop() {
    let mut c = Canvas::new(20, 20);
    draw_disk(&mut c, 10, 10, 8);
    let before = c.count_set();
    draw_glyph(&mut c, 'x', 8, 8);
    draw_glyph(&mut c, '-', 8, 8);
    assert_eq!(c.count_set(), before);
}

#[test]
fn test_glyph_clips_at_edge() {
    let mut c = Canvas::new(3, 3);
    for y in 0..3 {
        for x in 0..3 {
            c.set(x, y, true);
        }
    }
    // Only the part of the template that overlaps the canvas is cleared.
    draw_glyph(&mut c, '7', -1, 0);
    assert!(!c.get(0, 0));
    assert!(!c.get(1, 0));
    assert!(!c.get(0, 1));
    assert!(c.get(1, 1));
    assert!(c.get(0, 2));
}

#[test]
fn test_halo_radius() {
    assert_eq!(halo_radius(1), 8);
    assert_eq!(halo_radius(2), 8);
    assert_eq!(halo_radius(3), 10);
    assert_eq!(halo_radius(4), 13);
}

#[test]
fn test_label_two_digits() {
    let mut c = Canvas::new(40, 40);
    draw_label(&mut c, "12", 10, 10);

    let one = glyph_cells('1');
    let two = glyph_cells('2');
    assert_eq!(c.count_set(), 197 - one.len() - two.len());
    for (col, row) in one {
        assert!(!c.get(10 + col, 12 + row));
    }
    for (col, row) in two {
        assert!(!c.get(16 + col, 12 + row));
    }
    // Halo is centred on the label box.
    assert!(c.get(16, 22));
    assert!(c.get(8, 14));
    assert!(!c.get(16, 23));
}

#[test]
fn test_label_skips_non_digits_but_advances() {
    let mut c = Canvas::new(40, 40);
    draw_label(&mut c, "a1", 10, 10);
    let one = glyph_cells('1');
    assert_eq!(c.count_set(), 197 - one.len());
    for (col, row) in one {
        assert!(!c.get(16 + col, 12 + row));
    }
}

#[test]
fn test_empty_label_draws_nothing() {
    let mut c = Canvas::new(20, 20);
    draw_label(&mut c, "", 5, 5);
    assert_eq!(c.count_set(), 0);
}
