//! Box/Boxa regression test
//!
//! Tests Box geometry (clipping, translation, overlap) and the Boxa
//! queries used on patch lists: total area and overlap detection.

use ninepatch_core::{Box, Boxa};
use ninepatch_test::RegParams;

#[test]
fn box_reg() {
    let mut rp = RegParams::new("box");

    // --- Test 1: Box creation and properties ---
    let b1 = Box::new(3, 2, 4, 5).expect("box create");
    rp.compare_values(7.0, b1.right() as f64, 0.0);
    rp.compare_values(7.0, b1.bottom() as f64, 0.0);
    rp.compare_values(20.0, b1.area() as f64, 0.0);
    rp.compare_values(1.0, Box::new(0, 0, -1, 2).is_err() as u8 as f64, 0.0);
    rp.compare_values(1.0, Box::new_unchecked(4, 4, 0, 3).is_empty() as u8 as f64, 0.0);

    // --- Test 2: Overlap ---
    let a = Box::new_unchecked(0, 0, 4, 4);
    let b = Box::new_unchecked(2, 3, 4, 4);
    rp.compare_values(1.0, a.overlaps(&b) as u8 as f64, 0.0);
    // Touching edges do not overlap
    let touching = Box::new_unchecked(4, 0, 2, 2);
    rp.compare_values(0.0, a.overlaps(&touching) as u8 as f64, 0.0);

    // --- Test 3: Clip against a canvas ---
    let c = Box::new_unchecked(-2, -1, 5, 5).clip(4, 3).expect("clip");
    rp.compare_values(0.0, c.x as f64, 0.0);
    rp.compare_values(0.0, c.y as f64, 0.0);
    rp.compare_values(3.0, c.w as f64, 0.0);
    rp.compare_values(3.0, c.h as f64, 0.0);
    rp.compare_values(
        1.0,
        Box::new_unchecked(4, 0, 2, 2).clip(4, 3).is_none() as u8 as f64,
        0.0,
    );

    // --- Test 4: Translation into a bordered image ---
    let t = Box::new_unchecked(0, 2, 3, 1).translate(1, 1);
    rp.compare_values(1.0, (t == Box::new_unchecked(1, 3, 3, 1)) as u8 as f64, 0.0);
    rp.compare_values(1.0, Box::new_unchecked(1, 1, 5, 5).contains_box(&t) as u8 as f64, 0.0);
    rp.compare_values(1.0, t.contains_point(3, 3) as u8 as f64, 0.0);
    rp.compare_values(0.0, t.contains_point(4, 3) as u8 as f64, 0.0);

    // --- Test 5: A 3x3 tiling of a 6x5 area ---
    let mut tiles = Boxa::new();
    for (y, h) in [(0, 2), (2, 1), (3, 2)] {
        for (x, w) in [(0, 1), (1, 4), (5, 1)] {
            tiles.push(Box::new_unchecked(x, y, w, h));
        }
    }
    rp.compare_values(9.0, tiles.len() as f64, 0.0);
    rp.compare_values(30.0, tiles.total_area() as f64, 0.0);
    rp.compare_values(0.0, tiles.has_overlap() as u8 as f64, 0.0);
    let outline = Box::new_unchecked(0, 0, 6, 5);
    rp.compare_values(1.0, tiles.iter().all(|t| outline.contains_box(t)) as u8 as f64, 0.0);

    let mut overlapped: Boxa = tiles.iter().copied().collect();
    overlapped.push(Box::new_unchecked(4, 1, 2, 2));
    rp.compare_values(10.0, overlapped.len() as f64, 0.0);
    rp.compare_values(1.0, overlapped.has_overlap() as u8 as f64, 0.0);
    rp.compare_boxes(&tiles, &overlapped.iter().take(9).copied().collect());

    // --- Test 6: Empty Boxa ---
    let empty = Boxa::new();
    rp.compare_values(1.0, empty.is_empty() as u8 as f64, 0.0);
    rp.compare_values(0.0, empty.total_area() as f64, 0.0);

    assert!(rp.cleanup(), "box regression test failed");
}
