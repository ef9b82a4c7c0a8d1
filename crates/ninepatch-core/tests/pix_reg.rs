//! Pix regression test
//!
//! Tests the image operations a nine-patch is built from: adding and
//! removing the marker border, clipping patches out, uniformity checks,
//! copy-on-write pixel updates, and translucent box overlays.

use ninepatch_core::{Box, Boxa, Color, Pix, color};
use ninepatch_test::{RegParams, checker_content};

#[test]
fn pix_reg() {
    let mut rp = RegParams::new("pix");

    let content = checker_content(6, 4).expect("content");

    // --- Test 1: Border add/remove round trip ---
    let framed = content.add_border(1, color::FIXED_MARKER).expect("add border");
    rp.compare_values(8.0, framed.width() as f64, 0.0);
    rp.compare_values(6.0, framed.height() as f64, 0.0);
    let corners = [(0, 0), (7, 0), (0, 5), (7, 5)];
    for (x, y) in corners {
        rp.compare_values(
            color::FIXED_MARKER as f64,
            framed.get_pixel(x, y).unwrap_or(u32::MAX) as f64,
            0.0,
        );
    }
    let unframed = framed.remove_border(1).expect("remove border");
    rp.compare_pix(&content, &unframed);
    rp.compare_values(1.0, framed.remove_border(3).is_err() as u8 as f64, 0.0);

    // --- Test 2: Clip a patch out of the bordered image ---
    let patch = framed.clip_rectangle(2, 1, 3, 2).expect("clip patch");
    let direct = content.clip_rectangle(1, 0, 3, 2).expect("clip rectangle");
    rp.compare_pix(&direct, &patch);
    let overhang = framed.clip_rectangle(6, 4, 5, 5).expect("clip overhang");
    rp.compare_values(2.0, overhang.width() as f64, 0.0);
    rp.compare_values(2.0, overhang.height() as f64, 0.0);
    rp.compare_values(1.0, framed.clip_rectangle(20, 20, 2, 2).is_err() as u8 as f64, 0.0);

    // --- Test 3: Border strips ---
    let top = framed.extract_row(0).expect("row");
    rp.compare_values(8.0, top.len() as f64, 0.0);
    rp.compare_values(1.0, top.iter().all(|&p| color::is_marker(p)) as u8 as f64, 0.0);
    let left = framed.extract_column(0).expect("column");
    rp.compare_values(6.0, left.len() as f64, 0.0);
    rp.compare_values(1.0, framed.extract_row(6).is_err() as u8 as f64, 0.0);

    // --- Test 4: Uniformity ---
    rp.compare_values(
        1.0,
        framed.is_uniform_in_box(&Box::new_unchecked(0, 0, 8, 1)) as u8 as f64,
        0.0,
    );
    rp.compare_values(
        0.0,
        framed.is_uniform_in_box(&Box::new_unchecked(1, 1, 2, 1)) as u8 as f64,
        0.0,
    );

    // --- Test 5: Copy-on-write update ---
    let mut edited = framed.clone();
    rp.compare_values(2.0, framed.ref_count() as f64, 0.0);
    edited
        .update_pixel(3, 0, color::STRETCH_MARKER)
        .expect("update pixel");
    rp.compare_values(1.0, framed.ref_count() as f64, 0.0);
    rp.compare_values(
        color::FIXED_MARKER as f64,
        framed.get_pixel(3, 0).unwrap_or(u32::MAX) as f64,
        0.0,
    );
    rp.compare_values(
        color::STRETCH_MARKER as f64,
        edited.get_pixel(3, 0).unwrap_or(0) as f64,
        0.0,
    );
    rp.compare_values(1.0, edited.update_pixel(8, 0, 0).is_err() as u8 as f64, 0.0);

    // --- Test 6: Overlays ---
    let mut canvas = Pix::new_filled(4, 4, color::compose_rgb(0, 0, 0))
        .expect("canvas")
        .into_mut();
    canvas
        .fill_box_blend(&Box::new_unchecked(0, 0, 2, 2), Color::RED, 0.5)
        .expect("blend");
    rp.compare_values(
        color::compose_rgb(128, 0, 0) as f64,
        canvas.get_pixel(1, 1).unwrap_or(0) as f64,
        0.0,
    );
    rp.compare_values(
        color::compose_rgb(0, 0, 0) as f64,
        canvas.get_pixel(2, 2).unwrap_or(0) as f64,
        0.0,
    );

    // Over a transparent pixel the overlay keeps its own colour
    let mut clear = Pix::new(3, 3).expect("clear").into_mut();
    let overlays: Boxa = [Box::new_unchecked(1, 1, 5, 5)].into_iter().collect();
    clear
        .fill_boxa_blend(&overlays, Color::new(94, 94, 255), 0.5)
        .expect("blend boxa");
    rp.compare_values(
        color::compose_rgba(94, 94, 255, 128) as f64,
        clear.get_pixel(2, 2).unwrap_or(0) as f64,
        0.0,
    );
    rp.compare_values(0.0, clear.get_pixel(0, 0).unwrap_or(1) as f64, 0.0);
    let bad_fract = clear.fill_box_blend(&overlays.boxes()[0], Color::RED, f32::NAN);
    rp.compare_values(1.0, bad_fract.is_err() as u8 as f64, 0.0);

    let overlay: Pix = clear.into();
    rp.write_pix(&overlay).expect("write overlay");

    assert!(rp.cleanup(), "pix regression test failed");
}
