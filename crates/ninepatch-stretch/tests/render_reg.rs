//! Stretch render regression test
//!
//! Checks output sizes, pixel-exact rendering at native size, fixed
//! patches surviving a resize unchanged, flattening of corrupted patches,
//! rendering into a larger canvas and the padding overlay.

use ninepatch_core::{Box, Pix, color};
use ninepatch_stretch::{
    AxisLayout, NinePatch, RenderOptions, ScaleMethod, render, render_into,
};
use ninepatch_test::{RegParams, bordered, checker_content};

const METHODS: [ScaleMethod; 2] = [ScaleMethod::Sampling, ScaleMethod::Linear];

fn sample_patch() -> NinePatch {
    let content = checker_content(6, 5).expect("content");
    let image = bordered(&content, ".##..#", "#..#.", "..####", ".###.").expect("bordered");
    NinePatch::new(image).expect("nine-patch")
}

fn options(method: ScaleMethod) -> RenderOptions {
    RenderOptions {
        method,
        ..RenderOptions::default()
    }
}

#[test]
fn render_reg() {
    let mut rp = RegParams::new("render");
    let np = sample_patch();
    let content = np.content().expect("content");

    // --- Test 1: output size always matches the request ---
    for (w, h) in [(1, 1), (3, 3), (6, 5), (7, 5), (13, 9), (40, 2), (2, 40)] {
        let out = np.render(w, h, &RenderOptions::default()).expect("render");
        rp.compare_values(w as f64, out.width() as f64, 0.0);
        rp.compare_values(h as f64, out.height() as f64, 0.0);
    }
    for target in 3..50 {
        let columns = AxisLayout::compute(np.horizontal_scan(), target);
        let rows = AxisLayout::compute(np.vertical_scan(), target);
        rp.compare_values(target as f64, columns.total() as f64, 0.0);
        rp.compare_values(target as f64, rows.total() as f64, 0.0);
    }

    // --- Test 2: native size reproduces the content exactly ---
    for method in METHODS {
        let out = np.render(6, 5, &options(method)).expect("native render");
        rp.compare_pix(&content, &out);
    }
    for (top, left) in [("#.....", "....."), ("......", "#####"), ("#.#.#.", ".#.#.")] {
        let image = bordered(&content, top, left, "......", ".....").expect("bordered");
        let other = NinePatch::new(image).expect("nine-patch");
        let out = other
            .render(6, 5, &options(ScaleMethod::Linear))
            .expect("native render");
        rp.compare_pix(&content, &out);
    }

    // --- Test 3: fixed patches are copied unchanged when enlarged ---
    let (tw, th) = (13, 9);
    let columns = AxisLayout::compute(np.horizontal_scan(), tw);
    let rows = AxisLayout::compute(np.vertical_scan(), th);
    for method in METHODS {
        let out = np.render(tw, th, &options(method)).expect("render");
        rp.write_pix(&out).expect("write");
        for row in rows.bands().iter().filter(|b| !b.run.is_stretch()) {
            for col in columns.bands().iter().filter(|b| !b.run.is_stretch()) {
                let rendered = out
                    .clip_rectangle(col.offset, row.offset, col.extent, row.extent)
                    .expect("clip out");
                let source = content
                    .clip_rectangle(col.run.start, row.run.start, col.run.len(), row.run.len())
                    .expect("clip content");
                rp.compare_pix(&source, &rendered);
            }
        }
    }

    // --- Test 4: rendering is deterministic ---
    let a = np.render(21, 17, &RenderOptions::default()).expect("render a");
    let b = np.render(21, 17, &RenderOptions::default()).expect("render b");
    rp.compare_pix(&a, &b);

    // --- Test 5: targets below the fixed extent still render ---
    let (min_w, min_h) = np.min_size();
    rp.compare_values(3.0, min_w as f64, 0.0);
    rp.compare_values(3.0, min_h as f64, 0.0);
    let small = np.render(2, 2, &RenderOptions::default()).expect("small");
    rp.compare_values(content.get_pixel(0, 1).unwrap_or(0) as f64, small.get_pixel(0, 0).unwrap_or(1) as f64, 0.0);

    // --- Test 6: zero size is rejected ---
    rp.compare_values(
        1.0,
        if np.render(0, 4, &RenderOptions::default()).is_err() { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup(), "render regression test failed");
}

#[test]
fn render_flatten_reg() {
    let mut rp = RegParams::new("render_flatten");
    let white = color::compose_rgb(255, 255, 255);

    let mut pm = Pix::new_filled(4, 4, white).expect("content").into_mut();
    pm.set_pixel(2, 2, color::compose_rgb(0, 0, 0)).expect("set");
    let content: Pix = pm.into();
    let image = bordered(&content, ".##.", ".##.", "....", "....").expect("bordered");
    let np = NinePatch::new(image).expect("nine-patch");

    // --- Test 1: the two-way patch is reported corrupted ---
    let corrupted = np.corrupted_patches();
    rp.compare_values(1.0, corrupted.len() as f64, 0.0);
    rp.compare_values(
        1.0,
        if corrupted.get(0) == Some(&Box::new_unchecked(1, 1, 2, 2)) { 1.0 } else { 0.0 },
        0.0,
    );

    // --- Test 2: default options paint the patch from its top-left pixel ---
    let cell = Box::new_unchecked(1, 1, 10, 10);
    for method in [ScaleMethod::Sampling, ScaleMethod::Linear] {
        let flat = np.render(12, 12, &options(method)).expect("flat");
        let smeared = np
            .render(
                12,
                12,
                &RenderOptions {
                    method,
                    flatten_corrupted: false,
                    ..Default::default()
                },
            )
            .expect("smeared");
        rp.compare_values(1.0, if flat.is_uniform_in_box(&cell) { 1.0 } else { 0.0 }, 0.0);
        rp.compare_values(white as f64, flat.get_pixel(5, 5).unwrap_or(0) as f64, 0.0);
        rp.compare_values(0.0, if smeared.is_uniform_in_box(&cell) { 1.0 } else { 0.0 }, 0.0);
        rp.write_pix(&flat).expect("write");
    }

    // --- Test 3: at native size the corrupted patch is copied as is ---
    for method in [ScaleMethod::Sampling, ScaleMethod::Linear] {
        let native = np.render(4, 4, &options(method)).expect("native");
        rp.compare_pix(&content, &native);
    }

    assert!(rp.cleanup(), "render flatten regression test failed");
}

#[test]
fn render_into_reg() {
    let mut rp = RegParams::new("render_into");
    let np = sample_patch();
    let background = 0x11223344;

    // --- Test 1: drawing at an offset touches only the target box ---
    let mut canvas = Pix::new_filled(30, 20, background).expect("canvas").into_mut();
    let target = Box::new_unchecked(5, 4, 13, 9);
    render_into(np.image(), np.grid(), &mut canvas, &target, &RenderOptions::default())
        .expect("render_into");
    let canvas: Pix = canvas.into();
    let direct = render(np.image(), np.grid(), 13, 9, &RenderOptions::default()).expect("render");
    let placed = canvas.clip_rectangle(5, 4, 13, 9).expect("clip");
    rp.compare_pix(&direct, &placed);
    let mut outside_untouched = true;
    for y in 0..20 {
        for x in 0..30 {
            if !target.contains_point(x as i32, y as i32) {
                outside_untouched &= canvas.get_pixel(x, y) == Some(background);
            }
        }
    }
    rp.compare_values(1.0, if outside_untouched { 1.0 } else { 0.0 }, 0.0);

    // --- Test 2: a target hanging off the canvas is clipped ---
    let mut canvas = Pix::new_filled(8, 8, background).expect("canvas").into_mut();
    render_into(
        np.image(),
        np.grid(),
        &mut canvas,
        &Box::new_unchecked(-3, -2, 13, 9),
        &RenderOptions::default(),
    )
    .expect("clipped render_into");
    let canvas: Pix = canvas.into();
    rp.compare_values(
        direct.get_pixel(3, 2).unwrap_or(0) as f64,
        canvas.get_pixel(0, 0).unwrap_or(1) as f64,
        0.0,
    );

    // --- Test 3: the padding overlay stays inside the content box ---
    let padding = *np.padding();
    rp.compare_values(2.0, padding.left as f64, 0.0);
    rp.compare_values(1.0, padding.top as f64, 0.0);
    rp.compare_values(0.0, padding.right as f64, 0.0);
    rp.compare_values(1.0, padding.bottom as f64, 0.0);
    let shown = np
        .render(
            13,
            9,
            &RenderOptions {
                show_padding: true,
                ..Default::default()
            },
        )
        .expect("padding render");
    let content_box = padding.content_box(13, 9).expect("content box");
    let mut inside_changed = false;
    let mut outside_same = true;
    for y in 0..9 {
        for x in 0..13 {
            let same = shown.get_pixel(x, y) == direct.get_pixel(x, y);
            if content_box.contains_point(x as i32, y as i32) {
                inside_changed |= !same;
            } else {
                outside_same &= same;
            }
        }
    }
    rp.compare_values(1.0, if inside_changed { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if outside_same { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "render_into regression test failed");
}
