use super::*;
use crate::transform::channels::Channel;

fn checker(w: u32, h: u32) -> Raster {
    Raster::from_fn(w, h, |x, y| {
        let v = if (x / 5 + y / 5) % 2 == 0 { 0.1 } else { 0.9 };
        image::Rgb([v, v * 0.5, 1.0 - v])
    })
}

#[test]
fn even_shift_rounds_down() {
    assert_eq!(even_shift(0), 0);
    assert_eq!(even_shift(1), 0);
    assert_eq!(even_shift(2), 2);
    assert_eq!(even_shift(7), 6);
}

#[test]
fn shift_preserves_frame_shape() {
    let src = checker(40, 30);
    for k in [2, 4, 6] {
        let out = chromatic_shift(&src, k).unwrap();
        assert_eq!(out.dimensions(), (40, 30));
    }
}

#[test]
fn zero_shift_is_identity() {
    let src = checker(12, 12);
    assert_eq!(chromatic_shift(&src, 0).unwrap(), src);
    assert_eq!(chromatic_shift(&src, 1).unwrap(), src);
}

#[test]
fn uniform_frame_stays_uniform() {
    let src = Raster::from_pixel(30, 20, image::Rgb([0.5, 0.25, 0.75]));
    let out = chromatic_shift(&src, 2).unwrap();
    for px in out.pixels() {
        assert!((px.0[0] - 0.5).abs() < 1e-3);
        assert!((px.0[1] - 0.25).abs() < 1e-3);
        assert!((px.0[2] - 0.75).abs() < 1e-3);
    }
}

#[test]
fn channels_are_offset_differently() {
    let src = checker(60, 60);
    let out = chromatic_shift(&src, 4).unwrap();
    let [r0, _, b0] = split_channels(&src);
    let [r1, _, b1] = split_channels(&out);
    let diff = |a: &Channel, b: &Channel| {
        a.pixels()
            .zip(b.pixels())
            .map(|(p, q)| (p.0[0] - q.0[0]).abs())
            .sum::<f32>()
    };
    // Red is cropped then scaled back up, blue is shrunk then scaled back up;
    // both move away from the source.
    assert!(diff(&r0, &r1) > 0.0);
    assert!(diff(&b0, &b1) > 0.0);
}

#[test]
fn oversized_shift_is_rejected() {
    let src = checker(10, 10);
    let err = chromatic_shift(&src, 6).unwrap_err();
    assert!(err.to_string().contains("too large"));
}

#[test]
fn huge_shift_is_rejected_without_overflow() {
    let src = checker(10, 10);
    let err = chromatic_shift(&src, 3_000_000_000).unwrap_err();
    assert!(err.to_string().contains("too large"));
    assert!(post_process(&src, u32::MAX).is_err());
}

#[test]
fn post_process_clips_dim_values() {
    let src = checker(40, 40);
    let out = post_process(&src, 2).unwrap();
    for px in out.pixels() {
        for &c in &px.0 {
            assert!((0.0..=1.0).contains(&c));
            assert!(c == 0.0 || c >= CLIP_THRESHOLD);
        }
    }
}

#[test]
fn clip_below_only_touches_small_values() {
    let mut img = Raster::from_fn(3, 1, |x, _| {
        let v = [0.1, 0.2, 0.8][x as usize];
        image::Rgb([v, v, v])
    });
    clip_below(&mut img, 0.2);
    assert_eq!(img.get_pixel(0, 0).0, [0.0; 3]);
    assert_eq!(img.get_pixel(1, 0).0, [0.2; 3]);
    assert_eq!(img.get_pixel(2, 0).0, [0.8; 3]);
}
