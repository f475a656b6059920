//! Rotation about the raster center.

use kurbo::{Affine, Point};

use crate::foundation::core::Raster;

/// Pixel-space center used as the rotation pivot.
pub fn raster_center(width: u32, height: u32) -> Point {
    Point::new(
        (f64::from(width) - 1.0) / 2.0,
        (f64::from(height) - 1.0) / 2.0,
    )
}

/// Maps output pixel coordinates back to source coordinates for a
/// counter-clockwise rotation of `angle_deg` on screen (y down).
pub fn rotation_inverse_map(angle_deg: f64, center: Point) -> Affine {
    Affine::rotate_about(angle_deg.to_radians(), center)
}

/// Rotate `src` counter-clockwise by `angle_deg` around its center, sampling
/// bilinearly. Pixels that map outside the source take `fill`.
pub fn rotate_deg(src: &Raster, angle_deg: f64, fill: f32) -> Raster {
    let (w, h) = src.dimensions();
    if angle_deg == 0.0 || w == 0 || h == 0 {
        return src.clone();
    }
    let inv = rotation_inverse_map(angle_deg, raster_center(w, h));
    Raster::from_fn(w, h, |x, y| {
        let p = inv * Point::new(f64::from(x), f64::from(y));
        image::Rgb(sample_bilinear(src, p, fill))
    })
}

fn sample_bilinear(src: &Raster, p: Point, fill: f32) -> [f32; 3] {
    let (w, h) = src.dimensions();
    let x0 = p.x.floor();
    let y0 = p.y.floor();
    let tx = (p.x - x0) as f32;
    let ty = (p.y - y0) as f32;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let fetch = |x: i64, y: i64| -> [f32; 3] {
        if x < 0 || y < 0 || x >= i64::from(w) || y >= i64::from(h) {
            [fill; 3]
        } else {
            src.get_pixel(x as u32, y as u32).0
        }
    };

    let p00 = fetch(x0, y0);
    let p10 = fetch(x0 + 1, y0);
    let p01 = fetch(x0, y0 + 1);
    let p11 = fetch(x0 + 1, y0 + 1);

    let mut out = [0.0f32; 3];
    for c in 0..3 {
        let top = p00[c] + (p10[c] - p00[c]) * tx;
        let bottom = p01[c] + (p11[c] - p01[c]) * tx;
        out[c] = (top + (bottom - top) * ty).clamp(0.0, 1.0);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
