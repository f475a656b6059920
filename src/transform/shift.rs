//! Cyclic pixel shifts.

use crate::foundation::core::Raster;

/// Cyclically shift rows down by `shift` (negative shifts move up). Rows
/// pushed past the bottom edge reappear at the top.
pub fn roll_rows(src: &Raster, shift: i32) -> Raster {
    let (w, h) = src.dimensions();
    if h == 0 {
        return src.clone();
    }
    let k = wrap(shift, h);
    Raster::from_fn(w, h, |x, y| *src.get_pixel(x, (y + h - k) % h))
}

/// Cyclically shift columns right by `shift` (negative shifts move left).
pub fn roll_cols(src: &Raster, shift: i32) -> Raster {
    let (w, h) = src.dimensions();
    if w == 0 {
        return src.clone();
    }
    let k = wrap(shift, w);
    Raster::from_fn(w, h, |x, y| *src.get_pixel((x + w - k) % w, y))
}

fn wrap(shift: i32, len: u32) -> u32 {
    i64::from(shift).rem_euclid(i64::from(len)) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/transform/shift.rs"]
mod tests;
