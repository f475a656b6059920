//! Per-channel split, merge and resize helpers.

use image::imageops::{self, FilterType};

use crate::foundation::core::Raster;
use crate::foundation::error::{WobbleError, WobbleResult};

/// Single float channel.
pub type Channel = image::ImageBuffer<image::Luma<f32>, Vec<f32>>;

/// Split `src` into red, green and blue planes.
pub fn split_channels(src: &Raster) -> [Channel; 3] {
    let (w, h) = src.dimensions();
    [0usize, 1, 2].map(|c| Channel::from_fn(w, h, |x, y| image::Luma([src.get_pixel(x, y).0[c]])))
}

/// Stack three equal-size planes back into a raster.
pub fn merge_channels(r: &Channel, g: &Channel, b: &Channel) -> WobbleResult<Raster> {
    let dims = r.dimensions();
    if g.dimensions() != dims || b.dimensions() != dims {
        return Err(WobbleError::render(format!(
            "channel shapes differ: r={:?} g={:?} b={:?}",
            dims,
            g.dimensions(),
            b.dimensions()
        )));
    }
    Ok(Raster::from_fn(dims.0, dims.1, |x, y| {
        image::Rgb([
            r.get_pixel(x, y).0[0],
            g.get_pixel(x, y).0[0],
            b.get_pixel(x, y).0[0],
        ])
    }))
}

/// Linear-filter resize; values stay in `[0, 1]`.
pub fn resize_channel(src: &Channel, width: u32, height: u32) -> Channel {
    if src.dimensions() == (width, height) {
        return src.clone();
    }
    imageops::resize(src, width, height, FilterType::Triangle)
}

/// [`resize_channel`] for all three channels at once.
pub fn resize_raster(src: &Raster, width: u32, height: u32) -> Raster {
    if src.dimensions() == (width, height) {
        return src.clone();
    }
    imageops::resize(src, width, height, FilterType::Triangle)
}

/// Remove `margin` pixels from every edge.
pub fn crop_margin(src: &Channel, margin: u32) -> WobbleResult<Channel> {
    let (w, h) = src.dimensions();
    if margin == 0 {
        return Ok(src.clone());
    }
    if margin.checked_mul(2).is_none_or(|d| d >= w || d >= h) {
        return Err(WobbleError::render(format!(
            "cannot crop {margin}px from each edge of a {w}x{h} channel"
        )));
    }
    Ok(imageops::crop_imm(src, margin, margin, w - 2 * margin, h - 2 * margin).to_image())
}

#[cfg(test)]
#[path = "../../tests/unit/transform/channels.rs"]
mod tests;
