//! Chromatic aberration: the color channels are scaled by different amounts
//! so edges pick up red/blue fringes.

use crate::{
    foundation::core::Raster,
    foundation::error::{WobbleError, WobbleResult},
    transform::channels::{
        crop_margin, merge_channels, resize_channel, resize_raster, split_channels,
    },
};

/// Intensities below this are flattened to zero after the channel shift.
pub const CLIP_THRESHOLD: f32 = 0.2;

/// Round a shift down to the nearest even number.
pub fn even_shift(k: u32) -> u32 {
    k - k % 2
}

/// Offset the RGB channels by `k` pixels (odd `k` is rounded down).
///
/// Green is shrunk by `k` and blue by `2k`; red is cropped by `k` and green by
/// `k / 2` on every edge so all three line up at `(w - 2k, h - 2k)`. The
/// stack is then scaled back to the input size. `k == 0` returns the frame
/// unchanged.
pub fn chromatic_shift(frame: &Raster, k: u32) -> WobbleResult<Raster> {
    let k = even_shift(k);
    let (w, h) = frame.dimensions();
    if k == 0 {
        return Ok(frame.clone());
    }
    if k.checked_mul(2).is_none_or(|d| d >= w || d >= h) {
        return Err(WobbleError::validation(format!(
            "rgb shift {k} is too large for a {w}x{h} frame"
        )));
    }

    let [red, green, blue] = split_channels(frame);
    let green = resize_channel(&green, w - k, h - k);
    let blue = resize_channel(&blue, w - 2 * k, h - 2 * k);

    let red = crop_margin(&red, k)?;
    let green = crop_margin(&green, k / 2)?;

    let shifted = merge_channels(&red, &green, &blue)?;
    Ok(resize_raster(&shifted, w, h))
}

/// Zero every channel value below `threshold`.
pub fn clip_below(frame: &mut Raster, threshold: f32) {
    for px in frame.pixels_mut() {
        for c in px.0.iter_mut() {
            if *c < threshold {
                *c = 0.0;
            }
        }
    }
}

/// Channel shift followed by clipping at [`CLIP_THRESHOLD`].
pub fn post_process(frame: &Raster, k: u32) -> WobbleResult<Raster> {
    let mut out = chromatic_shift(frame, k)?;
    clip_below(&mut out, CLIP_THRESHOLD);
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/chromatic.rs"]
mod tests;
