use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use image::{
    Delay, DynamicImage, Frame, ImageFormat, RgbaImage,
    codecs::gif::{GifEncoder, Repeat},
};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, Raster};
use crate::foundation::error::{WobbleError, WobbleResult};

/// Options for [`GifSink`] output.
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output GIF file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
}

impl GifSinkOpts {
    /// Write to `out_path`, replacing any existing file.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
        }
    }
}

/// Sink that writes frames into an animated GIF looping forever.
pub struct GifSink {
    opts: GifSinkOpts,
    encoder: Option<GifEncoder<BufWriter<File>>>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl GifSink {
    /// Sink that opens its file on `begin`.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            cfg: None,
            last_idx: None,
        }
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> WobbleResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(WobbleError::validation(
                "gif sink width/height must be non-zero",
            ));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(WobbleError::validation(format!(
                "gif frames are limited to 65535x65535, got {}x{}",
                cfg.width, cfg.height
            )));
        }
        ensure_gif_path(&self.opts.out_path)?;
        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(WobbleError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }

        let file = File::create(&self.opts.out_path)
            .with_context(|| format!("create '{}'", self.opts.out_path.display()))?;
        let mut encoder = GifEncoder::new(BufWriter::new(file));
        encoder
            .set_repeat(Repeat::Infinite)
            .context("configure gif looping")?;

        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Raster) -> WobbleResult<()> {
        let (Some(cfg), Some(encoder)) = (self.cfg, self.encoder.as_mut()) else {
            return Err(WobbleError::encode("push_frame called before begin"));
        };
        if let Some(last) = self.last_idx
            && idx <= last
        {
            return Err(WobbleError::encode(format!(
                "frames must arrive in increasing order ({} after {})",
                idx.0, last.0
            )));
        }
        if frame.dimensions() != (cfg.width, cfg.height) {
            return Err(WobbleError::encode(format!(
                "frame {} is {:?}, expected {}x{}",
                idx.0,
                frame.dimensions(),
                cfg.width,
                cfg.height
            )));
        }

        let delay = Delay::from_numer_denom_ms(cfg.frame_delay_ms, 1);
        encoder
            .encode_frame(Frame::from_parts(raster_to_rgba8(frame), 0, 0, delay))
            .with_context(|| format!("encode gif frame {}", idx.0))?;
        self.last_idx = Some(idx);
        Ok(())
    }

    fn end(&mut self) -> WobbleResult<()> {
        if self.encoder.take().is_none() {
            return Err(WobbleError::encode("end called before begin"));
        }
        tracing::debug!(out = %self.opts.out_path.display(), "gif written");
        Ok(())
    }
}

/// Quantize a float raster to opaque RGBA8.
pub fn raster_to_rgba8(frame: &Raster) -> RgbaImage {
    DynamicImage::ImageRgb32F(frame.clone()).to_rgba8()
}

/// Reject output paths whose extension does not name a GIF.
pub fn ensure_gif_path(path: &Path) -> WobbleResult<()> {
    match ImageFormat::from_path(path) {
        Ok(ImageFormat::Gif) => Ok(()),
        Ok(other) => Err(WobbleError::validation(format!(
            "unsupported output format {other:?} for '{}' (only .gif is supported)",
            path.display()
        ))),
        Err(_) => Err(WobbleError::validation(format!(
            "cannot infer an output format from '{}' (use a .gif extension)",
            path.display()
        ))),
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> WobbleResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
