//! wobble renders a short text string as an animated GIF in which every
//! character trembles as if drawn by hand.
//!
//! # Pipeline overview
//!
//! 1. **Load**: glyph PNGs for one font become canonical-size float rasters ([`GlyphSet`])
//! 2. **Animate**: each character gets a [`Letter`] holding a bounded random walk of
//!    `(x_shift, y_shift, angle)` states, extended into a forward-and-back loop
//! 3. **Compose**: a [`Grid`] renders every cell at a frame index and tiles them row-major
//! 4. **Post-process**: a chromatic channel shift, then dim values are clipped to zero
//! 5. **Encode**: frames stream into a [`FrameSink`], normally a looping [`GifSink`]
//!
//! Randomness is always injected: [`Letter::new`] and [`Letter::extend_queue`] take a
//! `rand::Rng`, so seeding one generator makes a whole render reproducible.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod composition;
mod effects;
mod encode;
mod foundation;
mod layout;
mod render;

/// Pixel transforms used to animate glyphs (cyclic shifts, rotation, resizing).
pub mod transform;

pub use animation::letter::Letter;
pub use animation::state::{AnimationState, Borders};
pub use assets::glyphs::{GlyphSet, decode_glyph, pad_to_canonical, parse_glyph_file_name};
pub use composition::grid::{Cell, Grid};
pub use effects::chromatic::{
    CLIP_THRESHOLD, chromatic_shift, clip_below, even_shift, post_process,
};
pub use encode::gif::{GifSink, GifSinkOpts, ensure_gif_path, ensure_parent_dir, raster_to_rgba8};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{
    Background, DEFAULT_STEPS, FrameIndex, GLYPH_HEIGHT, GLYPH_WIDTH, GridSize, Raster,
};
pub use foundation::error::{WobbleError, WobbleResult};
pub use layout::smart::{SmartLayout, center, split_text};
pub use render::opts::{GridLayout, RenderOpts};
pub use render::pipeline::{
    RenderStats, build_grid, prepare_text, render_frames, render_to_gif, render_to_sink,
};
