use std::path::Path;

use rand::Rng;

use crate::{
    animation::letter::Letter,
    assets::glyphs::GlyphSet,
    composition::grid::Grid,
    effects::chromatic::{even_shift, post_process},
    encode::gif::{GifSink, GifSinkOpts},
    encode::sink::{FrameSink, InMemorySink, SinkConfig},
    foundation::core::{FrameIndex, GridSize, Raster},
    foundation::error::{WobbleError, WobbleResult},
    layout::smart::SmartLayout,
    render::opts::{GridLayout, RenderOpts},
};

/// Summary of a finished render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames written.
    pub frames: usize,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Animated letters in the grid, spaces included.
    pub letters: usize,
}

/// Upper-case `text` and drop every character the glyph set cannot draw.
pub fn prepare_text(text: &str, glyphs: &GlyphSet) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(|c| glyphs.contains(*c))
        .collect()
}

/// Lay `text` out into a grid with one seeded and extended [`Letter`] per
/// drawable character.
pub fn build_grid<R: Rng + ?Sized>(
    text: &str,
    glyphs: &GlyphSet,
    opts: &RenderOpts,
    rng: &mut R,
) -> WobbleResult<Grid> {
    opts.validate()?;
    if glyphs.background() != opts.background {
        return Err(WobbleError::validation(format!(
            "glyphs were prepared for a {:?} background but the render uses {:?}",
            glyphs.background(),
            opts.background
        )));
    }

    let prepared = prepare_text(text, glyphs);
    let (size, cells_text) = match opts.layout {
        GridLayout::Fixed { x, y } => (GridSize::new(x, y)?, prepared),
        GridLayout::Smart { width } => {
            let layout = SmartLayout::new(&prepared, width)?;
            (layout.grid_size()?, layout.cells_text())
        }
    };

    let mut grid = Grid::new(size, glyphs.blank(), opts.frame_count())?;
    for ch in cells_text.chars() {
        let Some(glyph) = glyphs.get(ch) else {
            continue;
        };
        let mut letter = Letter::new(glyph.clone(), opts.max_shift, opts.background, rng);
        letter.extend_queue(opts.steps, true, rng);
        grid.append(letter, None);
    }

    tracing::debug!(
        cols = size.x,
        rows = size.y,
        chars = cells_text.chars().count(),
        "grid built"
    );
    Ok(grid)
}

/// Compose, post-process and push every frame of `grid` into `sink`.
#[tracing::instrument(skip_all, fields(frames = grid.frame_count()))]
pub fn render_to_sink(
    grid: &Grid,
    opts: &RenderOpts,
    sink: &mut dyn FrameSink,
) -> WobbleResult<RenderStats> {
    let (width, height) = grid.frame_shape();
    let k = even_shift(opts.rgb_shift);
    let frames = grid.frame_count();

    sink.begin(SinkConfig {
        width,
        height,
        frame_delay_ms: opts.frame_delay_ms,
        frame_count: frames,
    })?;
    for i in 0..frames {
        let frame = post_process(&grid.make_frame(i), k)?;
        sink.push_frame(FrameIndex(i as u64), &frame)?;
        tracing::trace!(frame = i, "frame pushed");
    }
    sink.end()?;

    Ok(RenderStats {
        frames,
        width,
        height,
        letters: grid
            .cells()
            .iter()
            .filter(|c| c.as_letter().is_some())
            .count(),
    })
}

/// Render every frame of `grid` into memory.
pub fn render_frames(grid: &Grid, opts: &RenderOpts) -> WobbleResult<Vec<Raster>> {
    let mut sink = InMemorySink::new();
    render_to_sink(grid, opts, &mut sink)?;
    Ok(sink.frames().iter().map(|(_, f)| f.clone()).collect())
}

/// Render every frame of `grid` into an animated GIF at `out_path`.
pub fn render_to_gif(
    grid: &Grid,
    opts: &RenderOpts,
    out_path: &Path,
) -> WobbleResult<RenderStats> {
    let mut sink = GifSink::new(GifSinkOpts::new(out_path));
    render_to_sink(grid, opts, &mut sink)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
