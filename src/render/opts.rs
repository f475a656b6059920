use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Background, DEFAULT_STEPS};
use crate::foundation::error::{WobbleError, WobbleResult};

/// How characters are arranged into grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridLayout {
    /// Fixed `x` columns by `y` rows, filled in reading order.
    Fixed {
        /// Columns.
        x: u32,
        /// Rows.
        y: u32,
    },
    /// Word-wrapped and centered lines; the grid is sized to fit.
    Smart {
        /// Requested line width; defaults to the longest word.
        #[serde(default)]
        width: Option<usize>,
    },
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::Fixed { x: 7, y: 3 }
    }
}

/// Options for one render.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOpts {
    /// Cell arrangement.
    pub layout: GridLayout,
    /// Background the glyphs are drawn on.
    pub background: Background,
    /// Largest per-step pixel shift of the random walk.
    pub max_shift: u32,
    /// Walk steps per letter; the animation has `2 * (steps + 1)` frames.
    pub steps: usize,
    /// Chromatic channel offset in pixels, rounded down to even.
    pub rgb_shift: u32,
    /// Display time of each GIF frame.
    pub frame_delay_ms: u32,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            layout: GridLayout::default(),
            background: Background::White,
            max_shift: 1,
            steps: DEFAULT_STEPS,
            rgb_shift: 2,
            frame_delay_ms: 100,
        }
    }
}

impl RenderOpts {
    /// Load options from a JSON file. Missing fields keep their defaults.
    pub fn from_path(path: &Path) -> WobbleResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read render options '{}'", path.display()))?;
        let opts: Self = serde_json::from_str(&s)
            .with_context(|| format!("parse render options '{}'", path.display()))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reject empty fixed grids and a zero frame delay.
    pub fn validate(&self) -> WobbleResult<()> {
        if let GridLayout::Fixed { x, y } = self.layout
            && (x == 0 || y == 0)
        {
            return Err(WobbleError::validation(format!(
                "fixed grid must have at least one cell, got {x}x{y}"
            )));
        }
        if self.frame_delay_ms == 0 {
            return Err(WobbleError::validation("frame_delay_ms must be > 0"));
        }
        Ok(())
    }

    /// Frames in one full forward-and-back loop.
    pub fn frame_count(&self) -> usize {
        2 * (self.steps + 1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/opts.rs"]
mod tests;
