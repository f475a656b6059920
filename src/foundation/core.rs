use crate::foundation::error::{WobbleError, WobbleResult};

/// Float RGB pixel buffer with intensities in `[0, 1]`.
pub type Raster = image::Rgb32FImage;

/// Canonical glyph width in pixels.
pub const GLYPH_WIDTH: u32 = 70;
/// Canonical glyph height in pixels.
pub const GLYPH_HEIGHT: u32 = 90;
/// Random-walk steps per letter before the reversed half is appended.
pub const DEFAULT_STEPS: usize = 30;

/// Zero-based frame number within one animation loop.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Canvas color behind the glyphs. Also the fill used for padding and rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    /// Black ink on white.
    #[default]
    White,
    /// White ink on black.
    Black,
}

impl Background {
    /// `Black` when `black` is set, otherwise `White`.
    pub fn from_black(black: bool) -> Self {
        if black { Self::Black } else { Self::White }
    }

    /// Channel value of the background: `1.0` for white, `0.0` for black.
    pub fn fill(self) -> f32 {
        match self {
            Self::White => 1.0,
            Self::Black => 0.0,
        }
    }

    /// A uniform raster of the background fill.
    pub fn blank(self, width: u32, height: u32) -> Raster {
        let v = self.fill();
        Raster::from_pixel(width, height, image::Rgb([v, v, v]))
    }
}

/// Grid dimensions in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridSize {
    /// Columns.
    pub x: u32,
    /// Rows.
    pub y: u32,
}

impl GridSize {
    /// Validated grid size; both dimensions must be non-zero.
    pub fn new(x: u32, y: u32) -> WobbleResult<Self> {
        if x == 0 || y == 0 {
            return Err(WobbleError::validation(format!(
                "grid must have at least one cell, got {x}x{y}"
            )));
        }
        Ok(Self { x, y })
    }

    /// Number of cells, `x * y`.
    pub fn cell_count(self) -> usize {
        (self.x as usize) * (self.y as usize)
    }

    /// Map an explicit placement index onto the grid. Anything past the end
    /// lands in the last cell.
    pub fn clamp_position(self, pos: usize) -> usize {
        pos.min(self.cell_count().saturating_sub(1))
    }

    /// Row-major `(row, col)` of a flat cell index.
    pub fn row_col(self, idx: usize) -> (u32, u32) {
        let x = self.x as usize;
        ((idx / x) as u32, (idx % x) as u32)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
