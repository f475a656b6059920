use std::{borrow::Cow, sync::Arc};

use image::imageops;

use crate::{
    animation::letter::Letter,
    foundation::core::{GridSize, Raster},
    foundation::error::{WobbleError, WobbleResult},
};

/// Content of one grid cell.
#[derive(Clone, Debug)]
pub enum Cell {
    /// An image drawn as-is on every frame (the filler by default).
    Static(Arc<Raster>),
    /// An animated glyph rendered at the frame index.
    Letter(Letter),
}

impl From<Letter> for Cell {
    fn from(l: Letter) -> Self {
        Self::Letter(l)
    }
}

impl From<Arc<Raster>> for Cell {
    fn from(r: Arc<Raster>) -> Self {
        Self::Static(r)
    }
}

impl Cell {
    /// The letter in this cell, if it holds one.
    pub fn as_letter(&self) -> Option<&Letter> {
        match self {
            Self::Letter(l) => Some(l),
            Self::Static(_) => None,
        }
    }

    fn render(&self, frame: usize) -> Cow<'_, Raster> {
        match self {
            Self::Letter(l) => Cow::Owned(l.render_state(frame)),
            Self::Static(r) => Cow::Borrowed(r.as_ref()),
        }
    }
}

/// Fixed-size row-major grid of cells.
///
/// Cell `i` sits at row `i / x` and column `i % x`. The number of cells never
/// changes after construction and the append cursor stays in `[0, len)`.
#[derive(Clone, Debug)]
pub struct Grid {
    size: GridSize,
    filler: Arc<Raster>,
    frame_count: usize,
    cells: Vec<Cell>,
    append_pointer: usize,
}

impl Grid {
    /// Every cell starts out as `filler`. The filler's dimensions are the
    /// cell size used for composing frames.
    pub fn new(size: GridSize, filler: Arc<Raster>, frame_count: usize) -> WobbleResult<Self> {
        let len = size.cell_count();
        if len == 0 {
            return Err(WobbleError::validation("grid must have at least one cell"));
        }
        let (fw, fh) = filler.dimensions();
        if fw == 0 || fh == 0 {
            return Err(WobbleError::validation("grid filler must not be empty"));
        }
        let cells = vec![Cell::Static(filler.clone()); len];
        Ok(Self {
            size,
            filler,
            frame_count,
            cells,
            append_pointer: 0,
        })
    }

    /// Place `item` and return the cell index it landed in.
    ///
    /// Without a position the item goes to the append cursor, which then
    /// advances and wraps back to 0 past the last cell. An explicit position
    /// past the end goes to the last cell.
    pub fn append(&mut self, item: impl Into<Cell>, position: Option<usize>) -> usize {
        let idx = match position {
            Some(pos) => self.size.clamp_position(pos),
            None => {
                let idx = self.append_pointer;
                self.append_pointer = (self.append_pointer + 1) % self.cells.len();
                idx
            }
        };
        self.cells[idx] = item.into();
        idx
    }

    /// Compose the full canvas for `frame`: each row's cells left to right,
    /// rows top to bottom.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn make_frame(&self, frame: usize) -> Raster {
        let (cw, ch) = self.cell_shape();
        let (w, h) = self.frame_shape();
        let mut canvas = Raster::new(w, h);
        for (i, cell) in self.cells.iter().enumerate() {
            let (row, col) = self.size.row_col(i);
            let img = cell.render(frame);
            imageops::replace(
                &mut canvas,
                &*img,
                i64::from(col * cw),
                i64::from(row * ch),
            );
        }
        canvas
    }

    /// `(width, height)` of one cell, taken from the filler.
    pub fn cell_shape(&self) -> (u32, u32) {
        self.filler.dimensions()
    }

    /// `(width, height)` of every frame this grid composes.
    pub fn frame_shape(&self) -> (u32, u32) {
        let (cw, ch) = self.cell_shape();
        (self.size.x * cw, self.size.y * ch)
    }

    /// Grid dimensions in cells.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at flat index `idx`.
    pub fn cell(&self, idx: usize) -> Option<&Cell> {
        self.cells.get(idx)
    }

    /// Index the next positionless [`Grid::append`] writes to.
    pub fn append_pointer(&self) -> usize {
        self.append_pointer
    }

    /// Frames in one animation loop.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Image placed in every cell that was never appended to.
    pub fn filler(&self) -> &Arc<Raster> {
        &self.filler
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/grid.rs"]
mod tests;
