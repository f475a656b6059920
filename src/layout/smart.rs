use crate::{
    foundation::core::GridSize,
    foundation::error::{WobbleError, WobbleResult},
};

/// Text broken into centered lines of equal width, ready to be placed cell by
/// cell into a `width x lines.len()` grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmartLayout {
    /// Centered lines, each exactly `width` characters.
    pub lines: Vec<String>,
    /// Characters per line.
    pub width: usize,
}

impl SmartLayout {
    /// Lay `text` out at `width` columns, widened to fit the longest word
    /// (and the longest packed line).
    pub fn new(text: &str, width: Option<usize>) -> WobbleResult<Self> {
        let longest_word = text
            .split_whitespace()
            .map(|w| w.chars().count())
            .max()
            .ok_or_else(|| WobbleError::validation("text has no drawable characters"))?;
        let width = width.unwrap_or(longest_word).max(longest_word);

        let raw = split_text(text, width);
        let width = raw
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(width)
            .max(width);
        let lines = raw.iter().map(|l| center(l, width)).collect();
        Ok(Self { lines, width })
    }

    /// `width x lines` grid that holds the layout.
    pub fn grid_size(&self) -> WobbleResult<GridSize> {
        let x = u32::try_from(self.width)
            .map_err(|_| WobbleError::validation("smart layout is too wide"))?;
        let y = u32::try_from(self.lines.len())
            .map_err(|_| WobbleError::validation("smart layout is too tall"))?;
        GridSize::new(x, y)
    }

    /// All lines concatenated, one character per grid cell.
    pub fn cells_text(&self) -> String {
        self.lines.concat()
    }
}

/// Greedily pack whitespace-separated words into lines.
///
/// A word starts a new line when the running count including it exceeds
/// `width`; the joining space is only counted after that check, so a packed
/// line can come out one column wider than `width`.
pub fn split_text(text: &str, width: usize) -> Vec<String> {
    let mut res = String::new();
    let mut ctr = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        ctr += len;
        if ctr > width {
            res.push('\n');
            ctr = len;
        } else if !res.is_empty() {
            res.push(' ');
            ctr += 1;
        }
        res.push_str(word);
    }
    res.split('\n').map(str::to_owned).collect()
}

/// Pad `line` with spaces on both sides to `width`. When the padding is odd
/// the extra space goes left only if `width` is odd too.
pub fn center(line: &str, width: usize) -> String {
    let len = line.chars().count();
    if len >= width {
        return line.to_owned();
    }
    let pad = width - len;
    let left = pad / 2 + (pad & width & 1);
    let right = pad - left;
    format!("{}{}{}", " ".repeat(left), line, " ".repeat(right))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/smart.rs"]
mod tests;
