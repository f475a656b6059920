use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use image::imageops;

use crate::{
    foundation::core::{Background, GLYPH_HEIGHT, GLYPH_WIDTH, Raster},
    foundation::error::{WobbleError, WobbleResult},
};

/// Glyph images for one font, all padded to the canonical glyph shape.
///
/// Glyph files live flat in one directory and are named `{font}_{char}.png`;
/// lowercase glyphs carry an extra `_lo` suffix (`{font}_a_lo.png`). A blank
/// space glyph is always present.
#[derive(Clone, Debug)]
pub struct GlyphSet {
    font: String,
    background: Background,
    glyphs: BTreeMap<char, Arc<Raster>>,
}

impl GlyphSet {
    /// Load every glyph file for `font` from `dir`.
    pub fn load(dir: &Path, font: &str, background: Background) -> WobbleResult<Self> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("read glyph directory '{}'", dir.display()))?;

        let mut files: Vec<(char, PathBuf)> = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| format!("list '{}'", dir.display()))?;
            let name = entry.file_name();
            let Some(ch) = name.to_str().and_then(|n| parse_glyph_file_name(n, font)) else {
                continue;
            };
            files.push((ch, entry.path()));
        }
        if files.is_empty() {
            return Err(WobbleError::asset(format!(
                "no glyph images for font '{font}' found in '{}' (expected files like '{font}_A.png')",
                dir.display()
            )));
        }
        files.sort();

        let mut decoded = Vec::with_capacity(files.len());
        for (ch, path) in files {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("read glyph '{}'", path.display()))?;
            let img = decode_glyph(&bytes)
                .map_err(|e| WobbleError::asset(format!("glyph '{}': {e}", path.display())))?;
            decoded.push((ch, img));
        }

        let set = Self::from_glyphs(font, background, decoded)?;
        tracing::debug!(font, glyphs = set.len(), dir = %dir.display(), "loaded glyphs");
        Ok(set)
    }

    /// Build a set from already decoded glyph images. Each one is padded to
    /// the canonical shape and a blank space glyph is added.
    pub fn from_glyphs(
        font: &str,
        background: Background,
        glyphs: impl IntoIterator<Item = (char, Raster)>,
    ) -> WobbleResult<Self> {
        let mut map = BTreeMap::new();
        for (ch, img) in glyphs {
            let padded = pad_to_canonical(&img, background)
                .map_err(|e| WobbleError::asset(format!("glyph '{ch}': {e}")))?;
            map.insert(ch, Arc::new(padded));
        }
        map.insert(' ', Arc::new(background.blank(GLYPH_WIDTH, GLYPH_HEIGHT)));
        Ok(Self {
            font: font.to_owned(),
            background,
            glyphs: map,
        })
    }

    /// Padded glyph for `ch`.
    pub fn get(&self, ch: char) -> Option<&Arc<Raster>> {
        self.glyphs.get(&ch)
    }

    /// Whether `ch` can be drawn.
    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    /// Drawable characters in ascending order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }

    /// Number of glyphs, including the blank space.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Never true for a loaded set; the space glyph is always present.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Font name the set was loaded for.
    pub fn font(&self) -> &str {
        &self.font
    }

    /// Background the glyphs were padded with.
    pub fn background(&self) -> Background {
        self.background
    }

    /// A canonical-size cell of plain background.
    pub fn blank(&self) -> Arc<Raster> {
        Arc::new(self.background.blank(GLYPH_WIDTH, GLYPH_HEIGHT))
    }
}

/// Character encoded in a glyph file name, if the file belongs to `font`.
pub fn parse_glyph_file_name(file_name: &str, font: &str) -> Option<char> {
    let path = Path::new(file_name);
    let ext = path.extension()?.to_str()?;
    if !ext.eq_ignore_ascii_case("png") {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let rest = stem.strip_prefix(font)?.strip_prefix('_')?;
    let label = match rest.strip_suffix("_lo") {
        Some(lower) => lower,
        None => rest,
    };
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Decode encoded image bytes into float RGB.
pub fn decode_glyph(bytes: &[u8]) -> WobbleResult<Raster> {
    let img = image::load_from_memory(bytes).context("decode glyph image")?;
    Ok(img.to_rgb32f())
}

/// Center `img` on a canonical-size background cell. An odd horizontal
/// remainder puts the extra column on the left, an odd vertical remainder puts
/// the extra row at the bottom.
pub fn pad_to_canonical(img: &Raster, background: Background) -> WobbleResult<Raster> {
    let (w, h) = img.dimensions();
    if w > GLYPH_WIDTH || h > GLYPH_HEIGHT {
        return Err(WobbleError::validation(format!(
            "glyph is {w}x{h}, larger than the {GLYPH_WIDTH}x{GLYPH_HEIGHT} cell"
        )));
    }
    let dw = GLYPH_WIDTH - w;
    let dh = GLYPH_HEIGHT - h;
    let left = dw / 2 + dw % 2;
    let top = dh / 2;

    let mut cell = background.blank(GLYPH_WIDTH, GLYPH_HEIGHT);
    imageops::replace(&mut cell, img, i64::from(left), i64::from(top));
    Ok(cell)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/glyphs.rs"]
mod tests;
