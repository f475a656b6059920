pub mod glyphs;
