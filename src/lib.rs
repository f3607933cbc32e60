//! **glyph_mazes** generates rectangular mazes with the binary tree and sidewinder algorithms
//! and draws them as text with box drawing glyphs.

pub mod cells;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grid_iterators;
pub mod units;
