//! PNG export of finished grids
//!
//! Each cell becomes a square pixel block; depth layers are laid out side
//! by side along the image's x axis. Uncollapsed cells (present only in
//! failed runs) render in a fixed marker color so partial results remain
//! inspectable.

use crate::io::configuration::CELL_PIXEL_SIZE;
use crate::io::error::{GenerationError, Result};
use image::{Rgba, RgbaImage};
use ndarray::Array3;
use std::collections::HashMap;
use std::path::Path;

/// Marker color for cells left uncollapsed at termination
const UNCOLLAPSED_COLOR: [u8; 4] = [24, 24, 24, 255];

/// Mapping from tile ids to render colors
#[derive(Clone, Debug)]
pub struct TilePalette {
    colors: HashMap<String, [u8; 4]>,
    fallback: [u8; 4],
}

impl TilePalette {
    /// Create a palette from explicit tile colors
    pub fn new(colors: HashMap<String, [u8; 4]>) -> Self {
        Self {
            colors,
            fallback: [255, 0, 255, 255],
        }
    }

    /// Derive a palette for arbitrary tile ids
    ///
    /// Hues step by the golden angle so neighboring indices stay visually
    /// distinct regardless of tile count; the assignment is deterministic
    /// in id order.
    pub fn generated(tile_ids: &[String]) -> Self {
        let colors = tile_ids
            .iter()
            .enumerate()
            .map(|(index, id)| {
                let hue = (index as f64 * 137.508) % 360.0;
                (id.clone(), hue_color(hue))
            })
            .collect();
        Self::new(colors)
    }

    /// Color for a tile id, falling back for unmapped ids
    pub fn color_of(&self, tile_id: &str) -> [u8; 4] {
        self.colors.get(tile_id).copied().unwrap_or(self.fallback)
    }
}

/// Convert a hue in degrees to an RGBA color at fixed saturation and value
fn hue_color(hue: f64) -> [u8; 4] {
    let saturation = 0.55;
    let value = 0.85;

    let chroma = value * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let offset = value - chroma;
    [
        ((r1 + offset) * 255.0) as u8,
        ((g1 + offset) * 255.0) as u8,
        ((b1 + offset) * 255.0) as u8,
        255,
    ]
}

/// Write a result grid as a PNG image
///
/// # Errors
///
/// Returns an error if the image cannot be written to `path`.
pub fn export_grid_as_png(
    grid: &Array3<Option<String>>,
    palette: &TilePalette,
    path: &Path,
) -> Result<()> {
    let (width, height, depth) = grid.dim();
    let image_width = (width * depth) as u32 * CELL_PIXEL_SIZE;
    let image_height = height as u32 * CELL_PIXEL_SIZE;
    let mut image = RgbaImage::new(image_width, image_height);

    for ((x, y, z), tile) in grid.indexed_iter() {
        let color = tile
            .as_deref()
            .map_or(UNCOLLAPSED_COLOR, |id| palette.color_of(id));
        let base_x = (z * width + x) as u32 * CELL_PIXEL_SIZE;
        let base_y = y as u32 * CELL_PIXEL_SIZE;

        for dy in 0..CELL_PIXEL_SIZE {
            for dx in 0..CELL_PIXEL_SIZE {
                image.put_pixel(base_x + dx, base_y + dy, Rgba(color));
            }
        }
    }

    image.save(path).map_err(|source| GenerationError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}
