/// Row-major grid of 0/1 pixels with fixed dimensions.
///
/// Grids are only built by the decoder; the buffer always holds exactly
/// `width * height` cells and is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl PixelGrid {
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `row`, `col`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col).copied()
    }

    /// Iterate rows top to bottom, each a slice of `width` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.width)
    }

    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }
}

/// A decoded SimpleIcon.
///
/// # Examples
/// ```
/// use simpleicon_core::decode;
///
/// let icon = decode("dot;;1;;2x2;;1000")?;
/// assert_eq!(icon.name(), "dot");
/// assert_eq!((icon.width(), icon.height()), (2, 2));
/// assert_eq!(icon.pixels().get(0, 0), Some(1));
/// assert_eq!(icon.pixels().get(1, 1), Some(0));
/// # Ok::<(), simpleicon_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    name: String,
    file_version: u32,
    pixels: PixelGrid,
}

impl Icon {
    pub(crate) fn new(name: String, file_version: u32, pixels: PixelGrid) -> Self {
        Self {
            name,
            file_version,
            pixels,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_version(&self) -> u32 {
        self.file_version
    }

    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::PixelGrid;

    #[test]
    fn get_is_bounds_checked() {
        let grid = PixelGrid::from_cells(3, 2, vec![1, 0, 0, 0, 0, 1]);
        assert_eq!(grid.get(0, 0), Some(1));
        assert_eq!(grid.get(1, 2), Some(1));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn rows_have_width_cells() {
        let grid = PixelGrid::from_cells(3, 2, vec![1, 0, 0, 0, 0, 1]);
        let rows: Vec<&[u8]> = grid.rows().collect();
        assert_eq!(rows, vec![&[1, 0, 0][..], &[0, 0, 1][..]]);
        assert_eq!(grid.count_set(), 2);
    }
}
