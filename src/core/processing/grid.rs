//! Row-major 2D container and the sliding-window crop grid built on it.
use std::ops::Index;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::image::Tile;
use crate::error::{Error, Result};

/// Rectangular, row-major grid. Every row holds exactly `cols` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

pub type TileGrid = Grid<CropRect>;
pub type TileSet = Grid<Tile>;

impl<T> Grid<T> {
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(Error::invalid("grid", "empty")),
        };
        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);
        for row in rows {
            if row.len() != cols {
                return Err(Error::DimensionMismatch {
                    expected: cols,
                    actual: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    pub fn iter_rows(&self) -> std::slice::Chunks<'_, T> {
        self.cells.chunks(self.cols)
    }

    /// Cells with their `(row, col)` address, in row-major order.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / cols, i % cols, cell))
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        let cols = self.cols;
        let mut rows = Vec::with_capacity(self.rows);
        let mut cells = self.cells.into_iter();
        for _ in 0..self.rows {
            rows.push(cells.by_ref().take(cols).collect());
        }
        rows
    }

    pub(crate) fn cells(&self) -> &[T] {
        &self.cells
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "grid index ({row}, {col}) out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        &self.cells[row * self.cols + col]
    }
}

/// Requested crop window in image coordinates. Right and bottom are exclusive and may
/// lie past the image edge; the cropper pads whatever falls outside.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropRect {
    pub top: i64,
    pub left: i64,
    pub right: i64,
    pub bottom: i64,
}

impl CropRect {
    pub fn new(top: i64, left: i64, right: i64, bottom: i64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Rejects windows with a negative origin or a negative extent.
    pub fn validate(&self) -> Result<()> {
        if self.left < 0 {
            return Err(Error::invalid("rect.left", self.left));
        }
        if self.top < 0 {
            return Err(Error::invalid("rect.top", self.top));
        }
        if self.right < self.left {
            return Err(Error::invalid(
                "rect.right",
                format!("{} < left {}", self.right, self.left),
            ));
        }
        if self.bottom < self.top {
            return Err(Error::invalid(
                "rect.bottom",
                format!("{} < top {}", self.bottom, self.top),
            ));
        }
        Ok(())
    }
}

fn to_coord(arg: &'static str, value: usize) -> Result<i64> {
    if value == 0 {
        return Err(Error::invalid(arg, value));
    }
    i64::try_from(value).map_err(|_| Error::invalid(arg, value))
}

/// Sliding-window crop grid over a `width x height` image.
///
/// Window starts advance by `stride` while they are still inside the image, so the
/// grid has `(height - 1) / stride + 1` rows and `(width - 1) / stride + 1` columns
/// and the last row/column usually overhangs the image.
pub fn generate_grid(
    width: usize,
    height: usize,
    tile_width: usize,
    tile_height: usize,
    stride: usize,
) -> Result<TileGrid> {
    let width = to_coord("width", width)?;
    let height = to_coord("height", height)?;
    if tile_width == 0 {
        return Err(Error::invalid("tile_width", tile_width));
    }
    if tile_height == 0 {
        return Err(Error::invalid("tile_height", tile_height));
    }
    let stride = to_coord("stride", stride)?;

    // Windows whose far edge is not even addressable can never be realized.
    let too_large = move || Error::AllocationFailure {
        width: tile_width,
        height: tile_height,
    };
    let tile_width = i64::try_from(tile_width).map_err(|_| too_large())?;
    let tile_height = i64::try_from(tile_height).map_err(|_| too_large())?;

    let mut rows = Vec::with_capacity(((height - 1) / stride + 1) as usize);
    let mut top = 0i64;
    while top < height {
        let bottom = top.checked_add(tile_height).ok_or_else(too_large)?;
        let mut row = Vec::with_capacity(((width - 1) / stride + 1) as usize);
        let mut left = 0i64;
        while left < width {
            let right = left.checked_add(tile_width).ok_or_else(too_large)?;
            row.push(CropRect::new(top, left, right, bottom));
            left = left.saturating_add(stride);
        }
        rows.push(row);
        top = top.saturating_add(stride);
    }

    let grid = Grid::from_rows(rows)?;
    info!(
        "Tile grid for {}x{} image: {} rows x {} cols (tile {}x{}, stride {})",
        width,
        height,
        grid.rows(),
        grid.cols(),
        tile_width,
        tile_height,
        stride
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_counts_follow_start_positions() {
        let grid = generate_grid(500, 500, 320, 320, 300).unwrap();
        assert_eq!(grid.shape(), (2, 2));
        assert_eq!(grid[(0, 0)], CropRect::new(0, 0, 320, 320));
        assert_eq!(grid[(0, 1)], CropRect::new(0, 300, 620, 320));
        assert_eq!(grid[(1, 0)], CropRect::new(300, 0, 320, 620));
        assert_eq!(grid[(1, 1)], CropRect::new(300, 300, 620, 620));
    }

    #[test]
    fn non_dividing_stride_keeps_trailing_start() {
        // Starts at 0, 3, 6, 9 are all < 10.
        let grid = generate_grid(10, 7, 4, 4, 3).unwrap();
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid[(2, 3)], CropRect::new(6, 9, 13, 10));
    }

    #[test]
    fn tile_sized_image_keeps_overhanging_start() {
        // 300 < 320, so a second start survives even though tile (0, 0) already covers everything.
        let grid = generate_grid(320, 320, 320, 320, 300).unwrap();
        assert_eq!(grid.shape(), (2, 2));
        let grid = generate_grid(300, 300, 320, 320, 300).unwrap();
        assert_eq!(grid.shape(), (1, 1));
    }

    #[test]
    fn zero_parameters_are_rejected() {
        for (w, h, tw, th, s, arg) in [
            (0, 5, 1, 1, 1, "width"),
            (5, 0, 1, 1, 1, "height"),
            (5, 5, 0, 1, 1, "tile_width"),
            (5, 5, 1, 0, 1, "tile_height"),
            (5, 5, 1, 1, 0, "stride"),
        ] {
            match generate_grid(w, h, tw, th, s) {
                Err(Error::InvalidParameter { arg: got, .. }) => assert_eq!(got, arg),
                other => panic!("expected InvalidParameter for {arg}, got {other:?}"),
            }
        }
    }

    #[test]
    fn unaddressable_window_is_allocation_failure() {
        let huge = i64::MAX as usize;
        // The second column would end past i64::MAX.
        match generate_grid(2, 1, huge, 1, 1) {
            Err(Error::AllocationFailure { width, height }) => assert_eq!((width, height), (huge, 1)),
            other => panic!("expected AllocationFailure, got {other:?}"),
        }
        match generate_grid(1, 2, 1, huge, 1) {
            Err(Error::AllocationFailure { width, height }) => assert_eq!((width, height), (1, huge)),
            other => panic!("expected AllocationFailure, got {other:?}"),
        }
        assert!(matches!(
            generate_grid(4, 4, usize::MAX, 1, 1),
            Err(Error::AllocationFailure { .. })
        ));
    }

    #[test]
    fn rect_validation() {
        assert!(CropRect::new(0, 0, 0, 0).validate().is_ok());
        assert!(CropRect::new(-1, 0, 4, 4).validate().is_err());
        assert!(CropRect::new(0, -1, 4, 4).validate().is_err());
        assert!(CropRect::new(0, 5, 4, 4).validate().is_err());
        assert!(CropRect::new(5, 0, 4, 4).validate().is_err());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Grid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        ));
        assert!(Grid::<u8>::from_rows(vec![]).is_err());
        assert!(Grid::<u8>::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn indexed_iteration_and_rows_agree() {
        let grid = Grid::from_rows(vec![vec!['a', 'b', 'c'], vec!['d', 'e', 'f']]).unwrap();
        let indexed: Vec<_> = grid.iter_indexed().map(|(r, c, v)| (r, c, *v)).collect();
        assert_eq!(indexed[4], (1, 1, 'e'));
        assert_eq!(grid.row(1), Some(&['d', 'e', 'f'][..]));
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.iter_rows().count(), 2);
        assert_eq!(
            grid.clone().into_rows(),
            vec![vec!['a', 'b', 'c'], vec!['d', 'e', 'f']]
        );
        assert_eq!(grid.map(|c| c.to_ascii_uppercase())[(0, 2)], 'C');
    }
}
