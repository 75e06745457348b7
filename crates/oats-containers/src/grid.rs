//! Row-major addressing of 2D grids laid over flat storage.

/// Flat index of `(col, row)` in a row-major grid `column_count` wide.
#[inline]
pub const fn index_1d(col: usize, row: usize, column_count: usize) -> usize {
    col + row * column_count
}

/// Inverse of [`index_1d`]: `(col, row)` for a flat index.
///
/// # Panics
///
/// Panics if `column_count == 0`.
#[inline]
pub const fn coords_2d(index: usize, column_count: usize) -> (usize, usize) {
    (index % column_count, index / column_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedArray;

    #[test]
    fn first_row_is_identity() {
        assert_eq!(index_1d(0, 0, 5), 0);
        assert_eq!(index_1d(4, 0, 5), 4);
    }

    #[test]
    fn rows_advance_by_column_count() {
        assert_eq!(index_1d(0, 1, 5), 5);
        assert_eq!(index_1d(2, 3, 5), 17);
    }

    #[test]
    fn coords_invert_index() {
        for row in 0..4 {
            for col in 0..6 {
                assert_eq!(coords_2d(index_1d(col, row, 6), 6), (col, row));
            }
        }
    }

    #[test]
    fn addresses_a_fixed_grid() {
        let mut grid: FixedArray<u8, 12> = FixedArray::new();
        grid[index_1d(3, 2, 4)] = 1;
        assert_eq!(grid.as_slice().iter().position(|&c| c == 1), Some(11));
    }
}
