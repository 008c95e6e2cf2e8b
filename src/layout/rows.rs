//! # Row Wrapping
//!
//! The one walk that both layout passes share. Tiles fill a row until it
//! holds `max_tiles_per_row`; the *next* tile then opens a new row. Spaces
//! only push the pen forward. They never count toward the limit and never
//! wrap by themselves.
//!
//! Two widths are tracked per row. `pen` is where the next item goes
//! (tiles advance it by `tile + spacing`). `measured` is the row's share of
//! the bounding box: spacing only between adjacent tiles, never trailing.

use super::LayoutProfile;

/// Where the cursor put an item, relative to the block's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub row: usize,
    /// Tile position within its row. Spaces report the column the next
    /// tile would take.
    pub column: usize,
    pub x: f64,
    pub y: f64,
}

/// Running state of a left-to-right, top-to-bottom walk.
#[derive(Debug, Clone)]
pub struct RowCursor {
    tile_size: f64,
    spacing: f64,
    space_width: f64,
    max_tiles_per_row: usize,

    row: usize,
    tiles_in_row: usize,
    pen: f64,
    measured: f64,
    widest_closed_row: f64,
    closed_height: f64,
    any_tiles: bool,
}

impl RowCursor {
    pub fn new(profile: &LayoutProfile) -> Self {
        Self {
            tile_size: profile.tile_size,
            spacing: profile.spacing,
            space_width: profile.space_width,
            max_tiles_per_row: profile.max_tiles_per_row.max(1),
            row: 0,
            tiles_in_row: 0,
            pen: 0.0,
            measured: 0.0,
            widest_closed_row: 0.0,
            closed_height: 0.0,
            any_tiles: false,
        }
    }

    /// Place one tile, opening a new row first if the current one is full.
    pub fn place_tile(&mut self) -> Placement {
        if self.tiles_in_row >= self.max_tiles_per_row {
            self.widest_closed_row = self.widest_closed_row.max(self.measured);
            self.closed_height += self.tile_size + self.spacing;
            self.row += 1;
            self.tiles_in_row = 0;
            self.pen = 0.0;
            self.measured = 0.0;
        }

        if self.tiles_in_row > 0 {
            self.measured += self.spacing;
        }
        self.measured += self.tile_size;

        let placed = Placement {
            row: self.row,
            column: self.tiles_in_row,
            x: self.pen,
            y: self.closed_height,
        };
        self.pen += self.tile_size + self.spacing;
        self.tiles_in_row += 1;
        self.any_tiles = true;
        placed
    }

    /// Advance past a space. Never wraps.
    pub fn place_space(&mut self) -> Placement {
        let placed = Placement {
            row: self.row,
            column: self.tiles_in_row,
            x: self.pen,
            y: self.closed_height,
        };
        self.pen += self.space_width;
        self.measured += self.space_width;
        placed
    }

    /// Widest row, including the one still open.
    pub fn total_width(&self) -> f64 {
        self.widest_closed_row.max(self.measured)
    }

    /// Stacked height. The open row counts only if it holds a tile.
    pub fn total_height(&self) -> f64 {
        if self.tiles_in_row > 0 {
            self.closed_height + self.tile_size
        } else {
            self.closed_height
        }
    }

    /// Rows that contain at least one tile.
    pub fn rows(&self) -> usize {
        if self.any_tiles {
            self.row + 1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Platform;

    fn x_cursor() -> RowCursor {
        RowCursor::new(&LayoutProfile::for_platform(Platform::X))
    }

    #[test]
    fn test_single_row_width() {
        let mut c = x_cursor();
        for _ in 0..3 {
            c.place_tile();
        }
        assert!((c.total_width() - (3.0 * 80.0 + 2.0 * 4.0)).abs() < 1e-9);
        assert!((c.total_height() - 80.0).abs() < 1e-9);
        assert_eq!(c.rows(), 1);
    }

    #[test]
    fn test_wrap_happens_on_ninth_tile() {
        let mut c = x_cursor();
        let placements: Vec<Placement> = (0..9).map(|_| c.place_tile()).collect();
        assert_eq!(placements[7].row, 0);
        assert_eq!(placements[7].column, 7);
        assert_eq!(placements[8].row, 1);
        assert_eq!(placements[8].column, 0);
        assert!((placements[8].x).abs() < 1e-9);
        assert!((placements[8].y - 84.0).abs() < 1e-9);
        assert!((c.total_height() - (2.0 * 80.0 + 4.0)).abs() < 1e-9);
        assert_eq!(c.rows(), 2);
    }

    #[test]
    fn test_spaces_never_wrap() {
        let mut c = x_cursor();
        for _ in 0..8 {
            c.place_tile();
        }
        for _ in 0..20 {
            let p = c.place_space();
            assert_eq!(p.row, 0);
        }
        assert_eq!(c.rows(), 1);
        // The overflowing spaces still widen the row they sit in.
        assert!((c.total_width() - (8.0 * 80.0 + 7.0 * 4.0 + 20.0 * 16.0)).abs() < 1e-9);
    }

    #[test]
    fn test_space_between_tiles() {
        let mut c = x_cursor();
        c.place_tile();
        let space = c.place_space();
        let second = c.place_tile();
        assert!((space.x - 84.0).abs() < 1e-9);
        assert!((second.x - 100.0).abs() < 1e-9);
        assert!((c.total_width() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_trailing_space_width() {
        let mut c = x_cursor();
        c.place_tile();
        c.place_space();
        assert!((c.total_width() - 96.0).abs() < 1e-9);
    }

    #[test]
    fn test_spaces_only() {
        let mut c = x_cursor();
        c.place_space();
        c.place_space();
        assert_eq!(c.rows(), 0);
        assert_eq!(c.total_height(), 0.0);
        assert!((c.total_width() - 32.0).abs() < 1e-9);
    }
}
