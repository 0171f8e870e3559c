//! Fixed grid geometry: which coordinates exist and where they sit on screen

use crate::config::LifeConfig;
use crate::error::ConfigError;
use serde::Serialize;

/// Offsets of the 8 surrounding cells, in grid units
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub col: i32,
    pub row: i32,
}

impl Coord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub const fn offset(self, dc: i32, dr: i32) -> Self {
        Self { col: self.col + dc, row: self.row + dr }
    }
}

/// A point in screen space (pixels, or terminal character cells)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPos {
    pub x: i32,
    pub y: i32,
}

impl ScreenPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn distance_sq(self, other: ScreenPos) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

/// Screen rectangle a renderer fills for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Enumerates and addresses every cell of the grid.
///
/// Column `c` is centered at `padding - 1 + c * pitch` and exists while that
/// center stays left of `screen_width - padding`; rows work the same way.
/// Enumeration order is row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridIndex {
    cols: i32,
    rows: i32,
    origin: i32,
    pitch: i32,
    cell_size: i32,
}

impl GridIndex {
    pub fn new(config: &LifeConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let pitch = config.cell_pitch;
        let origin = config.padding - 1;
        let cols = axis_len(origin, config.screen_width - config.padding, pitch);
        let rows = axis_len(origin, config.screen_height - config.padding, pitch);
        if cols == 0 || rows == 0 {
            return Err(ConfigError::EmptyGrid);
        }

        Ok(Self {
            cols,
            rows,
            origin,
            pitch,
            cell_size: (pitch - 2).max(1),
        })
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    pub fn contains(&self, coord: Coord) -> bool {
        (0..self.cols).contains(&coord.col) && (0..self.rows).contains(&coord.row)
    }

    /// Row-major storage index, `None` outside the grid
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row as usize * self.cols as usize + coord.col as usize)
    }

    pub fn coord_at(&self, index: usize) -> Coord {
        let cols = self.cols as usize;
        Coord::new((index % cols) as i32, (index / cols) as i32)
    }

    /// All coordinates in enumeration order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord::new(col, row)))
    }

    pub fn center(&self, coord: Coord) -> ScreenPos {
        ScreenPos::new(
            self.origin + coord.col * self.pitch,
            self.origin + coord.row * self.pitch,
        )
    }

    pub fn rect(&self, coord: Coord) -> CellRect {
        let center = self.center(coord);
        CellRect {
            x: center.x - self.cell_size / 2,
            y: center.y - self.cell_size / 2,
            width: self.cell_size,
            height: self.cell_size,
        }
    }

    /// In-bounds members of the 8-neighborhood
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dc, dr)| coord.offset(dc, dr))
            .filter(move |n| self.contains(*n))
    }

    /// Cell whose center is closest to `pos`; ties go to the first cell in
    /// enumeration order
    pub fn nearest(&self, pos: ScreenPos) -> Option<Coord> {
        let mut best: Option<(i64, Coord)> = None;
        for coord in self.coords() {
            let dist = self.center(coord).distance_sq(pos);
            if best.map_or(true, |(d, _)| dist < d) {
                best = Some((dist, coord));
            }
        }
        best.map(|(_, coord)| coord)
    }
}

/// Number of centers `origin + k * pitch` strictly below `limit`
fn axis_len(origin: i32, limit: i32, pitch: i32) -> i32 {
    if limit <= origin {
        return 0;
    }
    // widened: `limit - origin` alone can exceed i32 when origin is -1
    let span = i64::from(limit) - i64::from(origin) - 1;
    (span / i64::from(pitch) + 1).min(i64::from(i32::MAX)) as i32
}
