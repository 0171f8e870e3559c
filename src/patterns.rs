use crate::grid::{Coord, GridIndex};

/// A named seed pattern as `(row, col)` offsets from its top-left corner
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "pulsar",
        cells: &[
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "glider-gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (2, 12), (2, 13), (3, 11), (3, 15), (4, 10), (4, 16), (5, 10), (5, 14),
            (5, 16), (5, 17), (6, 10), (6, 16), (7, 11), (7, 15), (8, 12), (8, 13),
            (0, 24), (1, 22), (1, 24), (2, 20), (2, 21), (3, 20), (3, 21), (4, 20),
            (4, 21), (5, 22), (5, 24), (6, 24),
            (2, 34), (2, 35), (3, 34), (3, 35),
        ],
    },
];

impl Pattern {
    /// Height and width of the bounding box
    pub fn size(&self) -> (i32, i32) {
        let rows = self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let cols = self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        (rows, cols)
    }

    /// Coordinates of the pattern centered on `grid`. Cells that do not fit
    /// are left out.
    pub fn placed(&self, grid: &GridIndex) -> Vec<Coord> {
        let (rows, cols) = self.size();
        let top = (grid.rows() - rows) / 2;
        let left = (grid.cols() - cols) / 2;
        self.cells
            .iter()
            .map(|&(r, c)| Coord::new(left + c, top + r))
            .filter(|coord| grid.contains(*coord))
            .collect()
    }
}

/// Look up a pattern by name, ignoring case and `-`/`_`/space differences
pub fn find(name: &str) -> Option<&'static Pattern> {
    let wanted = normalize(name);
    PATTERNS.iter().find(|p| normalize(p.name) == wanted)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
