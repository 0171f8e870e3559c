//! Per-cell records and the sparse live set, kept in lock-step

use crate::grid::{CellRect, Coord, GridIndex, ScreenPos};
use std::collections::HashSet;

/// Sparse set of live coordinates
pub type LiveSet = HashSet<Coord>;

/// One fixed grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    pub center: ScreenPos,
    pub alive: bool,
}

/// Cells that flipped during a mutation, for incremental redraws
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Changes {
    pub born: Vec<Coord>,
    pub died: Vec<Coord>,
}

impl Changes {
    pub fn is_empty(&self) -> bool {
        self.born.is_empty() && self.died.is_empty()
    }

    pub fn len(&self) -> usize {
        self.born.len() + self.died.len()
    }
}

/// Cell store plus live set. Every mutating method leaves
/// `coord ∈ live ⇔ cells[coord].alive` true on return.
#[derive(Debug, Clone)]
pub struct World {
    grid: GridIndex,
    cells: Vec<Cell>,
    live: LiveSet,
}

impl World {
    pub fn new(grid: GridIndex) -> Self {
        let cells = grid
            .coords()
            .map(|coord| Cell {
                coord,
                center: grid.center(coord),
                alive: false,
            })
            .collect();
        Self {
            grid,
            cells,
            live: LiveSet::new(),
        }
    }

    pub fn grid(&self) -> &GridIndex {
        &self.grid
    }

    pub fn live_set(&self) -> &LiveSet {
        &self.live
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.grid.index_of(coord).map(|i| &self.cells[i])
    }

    pub fn is_alive(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(|c| c.alive)
    }

    /// Every cell with its draw rectangle and state, in enumeration order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, CellRect, bool)> + '_ {
        self.cells
            .iter()
            .map(move |c| (c.coord, self.grid.rect(c.coord), c.alive))
    }

    /// Mark a cell alive. Returns true if it was dead before.
    pub fn populate(&mut self, coord: Coord) -> bool {
        let Some(i) = self.grid.index_of(coord) else {
            return false;
        };
        self.live.insert(coord);
        let cell = &mut self.cells[i];
        if cell.alive {
            return false;
        }
        cell.alive = true;
        true
    }

    /// Mark a cell dead. Returns true if it was alive before.
    pub fn kill(&mut self, coord: Coord) -> bool {
        let Some(i) = self.grid.index_of(coord) else {
            return false;
        };
        self.live.remove(&coord);
        let cell = &mut self.cells[i];
        if !cell.alive {
            return false;
        }
        cell.alive = false;
        true
    }

    /// Force dead every cell flagged alive but missing from the live set
    pub fn reconcile(&mut self) -> Vec<Coord> {
        let mut killed = Vec::new();
        for cell in self.cells.iter_mut() {
            if cell.alive && !self.live.contains(&cell.coord) {
                cell.alive = false;
                killed.push(cell.coord);
            }
        }
        killed
    }

    /// Swap in a new live set and bring the cell flags in line with it.
    /// Duplicates collapse and coordinates outside the grid are dropped.
    /// Cells whose state is unchanged are not touched.
    pub fn replace_live_set<I>(&mut self, coords: I) -> Changes
    where
        I: IntoIterator<Item = Coord>,
    {
        let grid = &self.grid;
        let next: LiveSet = coords.into_iter().filter(|c| grid.contains(*c)).collect();

        let mut changes = Changes::default();
        for &coord in &next {
            if let Some(i) = self.grid.index_of(coord) {
                let cell = &mut self.cells[i];
                if !cell.alive {
                    cell.alive = true;
                    changes.born.push(coord);
                }
            }
        }
        self.live = next;
        changes.died = self.reconcile();
        changes.born.sort_unstable_by_key(|c| (c.row, c.col));
        changes
    }

    /// Both representations agree
    pub fn is_consistent(&self) -> bool {
        self.cells
            .iter()
            .all(|c| c.alive == self.live.contains(&c.coord))
            && self.live.iter().all(|c| self.grid.contains(*c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LifeConfig;

    fn world() -> World {
        let config = LifeConfig {
            screen_width: 100,
            screen_height: 100,
            cell_pitch: 10,
            padding: 10,
            ..LifeConfig::default()
        };
        World::new(GridIndex::new(&config).unwrap())
    }

    #[test]
    fn new_world_is_empty_and_consistent() {
        let w = world();
        assert_eq!(w.population(), 0);
        assert_eq!(w.cells().count(), w.grid().len());
        assert!(w.is_consistent());
    }

    #[test]
    fn populate_twice_is_noop() {
        let mut w = world();
        let c = Coord::new(2, 3);
        assert!(w.populate(c));
        assert!(!w.populate(c));
        assert!(w.is_alive(c));
        assert_eq!(w.population(), 1);
        assert!(w.is_consistent());
    }

    #[test]
    fn kill_dead_cell_is_noop() {
        let mut w = world();
        let c = Coord::new(4, 4);
        assert!(!w.kill(c));
        assert!(w.populate(c));
        assert!(w.kill(c));
        assert!(!w.kill(c));
        assert_eq!(w.population(), 0);
        assert!(w.is_consistent());
    }

    #[test]
    fn out_of_grid_mutations_are_ignored() {
        let mut w = world();
        assert!(!w.populate(Coord::new(-1, 0)));
        assert!(!w.kill(Coord::new(100, 100)));
        assert_eq!(w.population(), 0);
        assert!(w.is_consistent());
    }

    #[test]
    fn replace_collapses_duplicates_and_drops_outsiders() {
        let mut w = world();
        let a = Coord::new(1, 1);
        let changes = w.replace_live_set([a, a, Coord::new(-3, 2), Coord::new(50, 0)]);
        assert_eq!(changes.born, vec![a]);
        assert!(changes.died.is_empty());
        assert_eq!(w.population(), 1);
        assert!(w.is_consistent());
    }

    #[test]
    fn replace_reports_only_flipped_cells() {
        let mut w = world();
        let (a, b, c) = (Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0));
        w.replace_live_set([a, b]);
        let changes = w.replace_live_set([b, c]);
        assert_eq!(changes.born, vec![c]);
        assert_eq!(changes.died, vec![a]);
        assert!(w.is_consistent());
    }

    #[test]
    fn replace_with_empty_kills_everything() {
        let mut w = world();
        let all: Vec<Coord> = w.grid().coords().collect();
        w.replace_live_set(all);
        assert_eq!(w.population(), w.grid().len());
        let changes = w.replace_live_set([]);
        assert_eq!(changes.died.len(), w.grid().len());
        assert!(w.cells().all(|(_, _, alive)| !alive));
        assert!(w.is_consistent());
    }

    #[test]
    fn reconcile_repairs_divergent_live_set() {
        let mut w = world();
        let c = Coord::new(3, 3);
        w.populate(c);
        w.live.remove(&c);
        assert!(!w.is_consistent());
        assert_eq!(w.reconcile(), vec![c]);
        assert!(!w.is_alive(c));
        assert!(w.is_consistent());
    }
}
