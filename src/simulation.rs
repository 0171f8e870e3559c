//! Command handling on top of the world: the Paused/Running state machine

use crate::config::LifeConfig;
use crate::engine;
use crate::error::ConfigError;
use crate::grid::{Coord, GridIndex, ScreenPos};
use crate::patterns::Pattern;
use crate::world::{Changes, World};
use rand::prelude::*;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Paused,
    Running,
}

/// Which button a toggle came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Bring the cell to life
    Primary,
    /// Kill the cell
    Secondary,
}

/// Input commands accepted from the driving loop
#[derive(Clone, Copy)]
pub enum Command {
    Start,
    Toggle { pos: ScreenPos, trigger: Trigger },
    Randomize,
    Clear,
    LoadPattern(&'static Pattern),
}

pub struct Simulation {
    world: World,
    state: RunState,
    max_population: usize,
    generation: u64,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: &LifeConfig, seed: u64) -> Result<Self, ConfigError> {
        let grid = GridIndex::new(config)?;
        let max_population = config.max_population.min(grid.len());
        info!(
            cols = grid.cols(),
            rows = grid.rows(),
            max_population,
            seed,
            "grid built"
        );
        Ok(Self {
            world: World::new(grid),
            state: RunState::Paused,
            max_population,
            generation: 0,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn grid(&self) -> &GridIndex {
        self.world.grid()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.world.population()
    }

    pub fn max_population(&self) -> usize {
        self.max_population
    }

    pub fn apply(&mut self, command: Command) -> Changes {
        match command {
            Command::Start => {
                self.start();
                Changes::default()
            }
            Command::Toggle { pos, trigger } => self.toggle_cell_at(pos, trigger),
            Command::Randomize => self.randomize(),
            Command::Clear => self.clear(),
            Command::LoadPattern(pattern) => self.load_pattern(pattern),
        }
    }

    /// Paused -> Running. There is no way back from the command surface.
    pub fn start(&mut self) {
        if self.state == RunState::Running {
            return;
        }
        self.state = RunState::Running;
        info!(population = self.population(), "simulation started");
    }

    /// Advance one generation if running
    pub fn tick(&mut self) -> Changes {
        if self.state != RunState::Running {
            return Changes::default();
        }
        let changes = engine::step(&mut self.world);
        self.generation += 1;
        changes
    }

    /// Populate (primary) or kill (secondary) the cell nearest to `pos`.
    /// Ignored while running.
    pub fn toggle_cell_at(&mut self, pos: ScreenPos, trigger: Trigger) -> Changes {
        if self.ignored("toggle") {
            return Changes::default();
        }
        let mut changes = Changes {
            born: Vec::new(),
            died: self.world.reconcile(),
        };
        let Some(coord) = self.grid().nearest(pos) else {
            return changes;
        };
        match trigger {
            Trigger::Primary => {
                if self.world.populate(coord) {
                    changes.born.push(coord);
                }
            }
            Trigger::Secondary => {
                if self.world.kill(coord) {
                    changes.died.push(coord);
                }
            }
        }
        debug!(col = coord.col, row = coord.row, ?trigger, "toggle");
        changes
    }

    /// Replace the live set with up to `max_population` uniformly drawn cells.
    /// Draws are independent, so duplicates collapse. Ignored while running.
    pub fn randomize(&mut self) -> Changes {
        if self.ignored("randomize") {
            return Changes::default();
        }
        let len = self.grid().len();
        let picks: Vec<Coord> = (0..self.max_population)
            .map(|_| self.world.grid().coord_at(self.rng.gen_range(0..len)))
            .collect();
        let changes = self.commit(picks);
        info!(population = self.population(), "randomized");
        changes
    }

    /// Kill every cell. Ignored while running.
    pub fn clear(&mut self) -> Changes {
        if self.ignored("clear") {
            return Changes::default();
        }
        let changes = self.commit(Vec::new());
        info!("cleared");
        changes
    }

    /// Replace the live set with a centered pattern. Ignored while running.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> Changes {
        if self.ignored("load pattern") {
            return Changes::default();
        }
        let coords = pattern.placed(self.grid());
        let changes = self.commit(coords);
        info!(pattern = pattern.name, population = self.population(), "pattern loaded");
        changes
    }

    fn commit(&mut self, coords: Vec<Coord>) -> Changes {
        let mut died = self.world.reconcile();
        let mut changes = self.world.replace_live_set(coords);
        died.append(&mut changes.died);
        changes.died = died;
        self.generation = 0;
        changes
    }

    fn ignored(&self, command: &str) -> bool {
        let running = self.state == RunState::Running;
        if running {
            debug!(command, "ignored while running");
        }
        running
    }
}
