//! Non-interactive runs: seed, step N generations, print the result

use crate::config::LifeConfig;
use crate::error::AppError;
use crate::grid::Coord;
use crate::patterns::Pattern;
use crate::simulation::Simulation;
use serde::Serialize;
use std::io;

pub struct PrintOptions {
    pub seed: u64,
    pub pattern: Option<&'static Pattern>,
    pub generations: u64,
    pub json: bool,
}

#[derive(Serialize)]
struct Report {
    generation: u64,
    population: usize,
    max_population: usize,
    cols: i32,
    rows: i32,
    live: Vec<Coord>,
}

/// Run without a terminal and return the text to print
pub fn run(config: &LifeConfig, options: &PrintOptions) -> Result<String, AppError> {
    let mut sim = Simulation::new(config, options.seed)?;
    match options.pattern {
        Some(pattern) => sim.load_pattern(pattern),
        None => sim.randomize(),
    };

    sim.start();
    for _ in 0..options.generations {
        sim.tick();
    }

    if options.json {
        let mut live: Vec<Coord> = sim.world().live_set().iter().copied().collect();
        live.sort_unstable_by_key(|c| (c.row, c.col));
        let report = Report {
            generation: sim.generation(),
            population: sim.population(),
            max_population: sim.max_population(),
            cols: sim.grid().cols(),
            rows: sim.grid().rows(),
            live,
        };
        return serde_json::to_string_pretty(&report).map_err(|e| io::Error::from(e).into());
    }

    Ok(render_text(&sim))
}

/// One line per row, `#` for live cells and `.` for dead ones
pub fn render_text(sim: &Simulation) -> String {
    let grid = sim.grid();
    let mut out = String::with_capacity(grid.len() + grid.rows() as usize);
    for (coord, _, alive) in sim.world().cells() {
        out.push(if alive { '#' } else { '.' });
        if coord.col == grid.cols() - 1 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    fn config() -> LifeConfig {
        LifeConfig {
            screen_width: 6,
            screen_height: 6,
            cell_pitch: 1,
            padding: 1,
            max_population: 10,
            ticks_per_second: 10,
        }
    }

    fn options(generations: u64, json: bool) -> PrintOptions {
        PrintOptions {
            seed: 7,
            pattern: patterns::find("blinker"),
            generations,
            json,
        }
    }

    #[test]
    fn blinker_text_after_one_generation() {
        // 5 x 5 grid, blinker centered on row 2
        let text = run(&config(), &options(1, false)).unwrap();
        assert_eq!(text, ".....\n..#..\n..#..\n..#..\n.....\n");
    }

    #[test]
    fn blinker_text_after_two_generations() {
        let text = run(&config(), &options(2, false)).unwrap();
        assert_eq!(text, ".....\n.....\n.###.\n.....\n.....\n");
    }

    #[test]
    fn json_report_lists_live_cells() {
        let text = run(&config(), &options(0, true)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["population"], 3);
        assert_eq!(value["generation"], 0);
        assert_eq!(value["cols"], 5);
        assert_eq!(value["live"][0]["col"], 1);
        assert_eq!(value["live"][0]["row"], 2);
    }

    #[test]
    fn random_seed_respects_population_cap() {
        let opts = PrintOptions { pattern: None, ..options(0, true) };
        let text = run(&config(), &opts).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value["population"].as_u64().unwrap() <= 10);
    }

    #[test]
    fn bad_config_is_reported() {
        let bad = LifeConfig { cell_pitch: 0, ..config() };
        assert!(matches!(run(&bad, &options(1, false)), Err(AppError::Config(_))));
    }
}
