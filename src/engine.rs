//! Generation step: B3/S23 on a bounded grid

use crate::grid::GridIndex;
use crate::world::{Changes, LiveSet, World};

/// Compute the live set of the next generation from a frozen snapshot.
///
/// Every grid cell is visited, not only live ones, so births are found.
/// Offsets that leave the grid never match the snapshot.
pub fn next_generation(grid: &GridIndex, snapshot: &LiveSet) -> LiveSet {
    grid.coords()
        .filter(|&coord| {
            let alive = snapshot.contains(&coord);
            let neighbors = grid.neighbors(coord).filter(|n| snapshot.contains(n)).count();
            matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
        })
        .collect()
}

/// Advance the world by one generation and report which cells flipped
pub fn step(world: &mut World) -> Changes {
    let snapshot = world.live_set().clone();
    let next = next_generation(world.grid(), &snapshot);
    let changes = world.replace_live_set(next);
    debug_assert!(world.is_consistent());
    tracing::trace!(
        flipped = changes.len(),
        population = world.population(),
        "generation step"
    );
    changes
}
