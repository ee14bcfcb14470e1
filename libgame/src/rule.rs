use crate::board::TileState;

/// Neighbour counts that keep a live cell alive.
pub const SURVIVE: [usize; 2] = [2, 3];

/// Neighbour counts that bring a dead cell to life.
pub const BIRTH: [usize; 1] = [3];

/// The standard B3/S23 rule.
pub fn next_state(tile: TileState, alive_neighbors: usize) -> TileState {
    let alive = match tile {
        TileState::Alive => SURVIVE.contains(&alive_neighbors),
        TileState::Dead => BIRTH.contains(&alive_neighbors),
    };

    if alive {
        TileState::Alive
    } else {
        TileState::Dead
    }
}
