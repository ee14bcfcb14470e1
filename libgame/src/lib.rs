use board::{GameBoard, TileState};
use pos::Position;

pub mod board;
pub mod boardsave;
pub mod error;
pub mod patterns;
pub mod pos;
pub mod rule;
pub mod sim;

const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// Computes the next generation of `board`. Every tile is decided from the neighbour counts of
/// the input board, and tiles outside the board count as dead.
pub fn transition(board: &GameBoard) -> GameBoard {
    let next_tiles = board
        .enumerate_tiles()
        .map(|(tile_pos, tile)| rule::next_state(*tile, alive_neighbor_count(board, tile_pos)))
        .collect();

    board.with_same_shape(next_tiles)
}

/// Counts live tiles in the Moore neighbourhood of `tile_pos`.
pub fn alive_neighbor_count(board: &GameBoard, tile_pos: Position) -> usize {
    NEIGHBOR_RELATIVE_POSITIONS
        .iter()
        .filter_map(|[dx, dy]| board.tile(tile_pos.offset(*dx, *dy)?))
        .filter(|neighbor| **neighbor == TileState::Alive)
        .count()
}

/// A board together with the number of generations it has been advanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: GameBoard,
    pub generation: usize,
}

impl Game {
    pub fn new(board: GameBoard) -> Self {
        Self {
            board,
            generation: 0,
        }
    }

    pub fn tick(&mut self) {
        self.board = transition(&self.board);
        self.generation += 1;
    }

    pub fn count_cells(&self, state: TileState) -> usize {
        self.board.count_cells(state)
    }
}
