use rand::Rng;
use rand::seq::IteratorRandom;

use super::state::{Position, Snake, grid_extent};

/// Cells of a `grid_size` x `grid_size` board not covered by `snake`, row-major
pub fn empty_cells(snake: &Snake, grid_size: usize) -> impl Iterator<Item = Position> + '_ {
    let size = grid_extent(grid_size);
    (0..size)
        .flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
        .filter(move |pos| !snake.contains(*pos))
}

/// Pick a uniformly random empty cell, or `None` if the snake covers the board.
pub fn spawn_food<R: Rng + ?Sized>(
    rng: &mut R,
    snake: &Snake,
    grid_size: usize,
) -> Option<Position> {
    empty_cells(snake, grid_size).choose(rng)
}
