//! Food placement.
//!
//! Free cells are enumerated in row-major order (y outer, x inner) and one of
//! them is picked with a single draw from the injected random source, so a
//! replayed source always yields the same food cell.

use crate::rng::RandomSource;
use crate::types::Point;

/// Pick an unoccupied cell for the next food item.
///
/// Returns `None` only when every cell of the board is occupied.
pub fn spawn_food<R>(snake: &[Point], width: u16, height: u16, rng: &mut R) -> Option<Point>
where
    R: RandomSource + ?Sized,
{
    let free = free_cells(snake, width, height);
    if free.is_empty() {
        return None;
    }

    let r = rng.next_unit();
    let index = ((r * free.len() as f64).floor() as usize).min(free.len() - 1);
    free.get(index).copied()
}

/// All cells not covered by the snake, row-major.
pub fn free_cells(snake: &[Point], width: u16, height: u16) -> Vec<Point> {
    let w = width as usize;
    let mut occupied = vec![false; w * height as usize];
    for p in snake {
        if p.in_bounds(width, height) {
            occupied[p.y as usize * w + p.x as usize] = true;
        }
    }

    let mut free = Vec::with_capacity(occupied.len().saturating_sub(snake.len()));
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if !occupied[y as usize * w + x as usize] {
                free.push(Point::new(x, y));
            }
        }
    }
    free
}
