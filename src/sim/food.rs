//! Food placement
//!
//! Uniform rejection sampling over the board. The board is large relative to
//! the snake for most of a game, so a draw almost always lands on a free cell;
//! once rejections pile up the free cells are enumerated instead.

use std::collections::VecDeque;

use rand::Rng;

use super::state::Position;

/// Rejected draws per board cell before enumerating free cells
const REJECTIONS_PER_CELL: i32 = 4;

/// Pick a uniformly random cell not covered by `snake`, or `None` when the
/// snake covers the whole board.
pub fn place_food<R: Rng>(
    rng: &mut R,
    grid_size: i32,
    snake: &VecDeque<Position>,
) -> Option<Position> {
    let cells = grid_size * grid_size;
    if snake.len() >= cells as usize {
        return None;
    }

    for _ in 0..cells * REJECTIONS_PER_CELL {
        let pos = Position::new(
            rng.random_range(0..grid_size),
            rng.random_range(0..grid_size),
        );
        if !snake.contains(&pos) {
            return Some(pos);
        }
    }

    let free: Vec<Position> = (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Position::new(x, y)))
        .filter(|pos| !snake.contains(pos))
        .collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_food_avoids_snake() {
        let mut rng = Pcg32::seed_from_u64(42);
        let snake: VecDeque<Position> = (0..10).map(|x| Position::new(x, 0)).collect();
        for _ in 0..500 {
            let food = place_food(&mut rng, 10, &snake).unwrap();
            assert!(!snake.contains(&food));
            assert!((0..10).contains(&food.x) && (0..10).contains(&food.y));
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let mut rng = Pcg32::seed_from_u64(9);
        let hole = Position::new(3, 2);
        let snake: VecDeque<Position> = (0..5)
            .flat_map(|y| (0..5).map(move |x| Position::new(x, y)))
            .filter(|p| *p != hole)
            .collect();
        assert_eq!(place_food(&mut rng, 5, &snake), Some(hole));
    }

    #[test]
    fn test_full_board_has_no_food() {
        let mut rng = Pcg32::seed_from_u64(1);
        let snake: VecDeque<Position> = (0..5)
            .flat_map(|y| (0..5).map(move |x| Position::new(x, y)))
            .collect();
        assert_eq!(place_food(&mut rng, 5, &snake), None);
    }

    #[test]
    fn test_placement_is_deterministic_per_seed() {
        let snake: VecDeque<Position> = VecDeque::from(vec![Position::new(7, 7)]);
        let a = place_food(&mut Pcg32::seed_from_u64(5), 15, &snake);
        let b = place_food(&mut Pcg32::seed_from_u64(5), 15, &snake);
        assert_eq!(a, b);
    }
}
