use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use minutecasino_engine::engine::GameEngine;
use minutecasino_engine::errors::GameError;
use minutecasino_engine::jewel_mining::{
    gem_value, generate_grid, Cell, JewelMining, JewelMiningInput, MineState, BOMB_COUNT,
    GRID_SIZE,
};
use minutecasino_engine::outcome::ResultClass;
use minutecasino_engine::rng::ParkMiller;

fn bombs(grid: &[Cell]) -> Vec<usize> {
    (0..grid.len()).filter(|&i| grid[i] == Cell::Bomb).collect()
}

#[test]
fn grid_always_has_four_bombs_and_twelve_gems() {
    let mut seeds = ChaCha8Rng::seed_from_u64(16);
    for _ in 0..1_000 {
        let seed: i64 = seeds.random();
        let grid = generate_grid(&mut ParkMiller::new(seed));
        assert_eq!(bombs(&grid).len(), BOMB_COUNT);
        assert_eq!(grid.iter().filter(|c| **c == Cell::Gem).count(), GRID_SIZE - BOMB_COUNT);
    }
}

#[test]
fn accumulated_never_exceeds_the_wager() {
    let mut seeds = ChaCha8Rng::seed_from_u64(4);
    for _ in 0..500 {
        let seed: i64 = seeds.random();
        let wager = seeds.random_range(10..=100);
        let out = JewelMining
            .play(
                &JewelMiningInput {
                    wager,
                    clicks: (0..GRID_SIZE).collect(),
                },
                seed,
            )
            .expect("valid input");
        assert!(out.display.accumulated <= wager);
        assert!(out.delta <= i64::from(wager));
        assert_eq!(out.display.grid.len(), GRID_SIZE);
    }
}

#[test]
fn revealing_only_gems_pays_per_gem() {
    let seed = 2024;
    let grid = generate_grid(&mut ParkMiller::new(seed));
    let gems: Vec<usize> = (0..GRID_SIZE).filter(|&i| grid[i] == Cell::Gem).take(3).collect();
    let out = JewelMining
        .play(&JewelMiningInput { wager: 50, clicks: gems }, seed)
        .expect("valid input");
    assert_eq!(out.display.final_state, MineState::Continue);
    assert_eq!(out.display.accumulated, 3 * gem_value(50));
    assert_eq!(out.delta, 30);
    assert_eq!(out.result, ResultClass::Win);
}

#[test]
fn hitting_a_bomb_forfeits_everything() {
    let seed = 77;
    let grid = generate_grid(&mut ParkMiller::new(seed));
    let bomb = bombs(&grid)[0];
    let gem = (0..GRID_SIZE).find(|&i| grid[i] == Cell::Gem).expect("a gem exists");
    let out = JewelMining
        .play(
            &JewelMiningInput {
                wager: 40,
                clicks: vec![gem, bomb],
            },
            seed,
        )
        .expect("valid input");
    assert_eq!(out.display.final_state, MineState::Lost);
    assert_eq!(out.display.bomb_position, Some(bomb));
    assert_eq!(out.display.accumulated, 0);
    assert_eq!(out.delta, -40);
}

#[test]
fn five_gems_cap_at_the_wager() {
    let seed = 31;
    let grid = generate_grid(&mut ParkMiller::new(seed));
    let gems: Vec<usize> = (0..GRID_SIZE).filter(|&i| grid[i] == Cell::Gem).take(6).collect();
    let out = JewelMining
        .play(&JewelMiningInput { wager: 25, clicks: gems }, seed)
        .expect("valid input");
    assert_eq!(out.display.final_state, MineState::Won);
    assert_eq!(out.display.accumulated, 25);
    assert_eq!(out.delta, 25);
}

#[test]
fn no_clicks_is_a_push() {
    let out = JewelMining
        .play(&JewelMiningInput { wager: 10, clicks: vec![] }, 3)
        .expect("valid input");
    assert_eq!((out.result, out.delta), (ResultClass::Push, 0));
}

#[test]
fn bad_clicks_are_rejected() {
    for clicks in [vec![16], vec![1, 2, 1]] {
        let err = JewelMining
            .play(&JewelMiningInput { wager: 10, clicks }, 3)
            .expect_err("must reject");
        assert!(matches!(err, GameError::InvalidInput(_)));
    }
}
