use minutecasino_engine::engine::GameEngine;
use minutecasino_engine::outcome::ResultClass;
use minutecasino_engine::plinko::{
    final_slot, settle, Bounce, Plinko, PlinkoInput, MULTIPLIERS, ROWS,
};

#[test]
fn final_slot_stays_on_the_board_for_any_path() {
    for len in [0, 1, ROWS, 40] {
        assert!(final_slot(&vec![Bounce::Left; len]) < MULTIPLIERS.len());
        assert!(final_slot(&vec![Bounce::Right; len]) < MULTIPLIERS.len());
    }
    assert_eq!(final_slot(&vec![Bounce::Left; ROWS]), 0);
    assert_eq!(final_slot(&vec![Bounce::Right; ROWS]), MULTIPLIERS.len() - 1);
}

#[test]
fn played_rounds_follow_their_path() {
    for seed in 0..500 {
        let out = Plinko.play(&PlinkoInput { wager: 20 }, seed).expect("valid wager");
        let d = out.display;
        assert_eq!(d.path.len(), ROWS);
        assert_eq!(d.chip_positions.len(), ROWS + 1);
        assert_eq!(d.final_slot, final_slot(&d.path));
        assert_eq!(d.multiplier, MULTIPLIERS[d.final_slot]);
        assert_eq!((out.result, out.delta), settle(20, d.multiplier));
    }
}

#[test]
fn settlement_by_multiplier() {
    assert_eq!(settle(20, 2.0), (ResultClass::Win, 20));
    assert_eq!(settle(20, 1.5), (ResultClass::Win, 10));
    assert_eq!(settle(20, 1.0), (ResultClass::Push, 0));
    assert_eq!(settle(20, 0.5), (ResultClass::Loss, -10));
    assert_eq!(settle(20, 0.1), (ResultClass::Loss, -18));
}

#[test]
fn wager_limits_apply() {
    assert!(!Plinko.validate(&PlinkoInput { wager: 9 }));
    assert!(Plinko.validate(&PlinkoInput { wager: 10 }));
    assert!(Plinko.validate(&PlinkoInput { wager: 80 }));
    assert!(!Plinko.validate(&PlinkoInput { wager: 81 }));
}
