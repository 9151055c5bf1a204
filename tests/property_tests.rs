//! Property tests for roster and evaluation invariants.

use proptest::prelude::*;

use name_slots::{
    evaluate, GameMode, Grid, PickerConfig, PickerEngine, PickerRng, SpinResult, CENTER,
    PLACEHOLDER,
};

fn small_name() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,6}"
}

fn grid_from(pool: &[String], picks: &[usize; 9]) -> Grid {
    Grid::from_cells(std::array::from_fn(|i| pool[picks[i] % pool.len()].clone()))
}

fn mode() -> impl Strategy<Value = GameMode> {
    prop_oneof![Just(GameMode::Single), Just(GameMode::Triple)]
}

proptest! {
    /// N distinct names added one at a time give length N in order.
    #[test]
    fn prop_roster_keeps_distinct_names(names in prop::collection::hash_set(small_name(), 0..20)) {
        let names: Vec<String> = names.into_iter().collect();
        let mut engine = PickerEngine::empty();
        for name in &names {
            engine.add_name(name).unwrap();
        }
        prop_assert_eq!(engine.roster().len(), names.len());
        prop_assert!(engine.roster().iter().eq(names.iter().map(String::as_str)));
    }

    /// Re-adding any present name never changes the length.
    #[test]
    fn prop_duplicate_add_is_noop(
        names in prop::collection::hash_set(small_name(), 1..10),
        pick in any::<prop::sample::Index>(),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let mut engine = PickerEngine::empty();
        for name in &names {
            engine.add_name(name).unwrap();
        }
        let again = pick.get(&names);
        prop_assert!(engine.add_name(again).is_err());
        prop_assert_eq!(engine.roster().len(), names.len());
    }

    /// evaluate is a pure function of grid and mode.
    #[test]
    fn prop_evaluate_deterministic(
        pool in prop::collection::vec(small_name(), 1..4),
        picks in any::<[usize; 9]>(),
        mode in mode(),
    ) {
        let grid = grid_from(&pool, &picks);
        prop_assert_eq!(evaluate(&grid, mode), evaluate(&grid.clone(), mode));
    }

    /// Single mode always names the center cell.
    #[test]
    fn prop_single_mode_center_wins(
        pool in prop::collection::vec(small_name(), 1..4),
        picks in any::<[usize; 9]>(),
    ) {
        let grid = grid_from(&pool, &picks);
        let result = evaluate(&grid, GameMode::Single);
        prop_assert_eq!(result.primary(), &grid[CENTER]);
        prop_assert_eq!(result.winners().len(), 1);
    }

    /// Triple mode: aligned row gives three equal winners, anything else the center.
    #[test]
    fn prop_triple_mode_rules(
        pool in prop::collection::vec(small_name(), 1..4),
        picks in any::<[usize; 9]>(),
    ) {
        let grid = grid_from(&pool, &picks);
        let [a, b, c] = grid.center_row();
        match evaluate(&grid, GameMode::Triple) {
            SpinResult::Triple { winners } => {
                prop_assert!(a == b && b == c && a != PLACEHOLDER);
                prop_assert!(winners.iter().all(|w| w == a));
            }
            SpinResult::Single { winner } => {
                prop_assert!(!(a == b && b == c));
                prop_assert_eq!(winner.as_str(), &grid[CENTER]);
            }
            SpinResult::Jackpot { .. } => prop_assert!(false, "no jackpot variant in triple mode"),
        }
    }

    /// Seeded spins only ever produce roster names, and the winner is removable.
    #[test]
    fn prop_spin_then_remove(seed in any::<u64>(), triple in any::<bool>()) {
        let mut engine = PickerEngine::new(PickerConfig::default()).unwrap();
        if triple {
            engine.set_mode(GameMode::Triple).unwrap();
        }
        let mut rng = PickerRng::new(seed);
        let (grid, result) = engine.spin(&mut rng).unwrap();
        prop_assert!(grid.cells().iter().all(|c| engine.roster().contains(c)));

        let before = engine.roster().len();
        let removed = engine.remove_winners().unwrap();
        prop_assert_eq!(removed.len(), 1);
        prop_assert_eq!(removed[0].as_str(), result.primary());
        prop_assert_eq!(engine.roster().len(), before - 1);
        prop_assert!(engine.last_result().is_none());
    }

    /// clear() always lands in the same state.
    #[test]
    fn prop_clear_resets(seed in any::<u64>(), begin in any::<bool>()) {
        let mut engine = PickerEngine::new(PickerConfig::default()).unwrap();
        let mut rng = PickerRng::new(seed);
        if begin {
            engine.begin_spin(&mut rng).unwrap();
        } else {
            engine.spin(&mut rng).unwrap();
        }
        engine.clear();
        prop_assert_eq!(engine.roster().len(), 0);
        prop_assert!(!engine.is_spinning());
        prop_assert!(engine.last_result().is_none());
    }
}
