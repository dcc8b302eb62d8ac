use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    build_placement, place_fleet, run_game, CellState, Coords, Fleet, PlacementKind, ShotApplied,
    ShotResult, ShotSelector, StrategyKind, TargetCell, TargetField, TurnState, FIELD_SIZE,
    MAX_SHOTS_PER_GAME,
};

/// Cross-check the plain revealed grid against the strategy's margined view.
fn check_views_consistent(state: &TurnState, target: &TargetField) {
    for y in 0..FIELD_SIZE {
        for x in 0..FIELD_SIZE {
            let c = Coords::new(x, y).unwrap();
            let plain = state.field.get(c);
            match target.grid().get(c) {
                TargetCell::Unknown => assert_eq!(plain, CellState::Unknown),
                TargetCell::Missed => assert_eq!(plain, CellState::Missed),
                TargetCell::Harmed => assert_eq!(plain, CellState::Harmed),
                TargetCell::Killed => assert_eq!(plain, CellState::Killed),
                // margin is inferred, the plain grid never saw a shot there
                TargetCell::Margin => {
                    assert!(matches!(plain, CellState::Unknown | CellState::Missed))
                }
            }
        }
    }
}

/// Drive one full game by hand, asserting the core safety and bookkeeping
/// properties at every step. Returns the number of shots fired.
fn play_checked(seed: u64, kind: StrategyKind, placement_kind: PlacementKind) -> u32 {
    let mut rng = SmallRng::seed_from_u64(seed);
    let placement = build_placement(placement_kind, "").unwrap();
    let layout = place_fleet(placement.as_ref(), &mut rng).unwrap();
    let mut fleet = Fleet::from_grid(&layout).unwrap();

    let mut selector = ShotSelector::new(kind);
    let mut state = TurnState::new();
    let mut shots_fired = 0u32;

    loop {
        let coords = selector.get_next_shot(&state, &mut rng, None).unwrap();
        assert_eq!(
            state.field.get(coords),
            CellState::Unknown,
            "{} shot a resolved cell",
            kind.name()
        );
        assert_eq!(selector.target().grid().get(coords), TargetCell::Unknown);
        shots_fired += 1;

        let (result, killed_size) = fleet.resolve(coords).unwrap();
        if let Some(size) = killed_size {
            state.killed_ships += 1;
            state.killed_of_size[size - 1] += 1;
        }

        match selector
            .apply_shot_result(&mut state, coords, result)
            .unwrap()
        {
            ShotApplied::Won => {
                assert_eq!(state.turn, shots_fired, "turn counter != shots fired");
                assert_eq!(fleet.ships_remaining(), 0);
                return shots_fired;
            }
            ShotApplied::Continue => {
                if result == ShotResult::Killed {
                    // kill closure: the tracker must be idle again
                    assert!(!selector.target().has_harmed_ship());
                }
                check_views_consistent(&state, selector.target());
                state.turn += 1;
                assert!(state.turn <= MAX_SHOTS_PER_GAME, "no win within the cap");
            }
        }
    }
}

#[test]
fn test_scenario_random_placement_mixed_strategy() {
    let shots = play_checked(2024, StrategyKind::Mixed, PlacementKind::Random);
    assert!(shots <= MAX_SHOTS_PER_GAME);
    // twenty ship cells cannot fall in fewer than twenty shots
    assert!(shots >= 20);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let proto = ShotSelector::new(StrategyKind::Mixed);
    let placement = build_placement(PlacementKind::Random, "").unwrap();

    let mut first = proto.fresh_game();
    let mut rng = SmallRng::seed_from_u64(77);
    let a = run_game(&mut first, placement.as_ref(), &mut rng).unwrap();

    let mut second = proto.fresh_game();
    let mut rng = SmallRng::seed_from_u64(77);
    let b = run_game(&mut second, placement.as_ref(), &mut rng).unwrap();

    assert_eq!(a, b);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Every strategy wins every game within the shot cap, under both
    /// placements, while holding the per-step invariants.
    #[test]
    fn full_game_holds_invariants(seed in any::<u64>()) {
        for kind in StrategyKind::ALL {
            let shots = play_checked(seed, kind, PlacementKind::Random);
            prop_assert!(shots <= MAX_SHOTS_PER_GAME);
        }
        let shots = play_checked(seed, StrategyKind::Mixed, PlacementKind::Eclipsed);
        prop_assert!(shots <= MAX_SHOTS_PER_GAME);
    }

    /// The driver API reports the same shot count the hand-rolled loop does.
    #[test]
    fn run_game_matches_manual_loop(seed in any::<u64>()) {
        let placement = build_placement(PlacementKind::Random, "").unwrap();
        let mut selector = ShotSelector::new(StrategyKind::Mixed);
        let mut rng = SmallRng::seed_from_u64(seed);
        let report = run_game(&mut selector, placement.as_ref(), &mut rng).unwrap();

        let manual = play_checked(seed, StrategyKind::Mixed, PlacementKind::Random);
        prop_assert_eq!(report.shots, manual);
    }

    /// Placement always terminates: success or failure within its bounds.
    #[test]
    fn placement_terminates(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        for kind in PlacementKind::ALL {
            let placement = build_placement(kind, "").unwrap();
            let layout = place_fleet(placement.as_ref(), &mut rng).unwrap();
            let fleet = Fleet::from_grid(&layout).unwrap();
            prop_assert_eq!(fleet.ships_remaining(), 10);
        }
    }
}
