use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    build_placement, place_fleet, Fleet, Grid, ParamsError, PlacementKind, PlacementStrategy,
    RandomPlacement, FIELD_SIZE,
};

/// No two occupied cells may touch diagonally; orthogonal contact between
/// different ships would merge their runs and break the composition check.
fn assert_no_diagonal_contact(field: &Grid<bool>) {
    for y in 0..FIELD_SIZE {
        for x in 0..FIELD_SIZE {
            if !field.at(x, y) {
                continue;
            }
            for (dx, dy) in [(1i32, 1i32), (1, -1), (-1, 1), (-1, -1)] {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx < 0 || ny < 0 || nx >= FIELD_SIZE as i32 || ny >= FIELD_SIZE as i32 {
                    continue;
                }
                assert!(
                    !field.at(nx as usize, ny as usize),
                    "diagonal contact at ({}, {})",
                    x,
                    y
                );
            }
        }
    }
}

#[test]
fn test_random_placement_full_fleet() {
    let placement = RandomPlacement::new();
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut field = Grid::default();
        placement.place_fleet(&mut rng, &mut field).unwrap();

        // composition is validated by the referee's extraction
        let fleet = Fleet::from_grid(&field).unwrap();
        assert_eq!(fleet.ships_remaining(), 10);
        assert_no_diagonal_contact(&field);
    }
}

#[test]
fn test_eclipsed_placement_full_fleet() {
    let placement = build_placement(PlacementKind::Eclipsed, "").unwrap();
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut field = Grid::default();
        placement.place_fleet(&mut rng, &mut field).unwrap();

        let fleet = Fleet::from_grid(&field).unwrap();
        assert_eq!(fleet.ships_remaining(), 10);
        assert_no_diagonal_contact(&field);
    }
}

#[test]
fn test_eclipsed_placement_without_trick() {
    let placement =
        build_placement(PlacementKind::Eclipsed, "min_eclipse_trick=false").unwrap();
    let mut rng = SmallRng::seed_from_u64(99);
    let mut field = Grid::default();
    placement.place_fleet(&mut rng, &mut field).unwrap();
    Fleet::from_grid(&field).unwrap();
}

#[test]
fn test_eclipsed_placement_wide_tradeoff() {
    let placement =
        build_placement(PlacementKind::Eclipsed, "max_eclipse_tradeoff=50").unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    let mut field = Grid::default();
    placement.place_fleet(&mut rng, &mut field).unwrap();
    let fleet = Fleet::from_grid(&field).unwrap();
    assert_eq!(fleet.ships_remaining(), 10);
    assert_no_diagonal_contact(&field);
}

#[test]
fn test_placement_driver_restarts_from_scratch() {
    let placement = RandomPlacement::new();
    let mut rng = SmallRng::seed_from_u64(42);
    let field = place_fleet(&placement, &mut rng).unwrap();
    Fleet::from_grid(&field).unwrap();
}

#[test]
fn test_placement_params_failures_name_the_key() {
    match build_placement(PlacementKind::Eclipsed, "max_eclipse_tradeoff=oops") {
        Err(ParamsError::BadValue { key, .. }) => assert_eq!(key, "max_eclipse_tradeoff"),
        other => panic!("expected BadValue, got {:?}", other.err()),
    }

    match build_placement(PlacementKind::Random, "max_eclipse_tradeoff=2") {
        Err(ParamsError::UnknownKey { key }) => assert_eq!(key, "max_eclipse_tradeoff"),
        other => panic!("expected UnknownKey, got {:?}", other.err()),
    }
}

#[test]
fn test_placement_names_round_trip() {
    for kind in PlacementKind::ALL {
        assert_eq!(PlacementKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(PlacementKind::from_name("haphazard"), None);
}
