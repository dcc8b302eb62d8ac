use seabattle::{Coords, CoordsError, CoordsSeq, Orientation};

#[test]
fn test_coords_range_validation() {
    assert!(Coords::new(0, 0).is_ok());
    assert!(Coords::new(9, 9).is_ok());
    assert_eq!(
        Coords::new(10, 0).unwrap_err(),
        CoordsError::OutOfRange { x: 10, y: 0 }
    );
    assert_eq!(
        Coords::new(3, 12).unwrap_err(),
        CoordsError::OutOfRange { x: 3, y: 12 }
    );
}

#[test]
fn test_offset_stays_on_board() {
    let c = Coords::new(5, 5).unwrap();
    assert_eq!(c.offset(1, 0), Some(Coords::new(6, 5).unwrap()));
    assert_eq!(c.offset(0, -1), Some(Coords::new(5, 4).unwrap()));

    let corner = Coords::new(0, 0).unwrap();
    assert_eq!(corner.offset(-1, 0), None);
    assert_eq!(corner.offset(0, -1), None);
    assert_eq!(Coords::new(9, 9).unwrap().offset(1, 0), None);
}

#[test]
fn test_hv_adjacency_is_a_cross() {
    let c = Coords::new(2, 3).unwrap();
    assert!(c.is_hv_adjacent(Coords::new(2, 4).unwrap()));
    assert!(c.is_hv_adjacent(Coords::new(2, 2).unwrap()));
    assert!(c.is_hv_adjacent(Coords::new(1, 3).unwrap()));
    assert!(c.is_hv_adjacent(Coords::new(3, 3).unwrap()));

    // diagonals and self do not count
    assert!(!c.is_hv_adjacent(Coords::new(3, 4).unwrap()));
    assert!(!c.is_hv_adjacent(c));
    assert!(!c.is_hv_adjacent(Coords::new(2, 5).unwrap()));
}

#[test]
fn test_seq_from_endpoints_normalizes() {
    let a = Coords::new(5, 2).unwrap();
    let b = Coords::new(2, 2).unwrap();
    let run = CoordsSeq::from_endpoints(a, b).unwrap();
    assert_eq!(run.head(), b);
    assert_eq!(run.tail(), a);
    assert_eq!(run.orientation(), Orientation::Horizontal);
    assert_eq!(run.len(), 4);

    let run = CoordsSeq::from_endpoints(Coords::new(7, 8).unwrap(), Coords::new(7, 6).unwrap())
        .unwrap();
    assert_eq!(run.head(), Coords::new(7, 6).unwrap());
    assert_eq!(run.orientation(), Orientation::Vertical);
    assert_eq!(run.len(), 3);

    assert_eq!(
        CoordsSeq::from_endpoints(Coords::new(3, 3).unwrap(), Coords::new(4, 4).unwrap())
            .unwrap_err(),
        CoordsError::NotAligned
    );
}

#[test]
fn test_seq_anchor_constructor_bounds() {
    let anchor = Coords::new(7, 0).unwrap();
    assert!(CoordsSeq::new(anchor, Orientation::Horizontal, 3).is_ok());
    assert_eq!(
        CoordsSeq::new(anchor, Orientation::Horizontal, 4).unwrap_err(),
        CoordsError::BadRun
    );
    assert_eq!(
        CoordsSeq::new(anchor, Orientation::Vertical, 0).unwrap_err(),
        CoordsError::BadRun
    );
}

#[test]
fn test_seq_cells_enumeration() {
    let run = CoordsSeq::new(Coords::new(4, 1).unwrap(), Orientation::Vertical, 3).unwrap();
    let cells: Vec<_> = run.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coords::new(4, 1).unwrap(),
            Coords::new(4, 2).unwrap(),
            Coords::new(4, 3).unwrap(),
        ]
    );
}

#[test]
fn test_margin_clamps_to_board() {
    // run touching the top-left corner
    let run = CoordsSeq::new(Coords::new(0, 0).unwrap(), Orientation::Vertical, 3).unwrap();
    let (a, b) = run.margin();
    assert_eq!(a, Coords::new(0, 0).unwrap());
    assert_eq!(b, Coords::new(1, 3).unwrap());

    // run in open water
    let run = CoordsSeq::new(Coords::new(4, 4).unwrap(), Orientation::Horizontal, 1).unwrap();
    let (a, b) = run.margin();
    assert_eq!(a, Coords::new(3, 3).unwrap());
    assert_eq!(b, Coords::new(5, 5).unwrap());

    // run ending on the bottom-right corner
    let run = CoordsSeq::new(Coords::new(6, 9).unwrap(), Orientation::Horizontal, 4).unwrap();
    let (a, b) = run.margin();
    assert_eq!(a, Coords::new(5, 8).unwrap());
    assert_eq!(b, Coords::new(9, 9).unwrap());
}
