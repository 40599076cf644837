use battleship_env::{Cell, CellSet, Fleet, FleetError, Orientation, Ship, ShipType};

fn ship(len: usize, orientation: Orientation, row: usize, col: usize) -> Ship {
    Ship::new(ShipType::new("test", len), orientation, row, col).unwrap()
}

#[test]
fn test_from_ships_rejects_neighbours() {
    let a = ship(3, Orientation::Horizontal, 2, 2);
    // directly below
    let b = ship(2, Orientation::Horizontal, 3, 3);
    assert_eq!(
        Fleet::from_ships(&[a, b]).unwrap_err(),
        FleetError::ShipTouches { row: 3, col: 3 }
    );
    // diagonal contact at (3, 5)
    let c = ship(1, Orientation::Horizontal, 3, 5);
    assert!(Fleet::from_ships(&[a, c]).is_err());
    // overlap
    let d = ship(2, Orientation::Vertical, 1, 3);
    assert!(Fleet::from_ships(&[a, d]).is_err());
    // one row of water in between
    let e = ship(4, Orientation::Horizontal, 4, 0);
    assert!(Fleet::from_ships(&[a, e]).is_ok());
}

#[test]
fn test_cells_and_sum() {
    let mut fleet = Fleet::from_ships(&[ship(2, Orientation::Vertical, 0, 0)]).unwrap();
    assert_eq!(fleet.occupied(), 2);
    assert_eq!(fleet.sum(), 2);
    assert_eq!(fleet.cell(0, 0), Some(Cell::Intact));
    assert_eq!(fleet.cell(0, 1), Some(Cell::Empty));
    assert_eq!(fleet.cell(-1, 0), None);

    assert!(fleet.strike(0, 0));
    assert_eq!(fleet.cell(0, 0), Some(Cell::Hit));
    assert_eq!(fleet.sum(), 0);
    // repeated strike and water change nothing
    assert!(!fleet.strike(0, 0));
    assert!(!fleet.strike(5, 5));
    assert_eq!(fleet.sum(), 0);

    assert!(fleet.strike(1, 0));
    assert_eq!(fleet.sum(), -2);
    assert!(fleet.all_sunk());

    let values = fleet.values();
    assert_eq!(values[0][0], -1.0);
    assert_eq!(values[1][0], -1.0);
    assert_eq!(values.iter().flatten().sum::<f64>(), -2.0);
}

#[test]
fn test_sunk_ship_waits_for_last_segment() {
    let carrier = ship(4, Orientation::Horizontal, 5, 3);
    let mut fleet = Fleet::from_ships(&[carrier]).unwrap();

    for col in [3, 6, 4] {
        assert!(fleet.strike(5, col));
        assert_eq!(fleet.sunk_ship(5, col), None);
    }
    assert!(fleet.strike(5, 5));
    assert_eq!(fleet.sunk_ship(5, 5), Some(carrier.mask()));
}

#[test]
fn test_sunk_ship_only_collects_its_own_cells() {
    let a = ship(3, Orientation::Vertical, 0, 9);
    let b = ship(2, Orientation::Vertical, 4, 9);
    let mut fleet = Fleet::from_ships(&[a, b]).unwrap();
    for (r, c) in a.cells().chain(b.cells()) {
        fleet.strike(r, c);
    }
    assert_eq!(fleet.sunk_ship(0, 9), Some(a.mask()));
    assert_eq!(fleet.sunk_ship(5, 9), Some(b.mask()));
    assert_eq!(fleet.hits(), a.mask() | b.mask());
    assert!(fleet.intact().is_empty());
}

#[test]
fn test_debug_has_no_trailing_newline() {
    let fleet = Fleet::from_ships(&[ship(2, Orientation::Vertical, 0, 0)]).unwrap();
    let text = format!("{:?}", fleet);
    assert!(text.starts_with("Fleet {"));
    assert!(text.contains("ships:"));
    assert!(text.contains("hits:"));
    assert!(text.ends_with('}'));
}

#[test]
fn test_single_cell_ship_sinks_at_once() {
    let mut fleet = Fleet::from_ships(&[ship(1, Orientation::Horizontal, 0, 0)]).unwrap();
    assert!(fleet.strike(0, 0));
    assert_eq!(
        fleet.sunk_ship(0, 0),
        Some(CellSet::from_cells([(0, 0)]).unwrap())
    );
}
