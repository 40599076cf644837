use battleship_env::{CellSet, FleetError, Orientation, Ship, ShipType};

#[test]
fn test_cells_follow_orientation() -> Result<(), FleetError> {
    let def = ShipType::new("battlecruiser", 3);
    let ship = Ship::new(def, Orientation::Vertical, 2, 4)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(2, 4), (3, 4), (4, 4)]);

    let ship = Ship::new(def, Orientation::Horizontal, 2, 4)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(2, 4), (2, 5), (2, 6)]);
    assert_eq!(ship.mask(), CellSet::from_cells(cells)?);
    Ok(())
}

#[test]
fn test_out_of_bounds() {
    let def = ShipType::new("carrier", 4);
    assert_eq!(
        Ship::new(def, Orientation::Horizontal, 0, 7).unwrap_err(),
        FleetError::ShipOutOfBounds { row: 0, col: 7 }
    );
    assert!(Ship::new(def, Orientation::Horizontal, 0, 6).is_ok());
    assert!(Ship::new(def, Orientation::Vertical, 7, 0).is_err());
    assert!(Ship::new(def, Orientation::Vertical, 0, 10).is_err());
}

#[test]
fn test_far_out_origin_is_rejected() {
    let sub = ShipType::new("submarine", 1);
    assert_eq!(
        Ship::new(sub, Orientation::Horizontal, 0, usize::MAX).unwrap_err(),
        FleetError::ShipOutOfBounds {
            row: 0,
            col: usize::MAX
        }
    );
    assert!(Ship::new(sub, Orientation::Vertical, usize::MAX, 0).is_err());
    assert!(Ship::new(ShipType::new("huge", usize::MAX), Orientation::Vertical, 0, 0).is_err());
    assert!(Ship::new(ShipType::new("empty", 0), Orientation::Vertical, 0, 0).is_err());
}

#[test]
fn test_window_in_open_water() -> Result<(), FleetError> {
    let ship = Ship::new(ShipType::new("frigate", 2), Orientation::Horizontal, 4, 4)?;
    let window = ship.window();
    // 3 rows x (2 + 2) columns
    assert_eq!(window.count_ones(), 12);
    assert!(window.get(3, 3)?);
    assert!(window.get(5, 6)?);
    assert!(!window.get(4, 7)?);
    Ok(())
}

#[test]
fn test_window_clipped_at_corner() -> Result<(), FleetError> {
    let ship = Ship::new(ShipType::new("carrier", 4), Orientation::Vertical, 6, 9)?;
    let window = ship.window();
    // rows 5..=9, cols 8..=9
    assert_eq!(window.count_ones(), 10);
    assert!(window.get(5, 8)?);
    assert!(window.get(9, 9)?);
    Ok(())
}
