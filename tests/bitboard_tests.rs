use battleship_env::{BitBoard, BitBoardError, CellSet};

#[test]
fn test_try_new_sizes() {
    let ok = BitBoard::<u128, 10>::try_new();
    assert!(ok.is_ok());

    let err = BitBoard::<u64, 10>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_get_set_clear() {
    let mut bb = CellSet::new();
    assert!(bb.is_empty());

    bb.set(9, 9).unwrap();
    assert!(bb.get(9, 9).unwrap());
    assert_eq!(bb.count_ones(), 1);

    bb.clear(9, 9).unwrap();
    assert!(!bb.get(9, 9).unwrap());
    assert_eq!(
        bb.set(10, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 10, col: 0 }
    );
}

#[test]
fn test_contains_signed() {
    let bb = CellSet::from_cells([(0, 0), (4, 7)]).unwrap();
    assert!(bb.contains(0, 0));
    assert!(bb.contains(4, 7));
    assert!(!bb.contains(-1, 0));
    assert!(!bb.contains(0, 10));
}

#[test]
fn test_set_relations() {
    let a = CellSet::from_cells([(1, 1), (1, 2), (1, 3)]).unwrap();
    let b = CellSet::from_cells([(1, 2)]).unwrap();
    let c = CellSet::from_cells([(5, 5)]).unwrap();
    assert!(a.is_superset(&b));
    assert!(!b.is_superset(&a));
    assert!(a.is_disjoint(&c));
    assert!(!a.is_disjoint(&b));
    assert_eq!((a & !b).count_ones(), 2);
    assert_eq!((!CellSet::new()).count_ones(), 100);
}

#[test]
fn test_iter_set_bits_row_major() {
    let bb = CellSet::from_cells([(3, 3), (0, 1)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}
