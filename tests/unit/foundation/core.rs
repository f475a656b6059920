use super::*;

#[test]
fn grid_size_rejects_empty_grids() {
    assert!(GridSize::new(0, 3).is_err());
    assert!(GridSize::new(4, 0).is_err());
    assert_eq!(GridSize::new(7, 3).unwrap().cell_count(), 21);
}

#[test]
fn clamp_position_maps_overflow_to_last_cell() {
    let g = GridSize::new(3, 2).unwrap();
    assert_eq!(g.clamp_position(0), 0);
    assert_eq!(g.clamp_position(5), 5);
    assert_eq!(g.clamp_position(6), 5);
    assert_eq!(g.clamp_position(usize::MAX), 5);
}

#[test]
fn row_col_is_row_major() {
    let g = GridSize::new(3, 2).unwrap();
    assert_eq!(g.row_col(0), (0, 0));
    assert_eq!(g.row_col(2), (0, 2));
    assert_eq!(g.row_col(3), (1, 0));
    assert_eq!(g.row_col(5), (1, 2));
}

#[test]
fn background_fill_and_blank() {
    assert_eq!(Background::White.fill(), 1.0);
    assert_eq!(Background::Black.fill(), 0.0);
    assert_eq!(Background::from_black(true), Background::Black);

    let blank = Background::Black.blank(4, 2);
    assert_eq!(blank.dimensions(), (4, 2));
    assert!(blank.pixels().all(|p| p.0 == [0.0, 0.0, 0.0]));
}
