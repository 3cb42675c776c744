//! Unit tests for pixel-map construction and neighbor iteration.

use rstest::rstest;

use super::{Connectivity, PixelMap};
use crate::error::ComponentTreeError;

fn ramp(width: usize, height: usize, connectivity: Connectivity) -> PixelMap {
    let values = (0..width * height)
        .map(|id| u8::try_from(id % 256).expect("fits in u8"))
        .collect();
    PixelMap::new(width, height, values, connectivity).expect("valid dimensions")
}

#[rstest]
#[case(0, 3)]
#[case(3, 0)]
#[case(0, 0)]
fn rejects_zero_dimensions(#[case] width: usize, #[case] height: usize) {
    let err = PixelMap::new(width, height, vec![], Connectivity::Four)
        .expect_err("zero dimensions are invalid");
    assert_eq!(err, ComponentTreeError::InvalidDimensions { width, height });
}

#[test]
fn rejects_size_mismatch() {
    let err = PixelMap::new(2, 2, vec![0; 5], Connectivity::Four)
        .expect_err("five values cannot fill a 2x2 grid");
    assert_eq!(
        err,
        ComponentTreeError::GridSizeMismatch {
            expected: 4,
            actual: 5
        }
    );
}

#[test]
fn rejects_overflowing_dimensions() {
    let err = PixelMap::new(usize::MAX, 2, vec![], Connectivity::Four)
        .expect_err("pixel count overflows");
    assert!(matches!(err, ComponentTreeError::DimensionsOverflow { .. }));
}

#[test]
fn from_rows_rejects_ragged_rows() {
    let rows: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![4, 5]];
    let err = PixelMap::from_rows(&rows, Connectivity::Four).expect_err("ragged rows");
    assert!(matches!(err, ComponentTreeError::GridSizeMismatch { .. }));
}

#[rstest]
#[case(4, Ok(Connectivity::Four))]
#[case(8, Ok(Connectivity::Eight))]
#[case(6, Err(ComponentTreeError::UnsupportedNeighborhood { got: 6 }))]
#[case(0, Err(ComponentTreeError::UnsupportedNeighborhood { got: 0 }))]
fn parses_neighborhood_type(
    #[case] raw: u8,
    #[case] expected: Result<Connectivity, ComponentTreeError>,
) {
    assert_eq!(Connectivity::try_from(raw), expected);
}

#[rstest]
#[case::corner(0, vec![1, 4])]
#[case::edge(1, vec![2, 0, 5])]
#[case::centre(5, vec![6, 1, 4, 9])]
#[case::far_corner(15, vec![11, 14])]
fn four_neighbors_stay_in_bounds(#[case] id: usize, #[case] expected: Vec<usize>) {
    let map = ramp(4, 4, Connectivity::Four);
    assert_eq!(map.neighbors(id).collect::<Vec<_>>(), expected);
}

#[rstest]
#[case::corner(0, vec![1, 4, 5])]
#[case::centre(5, vec![6, 1, 4, 9, 2, 0, 8, 10])]
#[case::far_corner(15, vec![11, 14, 10])]
fn eight_neighbors_include_diagonals(#[case] id: usize, #[case] expected: Vec<usize>) {
    let map = ramp(4, 4, Connectivity::Eight);
    assert_eq!(map.neighbors(id).collect::<Vec<_>>(), expected);
}

#[test]
fn neighbor_iteration_restarts() {
    let map = ramp(3, 3, Connectivity::Eight);
    let first: Vec<usize> = map.neighbors(4).collect();
    let second: Vec<usize> = map.neighbors(4).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 8);
}

#[test]
fn single_pixel_has_no_neighbors() {
    let map = PixelMap::new(1, 1, vec![7], Connectivity::Eight).expect("1x1 is valid");
    assert_eq!(map.neighbors(0).count(), 0);
}

#[rstest]
#[case(Connectivity::Four)]
#[case(Connectivity::Eight)]
fn out_of_range_pixels_have_no_neighbors(#[case] connectivity: Connectivity) {
    let map = ramp(4, 4, connectivity);
    assert_eq!(map.neighbors(16).count(), 0);
    assert_eq!(map.neighbors(usize::MAX).count(), 0);
    assert!((0..connectivity.degree()).all(|direction| map.neighbor(16, direction).is_none()));
}

#[test]
fn neighbor_slots_match_iteration_order() {
    let map = ramp(4, 3, Connectivity::Eight);
    for id in 0..map.len() {
        let by_slot: Vec<usize> = (0..map.connectivity().degree())
            .filter_map(|direction| map.neighbor(id, direction))
            .collect();
        assert_eq!(by_slot, map.neighbors(id).collect::<Vec<_>>());
    }
}

#[test]
fn pixel_records_carry_coordinates() {
    let map = ramp(5, 2, Connectivity::Four);
    let pixel = map.pixel(7).expect("in range");
    assert_eq!((pixel.x, pixel.y, pixel.value), (2, 1, 7));
    assert_eq!(map.index_of(2, 1), Some(7));
    assert_eq!(map.index_of(5, 0), None);
    assert!(map.pixel(10).is_none());
    assert_eq!(map.pixels().count(), 10);
}
