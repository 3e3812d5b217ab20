//! Host-level tests for strip wiring layouts.

use led_text_display::Error;
use led_text_display::constants::{FRAME_COLUMNS, LED_COUNT, STRIP_LEDS_NUMBER, STRIPS_NUMBER};
use led_text_display::led_layout::{DisplayLayout, LedLayout, SERPENTINE_WIRING, StripDirection};

#[test]
fn serpentine_3x3_matches_expected() {
    const SERPENTINE: LedLayout<9, 3, 3> = LedLayout::serpentine();
    assert_eq!(
        *SERPENTINE.map(),
        [
            (0, 0),
            (1, 0),
            (2, 0),
            (2, 1),
            (1, 1),
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 2),
        ]
    );
}

#[test]
fn display_wiring_reverses_on_odd_strips() {
    let map = SERPENTINE_WIRING.map();
    assert_eq!(map.len(), LED_COUNT);

    // Strip 0 runs left to right.
    assert_eq!(map[0], (0, 0));
    assert_eq!(map[STRIP_LEDS_NUMBER - 1], (35, 0));
    // Strip 1 is fed from the right edge.
    assert_eq!(map[STRIP_LEDS_NUMBER], (35, 1));
    assert_eq!(map[2 * STRIP_LEDS_NUMBER - 1], (0, 1));
    // The last strip (6) runs left to right again.
    assert_eq!(map[6 * STRIP_LEDS_NUMBER], (0, 6));
    assert_eq!(map[LED_COUNT - 1], (35, 6));
}

#[test]
fn serpentine_is_alternating_strip_directions() {
    const BY_DIRECTION: DisplayLayout = DisplayLayout::from_strip_directions([
        StripDirection::Ascending,
        StripDirection::Descending,
        StripDirection::Ascending,
        StripDirection::Descending,
        StripDirection::Ascending,
        StripDirection::Descending,
        StripDirection::Ascending,
    ]);
    assert!(BY_DIRECTION.equals(&SERPENTINE_WIRING));
    assert!(!SERPENTINE_WIRING.equals(&SERPENTINE_WIRING.flip_h()));
}

#[test]
fn flips_are_involutions() {
    const SERPENTINE: LedLayout<6, 3, 2> = LedLayout::serpentine();
    assert_eq!(SERPENTINE.flip_h().flip_h(), SERPENTINE);
    assert_eq!(SERPENTINE.flip_v().flip_v(), SERPENTINE);
}

#[test]
fn led_index_by_cell_inverts_map() {
    let index_by_cell = SERPENTINE_WIRING.led_index_by_cell();
    for (led_index, &(column, strip)) in SERPENTINE_WIRING.map().iter().enumerate() {
        let cell = usize::from(strip) * STRIP_LEDS_NUMBER + usize::from(column);
        assert_eq!(usize::from(index_by_cell[cell]), led_index);
    }
}

#[test]
fn remap_reads_each_cell_once_in_wiring_order() {
    let mut grid = [[0_u16; FRAME_COLUMNS]; STRIPS_NUMBER];
    for (strip, row) in grid.iter_mut().enumerate() {
        for (column, cell) in row.iter_mut().enumerate() {
            *cell = u16::try_from(strip * 100 + column).unwrap();
        }
    }

    let physical = SERPENTINE_WIRING.remap(&grid).unwrap();
    assert_eq!(physical[0], 0);
    assert_eq!(physical[35], 35);
    // First LED of strip 1 shows the rightmost visible column.
    assert_eq!(physical[36], 135);
    assert_eq!(physical[71], 100);
    // The off-screen page is never sent.
    assert!(physical.iter().all(|&value| value % 100 < 36));
}

#[test]
fn remap_rejects_a_narrow_grid() {
    let grid = [[0_u8; 10]; STRIPS_NUMBER];
    assert_eq!(SERPENTINE_WIRING.remap(&grid), Err(Error::IndexOutOfBounds));
}

#[test]
#[should_panic(expected = "duplicate (column,strip) in wiring")]
fn new_panics_on_duplicate_cell() {
    let _ = LedLayout::<3, 3, 1>::new([(0, 0), (1, 0), (1, 0)]);
}

#[test]
#[should_panic(expected = "column out of bounds")]
fn new_panics_on_out_of_bounds_column() {
    let _ = LedLayout::<3, 3, 1>::new([(0, 0), (1, 0), (3, 0)]);
}

#[test]
#[should_panic(expected = "strip out of bounds")]
fn new_panics_on_out_of_bounds_strip() {
    let _ = LedLayout::<3, 3, 1>::new([(0, 0), (1, 0), (2, 1)]);
}

#[test]
#[should_panic(expected = "W*H must equal N")]
fn new_panics_on_mismatched_dimensions() {
    let _ = LedLayout::<5, 3, 2>::new([(0, 0), (1, 0), (2, 0), (0, 1), (1, 1)]);
}
