//! Host-level tests for the 5×7 font.

use led_text_display::font::{self, DEFINED_CODES, Glyph};

#[test]
fn letter_a_matches_bitmap() {
    let glyph = font::lookup(b'A');
    assert_eq!(glyph.rows(), &[0x04, 0x0a, 0x11, 0x11, 0x1f, 0x11, 0x11]);

    // Top row ..#..
    assert!(!glyph.is_ink(0, 0));
    assert!(!glyph.is_ink(0, 1));
    assert!(glyph.is_ink(0, 2));
    assert!(!glyph.is_ink(0, 3));
    assert!(!glyph.is_ink(0, 4));

    // Crossbar #####
    assert!((0..5).all(|column| glyph.is_ink(4, column)));
}

#[test]
fn space_is_blank() {
    assert!(font::lookup(b' ').is_blank());
    assert_eq!(font::lookup(b' '), Glyph::BLANK);
}

#[test]
fn codes_without_art_are_blank() {
    for code in (0x00..0x20).chain(0x80..=0xFF) {
        assert!(
            font::lookup(code).is_blank(),
            "code {code:#x} should be blank"
        );
    }
}

#[test]
fn every_printable_code_but_space_has_ink() {
    for code in DEFINED_CODES.filter(|&code| code != b' ') {
        assert!(
            !font::lookup(code).is_blank(),
            "code {code:#x} should have ink"
        );
    }
}

#[test]
fn cells_outside_glyph_are_not_ink() {
    let glyph = Glyph([0x1f; 7]);
    assert!(glyph.is_ink(6, 4));
    assert!(!glyph.is_ink(7, 0));
    assert!(!glyph.is_ink(0, 5));
}

#[test]
fn ink_count_ignores_bits_above_five_columns() {
    assert_eq!(Glyph([0xff, 0, 0, 0, 0, 0, 0]).ink_count(), 5);
    assert_eq!(font::lookup(b'I').ink_count(), 3 + 5 + 3);
}
