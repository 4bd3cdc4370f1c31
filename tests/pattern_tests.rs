//! Pattern matching against frames built from 24-bit colors

use firefly_test::{Color, Frame, Glyph, Pattern};

/// Every named glyph laid out in one row
const ALL_GLYPHS: &str = "KPROYgGDdBbCW";

fn palette_row() -> Frame {
    let colors = [
        0x1A1C2C, 0x5D275D, 0xB13E53, 0xEF7D57, 0xFFCD75, 0xA7F070, 0x38B764, 0x257179,
        0x29366F, 0x3B5DC9, 0x41A6F6, 0x73EFF7, 0xF4F4F4,
    ];
    Frame::from_rgb24(&colors, colors.len()).unwrap()
}

#[test]
fn test_every_glyph() {
    let frame = palette_row();
    frame.assert_pattern(ALL_GLYPHS).unwrap();
    assert_eq!(frame.to_string(), format!("{ALL_GLYPHS}\n"));
}

#[test]
fn test_spaced_and_indented_pattern() {
    let frame = palette_row();
    let pattern = "
        K P R O Y g G
    ";
    frame.assert_pattern(pattern).unwrap();
}

#[test]
fn test_emoji_pattern() {
    let frame = palette_row();
    let heart = "\u{2665}\u{fe0f}";
    let pattern = format!("🖤💜{heart}🧡💛");
    frame.assert_pattern(&pattern).unwrap();
}

#[test]
fn test_wildcards() {
    let frame = palette_row();
    frame.assert_pattern(".............").unwrap();
    frame.assert_pattern("K...........W").unwrap();
    assert!(!frame.matches_pattern("W").unwrap());
}

#[test]
fn test_equality_with_pattern() {
    let frame = palette_row();
    assert!(frame == *"KPR");
    assert!(frame != *"KPX");
    assert!(frame != *"RPK");
}

#[test]
fn test_parsed_pattern_reuse() {
    let pattern = Pattern::parse("KP\n").unwrap();
    assert_eq!(pattern.lines()[0].glyphs[0], Glyph::Color(Color::BLACK));
    assert!(pattern.matches(&palette_row()).unwrap());

    let other = Frame::new(vec![Color::BLACK, Color::BLACK], 2).unwrap();
    assert!(!pattern.matches(&other).unwrap());
}

#[test]
fn test_scenario_two_rows() {
    let buf = [0x1A1C2C, 0xB13E53, 0x38B764, 0x3B5DC9, 0xFFCD75, 0xF4F4F4];
    let frame = Frame::from_rgb24(&buf, 3).unwrap();
    frame.assert_pattern("KRG\nBYW").unwrap();

    let err = frame.assert_pattern("KRB\nBYW").unwrap_err();
    let report = err.mismatch().unwrap().clone().with_color(false);
    assert_eq!(report.differing(), 1);
    assert!(report.to_string().contains("   0: KRG != KRB  (x=2)"));
}
