use grapheme_seg::{Grapheme, PropertyGroup};
use grapheme_seg_macro::g;

const CRLF: &Grapheme = g!("\r\n");

#[test]
fn test_str_literals() {
    assert_eq!(CRLF.as_str(), "\r\n");
    assert!(CRLF.is_control());
    assert_eq!(g!("\u{1F1F3}\u{1F1F4}").as_str(), "\u{1F1F3}\u{1F1F4}");
    assert!(g!("\u{1F1F3}\u{1F1F4}").is_flag());
}

#[test]
fn test_char_literals() {
    assert_eq!(g!('q').as_str(), "q");
    assert_eq!(g!('\u{AC00}').group(), PropertyGroup::LV);
}

#[test]
fn test_matches_runtime_check() {
    let literal = g!("\u{0600}\u{0661}");
    assert_eq!(
        Grapheme::from_code_points("\u{0600}\u{0661}"),
        Some(literal)
    );
}
