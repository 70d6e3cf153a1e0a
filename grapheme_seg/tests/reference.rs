//! Cross-checks segmentation of generated text against `unicode-segmentation`
//! and against the laws the operations must satisfy together.

use grapheme_seg::Segmenter;
use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};
use unicode_segmentation::UnicodeSegmentation;

/// Code points whose break properties are stable across Unicode versions.
/// No Indic consonants, so conjunct rules never come into play.
const ALPHABET: &[char] = &[
    'a', 'b', ' ', '\r', '\n', '\u{1}', '\u{0308}', '\u{0301}', '\u{200D}', '\u{1F1E6}',
    '\u{1F1E7}', '\u{0600}', '\u{0903}', '\u{1100}', '\u{1161}', '\u{11A8}', '\u{AC00}',
    '\u{AC01}', '\u{1F476}', '\u{1F3FB}', '\u{2764}', '\u{1F469}', '\u{1F4BB}',
];

fn generate(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

fn texts() -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(0x6772_6170_6865_6d65);
    (0..2000).map(|_| generate(&mut rng, 12)).collect()
}

fn clusters(text: &str) -> Vec<&str> {
    grapheme_seg::graphemes(text).map(|g| g.as_str()).collect()
}

#[test]
fn test_same_unicode_version() {
    let header = include_str!("data/GraphemeBreakTest.txt")
        .lines()
        .next()
        .unwrap_or("");
    let (major, minor, update) = unicode_segmentation::UNICODE_VERSION;
    assert_eq!(
        header,
        format!("# GraphemeBreakTest.txt, Unicode {major}.{minor}.{update}")
    );
}

#[test]
fn test_matches_unicode_segmentation() {
    for text in texts() {
        let expected: Vec<&str> = text.graphemes(true).collect();
        assert_eq!(clusters(&text), expected, "text {text:?}");
    }
}

#[test]
fn test_clusters_concatenate_to_text() {
    for text in texts() {
        assert_eq!(clusters(&text).concat(), text);
        assert_eq!(
            grapheme_seg::grapheme_lengths(&text).sum::<usize>(),
            text.len()
        );
    }
}

#[test]
fn test_boundaries_are_increasing() {
    for text in texts() {
        let boundaries: Vec<usize> = grapheme_seg::boundaries(&text).collect();
        assert_eq!(boundaries.first(), Some(&0));
        assert_eq!(boundaries.last(), Some(&text.len()));
        assert!(boundaries.windows(2).all(|w| w[0] < w[1]), "text {text:?}");
    }
}

#[test]
fn test_safe_split_index_is_monotonic_boundary() {
    let segmenter = Segmenter::default();
    for text in texts() {
        let mut previous = 0;
        for offset in 0..=text.len() {
            let split = segmenter.safe_split_index(&text, offset);
            assert!(split <= offset);
            assert!(split >= previous, "text {text:?} offset {offset}");
            assert!(segmenter.is_boundary(&text, split));
            previous = split;
        }
    }
}

#[test]
fn test_slice_matches_clusters() {
    let mut rng = StdRng::seed_from_u64(29);
    for text in texts() {
        let clusters = clusters(&text);
        let n = clusters.len();
        let start = rng.gen_range(0..=n + 1);
        let end = rng.gen_range(0..=n + 1);

        let expected = if start < end.min(n) {
            clusters[start..end.min(n)].concat()
        } else {
            String::new()
        };
        assert_eq!(
            grapheme_seg::slice(&text, start, Some(end)),
            expected,
            "text {text:?} {start}..{end}"
        );

        let expected = clusters.get(start..).map(|c| c.concat()).unwrap_or_default();
        assert_eq!(grapheme_seg::slice(&text, start, None), expected);
    }
}

#[test]
fn test_length_until() {
    for text in texts() {
        let n = clusters(&text).len();
        for until in 0..=n + 1 {
            assert_eq!(grapheme_seg::length(&text, Some(until)), until.min(n));
        }
    }
}

#[test]
fn test_control_separates_segmentations() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..500 {
        let left = generate(&mut rng, 8);
        let right = generate(&mut rng, 8);
        let joined = format!("{left}\u{1}{right}");

        let mut expected = clusters(&left);
        expected.push("\u{1}");
        expected.extend(clusters(&right));
        assert_eq!(clusters(&joined), expected, "text {joined:?}");
    }
}

#[test]
fn test_searches_agree_with_slices() {
    for text in texts() {
        let n = clusters(&text).len();
        for k in 0..=n {
            let head = grapheme_seg::slice(&text, 0, Some(k));
            let tail = grapheme_seg::slice(&text, k, None);
            assert!(grapheme_seg::starts_with(&text, head), "text {text:?}");
            assert!(grapheme_seg::ends_with(&text, tail), "text {text:?}");
            assert!(grapheme_seg::contains(&text, head));
        }
    }
}
