//! End-to-end scenarios over the full pipeline
//!
//! Concrete alphabets with known-good codes, degenerate inputs, and the
//! failure modes of construction.

use huffman_codes::{BuildError, CodeBook, CodeTree, CodingError};

/// The standard worked example: frequencies 5/9/12/13/16/45.
const GLYPHS: [char; 6] = ['a', 'b', 'c', 'd', 'e', 'f'];
const WEIGHTS: [u64; 6] = [5, 9, 12, 13, 16, 45];

#[test]
fn classic_frequency_set() {
    let (tree, book) = CodeBook::build(&GLYPHS, &WEIGHTS).expect("valid input");

    // The dominant symbol gets the single-bit code; the rarest is pushed to
    // depth four.
    assert_eq!(book.code_for('f'), Some("0"));
    assert!(book.code_for('a').expect("coded").len() >= 4);
    assert_eq!(tree.weighted_path_length(), 224);

    // Every emitted code is a nonempty bitstring.
    for entry in &book {
        assert!(!entry.bits.is_empty());
        assert!(entry.bits.chars().all(|bit| bit == '0' || bit == '1'));
    }
}

#[test]
fn classic_set_total_matches_code_lengths() {
    let (tree, book) = CodeBook::build(&GLYPHS, &WEIGHTS).expect("valid input");

    let total: u64 = GLYPHS
        .iter()
        .zip(&WEIGHTS)
        .map(|(&glyph, &weight)| {
            weight * book.code_for(glyph).expect("every glyph coded").len() as u64
        })
        .sum();
    assert_eq!(total, tree.weighted_path_length());
}

#[test]
fn single_symbol_gets_a_code() {
    let (tree, book) = CodeBook::build(&['x'], &[7]).expect("valid input");

    assert_eq!(book.len(), 1);
    assert_eq!(book.code_for('x'), Some("0"));
    assert_eq!(book.to_string(), "x: 0\n");

    let bits = book.encode("xxxx").expect("alphabet covers the text");
    assert_eq!(bits, "0000");
    assert_eq!(tree.decode(&bits).expect("valid bits"), "xxxx");
}

#[test]
fn empty_input_fails_cleanly() {
    assert_eq!(CodeTree::build(&[], &[]).unwrap_err(), BuildError::EmptyInput);
    assert!(CodeBook::build(&[], &[]).is_err());
}

#[test]
fn mismatched_slices_fail() {
    assert_eq!(
        CodeTree::build(&['a'], &[1, 2]).unwrap_err(),
        BuildError::LengthMismatch {
            glyphs: 1,
            weights: 2
        }
    );
}

#[test]
fn two_symbols_split_the_first_bit() {
    let (_, book) = CodeBook::build(&['n', 'y'], &[30, 70]).expect("valid input");
    assert_eq!(book.code_for('n'), Some("0"));
    assert_eq!(book.code_for('y'), Some("1"));
}

#[test]
fn equal_frequencies_yield_a_balanced_tree() {
    let (tree, book) = CodeBook::build(&['a', 'b', 'c', 'd'], &[1, 1, 1, 1]).expect("valid input");

    // Which symbol lands where is insertion-order dependent, but with four
    // equal weights every resolution is a two-level tree.
    for glyph in ['a', 'b', 'c', 'd'] {
        assert_eq!(book.code_for(glyph).expect("coded").len(), 2);
    }
    assert_eq!(tree.weighted_path_length(), 8);
}

#[test]
fn skewed_frequencies_yield_a_deep_tree() {
    // Fibonacci-like weights force a chain: each merge result ties into the
    // next smallest leaf.
    let (tree, book) =
        CodeBook::build(&['a', 'b', 'c', 'd', 'e'], &[1, 1, 2, 4, 8]).expect("valid input");
    assert_eq!(book.code_for('e').expect("coded").len(), 1);
    assert_eq!(book.code_for('a').expect("coded").len(), 4);
    assert_eq!(tree.weighted_path_length(), 1 * 4 + 1 * 4 + 2 * 3 + 4 * 2 + 8 * 1);
}

#[test]
fn decode_errors_are_reported() {
    let (tree, _) = CodeBook::build(&GLYPHS, &WEIGHTS).expect("valid input");
    assert_eq!(tree.decode("2").unwrap_err(), CodingError::InvalidBit('2'));
    assert_eq!(tree.decode("1").unwrap_err(), CodingError::TruncatedInput);
}

#[test]
fn codebook_display_matches_external_format() {
    let (_, book) = CodeBook::build(&['n', 'y'], &[30, 70]).expect("valid input");
    assert_eq!(book.to_string(), "n: 0\ny: 1\n");
}
