// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words linefeed

//! Whole chunk classification.
//!
//! Terminals usually deliver one keystroke per read, so the decoder first tries to
//! read the entire chunk as one key. The patterns are tried in priority order and the
//! first match wins:
//!
//! | #  | Chunk                                  | Key                                      |
//! |:---|:---------------------------------------|:-----------------------------------------|
//! | 1  | `\r`                                   | `return`                                 |
//! | 2  | `\n`                                   | `linefeed`                               |
//! | 3  | `\t`                                   | `tab`                                    |
//! | 4  | `\b`, `\x7f`, ESC + either             | `backspace`, meta iff ESC                |
//! | 5  | ESC, ESC ESC                           | `escape`, meta iff doubled               |
//! | 6  | space, ESC + space                     | `space`, meta iff ESC                    |
//! | 7  | one char `<= 0x1A`                     | `code + 0x60`, ctrl                      |
//! | 8  | one of `a-z`, `0-9`                    | literal                                  |
//! | 9  | one of `A-Z`                           | lowercase literal, shift                 |
//! | 10 | ESC + one of `a-zA-Z0-9`               | lowercase literal, meta, shift iff upper |
//! | 11 | ESC+ `O`/`N`/`[`/`[[` body             | table lookup or `undefined`, modifiers   |
//!
//! Anything else returns [`None`] and goes to the [per character fallback].
//!
//! [per character fallback]: super::fallback

use super::{function_key_parser::parse_function_key_sequence,
            function_key_table::resolve_function_key};
use crate::{BACKSPACE, CTRL_LETTER_MAX, CTRL_TO_LOWERCASE_OFFSET, DELETE, ESC, Key,
            NamedKey};

/// Classify the entire `chunk` as a single key, see the [module docs](self).
#[must_use]
pub fn classify_whole_chunk(chunk: &str) -> Option<Key> {
    let mut chars = chunk.chars();
    match (chars.next(), chars.next(), chars.next()) {
        // Empty chunk, nothing to classify.
        (None, _, _) => None,

        // One char.
        (Some(ch), None, _) => classify_single_char(ch),

        // Two chars.
        (Some(ESC), Some(BACKSPACE | DELETE), None) => {
            Some(Key::named(NamedKey::Backspace).with_meta())
        }
        (Some(ESC), Some(ESC), None) => Some(Key::named(NamedKey::Escape).with_meta()),
        (Some(ESC), Some(' '), None) => Some(Key::named(NamedKey::Space).with_meta()),
        (Some(ESC), Some(ch), None) if ch.is_ascii_alphanumeric() => {
            Some(meta_key(ch))
        }

        // Longer, or ESC + something the meta pattern rejects.
        _ => classify_function_key(chunk),
    }
}

/// Steps 1 to 9 of the table, for a chunk that is exactly one char.
fn classify_single_char(ch: char) -> Option<Key> {
    match ch {
        '\r' => Some(Key::named(NamedKey::Return)),
        '\n' => Some(Key::named(NamedKey::Linefeed)),
        '\t' => Some(Key::named(NamedKey::Tab)),
        BACKSPACE | DELETE => Some(Key::named(NamedKey::Backspace)),
        ESC => Some(Key::named(NamedKey::Escape)),
        ' ' => Some(Key::named(NamedKey::Space)),
        _ if ch <= CTRL_LETTER_MAX => Some(ctrl_key(ch)),
        'a'..='z' | '0'..='9' => Some(Key::from_char(ch)),
        'A'..='Z' => Some(Key::from_char(ch.to_ascii_lowercase()).with_shift()),
        _ => None,
    }
}

/// Ctrl+letter chord from a C0 control char, eg: `\x03` is Ctrl+C. Only call this with
/// `ch <= 0x1A`.
pub(super) fn ctrl_key(ch: char) -> Key {
    let letter = char::from_u32(u32::from(ch) + CTRL_TO_LOWERCASE_OFFSET).unwrap_or(ch);
    Key::from_char(letter).with_ctrl()
}

/// ESC + alphanumeric, eg: `ESC b` is Meta+B, `ESC F` is Meta+Shift+F.
fn meta_key(ch: char) -> Key {
    let key = Key::from_char(ch.to_ascii_lowercase()).with_meta();
    if ch.is_ascii_uppercase() { key.with_shift() } else { key }
}

/// Step 11. A well formed sequence always produces a key, even when the code is unknown.
fn classify_function_key(chunk: &str) -> Option<Key> {
    let sequence = parse_function_key_sequence(chunk)?;
    let code = sequence.code();
    let (named_key, modifiers) = resolve_function_key(&code, sequence.modifiers());

    if named_key == NamedKey::Undefined {
        tracing::debug!(
            message = "Unknown function key sequence",
            code = %code,
            ctrl = modifiers.ctrl,
            meta = modifiers.meta,
            shift = modifiers.shift
        );
    }

    Some(Key::named(named_key).with_modifiers(modifiers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn classify(chunk: &str) -> Key {
        classify_whole_chunk(chunk).unwrap()
    }

    #[test_case("\r", NamedKey::Return)]
    #[test_case("\n", NamedKey::Linefeed)]
    #[test_case("\t", NamedKey::Tab)]
    #[test_case("\x08", NamedKey::Backspace)]
    #[test_case("\x7f", NamedKey::Backspace)]
    #[test_case("\x1b", NamedKey::Escape)]
    #[test_case(" ", NamedKey::Space)]
    fn test_single_named_keys(chunk: &str, expected: NamedKey) {
        assert_eq!(classify(chunk), Key::named(expected));
    }

    #[test_case("\x1b\x08", NamedKey::Backspace)]
    #[test_case("\x1b\x7f", NamedKey::Backspace)]
    #[test_case("\x1b\x1b", NamedKey::Escape)]
    #[test_case("\x1b ", NamedKey::Space)]
    fn test_escape_prefixed_named_keys(chunk: &str, expected: NamedKey) {
        assert_eq!(classify(chunk), Key::named(expected).with_meta());
    }

    #[test_case('\x01', 'a')]
    #[test_case('\x03', 'c')]
    #[test_case('\x04', 'd')]
    #[test_case('\x0b', 'k')]
    #[test_case('\x1a', 'z')]
    #[test_case('\x00', '`')]
    fn test_control_chars(ch: char, expected: char) {
        let key = classify(&ch.to_string());
        assert_eq!(key, Key::from_char(expected).with_ctrl());
    }

    #[test]
    fn test_literals() {
        assert_eq!(classify("a"), Key::from_char('a'));
        assert_eq!(classify("7"), Key::from_char('7'));
        assert_eq!(classify("Q"), Key::from_char('q').with_shift());
    }

    #[test]
    fn test_punctuation_and_non_ascii_are_not_whole_chunk_matches() {
        assert_eq!(classify_whole_chunk("!"), None);
        assert_eq!(classify_whole_chunk("é"), None);
        assert_eq!(classify_whole_chunk(""), None);
    }

    #[test_case("\x1bb", 'b', false)]
    #[test_case("\x1bF", 'f', true)]
    #[test_case("\x1b5", '5', false)]
    #[test_case("\x1bO", 'o', true)]
    fn test_meta_keys(chunk: &str, letter: char, shift: bool) {
        let expected = Key::from_char(letter).with_meta();
        let expected = if shift { expected.with_shift() } else { expected };
        assert_eq!(classify(chunk), expected);
    }

    #[test]
    fn test_escape_plus_punctuation_is_not_a_meta_key() {
        assert_eq!(classify_whole_chunk("\x1b["), None);
        assert_eq!(classify_whole_chunk("\x1b!"), None);
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(classify("\x1b[A"), Key::named(NamedKey::Up));
        assert_eq!(classify("\x1b[1;2A"), Key::named(NamedKey::Up).with_shift());
        assert_eq!(classify("\x1b[1;5C"), Key::named(NamedKey::Right).with_ctrl());
        assert_eq!(classify("\x1b[1;3D"), Key::named(NamedKey::Left).with_meta());
        assert_eq!(classify("\x1bOP"), Key::named(NamedKey::F1));
        assert_eq!(classify("\x1b[11~"), Key::named(NamedKey::F1));
        assert_eq!(classify("\x1b[15;2~"), Key::named(NamedKey::F5).with_shift());
        assert_eq!(classify("\x1b[Z"), Key::named(NamedKey::Tab).with_shift());
        assert_eq!(classify("\x1b[2^"), Key::named(NamedKey::Insert).with_ctrl());
        assert_eq!(classify("\x1b[[5~"), Key::named(NamedKey::PageUp));
    }

    #[test]
    fn test_unknown_function_key_is_undefined_with_modifiers() {
        assert_eq!(classify("\x1b[99~"), Key::named(NamedKey::Undefined));
        assert_eq!(
            classify("\x1b[99;5~"),
            Key::named(NamedKey::Undefined).with_ctrl()
        );
        assert_eq!(classify("\x1b[1;2X"), Key::named(NamedKey::Undefined).with_shift());
    }

    #[test]
    fn test_multiple_leading_escapes() {
        assert_eq!(classify("\x1b\x1b[A"), Key::named(NamedKey::Up));
    }

    #[test]
    fn test_multi_key_chunks_are_not_whole_chunk_matches() {
        assert_eq!(classify_whole_chunk("ab\n"), None);
        assert_eq!(classify_whole_chunk("\x1b\t\x1b"), None);
        assert_eq!(classify_whole_chunk("\x1b[A\x1b[B"), None);
    }
}
