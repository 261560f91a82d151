// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words linefeed

//! Per character fallback, for chunks that aren't a single key (fast typing, pastes,
//! an ESC followed by a key the meta pattern doesn't accept, etc).
//!
//! The chunk is scanned one user perceived character at a time: an ASCII char, or one
//! grapheme cluster like `👍🏽` or `e` + combining acute. A pending ESC is carried in an
//! [`EscapeCarry`] that lives for exactly one call:
//!
//! | Unit                      | Pending ESC is...                                |
//! |:--------------------------|:-------------------------------------------------|
//! | ESC                       | set; or if already set, `escape` + meta, cleared |
//! | `\r` `\n` `\t`            | flushed as a separate `escape` first             |
//! | `\b` `\x7f`               | consumed as meta on `backspace`                  |
//! | space                     | consumed as meta on `space`                      |
//! | `<= 0x1A` (Ctrl+letter)   | flushed as a separate `escape` first             |
//! | `a-z`                     | consumed as meta on the letter                   |
//! | `A-Z`                     | consumed as meta on the (shifted) letter         |
//! | anything else             | flushed as a separate `escape` first             |
//! | end of chunk              | flushed as `escape`, no meta                     |
//!
//! Every unit produces exactly one key, and the carry adds at most one extra `escape`
//! before it.

use super::classifier::ctrl_key;
use crate::{BACKSPACE, CTRL_LETTER_MAX, DELETE, ESC, Key, KeyName, NamedKey};
use unicode_segmentation::UnicodeSegmentation;

/// ESC seen, but not yet attached to a key or emitted. Never outlives one call to
/// [`classify_per_grapheme`].
#[derive(Debug, Default)]
struct EscapeCarry {
    pending: bool,
}

impl EscapeCarry {
    /// Returns whether an ESC was pending, and clears it.
    fn take(&mut self) -> bool { std::mem::take(&mut self.pending) }

    /// Emit the pending ESC (if any) as its own `escape` key.
    fn flush(&mut self, sink: &mut impl Extend<Key>) {
        if self.take() {
            emit(sink, Key::named(NamedKey::Escape));
        }
    }
}

fn emit(sink: &mut impl Extend<Key>, key: Key) { sink.extend(std::iter::once(key)); }

/// Classify `chunk` one unit at a time, pushing keys into `sink` in arrival order.
pub fn classify_per_grapheme(chunk: &str, sink: &mut impl Extend<Key>) {
    let mut carry = EscapeCarry::default();

    for grapheme in chunk.graphemes(true) {
        if grapheme.is_ascii() {
            // ASCII clusters are single chars, except CR LF which is two keys.
            for ch in grapheme.chars() {
                classify_char(ch, &mut carry, sink);
            }
        } else {
            // Never empty.
            if let Some(name) = KeyName::literal(grapheme) {
                carry.flush(sink);
                emit(sink, Key::new(name));
            }
        }
    }

    // ESC was the last character.
    carry.flush(sink);
}

fn classify_char(ch: char, carry: &mut EscapeCarry, sink: &mut impl Extend<Key>) {
    match ch {
        ESC => {
            if carry.take() {
                emit(sink, Key::named(NamedKey::Escape).with_meta());
            } else {
                carry.pending = true;
            }
        }
        '\r' | '\n' | '\t' => {
            carry.flush(sink);
            emit(sink, Key::named(match ch {
                '\r' => NamedKey::Return,
                '\n' => NamedKey::Linefeed,
                _ => NamedKey::Tab,
            }));
        }
        BACKSPACE | DELETE => {
            emit(sink, Key::named(NamedKey::Backspace).with_meta_if(carry.take()));
        }
        ' ' => emit(sink, Key::named(NamedKey::Space).with_meta_if(carry.take())),
        _ if ch <= CTRL_LETTER_MAX => {
            carry.flush(sink);
            emit(sink, ctrl_key(ch));
        }
        'a'..='z' => emit(sink, Key::from_char(ch).with_meta_if(carry.take())),
        'A'..='Z' => emit(
            sink,
            Key::from_char(ch.to_ascii_lowercase())
                .with_shift()
                .with_meta_if(carry.take()),
        ),
        _ => {
            carry.flush(sink);
            emit(sink, Key::from_char(ch));
        }
    }
}
