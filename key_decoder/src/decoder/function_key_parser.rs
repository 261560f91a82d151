// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words rxvt

//! Structured parse of CSI / SS3 function key sequences.
//!
//! ## Sequence Format
//!
//! ```text
//! ESC+ introducer body
//!
//! introducer = "O" | "N" | "[" | "[["
//! body       = number [";" parameter] ("~" | "^" | "$")     ← numeric form
//!            | ["1;"] [parameter] letter                     ← letter form
//! ```
//!
//! Examples:
//! - `ESC [ A` - Up (letter form, no parameter)
//! - `ESC [ 1 ; 5 A` - Ctrl+Up (letter form, parameter 5)
//! - `ESC [ 15 ; 2 ~` - Shift+F5 (numeric form, number 15, parameter 2)
//! - `ESC [ 5 ^` - rxvt Ctrl+PageUp (numeric form, `^` terminator)
//! - `ESC [ [ A` - Cygwin F1 (doubled bracket introducer)
//!
//! The whole chunk must be one sequence. Trailing bytes make the parse fail, and the
//! chunk goes to the per character fallback instead.
//!
//! The parse result is split into the pieces the rest of the decoder needs
//! independently: [`FunctionKeySequence::code`] for the table lookup, and
//! [`FunctionKeySequence::modifiers`] for the modifier bits.

use crate::{CSI_BRACKET, CSI_DOUBLE_BRACKET, ESC, InlineString, KeyModifiers,
            LETTER_MODIFIER_PREFIX, NUMERIC_TERMINATORS, PARAM_SEPARATOR, SS2_N, SS3_O};

/// What follows the leading ESC characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Introducer {
    /// `O`, application mode keys.
    Ss3,
    /// `N`.
    Ss2,
    /// `[`.
    Csi,
    /// `[[`, Cygwin / libuv F1-F5 and PuTTY PageUp/PageDown.
    CsiDoubleBracket,
}

impl Introducer {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Introducer::Ss3 => "O",
            Introducer::Ss2 => "N",
            Introducer::Csi => "[",
            Introducer::CsiDoubleBracket => CSI_DOUBLE_BRACKET,
        }
    }

    /// Returns the introducer and the rest of the input after it.
    fn split(input: &str) -> Option<(Self, &str)> {
        if let Some(rest) = input.strip_prefix(CSI_DOUBLE_BRACKET) {
            return Some((Introducer::CsiDoubleBracket, rest));
        }
        let mut chars = input.chars();
        let introducer = match chars.next()? {
            SS3_O => Introducer::Ss3,
            SS2_N => Introducer::Ss2,
            CSI_BRACKET => Introducer::Csi,
            _ => return None,
        };
        Some((introducer, chars.as_str()))
    }
}

/// The part of the sequence after the introducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceBody<'a> {
    /// `number [; parameter] terminator`, eg: `15;2~`. The number is kept as text
    /// since it is part of the lookup code verbatim (`011~` is not `11~`).
    Numeric {
        number: &'a str,
        parameter: Option<u32>,
        terminator: char,
    },
    /// `[1;] [parameter] letter`, eg: `1;5A`, `5A`, `A`.
    Letter {
        parameter: Option<u32>,
        letter: char,
    },
}

/// A parsed function key sequence, eg: `ESC [ 1 ; 5 A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionKeySequence<'a> {
    pub escape_count: usize,
    pub introducer: Introducer,
    pub body: SequenceBody<'a>,
}

impl FunctionKeySequence<'_> {
    /// Lookup code: introducer + number (numeric form only) + terminator or letter.
    /// The modifier parameter is never part of the code.
    ///
    /// | Sequence         | Code   |
    /// |:-----------------|:-------|
    /// | `ESC [ A`        | `[A`   |
    /// | `ESC [ 1 ; 5 A`  | `[A`   |
    /// | `ESC [ 15 ; 2 ~` | `[15~` |
    /// | `ESC O P`        | `OP`   |
    /// | `ESC [ [ 5 ~`    | `[[5~` |
    #[must_use]
    pub fn code(&self) -> InlineString {
        let mut code = InlineString::from(self.introducer.as_str());
        match self.body {
            SequenceBody::Numeric { number, terminator, .. } => {
                code.push_str(number);
                code.push(terminator);
            }
            SequenceBody::Letter { letter, .. } => code.push(letter),
        }
        code
    }

    /// The modifier parameter, `1` (no modifiers) when absent.
    #[must_use]
    pub fn modifier_parameter(&self) -> u32 {
        match self.body {
            SequenceBody::Numeric { parameter, .. }
            | SequenceBody::Letter { parameter, .. } => parameter.unwrap_or(1),
        }
    }

    #[must_use]
    pub fn modifiers(&self) -> KeyModifiers {
        KeyModifiers::from_parameter(self.modifier_parameter())
    }
}

/// Parse the whole `chunk` as one function key sequence. Returns [`None`] if the chunk
/// doesn't start with ESC, has an unknown introducer, has a malformed body, or has
/// anything left over after the terminator.
#[must_use]
pub fn parse_function_key_sequence(chunk: &str) -> Option<FunctionKeySequence<'_>> {
    let after_escapes = chunk.trim_start_matches(ESC);
    let escape_count = chunk.len() - after_escapes.len();
    if escape_count == 0 {
        return None;
    }

    let (introducer, rest) = Introducer::split(after_escapes)?;
    let body = parse_numeric_body(rest).or_else(|| parse_letter_body(rest))?;

    Some(FunctionKeySequence {
        escape_count,
        introducer,
        body,
    })
}

/// `number [; parameter] terminator` and nothing after.
fn parse_numeric_body(input: &str) -> Option<SequenceBody<'_>> {
    let (number, rest) = split_digits(input);
    if number.is_empty() {
        return None;
    }

    let (parameter, rest) = match rest.strip_prefix(PARAM_SEPARATOR) {
        Some(after_separator) => {
            let (digits, rest) = split_digits(after_separator);
            if digits.is_empty() {
                return None;
            }
            (Some(parse_saturating(digits)), rest)
        }
        None => (None, rest),
    };

    let terminator = single_char(rest)?;
    NUMERIC_TERMINATORS
        .contains(&terminator)
        .then_some(SequenceBody::Numeric {
            number,
            parameter,
            terminator,
        })
}

/// `[1;] [parameter] letter` and nothing after.
fn parse_letter_body(input: &str) -> Option<SequenceBody<'_>> {
    let input = input.strip_prefix(LETTER_MODIFIER_PREFIX).unwrap_or(input);
    let (digits, rest) = split_digits(input);
    let parameter = (!digits.is_empty()).then(|| parse_saturating(digits));

    let letter = single_char(rest)?;
    letter
        .is_ascii_alphabetic()
        .then_some(SequenceBody::Letter { parameter, letter })
}

/// Split off the leading ASCII digits.
fn split_digits(input: &str) -> (&str, &str) {
    let end = input
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(input.len());
    input.split_at(end)
}

/// Digits are ASCII only, and values too large for a [`u32`] saturate.
fn parse_saturating(digits: &str) -> u32 {
    digits.bytes().fold(0u32, |acc, digit| {
        acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
    })
}

/// The only char in `input`, or [`None`] if it has zero or more than one.
fn single_char(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("\x1b[A", "[A", 1)]
    #[test_case("\x1b[1;5A", "[A", 5)]
    #[test_case("\x1b[5A", "[A", 5)]
    #[test_case("\x1b[1;A", "[A", 1)]
    #[test_case("\x1b[1A", "[A", 1)]
    #[test_case("\x1bOP", "OP", 1)]
    #[test_case("\x1bO5Q", "OQ", 5)]
    #[test_case("\x1b[15;2~", "[15~", 2)]
    #[test_case("\x1b[3~", "[3~", 1)]
    #[test_case("\x1b[5^", "[5^", 1)]
    #[test_case("\x1b[7$", "[7$", 1)]
    #[test_case("\x1b[[A", "[[A", 1)]
    #[test_case("\x1b[[5~", "[[5~", 1)]
    #[test_case("\x1b[011~", "[011~", 1)]
    #[test_case("\x1b[Z", "[Z", 1)]
    #[test_case("\x1bNa", "Na", 1)]
    #[test_case("\x1b\x1b[A", "[A", 1)]
    fn test_code_and_parameter(input: &str, code: &str, parameter: u32) {
        let sequence = parse_function_key_sequence(input).unwrap();
        assert_eq!(sequence.code().as_str(), code);
        assert_eq!(sequence.modifier_parameter(), parameter);
    }

    #[test]
    fn test_structure_of_numeric_form() {
        assert_eq!(
            parse_function_key_sequence("\x1b\x1b[21;7~"),
            Some(FunctionKeySequence {
                escape_count: 2,
                introducer: Introducer::Csi,
                body: SequenceBody::Numeric {
                    number: "21",
                    parameter: Some(7),
                    terminator: '~',
                },
            })
        );
    }

    #[test]
    fn test_structure_of_letter_form() {
        assert_eq!(
            parse_function_key_sequence("\x1bO1;3D"),
            Some(FunctionKeySequence {
                escape_count: 1,
                introducer: Introducer::Ss3,
                body: SequenceBody::Letter {
                    parameter: Some(3),
                    letter: 'D',
                },
            })
        );
    }

    #[test_case("[A" ; "no escape")]
    #[test_case("\x1b" ; "escape only")]
    #[test_case("\x1b[" ; "introducer only")]
    #[test_case("\x1b[@" ; "invalid final char")]
    #[test_case("\x1b[5" ; "missing terminator")]
    #[test_case("\x1b[5;~" ; "separator without parameter")]
    #[test_case("\x1b[1;5" ; "letter form missing letter")]
    #[test_case("\x1b[Ax" ; "trailing text")]
    #[test_case("\x1b[A\x1b[B" ; "two sequences")]
    #[test_case("\x1bXA" ; "unknown introducer")]
    #[test_case("\x1b[1;2;3~" ; "too many parameters")]
    #[test_case("\x1b[é" ; "non ascii letter")]
    fn test_rejected(input: &str) {
        assert_eq!(parse_function_key_sequence(input), None);
    }

    #[test]
    fn test_parameter_saturates() {
        let sequence = parse_function_key_sequence("\x1b[1;99999999999A").unwrap();
        assert_eq!(sequence.modifier_parameter(), u32::MAX);
    }

    #[test]
    fn test_modifiers() {
        let sequence = parse_function_key_sequence("\x1b[1;2A").unwrap();
        assert_eq!(
            sequence.modifiers(),
            KeyModifiers {
                ctrl: false,
                meta: false,
                shift: true,
            }
        );
    }
}
