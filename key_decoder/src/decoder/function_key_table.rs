// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words rxvt libuv putty

//! Static mapping from a function key lookup code (see
//! [`FunctionKeySequence::code`]) to a [`NamedKey`].
//!
//! Some terminals encode a modifier in the terminator or letter case instead of the
//! modifier parameter (rxvt `$` = shift, `^` = ctrl, `ESC O a` = ctrl). Those entries
//! carry a [`ForcedModifier`] that is turned on in addition to whatever the parameter
//! decoded to.
//!
//! Function key codes (with gaps, `16` and `22` are unused):
//! - F1: 11, F2: 12, F3: 13, F4: 14, F5: 15
//! - F6: 17, F7: 18, F8: 19, F9: 20, F10: 21
//! - F11: 23, F12: 24
//!
//! [`FunctionKeySequence::code`]: crate::FunctionKeySequence::code

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

use crate::{KeyModifiers, NamedKey};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Modifier implied by the code itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForcedModifier {
    None,
    Shift,
    Ctrl,
}

impl ForcedModifier {
    #[must_use]
    pub fn apply(self, modifiers: KeyModifiers) -> KeyModifiers {
        match self {
            ForcedModifier::None => modifiers,
            ForcedModifier::Shift => KeyModifiers { shift: true, ..modifiers },
            ForcedModifier::Ctrl => KeyModifiers { ctrl: true, ..modifiers },
        }
    }
}

/// One row of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionKeyEntry {
    pub code: &'static str,
    pub key: NamedKey,
    pub forced: ForcedModifier,
}

const fn entry(code: &'static str, key: NamedKey) -> FunctionKeyEntry {
    FunctionKeyEntry { code, key, forced: ForcedModifier::None }
}

const fn shift(code: &'static str, key: NamedKey) -> FunctionKeyEntry {
    FunctionKeyEntry { code, key, forced: ForcedModifier::Shift }
}

const fn ctrl(code: &'static str, key: NamedKey) -> FunctionKeyEntry {
    FunctionKeyEntry { code, key, forced: ForcedModifier::Ctrl }
}

/// Every recognized code. Codes are unique.
pub const FUNCTION_KEY_ENTRIES: &[FunctionKeyEntry] = &[
    // xterm/gnome ESC O letter.
    entry("OP",    NamedKey::F1),
    entry("OQ",    NamedKey::F2),
    entry("OR",    NamedKey::F3),
    entry("OS",    NamedKey::F4),

    // xterm/rxvt ESC [ number ~.
    entry("[11~",  NamedKey::F1),
    entry("[12~",  NamedKey::F2),
    entry("[13~",  NamedKey::F3),
    entry("[14~",  NamedKey::F4),

    // Cygwin, also used in libuv.
    entry("[[A",   NamedKey::F1),
    entry("[[B",   NamedKey::F2),
    entry("[[C",   NamedKey::F3),
    entry("[[D",   NamedKey::F4),
    entry("[[E",   NamedKey::F5),

    // Common.
    entry("[15~",  NamedKey::F5),
    entry("[17~",  NamedKey::F6),
    entry("[18~",  NamedKey::F7),
    entry("[19~",  NamedKey::F8),
    entry("[20~",  NamedKey::F9),
    entry("[21~",  NamedKey::F10),
    entry("[23~",  NamedKey::F11),
    entry("[24~",  NamedKey::F12),

    // xterm ESC [ letter.
    entry("[A",    NamedKey::Up),
    entry("[B",    NamedKey::Down),
    entry("[C",    NamedKey::Right),
    entry("[D",    NamedKey::Left),
    entry("[E",    NamedKey::Clear),
    entry("[F",    NamedKey::End),
    entry("[H",    NamedKey::Home),

    // xterm/gnome ESC O letter.
    entry("OA",    NamedKey::Up),
    entry("OB",    NamedKey::Down),
    entry("OC",    NamedKey::Right),
    entry("OD",    NamedKey::Left),
    entry("OE",    NamedKey::Clear),
    entry("OF",    NamedKey::End),
    entry("OH",    NamedKey::Home),

    // xterm/rxvt ESC [ number ~.
    entry("[1~",   NamedKey::Home),
    entry("[2~",   NamedKey::Insert),
    entry("[3~",   NamedKey::Delete),
    entry("[4~",   NamedKey::End),
    entry("[5~",   NamedKey::PageUp),
    entry("[6~",   NamedKey::PageDown),

    // PuTTY.
    entry("[[5~",  NamedKey::PageUp),
    entry("[[6~",  NamedKey::PageDown),

    // rxvt.
    entry("[7~",   NamedKey::Home),
    entry("[8~",   NamedKey::End),

    // rxvt keys with modifiers.
    shift("[a",    NamedKey::Up),
    shift("[b",    NamedKey::Down),
    shift("[c",    NamedKey::Right),
    shift("[d",    NamedKey::Left),
    shift("[e",    NamedKey::Clear),

    shift("[2$",   NamedKey::Insert),
    shift("[3$",   NamedKey::Delete),
    shift("[5$",   NamedKey::PageUp),
    shift("[6$",   NamedKey::PageDown),
    shift("[7$",   NamedKey::Home),
    shift("[8$",   NamedKey::End),

    ctrl("Oa",     NamedKey::Up),
    ctrl("Ob",     NamedKey::Down),
    ctrl("Oc",     NamedKey::Right),
    ctrl("Od",     NamedKey::Left),
    ctrl("Oe",     NamedKey::Clear),

    ctrl("[2^",    NamedKey::Insert),
    ctrl("[3^",    NamedKey::Delete),
    ctrl("[5^",    NamedKey::PageUp),
    ctrl("[6^",    NamedKey::PageDown),
    ctrl("[7^",    NamedKey::Home),
    ctrl("[8^",    NamedKey::End),

    // Misc.
    shift("[Z",    NamedKey::Tab),
];

static FUNCTION_KEY_TABLE: LazyLock<FxHashMap<&'static str, FunctionKeyEntry>> =
    LazyLock::new(|| {
        FUNCTION_KEY_ENTRIES
            .iter()
            .map(|entry| (entry.code, *entry))
            .collect()
    });

/// Look up a code. [`None`] means the sequence is well formed but unknown, and the
/// caller reports it as [`NamedKey::Undefined`].
#[must_use]
pub fn lookup_function_key(code: &str) -> Option<FunctionKeyEntry> {
    FUNCTION_KEY_TABLE.get(code).copied()
}

/// Resolve a code and the decoded modifiers to the final key name and modifiers.
#[must_use]
pub fn resolve_function_key(code: &str, modifiers: KeyModifiers) -> (NamedKey, KeyModifiers) {
    match lookup_function_key(code) {
        Some(entry) => (entry.key, entry.forced.apply(modifiers)),
        None => (NamedKey::Undefined, modifiers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_codes_are_unique() {
        assert_eq!(FUNCTION_KEY_TABLE.len(), FUNCTION_KEY_ENTRIES.len());
    }

    #[test_case("OP", NamedKey::F1)]
    #[test_case("OS", NamedKey::F4)]
    #[test_case("[11~", NamedKey::F1)]
    #[test_case("[15~", NamedKey::F5)]
    #[test_case("[17~", NamedKey::F6)]
    #[test_case("[21~", NamedKey::F10)]
    #[test_case("[23~", NamedKey::F11)]
    #[test_case("[24~", NamedKey::F12)]
    #[test_case("[[E", NamedKey::F5)]
    #[test_case("[E", NamedKey::Clear)]
    #[test_case("OH", NamedKey::Home)]
    #[test_case("[4~", NamedKey::End)]
    #[test_case("[[6~", NamedKey::PageDown)]
    #[test_case("[8~", NamedKey::End)]
    fn test_plain_entries(code: &str, expected: NamedKey) {
        assert_eq!(
            resolve_function_key(code, KeyModifiers::default()),
            (expected, KeyModifiers::default())
        );
    }

    #[test_case("[16~" ; "gap at 16")]
    #[test_case("[22~" ; "gap at 22")]
    #[test_case("[99~" ; "unknown number")]
    #[test_case("OZ" ; "unknown ss3 letter")]
    fn test_unknown_codes_are_undefined(code: &str) {
        assert_eq!(lookup_function_key(code), None);
        let modifiers = KeyModifiers { ctrl: true, meta: false, shift: false };
        assert_eq!(resolve_function_key(code, modifiers), (NamedKey::Undefined, modifiers));
    }

    #[test]
    fn test_forced_shift_and_ctrl() {
        let none = KeyModifiers::default();
        let (key, modifiers) = resolve_function_key("[a", none);
        assert_eq!((key, modifiers.shift, modifiers.ctrl), (NamedKey::Up, true, false));

        let (key, modifiers) = resolve_function_key("[5^", none);
        assert_eq!((key, modifiers.shift, modifiers.ctrl), (NamedKey::PageUp, false, true));

        let (key, modifiers) = resolve_function_key("Oe", none);
        assert_eq!((key, modifiers.ctrl), (NamedKey::Clear, true));

        let (key, modifiers) = resolve_function_key("[Z", none);
        assert_eq!((key, modifiers.shift), (NamedKey::Tab, true));
    }

    #[test]
    fn test_forced_modifier_adds_to_decoded_modifiers() {
        let meta = KeyModifiers { ctrl: false, meta: true, shift: false };
        assert_eq!(
            resolve_function_key("[3$", meta),
            (NamedKey::Delete, KeyModifiers { ctrl: false, meta: true, shift: true })
        );
    }
}
