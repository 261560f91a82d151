// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words linefeed pageup pagedown

//! The output value of the decoder: one [`Key`] per decoded keystroke.

use crate::InlineString;
use std::fmt::{Formatter, Result};
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// Semantic key names. The string form (via [`AsRef<str>`] or [`Display`]) is the
/// lowercase token used throughout the terminal world, eg: `pageup`, `f12`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum NamedKey {
    Return,
    Linefeed,
    Tab,
    Backspace,
    Escape,
    Space,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Insert,
    Delete,
    PageUp,
    PageDown,
    Clear,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    /// An escape sequence that parsed but isn't in the function key table.
    Undefined,
}

/// Either a [`NamedKey`] or the literal text of the key.
///
/// A literal is one user perceived character: an ASCII character, or one grapheme
/// cluster such as `é` (`e` + combining acute) or `👍🏽`. Alphabetic ASCII literals
/// are always lowercase; the decoder reports uppercase through [`Key::shift`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyName {
    Named(NamedKey),
    Literal(InlineString),
}

impl KeyName {
    /// Returns [`None`] for empty text, so a [`KeyName`] is never empty.
    #[must_use]
    pub fn literal(text: &str) -> Option<Self> {
        if text.is_empty() {
            None
        } else {
            Some(KeyName::Literal(InlineString::from(text)))
        }
    }

    /// Literal from a single char.
    #[must_use]
    pub fn from_char(ch: char) -> Self {
        let mut text = InlineString::new();
        text.push(ch);
        KeyName::Literal(text)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            KeyName::Named(named_key) => named_key.as_ref(),
            KeyName::Literal(text) => text.as_str(),
        }
    }
}

impl From<NamedKey> for KeyName {
    fn from(named_key: NamedKey) -> Self { KeyName::Named(named_key) }
}

impl std::fmt::Display for KeyName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.as_str()) }
}

/// Modifier flags decoded from the modifier parameter of a CSI / SS3 sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyModifiers {
    /// Bit decomposition of `parameter - 1`:
    ///
    /// | bit | flag                        |
    /// |:----|:----------------------------|
    /// | 1   | shift                       |
    /// | 2   | meta (terminals call it Alt)|
    /// | 4   | ctrl                        |
    /// | 8   | meta                        |
    ///
    /// The subtraction is signed, so a parameter of `0` yields `-1` and sets every
    /// flag.
    #[must_use]
    pub fn from_parameter(parameter: u32) -> Self {
        let modifier = i64::from(parameter) - 1;
        Self {
            ctrl: (modifier & 4) != 0,
            meta: (modifier & 10) != 0,
            shift: (modifier & 1) != 0,
        }
    }
}

/// One decoded keystroke. Constructed once per classification outcome and pushed
/// downstream; it is never updated in place.
///
/// Invariants:
/// - [`Key::name`] is never empty.
/// - A key decoded from a Ctrl+letter control character has a lowercase letter name,
///   `ctrl == true`, and no other flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    pub name: KeyName,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Key {
    #[must_use]
    pub fn new(name: impl Into<KeyName>) -> Self {
        Self {
            name: name.into(),
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    #[must_use]
    pub fn named(named_key: NamedKey) -> Self { Self::new(named_key) }

    #[must_use]
    pub fn from_char(ch: char) -> Self { Self::new(KeyName::from_char(ch)) }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    #[must_use]
    pub fn with_meta_if(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.ctrl = modifiers.ctrl;
        self.meta = modifiers.meta;
        self.shift = modifiers.shift;
        self
    }

    #[must_use]
    pub fn name_str(&self) -> &str { self.name.as_str() }

    #[must_use]
    pub fn is(&self, named_key: NamedKey) -> bool {
        self.name == KeyName::Named(named_key)
    }
}

/// Formats as `[ctrl+][meta+][shift+]name`, eg: `ctrl+shift+up`.
impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.ctrl {
            write!(f, "ctrl+")?;
        }
        if self.meta {
            write!(f, "meta+")?;
        }
        if self.shift {
            write!(f, "shift+")?;
        }
        write!(f, "{}", self.name)
    }
}
