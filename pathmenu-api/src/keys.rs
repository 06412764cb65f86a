//! Declarative key combinations attached to actions.
//!
//! The resolver never enforces these; hosts use them to bind shortcuts and
//! to show hints next to menu items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyboard modifiers for key combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub cmd: bool, // Command on macOS, Super/Win on other platforms
}

impl Modifiers {
    pub const NONE: Self = Self { ctrl: false, alt: false, shift: false, cmd: false };
    pub const CTRL: Self = Self { ctrl: true, alt: false, shift: false, cmd: false };
    pub const CMD: Self = Self { ctrl: false, alt: false, shift: false, cmd: true };
    pub const CTRL_SHIFT: Self = Self { ctrl: true, alt: false, shift: true, cmd: false };
}

/// Named (non-character) keys used by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedKey {
    Enter,
    Escape,
    Tab,
    F1,
}

/// A key: a character or a named key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeySpec {
    Char(char),
    Named(NamedKey),
}

impl KeySpec {
    pub const fn char(c: char) -> Self {
        Self::Char(c)
    }

    pub const fn named(n: NamedKey) -> Self {
        Self::Named(n)
    }

    pub fn display(&self) -> String {
        match self {
            KeySpec::Char(c) => c.to_uppercase().to_string(),
            KeySpec::Named(n) => match n {
                NamedKey::Enter => "Enter".to_string(),
                NamedKey::Escape => "Esc".to_string(),
                NamedKey::Tab => "Tab".to_string(),
                NamedKey::F1 => "F1".to_string(),
            },
        }
    }
}

/// A key combination (modifiers + key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyCombo {
    pub modifiers: Modifiers,
    pub key: KeySpec,
}

impl KeyCombo {
    pub const fn new(modifiers: Modifiers, key: KeySpec) -> Self {
        Self { modifiers, key }
    }

    /// Format for display (e.g., "Ctrl+Shift+E").
    pub fn display(&self) -> String {
        let mut result = String::new();
        if self.modifiers.ctrl { result.push_str("Ctrl+"); }
        if self.modifiers.alt { result.push_str("Alt+"); }
        if self.modifiers.shift { result.push_str("Shift+"); }
        if self.modifiers.cmd { result.push_str("Super+"); }
        result.push_str(&self.key.display());
        result
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
