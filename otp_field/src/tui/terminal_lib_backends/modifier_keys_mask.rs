// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::KeyModifiers;
use serde::{Deserialize, Serialize};

/// Which of the modifier keys were held down along with a [`crate::Key`]. Use the
/// builder style `with_*` methods to make one.
///
/// ```
/// use r3bl_otp_field::{KeyState, ModifierKeysMask};
///
/// let ctrl_shift = ModifierKeysMask::new().with_ctrl().with_shift();
/// assert_eq!(ctrl_shift.ctrl_key_state, KeyState::Pressed);
/// assert_eq!(ctrl_shift.alt_key_state, KeyState::NotPressed);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierKeysMask {
    pub shift_key_state: KeyState,
    pub ctrl_key_state: KeyState,
    pub alt_key_state: KeyState,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    Pressed,
    #[default]
    NotPressed,
}

impl ModifierKeysMask {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn is_ctrl_pressed(&self) -> bool { self.ctrl_key_state == KeyState::Pressed }

    #[must_use]
    pub fn is_shift_pressed(&self) -> bool { self.shift_key_state == KeyState::Pressed }

    #[must_use]
    pub fn is_alt_pressed(&self) -> bool { self.alt_key_state == KeyState::Pressed }
}

/// Returns [None] if none of SHIFT, CONTROL or ALT are set, so that the caller can
/// produce a [`crate::KeyPress::Plain`] instead of a [`crate::KeyPress::WithModifiers`].
#[must_use]
pub fn convert_key_modifiers(modifiers: &KeyModifiers) -> Option<ModifierKeysMask> {
    let mask = ModifierKeysMask::from(*modifiers);
    if mask == ModifierKeysMask::default() {
        None
    } else {
        Some(mask)
    }
}

impl From<KeyModifiers> for ModifierKeysMask {
    /// Only SHIFT, CONTROL and ALT are carried over. SUPER, HYPER and META are dropped.
    fn from(modifiers: KeyModifiers) -> Self {
        let mut it = ModifierKeysMask::new();
        if modifiers.contains(KeyModifiers::SHIFT) {
            it = it.with_shift();
        }
        if modifiers.contains(KeyModifiers::CONTROL) {
            it = it.with_ctrl();
        }
        if modifiers.contains(KeyModifiers::ALT) {
            it = it.with_alt();
        }
        it
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_convert_key_modifiers() {
        assert_eq2!(convert_key_modifiers(&KeyModifiers::NONE), None);
        assert_eq2!(
            convert_key_modifiers(&(KeyModifiers::CONTROL | KeyModifiers::SHIFT)),
            Some(ModifierKeysMask::new().with_ctrl().with_shift())
        );
        assert_eq2!(
            convert_key_modifiers(&KeyModifiers::ALT),
            Some(ModifierKeysMask::new().with_alt())
        );
        assert_eq2!(convert_key_modifiers(&KeyModifiers::SUPER), None);
    }
}
