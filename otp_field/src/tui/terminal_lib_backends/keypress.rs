// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::{Deserialize, Serialize};

use super::{ModifierKeysMask, convert_key_modifiers};

/// Examples.
///
/// ```rust
/// use r3bl_otp_field::*;
///
/// let a = keypress!(@char 'a');
/// assert_eq!(a, KeyPress::Plain { key: Key::Character('a') });
///
/// let ctrl_v = keypress!(@char ModifierKeysMask::new().with_ctrl(), 'v');
/// assert!(ctrl_v.is_paste_modifier_combination());
///
/// let backspace = keypress!(@special SpecialKey::Backspace);
/// assert_eq!(backspace, KeyPress::Plain { key: Key::SpecialKey(SpecialKey::Backspace) });
///
/// let f1 = keypress!(@fn FunctionKey::F1);
/// assert_eq!(f1, KeyPress::Plain { key: Key::FunctionKey(FunctionKey::F1) });
/// ```
#[macro_export]
macro_rules! keypress {
    // @char
    (@char $arg_char : expr) => {
        $crate::KeyPress::Plain {
            key: $crate::Key::Character($arg_char),
        }
    };

    (@char $arg_modifiers : expr, $arg_char : expr) => {
        $crate::KeyPress::WithModifiers {
            mask: $arg_modifiers,
            key: $crate::Key::Character($arg_char),
        }
    };

    // @special
    (@special $arg_special : expr) => {
        $crate::KeyPress::Plain {
            key: $crate::Key::SpecialKey($arg_special),
        }
    };

    (@special $arg_modifiers : expr, $arg_special : expr) => {
        $crate::KeyPress::WithModifiers {
            mask: $arg_modifiers,
            key: $crate::Key::SpecialKey($arg_special),
        }
    };

    // @fn
    (@fn $arg_function : expr) => {
        $crate::KeyPress::Plain {
            key: $crate::Key::FunctionKey($arg_function),
        }
    };

    (@fn $arg_modifiers : expr, $arg_function : expr) => {
        $crate::KeyPress::WithModifiers {
            mask: $arg_modifiers,
            key: $crate::Key::FunctionKey($arg_function),
        }
    };
}

/// This is equivalent to [`crossterm::event::KeyEvent`] except that it is cleaned up
/// semantically and impossible states are removed. The OTP field only ever sees
/// [`KeyPress`], never the crossterm type. See [`convert_key_event`] for the conversion.
///
/// Please use the [`keypress!`] macro instead of directly constructing this enum.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Copy)]
pub enum KeyPress {
    Plain { key: Key },
    WithModifiers { key: Key, mask: ModifierKeysMask },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Copy)]
pub enum Key {
    /// A [char] that the user typed. It may or may not be printable, see
    /// [`KeyPress::as_single_printable_char`].
    Character(char),
    SpecialKey(SpecialKey),
    FunctionKey(FunctionKey),
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Copy)]
pub enum FunctionKey {
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
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Copy)]
pub enum SpecialKey {
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    BackTab, /* Shift + Tab */
    Delete,
    Insert,
    Esc,
}

impl KeyPress {
    #[must_use]
    pub fn key(&self) -> Key {
        match self {
            KeyPress::Plain { key } | KeyPress::WithModifiers { key, .. } => *key,
        }
    }

    /// The platform key combinations that ask for a paste from the system clipboard:
    /// - <kbd>Ctrl+V</kbd> (and <kbd>Ctrl+Shift+V</kbd>, which many terminal emulators
    ///   use since <kbd>Ctrl+V</kbd> is taken by the shell).
    /// - <kbd>Shift+Insert</kbd>.
    ///
    /// The OTP field lets these through untouched, so that the host can perform the
    /// paste.
    #[must_use]
    pub fn is_paste_modifier_combination(&self) -> bool {
        match self {
            KeyPress::WithModifiers {
                key: Key::Character(character),
                mask,
            } => {
                mask.is_ctrl_pressed()
                    && !mask.is_alt_pressed()
                    && character.eq_ignore_ascii_case(&'v')
            }
            KeyPress::WithModifiers {
                key: Key::SpecialKey(SpecialKey::Insert),
                mask,
            } => mask.is_shift_pressed() && !mask.is_ctrl_pressed(),
            _ => false,
        }
    }

    /// Returns the character if this key press is exactly one printable character,
    /// regardless of modifiers. Control characters are not printable.
    #[must_use]
    pub fn as_single_printable_char(&self) -> Option<char> {
        match self.key() {
            Key::Character(character) if !character.is_control() => Some(character),
            _ => None,
        }
    }
}

/// Typecast / convert [`KeyEvent`] to [`KeyPress`].
///
/// Only [`KeyEventKind::Press`] is converted. Terminals that speak the kitty keyboard
/// protocol (and Windows) also report `Release` and `Repeat`, those are dropped so that
/// a single key stroke doesn't fill two cells.
///
/// For character keys <kbd>Shift</kbd> is folded into the character itself:
///
/// ```text
/// ╔════════════════════╦═══════════════════════════════════════════════╗
/// ║ User action        ║ Result                                        ║
/// ╠════════════════════╬═══════════════════════════════════════════════╣
/// ║ Type "x"           ║ keypress!(@char 'x')                          ║
/// ╠════════════════════╬═══════════════════════════════════════════════╣
/// ║ Type "X"           ║ keypress!(@char 'X'), the SHIFT is ignored    ║
/// ╠════════════════════╬═══════════════════════════════════════════════╣
/// ║ Type "Ctrl + v"    ║ keypress!(@char CTRL, 'v')                    ║
/// ╚════════════════════╩═══════════════════════════════════════════════╝
/// ```
pub mod convert_key_event {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl TryFrom<KeyEvent> for KeyPress {
        type Error = ();

        fn try_from(key_event: KeyEvent) -> Result<Self, Self::Error> {
            if key_event.kind != KeyEventKind::Press {
                return Err(());
            }

            match key_event {
                // If character keys, then ignore SHIFT or NONE modifiers.
                KeyEvent {
                    code: KeyCode::Char(character),
                    modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                    ..
                } => Ok(keypress! { @char character }),
                // Everything else.
                _ => {
                    let key = copy_code_from_key_event(&key_event).ok_or(())?;
                    Ok(match convert_key_modifiers(&key_event.modifiers) {
                        Some(mask) => KeyPress::WithModifiers { key, mask },
                        None => KeyPress::Plain { key },
                    })
                }
            }
        }
    }

    /// Macro to insulate this library from changes in crossterm
    /// [`crossterm::event::KeyEvent`] constructor & fields.
    #[macro_export]
    macro_rules! crossterm_keyevent {
        (
            code: $arg_key_code: expr,
            modifiers: $arg_key_modifiers: expr
        ) => {
            crossterm::event::KeyEvent::new($arg_key_code, $arg_key_modifiers)
        };
    }

    fn match_fn_key(fn_key: u8) -> Option<Key> {
        let it = match fn_key {
            1 => FunctionKey::F1,
            2 => FunctionKey::F2,
            3 => FunctionKey::F3,
            4 => FunctionKey::F4,
            5 => FunctionKey::F5,
            6 => FunctionKey::F6,
            7 => FunctionKey::F7,
            8 => FunctionKey::F8,
            9 => FunctionKey::F9,
            10 => FunctionKey::F10,
            11 => FunctionKey::F11,
            12 => FunctionKey::F12,
            _ => return None,
        };
        Some(Key::FunctionKey(it))
    }

    /// Keys that the OTP field has no use for (media keys, lone modifier keys, caps
    /// lock, etc) map to [None].
    #[must_use]
    pub fn copy_code_from_key_event(key_event: &KeyEvent) -> Option<Key> {
        // Make the code easier to read below using this alias.
        type KC = KeyCode;
        let special = |it: SpecialKey| Some(Key::SpecialKey(it));
        match key_event.code {
            KC::Backspace => special(SpecialKey::Backspace),
            KC::Enter => special(SpecialKey::Enter),
            KC::Left => special(SpecialKey::Left),
            KC::Right => special(SpecialKey::Right),
            KC::Up => special(SpecialKey::Up),
            KC::Down => special(SpecialKey::Down),
            KC::Home => special(SpecialKey::Home),
            KC::End => special(SpecialKey::End),
            KC::PageUp => special(SpecialKey::PageUp),
            KC::PageDown => special(SpecialKey::PageDown),
            KC::Tab => special(SpecialKey::Tab),
            KC::BackTab => special(SpecialKey::BackTab),
            KC::Delete => special(SpecialKey::Delete),
            KC::Insert => special(SpecialKey::Insert),
            KC::Esc => special(SpecialKey::Esc),
            KC::F(fn_key) => match_fn_key(fn_key),
            KC::Char(character) => Some(Key::Character(character)),
            _ => None,
        }
    }
}
