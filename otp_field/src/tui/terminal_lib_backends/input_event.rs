// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, KeyEvent};

use super::KeyPress;

/// Unified input event that the OTP field (and its host) reacts to.
///
/// ```text
/// crossterm::Event (raw events)
///     ├─→ Event::Key(KeyEvent)  → KeyPress   → InputEvent::Keyboard
///     ├─→ Event::Resize(w, h)   → Size       → InputEvent::Resize
///     ├─→ Event::Focus*         → FocusEvent → InputEvent::Focus
///     ├─→ Event::Paste(String)  → String     → InputEvent::BracketedPaste
///     └─→ Event::Mouse(..)      → dropped, the field is keyboard only
/// ```
///
/// # Paste Handling
///
/// There are two ways text gets pasted into a terminal app:
/// - **Bracketed paste**: the terminal itself pastes (right-click, middle-click,
///   <kbd>Cmd+V</kbd> on macOS, menu). The text arrives in one chunk as
///   [`InputEvent::BracketedPaste`]. Bracketed paste must be enabled, see
///   [`crate::RawMode`].
/// - **Clipboard paste**: <kbd>Ctrl+V</kbd> arrives as a plain
///   [`InputEvent::Keyboard`], and the app has to read the system clipboard itself.
///   See [`KeyPress::is_paste_modifier_combination`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Keyboard(KeyPress),
    Resize(Size),
    Focus(FocusEvent),
    BracketedPaste(String),
}

/// Terminal window focus (not to be confused with which OTP cell has focus, see
/// [`crate::CellFocus`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    Gained,
    Lost,
}

/// Size of the terminal window, in columns and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub col_width: u16,
    pub row_height: u16,
}

#[must_use]
pub fn size(col_width: u16, row_height: u16) -> Size { Size { col_width, row_height } }

mod helpers {
    use super::{InputEvent, KeyPress};

    impl InputEvent {
        #[must_use]
        pub fn matches_keypress(&self, other: KeyPress) -> bool {
            matches!(self, InputEvent::Keyboard(this) if *this == other)
        }

        #[must_use]
        pub fn matches_any_of_these_keypresses(&self, others: &[KeyPress]) -> bool {
            others.iter().any(|other| self.matches_keypress(*other))
        }
    }
}

pub(crate) mod converters {
    use super::{Event, FocusEvent, InputEvent, KeyEvent, size};

    impl TryFrom<Event> for InputEvent {
        type Error = ();

        fn try_from(event: Event) -> Result<Self, Self::Error> {
            match event {
                Event::Key(key_event) => key_event.try_into(),
                Event::Resize(columns, rows) => Ok(InputEvent::Resize(size(columns, rows))),
                Event::FocusGained => Ok(InputEvent::Focus(FocusEvent::Gained)),
                Event::FocusLost => Ok(InputEvent::Focus(FocusEvent::Lost)),
                Event::Paste(text) => Ok(InputEvent::BracketedPaste(text)),
                Event::Mouse(_) => Err(()),
            }
        }
    }

    impl TryFrom<KeyEvent> for InputEvent {
        type Error = ();

        fn try_from(key_event: KeyEvent) -> Result<Self, Self::Error> {
            Ok(InputEvent::Keyboard(key_event.try_into()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::{SpecialKey, assert_eq2, crossterm_keyevent, keypress};

    #[test]
    fn test_convert_crossterm_events() {
        let paste: InputEvent = Event::Paste("123456".into()).try_into().unwrap();
        assert_eq2!(paste, InputEvent::BracketedPaste("123456".into()));

        let resize: InputEvent = Event::Resize(80, 24).try_into().unwrap();
        assert_eq2!(resize, InputEvent::Resize(size(80, 24)));

        let key: InputEvent = Event::Key(crossterm_keyevent! {
            code: KeyCode::Backspace,
            modifiers: KeyModifiers::NONE
        })
        .try_into()
        .unwrap();
        assert!(key.matches_keypress(keypress! { @special SpecialKey::Backspace }));
    }

    #[test]
    fn test_matches_any_of_these_keypresses() {
        let esc = InputEvent::Keyboard(keypress! { @special SpecialKey::Esc });
        let exit_keys = [
            keypress! { @char 'q' },
            keypress! { @special SpecialKey::Esc },
        ];
        assert!(esc.matches_any_of_these_keypresses(&exit_keys));
        assert!(!InputEvent::BracketedPaste("q".into()).matches_any_of_these_keypresses(&exit_keys));
    }
}
