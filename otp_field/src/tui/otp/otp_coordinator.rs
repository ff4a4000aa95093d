// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use super::{CellDescriptor, CellFocus, CellText, CellView, FocusTarget, OtpApplyResponse,
            OtpCellRenderer, OtpChild, OtpCode, OtpConfig, OtpFieldProps,
            split_pasted_text};
use crate::{ClipboardService, CommonResult, DEBUG_OTP_COPY_PASTE, DEBUG_OTP_MOD,
            InputEvent, Key, KeyPress, OtpFieldError, SpecialKey};

pub type OnCompleteFn = Box<dyn FnMut(&str)>;

/// Owns the canonical [`OtpCode`] of one OTP field, and the [`OtpConfig`] that all its
/// cells share. Key and paste events raised by a cell come in here (tagged with the
/// cell's index), a new code and a new [`FocusTarget`] are computed, focus is moved
/// using the host's [`CellFocus`], and the completion callback fires if the update
/// filled the last empty cell.
///
/// ```text
/// cell i ── on_key / on_paste ──► OtpCoordinator ──► new OtpCode
///                                      │
///                                      ├──► CellFocus::request_focus(target)
///                                      └──► on_complete(code), once per fill
/// ```
///
/// All of this happens synchronously, before the handler returns.
pub struct OtpCoordinator {
    config: OtpConfig,
    code: OtpCode,
    props: OtpFieldProps,
    /// Set when the completion callback fires, cleared when the code has an empty
    /// position again.
    is_completion_reported: bool,
    maybe_on_complete: Option<OnCompleteFn>,
}

impl Debug for OtpCoordinator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("OtpCoordinator")
            .field("config", &self.config)
            .field("code", &self.code.to_string())
            .field("props", &self.props)
            .field("is_completion_reported", &self.is_completion_reported)
            .field("has_on_complete", &self.maybe_on_complete.is_some())
            .finish()
    }
}

impl OtpCoordinator {
    /// The number of cells `N` is the number of [`OtpChild::Cell`]s in `children`, and
    /// it never changes after this.
    ///
    /// # Errors
    ///
    /// [`OtpFieldError::NoCells`] if `children` has no cells.
    pub fn new(children: &[OtpChild], alphanumeric: bool) -> CommonResult<Self> {
        let number_of_digits = children.iter().filter(|it| it.is_cell()).count();
        if number_of_digits == 0 {
            return Err(OtpFieldError::NoCells.into());
        }

        DEBUG_OTP_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🔢 OtpCoordinator::new",
                number_of_digits = %number_of_digits,
                alphanumeric = %alphanumeric,
            );
        });

        Ok(Self {
            config: OtpConfig {
                number_of_digits,
                alphanumeric,
            },
            code: OtpCode::new_empty(number_of_digits),
            props: OtpFieldProps::default(),
            is_completion_reported: false,
            maybe_on_complete: None,
        })
    }

    /// Called with the joined code once every cell is filled. It is called again only
    /// after some cell has been emptied and the code is filled once more.
    #[must_use]
    pub fn with_on_complete(mut self, on_complete: impl FnMut(&str) + 'static) -> Self {
        self.maybe_on_complete = Some(Box::new(on_complete));
        self
    }

    #[must_use]
    pub fn with_props(mut self, props: OtpFieldProps) -> Self {
        self.props = props;
        self
    }
}

/// Accessors.
impl OtpCoordinator {
    #[must_use]
    pub fn code(&self) -> &OtpCode { &self.code }

    /// The joined code.
    #[must_use]
    pub fn value(&self) -> String { self.code.value() }

    #[must_use]
    pub fn is_complete(&self) -> bool { self.code.is_complete() }

    #[must_use]
    pub fn config(&self) -> &OtpConfig { &self.config }

    #[must_use]
    pub fn props(&self) -> &OtpFieldProps { &self.props }

    #[must_use]
    pub fn number_of_digits(&self) -> usize { self.config.number_of_digits }
}

/// Event handlers.
impl OtpCoordinator {
    /// Handles a key press in the cell at `index`.
    ///
    /// - Paste key combinations are left alone, so the host can paste.
    /// - <kbd>Backspace</kbd> clears this cell and the one before it, focus moves back.
    /// - A printable character fills this cell, focus moves forward.
    /// - Every other key is swallowed.
    pub fn on_key(
        &mut self,
        index: usize,
        key_press: KeyPress,
        focus: &mut impl CellFocus,
    ) -> OtpApplyResponse {
        if key_press.is_paste_modifier_combination() {
            return OtpApplyResponse::Propagate;
        }

        if !self.is_index_in_range(index, "on_key") {
            return OtpApplyResponse::Propagate;
        }

        let (new_code, focus_target) = match key_press.key() {
            Key::SpecialKey(SpecialKey::Backspace) => {
                (self.code.with_backspace_at(index), FocusTarget::before(index))
            }
            _ => match key_press.as_single_printable_char() {
                Some(character) => {
                    let mut buffer = [0; 4];
                    (
                        self.code.with_cell_set(index, character.encode_utf8(&mut buffer)),
                        FocusTarget::after(index, 1),
                    )
                }
                None => {
                    DEBUG_OTP_MOD.then(|| {
                        // % is Display, ? is Debug.
                        tracing::debug!(
                            message = "🔢 OtpCoordinator::on_key -> swallowed",
                            index = %index,
                            key_press = ?key_press,
                        );
                    });
                    return OtpApplyResponse::Consumed;
                }
            },
        };

        self.apply_update(new_code, focus_target, focus, "on_key");
        OtpApplyResponse::UpdatedCode
    }

    /// Handles text pasted into the cell at `index`. Control characters in the text are
    /// ignored.
    ///
    /// - If the text has at least `N` characters, the first `N` replace the whole code,
    ///   no matter which cell it was pasted into. Focus moves to the last cell.
    /// - Otherwise the text fills the cells starting at `index`, and the cells after it
    ///   are cleared. Focus moves to the cell after the pasted text.
    pub fn on_paste(
        &mut self,
        index: usize,
        clipboard_text: &str,
        focus: &mut impl CellFocus,
    ) -> OtpApplyResponse {
        if !self.is_index_in_range(index, "on_paste") {
            return OtpApplyResponse::Propagate;
        }

        let graphemes = split_pasted_text(clipboard_text);
        let number_of_digits = self.number_of_digits();

        let (new_code, focus_target) = if graphemes.len() >= number_of_digits {
            (
                self.code.with_all_replaced(&graphemes[..number_of_digits]),
                FocusTarget::at(number_of_digits - 1),
            )
        } else {
            (
                self.code.with_pasted_at(index, &graphemes),
                FocusTarget::after(index, graphemes.len()),
            )
        };

        DEBUG_OTP_COPY_PASTE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📋 OtpCoordinator::on_paste",
                index = %index,
                pasted_len = %graphemes.len(),
            );
        });

        self.apply_update(new_code, focus_target, focus, "on_paste");
        OtpApplyResponse::UpdatedCode
    }

    /// Routes a terminal [`InputEvent`] to the focused cell.
    ///
    /// - [`InputEvent::Keyboard`] goes to [`Self::on_key`]. If that lets a paste key
    ///   combination through, the text is read from `clipboard` and goes to
    ///   [`Self::on_paste`].
    /// - [`InputEvent::BracketedPaste`] goes to [`Self::on_paste`].
    /// - Everything else is returned to the host.
    ///
    /// When no cell has focus the event is returned to the host untouched.
    pub fn apply_event(
        &mut self,
        input_event: InputEvent,
        focus: &mut impl CellFocus,
        clipboard: &mut impl ClipboardService,
    ) -> OtpApplyResponse {
        let Some(index) = focus.focused_cell() else {
            tracing::warn!(
                message = "🔢 OtpCoordinator::apply_event -> no focused cell, ignored",
                input_event = ?input_event,
            );
            return OtpApplyResponse::Propagate;
        };

        match input_event {
            InputEvent::Keyboard(key_press) => {
                let response = self.on_key(index, key_press, focus);
                if response == OtpApplyResponse::Propagate
                    && key_press.is_paste_modifier_combination()
                {
                    return self.paste_from_clipboard(index, focus, clipboard);
                }
                response
            }
            InputEvent::BracketedPaste(text) => self.on_paste(index, &text, focus),
            _ => OtpApplyResponse::Propagate,
        }
    }

    /// Clears every cell and focuses the first one.
    pub fn reset(&mut self, focus: &mut impl CellFocus) {
        self.code = OtpCode::new_empty(self.number_of_digits());
        self.is_completion_reported = false;
        focus.request_focus(FocusTarget::at(0));
    }

    /// Renders each child, in order. The child at position `i` shows the character at
    /// position `i` of the code (children past `N` show nothing). This does not change
    /// any state.
    ///
    /// # Errors
    ///
    /// [`OtpFieldError::UnrecognizedChild`] if any child is not a cell.
    pub fn render(&self, children: &[OtpChild]) -> CommonResult<Vec<CellView>> {
        children
            .iter()
            .enumerate()
            .map(|(index, child)| match child {
                OtpChild::Cell(spec) => OtpCellRenderer::render(
                    Some(&self.config),
                    CellDescriptor {
                        index,
                        character: CellText::from_str(self.code.get(index)),
                    },
                    spec,
                ),
                OtpChild::Foreign { type_name } => Err(OtpFieldError::UnrecognizedChild {
                    index,
                    type_name: type_name.clone(),
                }
                .into()),
            })
            .collect()
    }
}

impl OtpCoordinator {
    fn is_index_in_range(&self, index: usize, handler: &str) -> bool {
        let it = index < self.number_of_digits();
        if !it {
            tracing::warn!(
                message = "🔢 OtpCoordinator -> event for a cell that doesn't exist, ignored",
                handler = %handler,
                index = %index,
                number_of_digits = %self.number_of_digits(),
            );
        }
        it
    }

    fn paste_from_clipboard(
        &mut self,
        index: usize,
        focus: &mut impl CellFocus,
        clipboard: &mut impl ClipboardService,
    ) -> OtpApplyResponse {
        match clipboard.try_to_get_content_from_clipboard() {
            Ok(text) => self.on_paste(index, &text, focus),
            Err(error) => {
                tracing::warn!(
                    message = "📋 OtpCoordinator -> could not read clipboard",
                    error = %error,
                );
                OtpApplyResponse::Consumed
            }
        }
    }

    /// Replaces the code, moves focus, and then runs the completion check.
    fn apply_update(
        &mut self,
        new_code: OtpCode,
        focus_target: FocusTarget,
        focus: &mut impl CellFocus,
        handler: &str,
    ) {
        DEBUG_OTP_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🔢 OtpCoordinator -> code updated",
                handler = %handler,
                before = %self.code,
                after = %new_code,
                focus_target = ?focus_target,
            );
        });

        self.code = new_code;
        focus.request_focus(focus_target);
        self.check_completion();
    }

    fn check_completion(&mut self) {
        if !self.code.is_complete() {
            self.is_completion_reported = false;
            return;
        }

        if self.is_completion_reported {
            return;
        }
        self.is_completion_reported = true;

        let value = self.code.value();
        DEBUG_OTP_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "✅ OtpCoordinator -> code complete",
                number_of_digits = %self.number_of_digits(),
            );
        });
        if let Some(on_complete) = self.maybe_on_complete.as_mut() {
            on_complete(&value);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use test_case::test_case;

    use super::*;
    use crate::{FocusEvent, HasCellFocus, ModifierKeysMask, TestClipboard, assert_eq2,
                keypress, otp_cells, size};

    type Completions = Rc<RefCell<Vec<String>>>;

    /// Returns a coordinator with `n` cells whose completion callback records every
    /// call, along with focus on cell 0.
    fn setup(n: usize, alphanumeric: bool) -> (OtpCoordinator, HasCellFocus, Completions) {
        let completions: Completions = Rc::default();
        let completions_clone = completions.clone();
        let coordinator = OtpCoordinator::new(&otp_cells(n), alphanumeric)
            .unwrap()
            .with_on_complete(move |code| completions_clone.borrow_mut().push(code.to_string()));
        (coordinator, HasCellFocus::new(n), completions)
    }

    fn cells(coordinator: &OtpCoordinator) -> Vec<&str> { coordinator.code().iter().collect() }

    fn backspace() -> KeyPress { keypress! { @special SpecialKey::Backspace } }

    #[test_case(1)]
    #[test_case(4)]
    #[test_case(6)]
    #[test_case(10)]
    fn test_construction_gives_empty_code(n: usize) {
        let (coordinator, _, completions) = setup(n, true);
        assert_eq2!(coordinator.number_of_digits(), n);
        assert_eq2!(cells(&coordinator), vec![""; n]);
        assert!(!coordinator.is_complete());
        assert!(completions.borrow().is_empty());
    }

    #[test]
    fn test_construction_without_cells_fails() {
        let report = OtpCoordinator::new(&[], true).unwrap_err();
        assert_eq2!(report.downcast_ref::<OtpFieldError>(), Some(&OtpFieldError::NoCells));

        let report = OtpCoordinator::new(&[OtpChild::foreign("Label")], true).unwrap_err();
        assert_eq2!(report.downcast_ref::<OtpFieldError>(), Some(&OtpFieldError::NoCells));
    }

    #[test]
    fn test_number_of_digits_counts_only_cells() {
        let children = vec![OtpChild::cell(), OtpChild::foreign("Spacer"), OtpChild::cell()];
        let coordinator = OtpCoordinator::new(&children, true).unwrap();
        assert_eq2!(coordinator.number_of_digits(), 2);
    }

    #[test]
    fn test_typing_moves_focus_forward_and_clamps_at_end() {
        let (mut coordinator, mut focus, _) = setup(3, true);

        let response = coordinator.on_key(0, keypress! { @char 'a' }, &mut focus);
        assert_eq2!(response, OtpApplyResponse::UpdatedCode);
        assert_eq2!(cells(&coordinator), vec!["a", "", ""]);
        assert_eq2!(focus.focused_cell(), Some(1));

        // Typing in the last cell sets it; focus on `N` is a no-op.
        focus.focus_cell_at(2);
        coordinator.on_key(2, keypress! { @char 'c' }, &mut focus);
        assert_eq2!(cells(&coordinator), vec!["a", "", "c"]);
        assert_eq2!(focus.focused_cell(), Some(2));
    }

    #[test]
    fn test_typing_overwrites_filled_cell() {
        let (mut coordinator, mut focus, _) = setup(2, true);
        coordinator.on_key(0, keypress! { @char 'x' }, &mut focus);
        coordinator.on_key(0, keypress! { @char 'y' }, &mut focus);
        assert_eq2!(cells(&coordinator), vec!["y", ""]);
    }

    #[test]
    fn test_backspace_in_first_cell_clears_only_it() {
        let (mut coordinator, mut focus, _) = setup(3, true);
        coordinator.on_paste(0, "abc", &mut focus);
        focus.focus_cell_at(0);

        coordinator.on_key(0, backspace(), &mut focus);
        assert_eq2!(cells(&coordinator), vec!["", "b", "c"]);
        // Focus on -1 is a no-op.
        assert_eq2!(focus.focused_cell(), Some(0));
    }

    #[test]
    fn test_backspace_clears_current_and_previous() {
        let (mut coordinator, mut focus, _) = setup(4, true);
        coordinator.on_paste(0, "wxyz", &mut focus);

        coordinator.on_key(3, backspace(), &mut focus);
        assert_eq2!(cells(&coordinator), vec!["w", "x", "", ""]);
        assert_eq2!(focus.focused_cell(), Some(2));
    }

    #[test]
    fn test_unrecognized_keys_are_swallowed() {
        let (mut coordinator, mut focus, _) = setup(4, true);
        coordinator.on_paste(0, "12", &mut focus);
        let before = coordinator.code().clone();

        for key_press in [
            keypress! { @special SpecialKey::Left },
            keypress! { @special SpecialKey::Delete },
            keypress! { @special SpecialKey::Enter },
            keypress! { @special SpecialKey::Tab },
            keypress! { @fn crate::FunctionKey::F5 },
        ] {
            assert_eq2!(
                coordinator.on_key(2, key_press, &mut focus),
                OtpApplyResponse::Consumed
            );
        }
        assert_eq2!(coordinator.code(), &before);
        assert_eq2!(focus.focused_cell(), Some(2));
    }

    #[test_case(keypress! { @char ModifierKeysMask::new().with_ctrl(), 'v' })]
    #[test_case(keypress! { @char ModifierKeysMask::new().with_ctrl().with_shift(), 'V' })]
    #[test_case(keypress! { @special ModifierKeysMask::new().with_shift(), SpecialKey::Insert })]
    fn test_paste_key_combinations_propagate(key_press: KeyPress) {
        let (mut coordinator, mut focus, _) = setup(4, true);
        assert_eq2!(
            coordinator.on_key(0, key_press, &mut focus),
            OtpApplyResponse::Propagate
        );
        assert_eq2!(cells(&coordinator), vec![""; 4]);
        assert_eq2!(focus.focused_cell(), Some(0));
    }

    #[test]
    fn test_scenario_type_1234_fires_once() {
        let (mut coordinator, mut focus, completions) = setup(4, false);

        for (index, character) in ['1', '2', '3', '4'].into_iter().enumerate() {
            coordinator.on_key(index, keypress! { @char character }, &mut focus);
            if index < 3 {
                assert!(completions.borrow().is_empty());
            }
        }

        assert_eq2!(coordinator.value(), "1234");
        assert!(coordinator.is_complete());
        assert_eq2!(*completions.borrow(), vec!["1234".to_string()]);
    }

    #[test]
    fn test_scenario_paste_12_at_start() {
        let (mut coordinator, mut focus, completions) = setup(4, true);
        coordinator.on_paste(0, "12", &mut focus);
        assert_eq2!(cells(&coordinator), vec!["1", "2", "", ""]);
        assert_eq2!(focus.focused_cell(), Some(2));
        assert!(completions.borrow().is_empty());
    }

    #[test]
    fn test_scenario_backspace_after_12() {
        let (mut coordinator, mut focus, _) = setup(4, true);
        coordinator.on_paste(0, "12", &mut focus);
        assert_eq2!(coordinator.code().to_string(), "12__");

        coordinator.on_key(2, backspace(), &mut focus);
        assert_eq2!(cells(&coordinator), vec!["1", "", "", ""]);
        assert_eq2!(focus.focused_cell(), Some(1));
    }

    #[test_case(0 ; "from first cell")]
    #[test_case(2 ; "from middle cell")]
    #[test_case(3 ; "from last cell")]
    fn test_long_paste_replaces_everything(index: usize) {
        let (mut coordinator, mut focus, completions) = setup(4, false);
        coordinator.on_key(0, keypress! { @char '9' }, &mut focus);

        coordinator.on_paste(index, "123456", &mut focus);
        assert_eq2!(cells(&coordinator), vec!["1", "2", "3", "4"]);
        assert_eq2!(focus.focused_cell(), Some(3));
        assert_eq2!(*completions.borrow(), vec!["1234".to_string()]);
    }

    #[test]
    fn test_short_paste_overwrites_from_index_and_clears_tail() {
        let (mut coordinator, mut focus, _) = setup(6, true);
        coordinator.on_paste(0, "abcdef", &mut focus);

        coordinator.on_paste(1, "XY", &mut focus);
        assert_eq2!(cells(&coordinator), vec!["a", "X", "Y", "", "", ""]);
        assert_eq2!(focus.focused_cell(), Some(3));
    }

    #[test]
    fn test_short_paste_that_overflows_drops_extra_and_keeps_focus() {
        let (mut coordinator, mut focus, _) = setup(4, true);
        focus.focus_cell_at(3);

        coordinator.on_paste(3, "78", &mut focus);
        assert_eq2!(cells(&coordinator), vec!["", "", "", "7"]);
        // Target 5 is out of range.
        assert_eq2!(focus.focused_cell(), Some(3));
    }

    #[test]
    fn test_paste_ignores_trailing_newline() {
        let (mut coordinator, mut focus, completions) = setup(4, false);
        coordinator.on_paste(0, "4321\n", &mut focus);
        assert_eq2!(coordinator.value(), "4321");
        assert_eq2!(*completions.borrow(), vec!["4321".to_string()]);
    }

    #[test]
    fn test_paste_with_inner_control_char_counts_towards_length() {
        let (mut coordinator, mut focus, completions) = setup(4, false);
        coordinator.on_paste(0, "123\t", &mut focus);
        assert_eq2!(cells(&coordinator), vec!["1", "2", "3", "\t"]);
        assert!(coordinator.is_complete());
        assert_eq2!(focus.focused_cell(), Some(3));
        assert_eq2!(completions.borrow().len(), 1);
    }

    #[test]
    fn test_completion_fires_once_per_fill_transition() {
        let (mut coordinator, mut focus, completions) = setup(2, true);

        coordinator.on_paste(0, "ab", &mut focus);
        assert_eq2!(completions.borrow().len(), 1);

        // Edits that keep the code full don't fire again.
        coordinator.on_key(1, keypress! { @char 'c' }, &mut focus);
        coordinator.on_paste(0, "zz", &mut focus);
        assert_eq2!(completions.borrow().len(), 1);

        // Swallowed keys don't either.
        coordinator.on_key(1, keypress! { @special SpecialKey::Up }, &mut focus);
        assert_eq2!(completions.borrow().len(), 1);

        // Empty a cell, then fill it again.
        coordinator.on_key(0, backspace(), &mut focus);
        assert!(!coordinator.is_complete());
        coordinator.on_key(0, keypress! { @char 'q' }, &mut focus);
        assert_eq2!(*completions.borrow(), vec!["ab".to_string(), "qz".to_string()]);
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let (mut coordinator, mut focus, _) = setup(4, true);
        assert_eq2!(
            coordinator.on_key(4, keypress! { @char '1' }, &mut focus),
            OtpApplyResponse::Propagate
        );
        assert_eq2!(
            coordinator.on_paste(9, "1234", &mut focus),
            OtpApplyResponse::Propagate
        );
        assert_eq2!(cells(&coordinator), vec![""; 4]);
    }

    #[test]
    fn test_render_is_idempotent_and_reflects_code() {
        let (mut coordinator, mut focus, _) = setup(3, false);
        coordinator.on_paste(0, "5", &mut focus);
        let children = otp_cells(3);

        let first = coordinator.render(&children).unwrap();
        let second = coordinator.render(&children).unwrap();
        assert_eq2!(first, second);
        assert_eq2!(cells(&coordinator), vec!["5", "", ""]);
        assert_eq2!(focus.focused_cell(), Some(1));

        let texts: Vec<&str> = first.iter().map(|view| view.text.as_str()).collect();
        assert_eq2!(texts, vec!["5", "", ""]);
        assert!(first.iter().all(|view| view.index < 3 && view.max_length == 1));
    }

    #[test]
    fn test_render_with_more_children_than_cells() {
        let (coordinator, _, _) = setup(2, true);
        let views = coordinator.render(&otp_cells(3)).unwrap();
        assert_eq2!(views.len(), 3);
        assert_eq2!(views[2].text.as_str(), "");
        assert_eq2!(coordinator.number_of_digits(), 2);
    }

    #[test]
    fn test_render_rejects_foreign_child() {
        let (coordinator, _, _) = setup(2, true);
        let children = vec![OtpChild::cell(), OtpChild::foreign("Button")];
        let report = coordinator.render(&children).unwrap_err();
        assert_eq2!(
            report.downcast_ref::<OtpFieldError>(),
            Some(&OtpFieldError::UnrecognizedChild {
                index: 1,
                type_name: "Button".into()
            })
        );
    }

    #[test]
    fn test_apply_event_routes_to_focused_cell() {
        let (mut coordinator, mut focus, completions) = setup(4, false);
        let mut clipboard = TestClipboard::default();

        for character in ['1', '2', '3'] {
            let response = coordinator.apply_event(
                InputEvent::Keyboard(keypress! { @char character }),
                &mut focus,
                &mut clipboard,
            );
            assert_eq2!(response, OtpApplyResponse::UpdatedCode);
        }
        assert_eq2!(focus.focused_cell(), Some(3));

        coordinator.apply_event(
            InputEvent::Keyboard(backspace()),
            &mut focus,
            &mut clipboard,
        );
        assert_eq2!(cells(&coordinator), vec!["1", "2", "", ""]);
        assert_eq2!(focus.focused_cell(), Some(2));

        coordinator.apply_event(
            InputEvent::BracketedPaste("34".into()),
            &mut focus,
            &mut clipboard,
        );
        assert_eq2!(*completions.borrow(), vec!["1234".to_string()]);
    }

    #[test]
    fn test_apply_event_ctrl_v_reads_clipboard() {
        let (mut coordinator, mut focus, completions) = setup(6, false);
        let mut clipboard = TestClipboard::new("987654");

        let response = coordinator.apply_event(
            InputEvent::Keyboard(keypress! { @char ModifierKeysMask::new().with_ctrl(), 'v' }),
            &mut focus,
            &mut clipboard,
        );
        assert_eq2!(response, OtpApplyResponse::UpdatedCode);
        assert_eq2!(coordinator.value(), "987654");
        assert_eq2!(focus.focused_cell(), Some(5));
        assert_eq2!(*completions.borrow(), vec!["987654".to_string()]);
    }

    #[test]
    fn test_apply_event_clipboard_failure_is_consumed() {
        let (mut coordinator, mut focus, _) = setup(4, false);
        let mut clipboard = TestClipboard::default();

        let response = coordinator.apply_event(
            InputEvent::Keyboard(keypress! { @char ModifierKeysMask::new().with_ctrl(), 'v' }),
            &mut focus,
            &mut clipboard,
        );
        assert_eq2!(response, OtpApplyResponse::Consumed);
        assert_eq2!(cells(&coordinator), vec![""; 4]);
    }

    #[test]
    fn test_apply_event_without_focus_is_ignored() {
        let (mut coordinator, mut focus, _) = setup(4, false);
        let mut clipboard = TestClipboard::new("1234");
        focus.clear();

        for input_event in [
            InputEvent::BracketedPaste("1234".into()),
            InputEvent::Keyboard(keypress! { @char '1' }),
        ] {
            assert_eq2!(
                coordinator.apply_event(input_event, &mut focus, &mut clipboard),
                OtpApplyResponse::Propagate
            );
        }
        assert_eq2!(cells(&coordinator), vec![""; 4]);
    }

    #[test]
    fn test_apply_event_propagates_non_field_events() {
        let (mut coordinator, mut focus, _) = setup(4, false);
        let mut clipboard = TestClipboard::default();
        for input_event in [
            InputEvent::Resize(size(80, 24)),
            InputEvent::Focus(FocusEvent::Lost),
        ] {
            assert_eq2!(
                coordinator.apply_event(input_event, &mut focus, &mut clipboard),
                OtpApplyResponse::Propagate
            );
        }
    }

    #[test]
    fn test_reset_clears_and_rearms_completion() {
        let (mut coordinator, mut focus, completions) = setup(2, true);
        coordinator.on_paste(0, "ok", &mut focus);
        assert_eq2!(focus.focused_cell(), Some(1));

        coordinator.reset(&mut focus);
        assert_eq2!(cells(&coordinator), vec!["", ""]);
        assert_eq2!(focus.focused_cell(), Some(0));

        coordinator.on_paste(0, "ok", &mut focus);
        assert_eq2!(*completions.borrow(), vec!["ok".to_string(), "ok".to_string()]);
    }
}
