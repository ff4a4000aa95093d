// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::DEBUG_OTP_MOD;

/// Position that the coordinator wants to move focus to after an update. It is signed
/// since backspace in the first cell asks for `-1`, and typing in the last cell asks for
/// `N`. Both of these are out of range, and are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTarget(pub isize);

impl FocusTarget {
    /// Focus moves back by one from `index`.
    #[must_use]
    pub fn before(index: usize) -> Self { Self(to_isize(index) - 1) }

    /// Focus moves forward by `count` from `index`.
    #[must_use]
    pub fn after(index: usize, count: usize) -> Self {
        Self(to_isize(index).saturating_add(to_isize(count)))
    }

    #[must_use]
    pub fn at(index: usize) -> Self { Self(to_isize(index)) }

    /// Returns [None] if the target is not a valid index for `cell_count` cells.
    #[must_use]
    pub fn resolve(self, cell_count: usize) -> Option<usize> {
        let index = usize::try_from(self.0).ok()?;
        (index < cell_count).then_some(index)
    }
}

fn to_isize(value: usize) -> isize { isize::try_from(value).unwrap_or(isize::MAX) }

/// Position indexed focus control that the host provides to the OTP field. The field
/// never looks at how cells are laid out, it only asks for "focus cell `i`".
pub trait CellFocus {
    fn cell_count(&self) -> usize;

    /// Only called with an index that is in range.
    fn focus_cell_at(&mut self, index: usize);

    fn focused_cell(&self) -> Option<usize>;

    /// Moves focus to `target`. Out of range targets are ignored.
    fn request_focus(&mut self, target: FocusTarget) {
        match target.resolve(self.cell_count()) {
            Some(index) => self.focus_cell_at(index),
            None => {
                DEBUG_OTP_MOD.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "🎯 CellFocus::request_focus -> out of range, ignored",
                        target = ?target,
                        cell_count = %self.cell_count(),
                    );
                });
            }
        }
    }
}

/// In memory implementation of [`CellFocus`]. Used by the terminal host, and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HasCellFocus {
    pub cell_count: usize,
    /// This cell has keyboard focus.
    pub maybe_index: Option<usize>,
}

impl HasCellFocus {
    /// Focus starts on the first cell (if there is one).
    #[must_use]
    pub fn new(cell_count: usize) -> Self {
        Self {
            cell_count,
            maybe_index: (cell_count > 0).then_some(0),
        }
    }

    /// Check whether the cell at `index` currently has keyboard focus.
    #[must_use]
    pub fn does_cell_have_focus(&self, index: usize) -> bool {
        self.maybe_index == Some(index)
    }

    pub fn clear(&mut self) { self.maybe_index = None; }
}

impl CellFocus for HasCellFocus {
    fn cell_count(&self) -> usize { self.cell_count }

    fn focus_cell_at(&mut self, index: usize) { self.maybe_index = Some(index); }

    fn focused_cell(&self) -> Option<usize> { self.maybe_index }
}
