//! Scoped apply/undo of a single move.

use std::ops::{Deref, DerefMut};

use crate::core::GameState;

/// A move applied to a borrowed state, undone when the guard drops.
///
/// The undo runs on every exit path, including early returns and unwinding,
/// so the state handed to the search is always restored.
pub struct AppliedMove<'a, S: GameState> {
    state: &'a mut S,
    mv: S::Move,
}

impl<'a, S: GameState> AppliedMove<'a, S> {
    /// Apply `mv` to `state`.
    pub fn new(state: &'a mut S, mv: S::Move) -> Self {
        state.apply(&mv);
        Self { state, mv }
    }

    /// The move held by this guard.
    #[must_use]
    pub fn mv(&self) -> &S::Move {
        &self.mv
    }
}

impl<S: GameState> Deref for AppliedMove<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.state
    }
}

impl<S: GameState> DerefMut for AppliedMove<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.state
    }
}

impl<S: GameState> Drop for AppliedMove<'_, S> {
    fn drop(&mut self) {
        self.state.undo(&self.mv);
    }
}
