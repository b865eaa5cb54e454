// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

use crate::poly::{Powers, VAR_COUNT, Var};
use std::num::NonZeroU32;

/// Maintains one list for each variable with the terms that contain it.
/// Terms are never removed from a polynomial (a coefficient that cancels to zero keeps
/// its slot), so the lists only ever grow.
#[derive(Debug, Clone)]
pub(crate) struct VarMap {
    lists: [Vec<TermId>; VAR_COUNT],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TermId(NonZeroU32);

impl From<usize> for TermId {
    fn from(value: usize) -> Self {
        Self(NonZeroU32::new(value as u32 + 1).unwrap())
    }
}

impl From<TermId> for usize {
    fn from(value: TermId) -> Self {
        value.0.get() as usize - 1
    }
}

impl VarMap {
    pub fn new() -> Self {
        Self {
            lists: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// add a new unique! term
    pub fn add_term(&mut self, powers: &Powers, term_id: TermId) {
        for (var, _) in powers.vars() {
            let list = &mut self.lists[var.index()];
            debug_assert!(!list.contains(&term_id));
            list.push(term_id);
        }
    }

    pub fn terms_for_var(&self, var: Var) -> impl Iterator<Item = TermId> + '_ {
        self.lists[var.index()].iter().copied()
    }

    #[inline]
    pub fn is_referenced(&self, var: Var) -> bool {
        !self.lists[var.index()].is_empty()
    }

    /// All variables that appear in at least one term, in slot order.
    pub fn referenced(&self) -> impl Iterator<Item = Var> + '_ {
        Var::all().filter(|&v| self.is_referenced(v))
    }
}
