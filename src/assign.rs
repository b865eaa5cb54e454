// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

use crate::coef::Coef;
use crate::poly::{VAR_COUNT, Var};

/// Values for the 26 variables.
///
/// A value of zero means "unassigned". There is no way to bind a variable to zero and have
/// it count as assigned: evaluating a polynomial that refers to it yields the undefined result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<C: Coef = i32> {
    values: [C; VAR_COUNT],
}

impl<C: Coef> Assignment<C> {
    /// Nothing assigned.
    pub fn new() -> Self {
        Self {
            values: [C::zero(); VAR_COUNT],
        }
    }

    #[inline]
    pub fn get(&self, var: Var) -> C {
        self.values[var.index()]
    }

    /// Binds `var`. Setting a variable to zero unassigns it.
    #[inline]
    pub fn set(&mut self, var: Var, value: C) {
        self.values[var.index()] = value;
    }

    #[inline]
    pub fn is_assigned(&self, var: Var) -> bool {
        !self.values[var.index()].is_zero()
    }

    /// Unassigns every variable.
    pub fn clear(&mut self) {
        self.values = [C::zero(); VAR_COUNT];
    }

    /// All assigned variables and their values, a to z.
    pub fn assigned(&self) -> impl Iterator<Item = (Var, C)> + '_ {
        Var::all()
            .filter(|&v| self.is_assigned(v))
            .map(|v| (v, self.get(v)))
    }
}

impl<C: Coef> Default for Assignment<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Coef> Extend<(Var, C)> for Assignment<C> {
    fn extend<T: IntoIterator<Item = (Var, C)>>(&mut self, iter: T) {
        for (var, value) in iter {
            self.set(var, value);
        }
    }
}

/// Later bindings of the same variable win.
impl<C: Coef> FromIterator<(Var, C)> for Assignment<C> {
    fn from_iter<T: IntoIterator<Item = (Var, C)>>(iter: T) -> Self {
        let mut r = Self::new();
        r.extend(iter);
        r
    }
}
