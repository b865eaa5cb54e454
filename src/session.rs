// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

use crate::assign::Assignment;
use crate::coef::Coef;
use crate::error::Diagnostic;
use crate::poly::{Polynom, Var};
use crate::table::PolyTable;

/// State shared between the statements of one program: the named polynomials, the current
/// variable values and the source line that the parser is working on.
#[derive(Debug, Clone)]
pub struct Session<C: Coef = i32> {
    table: PolyTable<C>,
    vars: Assignment<C>,
    line: u32,
}

impl<C: Coef> Session<C> {
    pub fn new() -> Self {
        Self {
            table: PolyTable::new(),
            vars: Assignment::new(),
            line: 1,
        }
    }

    /// Line number that is reported in diagnostics.
    #[inline]
    pub fn set_line(&mut self, line: u32) {
        self.line = line;
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn table(&self) -> &PolyTable<C> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut PolyTable<C> {
        &mut self.table
    }

    pub fn vars(&self) -> &Assignment<C> {
        &self.vars
    }

    pub fn assign(&mut self, var: Var, value: C) {
        self.vars.set(var, value);
    }

    pub fn clear_assignments(&mut self) {
        self.vars.clear();
    }

    pub fn bind(&mut self, name: impl Into<String>, p: Polynom<C>) {
        self.table.set(name, p);
    }

    pub fn lookup(&self, name: &str) -> Option<&Polynom<C>> {
        self.table.get(name)
    }

    /// Evaluates `p` with the current variable values.
    pub fn evaluate(&self, p: &Polynom<C>) -> C {
        p.evaluate(&self.vars)
    }

    pub fn try_divide(&self, a: &Polynom<C>, b: &Polynom<C>) -> Result<Polynom<C>, Diagnostic> {
        a.div(b).map_err(|error| Diagnostic {
            line: self.line,
            error,
        })
    }

    /// Divides `a` by `b`. A failure is reported on stderr and the statement should be skipped.
    pub fn divide(&self, a: &Polynom<C>, b: &Polynom<C>) -> Option<Polynom<C>> {
        match self.try_divide(a, b) {
            Ok(p) => Some(p),
            Err(diag) => {
                tracing::warn!(line = diag.line, error = %diag.error, "division failed");
                eprintln!("{diag}");
                None
            }
        }
    }

    /// Drops all named polynomials and forgets all variable values.
    pub fn teardown(&mut self) {
        self.table.teardown();
        self.vars.clear();
    }
}

impl<C: Coef> Default for Session<C> {
    fn default() -> Self {
        Self::new()
    }
}
