// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

use crate::coef::Coef;
use crate::poly::Polynom;
use rustc_hash::FxHashMap;

/// Named polynomials. Each name refers to at most one polynomial, which is owned by the table.
#[derive(Debug, Clone)]
pub struct PolyTable<C: Coef = i32> {
    entries: FxHashMap<String, Polynom<C>>,
}

impl<C: Coef> PolyTable<C> {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Drops all existing entries. Calling this on an empty table does nothing.
    pub fn init(&mut self) {
        self.teardown();
    }

    /// Binds `name` to `p`. An existing binding is replaced and its polynomial dropped.
    pub fn set(&mut self, name: impl Into<String>, p: Polynom<C>) {
        let name = name.into();
        tracing::trace!(%name, value = %p, "bind");
        if let Some(old) = self.entries.insert(name, p) {
            tracing::trace!(previous = %old, "replaced existing binding");
        }
    }

    pub fn get(&self, name: &str) -> Option<&Polynom<C>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Drops every entry together with its polynomial.
    pub fn teardown(&mut self) {
        if !self.entries.is_empty() {
            tracing::debug!(entries = self.entries.len(), "clearing polynomial table");
        }
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All bindings in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Polynom<C>)> {
        self.entries.iter().map(|(name, p)| (name.as_str(), p))
    }
}

impl<C: Coef> Default for PolyTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        let mut t = PolyTable::new();
        assert_eq!(t.get("x"), None);
        t.set("x", Polynom::constant(1));
        t.set("y", Polynom::constant(2));
        assert_eq!(t.len(), 2);
        t.init();
        assert!(t.is_empty());
        assert_eq!(t.get("x"), None);
        // idempotent
        t.init();
        assert!(t.is_empty());
    }

    #[test]
    fn test_rebind() {
        let mut t = PolyTable::new();
        t.set("x", Polynom::from_letter('a'));
        t.set(String::from("x"), Polynom::constant(7));
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("x"), Some(&Polynom::constant(7)));
        assert!(t.contains("x"));
        assert!(!t.contains("X"));
    }

    #[test]
    fn test_teardown() {
        let mut t = PolyTable::<i64>::default();
        t.set("first", Polynom::constant(1));
        t.set("second", Polynom::from_letter('b'));
        let mut names: Vec<_> = t.iter().map(|(n, _)| n).collect();
        names.sort();
        assert_eq!(names, ["first", "second"]);
        t.teardown();
        assert_eq!(t.get("first"), None);
        assert_eq!(t.get("second"), None);
        assert!(t.is_empty());
    }
}
