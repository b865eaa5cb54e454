// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

use crate::assign::Assignment;
use crate::coef::Coef;
use crate::error::{DivisionError, ParseError};
use crate::varmap::VarMap;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::str::FromStr;

/// Number of variables, one for each lowercase letter.
pub const VAR_COUNT: usize = 26;

/// Represents a polynomial.
///
/// Monomials are kept in insertion order. Adding a monomial whose exponent vector is already
/// present updates the coefficient in place, a new exponent vector is appended at the end.
/// A coefficient that cancels to zero is *not* removed, its slot stays around until the
/// polynomial is rebuilt by another operation.
#[derive(Debug, Clone)]
pub struct Polynom<C: Coef = i32> {
    /// Ordered map from exponent vector to coefficient.
    monoms: IndexMap<Powers, C, FxBuildHasher>,
    /// Fast access to the terms for each variable. Needs to be kept in sync with the monoms map.
    var_map: VarMap,
}

impl<C: Coef> Polynom<C> {
    /// The zero polynomial, i.e., no monomials at all.
    pub fn zero() -> Self {
        Self {
            monoms: IndexMap::default(),
            var_map: VarMap::new(),
        }
    }

    pub fn constant(c: C) -> Self {
        Self::monom(c, None)
    }

    pub fn var(var: Var) -> Self {
        Self::monom(C::one(), Some(Powers::of(var)))
    }

    /// Builds `1 * var` from a letter in either case. Anything that is not an ASCII letter
    /// leaves all exponents at zero and thus results in the constant `1`.
    pub fn from_letter(letter: char) -> Self {
        match Var::from_letter(letter) {
            Some(var) => Self::var(var),
            None => {
                tracing::warn!(?letter, "not a variable name, using the constant 1");
                Self::constant(C::one())
            }
        }
    }

    /// A single monomial. Missing powers default to the all-zero exponent vector.
    pub fn monom(coef: C, powers: Option<Powers>) -> Self {
        let mut p = Self::zero();
        p.add_monom(powers.unwrap_or_default(), coef);
        p
    }

    pub fn from_monoms(monoms: impl IntoIterator<Item = (C, Powers)>) -> Self {
        let mut p = Self::zero();
        for (coef, powers) in monoms {
            p.add_monom(powers, coef);
        }
        p
    }

    /// Merges `m` into the polynomial.
    #[inline]
    pub fn insert(&mut self, m: Monom<C>) {
        self.add_monom(m.powers, m.coef)
    }

    fn add_monom(&mut self, powers: Powers, coef: C) {
        // nothing to do if the coefficient is already zero
        if coef.is_zero() {
            return;
        }

        // do we already have a monom with the same exponents?
        if let Some(old_coef) = self.monoms.get_mut(&powers) {
            // the result may be zero, the term keeps its position anyway
            old_coef.add_assign(&coef);
        } else {
            let (term_index, old_coef) = self.monoms.insert_full(powers, coef);
            debug_assert!(
                old_coef.is_none(),
                "There should never exist an equivalent term already."
            );
            debug_assert_eq!(term_index + 1, self.monoms.len(), "new terms go to the end");
            self.var_map.add_term(&powers, term_index.into());
        }
    }

    /// Number of monomials with a non-zero coefficient.
    pub fn size(&self) -> usize {
        self.monoms.values().filter(|c| !c.is_zero()).count()
    }

    /// Monomials with a non-zero coefficient in insertion order.
    pub fn monoms(&self) -> impl Iterator<Item = Monom<C>> + '_ {
        self.monoms
            .iter()
            .filter(|(_, c)| !c.is_zero())
            .map(|(powers, coef)| Monom::new(*coef, *powers))
    }

    /// Every variable that shows up with a positive exponent in any stored term, a to z.
    pub fn variables(&self) -> impl Iterator<Item = Var> + '_ {
        self.var_map.referenced()
    }

    /// Highest exponent of `var` across all terms with a non-zero coefficient.
    pub fn degree(&self, var: Var) -> u32 {
        self.var_map
            .terms_for_var(var)
            .filter_map(|id| self.monoms.get_index(id.into()))
            .filter(|(_, c)| !c.is_zero())
            .map(|(powers, _)| powers.get(var))
            .max()
            .unwrap_or(0)
    }
}

/// Algebra routines built on core functionality.
impl<C: Coef> Polynom<C> {
    /// Creates a new polynomial which is the sum of `self` and `other`.
    pub fn add(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for (powers, coef) in self.monoms.iter().chain(other.monoms.iter()) {
            r.add_monom(*powers, *coef);
        }
        r
    }

    /// Creates a new polynomial which is the product of `self` and `other`.
    pub fn mul(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for (powers_a, coef_a) in self.monoms.iter() {
            for (powers_b, coef_b) in other.monoms.iter() {
                let mut coef = *coef_a;
                coef.mul_assign(coef_b);
                r.add_monom(powers_a.mul(powers_b), coef);
            }
        }
        r
    }

    /// Raises `self` to the power of `n` by `n` successive multiplications.
    /// `p^0` is `1` for every `p`, including the zero polynomial.
    pub fn pow(&self, n: u32) -> Self {
        let mut r = Self::constant(C::one());
        for _ in 0..n {
            r = r.mul(self);
        }
        tracing::trace!(n, size = r.size(), "computed power");
        r
    }

    /// Divides every coefficient by a constant divisor, truncating toward zero.
    /// Remainders are dropped, this is not polynomial division.
    pub fn div(&self, divisor: &Self) -> Result<Self, DivisionError> {
        if !divisor.is_constant() {
            return Err(DivisionError::DivisionByNonConstant);
        }
        let d = divisor.constant_value();
        if d.is_zero() {
            return Err(DivisionError::DivisionByZero);
        }
        let mut r = Self::zero();
        for (powers, coef) in self.monoms.iter() {
            r.add_monom(*powers, coef.trunc_div(&d));
        }
        Ok(r)
    }
}

/// Evaluation and structural predicates.
impl<C: Coef> Polynom<C> {
    /// Evaluates the polynomial. Returns `C::UNDEFINED` as soon as any term refers to an
    /// unassigned variable, even when all other terms could be computed.
    pub fn evaluate(&self, vars: &Assignment<C>) -> C {
        self.eval(vars).unwrap_or(C::UNDEFINED)
    }

    /// Like [`Polynom::evaluate`] but reports an unassigned variable as `None`.
    pub fn eval(&self, vars: &Assignment<C>) -> Option<C> {
        let mut sum = C::zero();
        for (powers, coef) in self.monoms.iter() {
            let mut term = *coef;
            for (var, exp) in powers.vars() {
                if !vars.is_assigned(var) {
                    return None;
                }
                term.mul_assign(&vars.get(var).pow_repeated(exp));
            }
            sum.add_assign(&term);
        }
        Some(sum)
    }

    pub fn is_zero(&self) -> bool {
        self.monoms.values().all(|c| c.is_zero())
    }

    /// Empty, or exactly one term without any variables.
    pub fn is_constant(&self) -> bool {
        match self.monoms.len() {
            0 => true,
            1 => self.monoms.keys().all(|p| p.is_constant()),
            _ => false,
        }
    }

    /// True iff at least one variable is referenced and every referenced variable has a value.
    /// Note that a constant polynomial yields `false`.
    pub fn has_all_referenced_variables_assigned(&self, vars: &Assignment<C>) -> bool {
        let mut has_vars = false;
        for var in self.var_map.referenced() {
            if !vars.is_assigned(var) {
                return false;
            }
            has_vars = true;
        }
        has_vars
    }

    /// The coefficient of the first term, or zero for the empty polynomial.
    /// Only meaningful if [`Polynom::is_constant`] holds.
    pub fn constant_value(&self) -> C {
        self.monoms.values().next().copied().unwrap_or_else(C::zero)
    }

    /// Writes the canonical form followed by a newline.
    pub fn write_line(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Prints the canonical form to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl<C: Coef> Default for Polynom<C> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Two polynomials are equal if they contain the same non-zero monomials, in any order.
impl<C: Coef> PartialEq for Polynom<C> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
            && self
                .monoms
                .iter()
                .filter(|(_, c)| !c.is_zero())
                .all(|(powers, coef)| other.monoms.get(powers) == Some(coef))
    }
}

impl<C: Coef> Eq for Polynom<C> {}

impl<C: Coef> std::ops::Add for &Polynom<C> {
    type Output = Polynom<C>;

    fn add(self, rhs: Self) -> Self::Output {
        Polynom::add(self, rhs)
    }
}

impl<C: Coef> std::ops::Mul for &Polynom<C> {
    type Output = Polynom<C>;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynom::mul(self, rhs)
    }
}

impl<C: Coef> Display for Polynom<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (powers, coef) in self.monoms.iter().filter(|(_, c)| !c.is_zero()) {
            if first {
                if coef.is_negative() {
                    write!(f, "-")?;
                }
            } else if coef.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            let magnitude = coef.magnitude();
            // a coefficient of one is implied by the variables
            if magnitude != 1 || powers.is_constant() {
                write!(f, "{magnitude}")?;
            }
            write!(f, "{powers}")?;
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

impl<C: Coef> FromStr for Polynom<C> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_monoms(crate::parse_poly(s.as_bytes())?))
    }
}

/// A single coefficient together with its exponent vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monom<C: Coef = i32> {
    pub coef: C,
    pub powers: Powers,
}

impl<C: Coef> Monom<C> {
    pub fn new(coef: C, powers: Powers) -> Self {
        Self { coef, powers }
    }
}

impl<C: Coef> Display for Monom<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Polynom::monom(self.coef, Some(self.powers)))
    }
}

/// One of the 26 variables `a` to `z`.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Var(u8);

impl Var {
    pub fn new(index: usize) -> Option<Self> {
        (index < VAR_COUNT).then_some(Self(index as u8))
    }

    /// Case insensitive, `'B'` and `'b'` refer to the same variable.
    pub fn from_letter(letter: char) -> Option<Self> {
        letter
            .is_ascii_alphabetic()
            .then(|| Self(letter.to_ascii_lowercase() as u8 - b'a'))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn letter(self) -> char {
        (b'a' + self.0) as char
    }

    pub fn all() -> impl Iterator<Item = Var> {
        (0..VAR_COUNT as u8).map(Self)
    }
}

impl Display for Var {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<char> for Var {
    type Error = ParseError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Self::from_letter(letter).ok_or(ParseError::NotAVariable(letter))
    }
}

/// The exponent of every variable in a monomial.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default)]
pub struct Powers([u32; VAR_COUNT]);

impl Powers {
    pub fn zero() -> Self {
        Self::default()
    }

    /// `var^1`
    pub fn of(var: Var) -> Self {
        let mut r = Self::zero();
        r.set(var, 1);
        r
    }

    #[inline]
    pub fn get(&self, var: Var) -> u32 {
        self.0[var.index()]
    }

    #[inline]
    pub fn set(&mut self, var: Var, exp: u32) {
        self.0[var.index()] = exp;
    }

    pub fn is_constant(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// Combines two exponent vectors, essentially multiplying the monomials.
    pub fn mul(&self, other: &Powers) -> Self {
        Self(std::array::from_fn(|ii| self.0[ii] + other.0[ii]))
    }

    /// Variables with a positive exponent, in slot order.
    pub fn vars(&self) -> impl Iterator<Item = (Var, u32)> + '_ {
        Var::all()
            .map(|v| (v, self.get(v)))
            .filter(|&(_, exp)| exp > 0)
    }
}

impl From<[u32; VAR_COUNT]> for Powers {
    fn from(value: [u32; VAR_COUNT]) -> Self {
        Self(value)
    }
}

/// Exponents of repeated variables add up, saturating at `u32::MAX`.
impl FromIterator<(Var, u32)> for Powers {
    fn from_iter<T: IntoIterator<Item = (Var, u32)>>(iter: T) -> Self {
        let mut r = Self::zero();
        for (var, exp) in iter {
            r.set(var, r.get(var).saturating_add(exp));
        }
        r
    }
}

impl Display for Powers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (var, exp) in self.vars() {
            if exp > 1 {
                write!(f, "{var}^{exp}")?;
            } else {
                write!(f, "{var}")?;
            }
        }
        Ok(())
    }
}
