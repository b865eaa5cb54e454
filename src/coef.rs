// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

//! Coefficient Library

use num_traits::{NumCast, PrimInt, Signed, WrappingAdd, WrappingMul};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A signed machine integer used for coefficients and evaluation results.
/// All arithmetic wraps on overflow, division truncates toward zero.
pub trait Coef: PrimInt + Signed + WrappingAdd + WrappingMul + Hash + Debug + Display {
    /// Result of an evaluation that touched an unassigned variable.
    const UNDEFINED: Self;

    #[inline]
    fn from_i64(v: i64) -> Option<Self> {
        <Self as NumCast>::from(v)
    }

    #[inline]
    fn add_assign(&mut self, other: &Self) {
        *self = WrappingAdd::wrapping_add(&*self, other);
    }

    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        *self = WrappingMul::wrapping_mul(&*self, other);
    }

    /// `base^exp` by repeated multiplication.
    fn pow_repeated(&self, exp: u32) -> Self {
        let mut r = Self::one();
        for _ in 0..exp {
            r.mul_assign(self);
        }
        r
    }

    /// Quotient truncated toward zero. `divisor` must not be zero.
    fn trunc_div(&self, divisor: &Self) -> Self;

    /// Absolute value, well defined for `MIN` as well.
    fn magnitude(&self) -> u64;
}

macro_rules! impl_coef {
    ($($ty:ty),*) => {$(
        impl Coef for $ty {
            const UNDEFINED: Self = <$ty>::MIN;

            #[inline]
            fn trunc_div(&self, divisor: &Self) -> Self {
                debug_assert_ne!(*divisor, 0);
                self.wrapping_div(*divisor)
            }

            #[inline]
            fn magnitude(&self) -> u64 {
                self.unsigned_abs() as u64
            }
        }
    )*};
}

impl_coef!(i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trunc_div() {
        assert_eq!(5i32.trunc_div(&2), 2);
        assert_eq!((-5i32).trunc_div(&2), -2);
        assert_eq!(5i32.trunc_div(&-2), -2);
        assert_eq!((-5i32).trunc_div(&-2), 2);
        assert_eq!(i32::MIN.trunc_div(&-1), i32::MIN);
    }

    #[test]
    fn test_wrapping() {
        let mut a = i32::MAX;
        a.add_assign(&1);
        assert_eq!(a, i32::MIN);
        let mut b = 1i64 << 62;
        b.mul_assign(&4);
        assert_eq!(b, 0);
    }

    #[test]
    fn test_pow_repeated() {
        assert_eq!(3i32.pow_repeated(0), 1);
        assert_eq!(3i32.pow_repeated(4), 81);
        assert_eq!((-2i64).pow_repeated(3), -8);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!((-7i32).magnitude(), 7);
        assert_eq!(i32::MIN.magnitude(), 2147483648);
        assert_eq!(i64::MIN.magnitude(), 1u64 << 63);
    }

    #[test]
    fn test_from_i64() {
        assert_eq!(i32::from_i64(-12), Some(-12));
        assert_eq!(i32::from_i64(1 << 40), None);
        assert_eq!(i64::from_i64(1 << 40), Some(1 << 40));
    }
}
