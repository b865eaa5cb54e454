// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

//! Property-based tests for polynomial arithmetic and evaluation.

use proptest::prelude::*;

use crate::{Assignment, Polynom, Powers, Var};

const VARS: [char; 3] = ['a', 'b', 'c'];

fn var(letter: char) -> Var {
    Var::from_letter(letter).unwrap()
}

// Strategy for exponent vectors over a, b and c with small exponents
fn small_powers() -> impl Strategy<Value = Powers> {
    proptest::array::uniform3(0u32..4).prop_map(|exps| {
        VARS.iter()
            .zip(exps)
            .map(|(&l, e)| (var(l), e))
            .collect::<Powers>()
    })
}

// Strategy for polynomials with up to 6 terms and small coefficients
fn small_poly() -> impl Strategy<Value = Polynom> {
    proptest::collection::vec((-20i32..20, small_powers()), 0..6).prop_map(Polynom::from_monoms)
}

// Strategy for assignments where every variable is bound
fn full_assignment() -> impl Strategy<Value = Assignment> {
    proptest::array::uniform3(prop_oneof![-5i32..=-1, 1i32..=5])
        .prop_map(|vals| VARS.iter().map(|&l| var(l)).zip(vals).collect::<Assignment>())
}

proptest! {
    #[test]
    fn eval_add_is_sum(a in small_poly(), b in small_poly(), v in full_assignment()) {
        let (ea, eb) = (a.eval(&v).unwrap(), b.eval(&v).unwrap());
        prop_assert_eq!(a.add(&b).eval(&v), Some(ea.wrapping_add(eb)));
    }

    #[test]
    fn eval_mul_is_product(a in small_poly(), b in small_poly(), v in full_assignment()) {
        let (ea, eb) = (a.eval(&v).unwrap(), b.eval(&v).unwrap());
        prop_assert_eq!(a.mul(&b).eval(&v), Some(ea.wrapping_mul(eb)));
    }

    #[test]
    fn pow_zero_is_one(a in small_poly(), v in full_assignment()) {
        let p = a.pow(0);
        prop_assert_eq!(p.evaluate(&v), 1);
        prop_assert_eq!(p.evaluate(&Assignment::new()), 1);
    }

    #[test]
    fn pow_one_is_identity(a in small_poly()) {
        prop_assert_eq!(a.pow(1), a);
    }

    #[test]
    fn pow_is_repeated_mul(a in small_poly()) {
        prop_assert_eq!(a.pow(3), a.mul(&a).mul(&a));
    }

    #[test]
    fn additive_inverse_is_zero(a in small_poly()) {
        let neg = a.mul(&Polynom::constant(-1));
        prop_assert!(a.add(&neg).is_zero());
        prop_assert_eq!(a.add(&neg).to_string(), "0");
    }

    #[test]
    fn add_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn mul_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(a.mul(&b), b.mul(&a));
    }

    #[test]
    fn div_undoes_mul(a in small_poly(), k in prop_oneof![-7i32..=-1, 1i32..=7]) {
        let k = Polynom::constant(k);
        prop_assert_eq!(a.mul(&k).div(&k), Ok(a));
    }

    #[test]
    fn div_truncates_toward_zero(a in small_poly(), k in 2i32..=7) {
        let q = a.div(&Polynom::constant(k)).unwrap();
        for m in q.monoms() {
            let original = a.monoms().find(|o| o.powers == m.powers).unwrap();
            prop_assert_eq!(m.coef, original.coef / k);
        }
        prop_assert!(q.size() <= a.size());
    }

    #[test]
    fn unassigned_variable_poisons_evaluation(a in small_poly(), v in full_assignment(), l in 0usize..3) {
        let x = var(VARS[l]);
        let mut v = v;
        v.set(x, 0);
        // add a term that is guaranteed to reference `x`
        let p = a.add(&Polynom::var(x).mul(&Polynom::constant(3)));
        prop_assert_eq!(p.evaluate(&v), i32::MIN);
        prop_assert!(!p.has_all_referenced_variables_assigned(&v));
    }

    #[test]
    fn display_parses_back(a in small_poly()) {
        let text = a.to_string();
        let parsed: Polynom = text.parse().unwrap();
        prop_assert_eq!(parsed.to_string(), text);
        prop_assert_eq!(parsed, a);
    }
}
