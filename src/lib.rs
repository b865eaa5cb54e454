// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

//! Multivariate integer polynomials over the variables `a` to `z`, together with the
//! evaluation runtime of a small expression language built on top of them.

mod assign;
mod coef;
mod error;
mod parser;
mod poly;
mod session;
mod table;
mod varmap;

#[cfg(test)]
mod proptests;

pub use assign::Assignment;
pub use coef::Coef;
pub use error::{Diagnostic, DivisionError, ParseError};
pub use parser::parse_poly;
pub use poly::{Monom, Polynom, Powers, VAR_COUNT, Var};
pub use session::Session;
pub use table::PolyTable;
