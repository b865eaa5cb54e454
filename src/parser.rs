// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

//! Reads polynomials in the form produced by `Display`, e.g., `-a^2 + 3ab - 4`.

use crate::coef::Coef;
use crate::error::ParseError;
use crate::poly::{Powers, Var};

pub fn parse_poly<C: Coef>(line: &[u8]) -> Result<Vec<(C, Powers)>, ParseError> {
    PolyParser::new(line).collect()
}

struct PolyParser<'a, C> {
    line: &'a [u8],
    pos: usize,
    state: State,
    _coef: std::marker::PhantomData<C>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum State {
    First,
    Next,
    Done,
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Sign {
    Minus,
    Plus,
}

impl<'a, C: Coef> PolyParser<'a, C> {
    fn new(line: &'a [u8]) -> Self {
        Self {
            line,
            pos: 0,
            state: State::First,
            _coef: std::marker::PhantomData,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.line.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn unexpected(&self) -> ParseError {
        ParseError::Unexpected {
            found: self.peek().map(char::from).unwrap_or('\0'),
            offset: self.pos,
        }
    }

    /// Consumes a run of decimal digits, returns `None` if there are none.
    fn number(&mut self) -> Option<Result<u64, String>> {
        let start = self.pos;
        let mut value = Some(0u64);
        while let Some(c) = self.peek().filter(u8::is_ascii_digit) {
            value = value
                .and_then(|v| v.checked_mul(10))
                .and_then(|v| v.checked_add((c - b'0') as u64));
            self.pos += 1;
        }
        if start == self.pos {
            return None;
        }
        let text = || String::from_utf8_lossy(&self.line[start..self.pos]).into_owned();
        Some(value.ok_or_else(text))
    }

    fn sign(&mut self) -> Result<Sign, ParseError> {
        let first = self.state == State::First;
        match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                Ok(Sign::Minus)
            }
            Some(b'+') if !first => {
                self.pos += 1;
                Ok(Sign::Plus)
            }
            // only the first term may come without a sign
            _ if first => Ok(Sign::Plus),
            _ => Err(self.unexpected()),
        }
    }

    fn term(&mut self) -> Result<(C, Powers), ParseError> {
        let sign = self.sign()?;
        self.skip_whitespace();
        let start = self.pos;

        let magnitude = match self.number() {
            Some(m) => m.map_err(ParseError::CoefOutOfRange)?,
            None => 1,
        };

        let mut powers = Powers::zero();
        while let Some(letter) = self.peek().filter(u8::is_ascii_alphabetic) {
            let var = Var::try_from(char::from(letter))?;
            self.pos += 1;
            let exp = if self.peek() == Some(b'^') {
                self.pos += 1;
                let e = self.number().ok_or_else(|| self.unexpected())?;
                let e = e.map_err(ParseError::ExponentOutOfRange)?;
                u32::try_from(e).map_err(|_| ParseError::ExponentOutOfRange(e.to_string()))?
            } else {
                1
            };
            // a letter may show up more than once, e.g., `aa^2`
            let old = powers.get(var);
            let total = old
                .checked_add(exp)
                .ok_or_else(|| ParseError::ExponentOutOfRange(format!("{old}+{exp}")))?;
            powers.set(var, total);
        }

        if start == self.pos {
            return Err(ParseError::MissingTerm(start));
        }

        let value = match sign {
            Sign::Plus => i128::from(magnitude),
            Sign::Minus => -i128::from(magnitude),
        };
        let coef = i64::try_from(value)
            .ok()
            .and_then(C::from_i64)
            .ok_or_else(|| ParseError::CoefOutOfRange(value.to_string()))?;
        Ok((coef, powers))
    }
}

impl<'a, C: Coef> Iterator for PolyParser<'a, C> {
    type Item = Result<(C, Powers), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        match self.state {
            State::Done => return None,
            State::Next if self.peek().is_none() => {
                self.state = State::Done;
                return None;
            }
            _ => {}
        }
        let r = self.term();
        self.state = if r.is_ok() { State::Next } else { State::Done };
        Some(r)
    }
}
