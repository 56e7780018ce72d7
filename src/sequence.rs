use std::{fmt, str::FromStr};

use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

use crate::permutation::{permute, visit_lexicographic};

#[derive(Parser)]
#[grammar = "sequence.pest"]
struct SequenceParser;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed sequence\n{0}")]
    Syntax(String),
}

/// One line of input. Integers compare numerically, anything else compares as text, so a line is
/// only treated as integers if every token on it is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sequence {
    Integers(Vec<i64>),
    Words(Vec<String>),
}

impl Sequence {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let parsed = SequenceParser::parse(Rule::sequence, raw)
            .map_err(|err| ParseError::Syntax(err.to_string()))?;
        let tokens: Vec<&str> = parsed
            .flatten()
            .filter(|pair| pair.as_rule() == Rule::token)
            .map(|pair| pair.as_str())
            .collect();
        let integers: Result<Vec<i64>, _> =
            tokens.iter().map(|token| token.parse::<i64>()).collect();
        Ok(match integers {
            Ok(integers) => Sequence::Integers(integers),
            Err(_) => Sequence::Words(tokens.into_iter().map(String::from).collect()),
        })
    }

    pub fn len(&self) -> usize {
        match self {
            Sequence::Integers(v) => v.len(),
            Sequence::Words(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sort(&mut self) {
        match self {
            Sequence::Integers(v) => v.sort_unstable(),
            Sequence::Words(v) => v.sort_unstable(),
        }
    }

    pub fn permute(&mut self) -> bool {
        match self {
            Sequence::Integers(v) => permute(v),
            Sequence::Words(v) => permute(v),
        }
    }

    /// Walks to the last permutation, handing each arrangement to `visit` already formatted.
    pub fn visit_lexicographic(&mut self, mut visit: impl FnMut(String)) -> usize {
        match self {
            Sequence::Integers(v) => visit_lexicographic(v, |p| visit(join(p))),
            Sequence::Words(v) => visit_lexicographic(v, |p| visit(join(p))),
        }
    }
}

// Empty renders as `[]` so it stays visible and parses back.
fn join<T: fmt::Display>(v: &[T]) -> String {
    if v.is_empty() {
        return "[]".to_string();
    }
    v.iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::Integers(v) => f.write_str(&join(v)),
            Sequence::Words(v) => f.write_str(&join(v)),
        }
    }
}

impl FromStr for Sequence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sequence::parse(s)
    }
}
