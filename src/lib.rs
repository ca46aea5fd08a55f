#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A position in some source text: file name plus 1-based line and column.
///
/// Stamped onto every token by the lexer at scan time and carried into the
/// AST from there; it is never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrcLoc {
    pub file: Rc<String>,
    pub line: u32,
    pub column: u32,
}

impl SrcLoc {
    pub fn new(file: Rc<String>, line: u32, column: u32) -> Self {
        SrcLoc { file, line, column }
    }
}

impl Display for SrcLoc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
