use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::SrcLoc;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("return", TokenKind::Return);
        map.insert("let", TokenKind::Let);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// Unscannable input; the token word carries the offending character.
    Err,
    Eof,

    Identifier,
    Int,
    Float,
    Str,

    Assign,  // =
    Plus,    // +
    Dash,    // -
    Bang,    // !
    Star,    // *
    Slash,   // /
    Less,    // <
    Greater, // >

    Equals,        // ==
    NotEquals,     // !=
    LessEquals,    // <=
    GreaterEquals, // >=

    Comma,
    Semicolon,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    // Reserved
    Fn,
    Return,
    Let,
    True,
    False,
    If,
    Else,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One lexical unit: kind, literal text and the location of its first
/// character. Produced once by the lexer and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub word: String,
    pub loc: SrcLoc,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Int | TokenKind::Float | TokenKind::Str => {
                write!(f, "{} ({:?})", self.kind, self.word)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}
