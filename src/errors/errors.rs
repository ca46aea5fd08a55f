use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, SrcLoc};

/// A parse diagnostic: what went wrong plus where.
///
/// Diagnostics are ordinary values collected by the parser; no syntax error
/// unwinds or aborts a pass.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    loc: SrcLoc,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, loc: SrcLoc) -> Self {
        Error {
            internal_error: error_impl,
            loc,
        }
    }

    pub fn get_loc(&self) -> &SrcLoc {
        &self.loc
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixRule { .. } => "NoPrefixRule",
            ErrorImpl::NumberParse { .. } => "NumberParse",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.loc, self.internal_error)
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("expected {expected}, found {found:?}")]
    UnexpectedToken { expected: TokenKind, found: String },
    #[error("no prefix parse rule for {kind} token {token:?}")]
    NoPrefixRule { kind: TokenKind, token: String },
    #[error("error parsing number: {token:?}")]
    NumberParse { token: String },
}
