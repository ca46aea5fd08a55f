use std::{any::Any, fmt::Display};

use crate::{lexer::tokens::Token, SrcLoc};

use super::{
    ast::{Expr, ExprType, ExprWrapper},
    statements::BlockStmt,
};

// LITERALS

/// Identifier Expression
/// Represents a name in the AST. Also used for function parameters.
#[derive(Debug, Clone)]
pub struct IdentExpr {
    pub token: Token,
    pub value: String,
}

impl Expr for IdentExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Ident
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_loc(&self) -> &SrcLoc {
        &self.token.loc
    }
    fn token_word(&self) -> &str {
        &self.token.word
    }
}

impl Display for IdentExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Literal Expression
///
/// The value is converted from the token word at parse time; overflow is a
/// parse diagnostic, not a panic.
#[derive(Debug, Clone)]
pub struct IntExpr {
    pub token: Token,
    pub value: i64,
}

impl Expr for IntExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Int
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_loc(&self) -> &SrcLoc {
        &self.token.loc
    }
    fn token_word(&self) -> &str {
        &self.token.word
    }
}

impl Display for IntExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.word)
    }
}

/// Float Literal Expression
///
/// Renders as the scanned text, which is already the minimal decimal form.
#[derive(Debug, Clone)]
pub struct FloatExpr {
    pub token: Token,
    pub value: f64,
}

impl Expr for FloatExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Float
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_loc(&self) -> &SrcLoc {
        &self.token.loc
    }
    fn token_word(&self) -> &str {
        &self.token.word
    }
}

impl Display for FloatExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.word)
    }
}

/// String Literal Expression
/// The value is the raw inner text; no escape sequences are interpreted.
#[derive(Debug, Clone)]
pub struct StrExpr {
    pub token: Token,
    pub value: String,
}

impl Expr for StrExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Str
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_loc(&self) -> &SrcLoc {
        &self.token.loc
    }
    fn token_word(&self) -> &str {
        &self.token.word
    }
}

impl Display for StrExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.value)
    }
}

/// Boolean Literal Expression
#[derive(Debug, Clone)]
pub struct BoolExpr {
    pub token: Token,
    pub value: bool,
}

impl Expr for BoolExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Bool
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_loc(&self) -> &SrcLoc {
        &self.token.loc
    }
    fn token_word(&self) -> &str {
        &self.token.word
    }
}

impl Display for BoolExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.word)
    }
}

// COMPLEX

/// Prefix Expression
/// Represents a unary operation (`-x`, `!ok`) on an expression in the AST.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    /// The operator token.
    pub token: Token,
    pub operator: String,
    pub right: ExprWrapper,
}

impl Expr for PrefixExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_loc(&self) -> &SrcLoc {
        &self.token.loc
    }
    fn token_word(&self) -> &str {
        &self.token.word
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Infix Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug, Clone)]
pub struct InfixExpr {
    /// The operator token.
    pub token: Token,
    pub operator: String,
    pub left: ExprWrapper,
    pub right: ExprWrapper,
}

impl Expr for InfixExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Infix
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_loc(&self) -> &SrcLoc {
        &self.token.loc
    }
    fn token_word(&self) -> &str {
        &self.token.word
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// Call Expression
/// Represents a function call in the AST.
#[derive(Debug, Clone)]
pub struct CallExpr {
    /// The `(` token.
    pub token: Token,
    pub callee: ExprWrapper,
    pub arguments: Vec<ExprWrapper>,
}

impl Expr for CallExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Call
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_loc(&self) -> &SrcLoc {
        &self.token.loc
    }
    fn token_word(&self) -> &str {
        &self.token.word
    }
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let args = self
            .arguments
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        write!(f, "{}({})", self.callee, args)
    }
}

/// Function Literal Expression
///
/// An anonymous function: parameter identifiers plus a block body. Named
/// declarations wrap one of these.
#[derive(Debug, Clone)]
pub struct FnLiteralExpr {
    /// The `fn` token.
    pub token: Token,
    pub parameters: Vec<IdentExpr>,
    pub body: BlockStmt,
}

impl FnLiteralExpr {
    /// The comma-separated parameter names, as rendered between parens.
    pub fn parameter_list(&self) -> String {
        self.parameters
            .iter()
            .map(|param| param.to_string())
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl Expr for FnLiteralExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::FnLiteral
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_loc(&self) -> &SrcLoc {
        &self.token.loc
    }
    fn token_word(&self) -> &str {
        &self.token.word
    }
}

impl Display for FnLiteralExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fn ({}) {}", self.parameter_list(), self.body)
    }
}
