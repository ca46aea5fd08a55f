use std::{
    any::Any,
    fmt::Display,
    slice::{Iter, IterMut},
};

use crate::{lexer::tokens::Token, SrcLoc};

use super::{
    ast::{ExprWrapper, Stmt, StmtType, StmtWrapper},
    expressions::{FnLiteralExpr, IdentExpr},
};

/// The root of a parsed source: an ordered statement sequence.
///
/// A program returned from an error-bearing parse is best effort only;
/// callers must check the parser's diagnostics before trusting it.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<StmtWrapper>,
}

impl Program {
    pub fn new() -> Self {
        Program { statements: vec![] }
    }

    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.statements.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, StmtWrapper> {
        self.statements.iter_mut()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// A braced statement sequence with its own lexical scope.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    /// The `{` token.
    pub token: Token,
    pub statements: Vec<StmtWrapper>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.statements.iter()
    }
}

impl Stmt for BlockStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BlockStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_loc(&self) -> &SrcLoc {
        &self.token.loc
    }
    fn token_word(&self) -> &str {
        &self.token.word
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ ")?;
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        write!(f, " }}")
    }
}

#[derive(Debug, Clone)]
pub struct LetStmt {
    /// The `let` token.
    pub token: Token,
    pub ident: IdentExpr,
    pub init_value: Option<ExprWrapper>,
}

impl Stmt for LetStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::LetStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_loc(&self) -> &SrcLoc {
        &self.token.loc
    }
    fn token_word(&self) -> &str {
        &self.token.word
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.init_value {
            Some(init) => write!(f, "let {} = {};", self.ident, init),
            None => write!(f, "let {};", self.ident),
        }
    }
}

/// A named function declaration; the name plus an ordinary function literal.
#[derive(Debug, Clone)]
pub struct FnDeclStmt {
    /// The `fn` token.
    pub token: Token,
    pub ident: IdentExpr,
    pub value: FnLiteralExpr,
}

impl Stmt for FnDeclStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::FnDeclStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_loc(&self) -> &SrcLoc {
        &self.token.loc
    }
    fn token_word(&self) -> &str {
        &self.token.word
    }
}

impl Display for FnDeclStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "fn {}({}) {}",
            self.ident,
            self.value.parameter_list(),
            self.value.body
        )
    }
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    /// The `return` token.
    pub token: Token,
    pub value: Option<ExprWrapper>,
}

impl Stmt for ReturnStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ReturnStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_loc(&self) -> &SrcLoc {
        &self.token.loc
    }
    fn token_word(&self) -> &str {
        &self.token.word
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "return {};", value),
            None => write!(f, "return;"),
        }
    }
}

/// A trailing expression in statement position.
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    /// The first token of the expression.
    pub token: Token,
    pub expression: ExprWrapper,
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_loc(&self) -> &SrcLoc {
        &self.token.loc
    }
    fn token_word(&self) -> &str {
        &self.token.word
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// The else slot of an [`IfStmt`]: either another `if` (an else-if chain)
/// or a plain block. No other statement kind can appear here.
#[derive(Debug, Clone)]
pub enum ElseBranch {
    If(Box<IfStmt>),
    Block(BlockStmt),
}

impl Display for ElseBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElseBranch::If(stmt) => write!(f, "{}", stmt),
            ElseBranch::Block(block) => write!(f, "{}", block),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    /// The `if` token.
    pub token: Token,
    pub condition: ExprWrapper,
    pub then: BlockStmt,
    pub else_branch: Option<ElseBranch>,
}

impl Stmt for IfStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::IfStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_loc(&self) -> &SrcLoc {
        &self.token.loc
    }
    fn token_word(&self) -> &str {
        &self.token.word
    }
}

impl Display for IfStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if {} {}", self.condition, self.then)?;
        if let Some(else_branch) = &self.else_branch {
            write!(f, " else {}", else_branch)?;
        }
        Ok(())
    }
}
