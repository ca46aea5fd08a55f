use std::{
    any::Any,
    fmt::{Debug, Display},
    ops::Deref,
};

use crate::SrcLoc;

/// Statement Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    ExpressionStmt,
    BlockStmt,
    LetStmt,
    FnDeclStmt,
    ReturnStmt,
    IfStmt,
}

/// Statement Trait
///
/// Defines the behavior shared by all statement nodes. Every node keeps the
/// token that introduced it, so it can report that token's literal text and
/// location; `Display` renders the canonical string reconstruction.
pub trait Stmt: Debug + Display {
    /// Returns the capability tag of the statement.
    fn get_stmt_type(&self) -> StmtType;
    /// Type conversion purposes - used with `.downcast_ref::<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the statement into a StmtWrapper.
    /// Clone cannot be derived for trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> StmtWrapper;
    /// Returns the location of the statement's introducing token.
    fn get_loc(&self) -> &SrcLoc;
    /// Returns the literal text of the statement's introducing token.
    fn token_word(&self) -> &str;
}

/// Statement Wrapper
///
/// A wrapper that allows any statement kind to be stored with helper methods
#[derive(Debug)]
pub struct StmtWrapper(Box<dyn Stmt>);

impl StmtWrapper {
    pub fn new<T: Stmt + 'static>(stmt: T) -> Self {
        StmtWrapper(Box::new(stmt))
    }
}

impl Deref for StmtWrapper {
    type Target = Box<dyn Stmt>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Stmt for StmtWrapper {
    fn get_stmt_type(&self) -> StmtType {
        self.0.get_stmt_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        self.0.clone_wrapper()
    }
    fn get_loc(&self) -> &SrcLoc {
        self.0.get_loc()
    }
    fn token_word(&self) -> &str {
        self.0.token_word()
    }
}

impl Clone for StmtWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

impl Display for StmtWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Ident,
    Int,
    Float,
    Str,
    Bool,
    Prefix,
    Infix,
    Call,
    FnLiteral,
}

/// Expression Trait
///
/// Same contract as [`Stmt`], for the expression capability set.
pub trait Expr: Debug + Display {
    /// Returns the capability tag of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref::<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the expression into an ExprWrapper.
    /// Clone cannot be derived for trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> ExprWrapper;
    /// Returns the location of the expression's introducing token.
    fn get_loc(&self) -> &SrcLoc;
    /// Returns the literal text of the expression's introducing token.
    fn token_word(&self) -> &str;
}

/// Expression Wrapper
///
/// A wrapper that allows any expression kind to be stored with helper methods
#[derive(Debug)]
pub struct ExprWrapper(Box<dyn Expr>);

impl ExprWrapper {
    pub fn new<T: Expr + 'static>(expression: T) -> Self {
        ExprWrapper(Box::new(expression))
    }
}

impl Deref for ExprWrapper {
    type Target = Box<dyn Expr>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Expr for ExprWrapper {
    fn get_expr_type(&self) -> ExprType {
        self.0.get_expr_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        self.0.clone_wrapper()
    }
    fn get_loc(&self) -> &SrcLoc {
        self.0.get_loc()
    }
    fn token_word(&self) -> &str {
        self.0.token_word()
    }
}

impl Clone for ExprWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

impl Display for ExprWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
