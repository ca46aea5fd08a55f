/// Parser module
/// Turns the token stream into the AST defined in [`crate::ast`]
///
/// Submodules:
/// - parser: The parser struct, cursor discipline and error collection
/// - lookups: Token-keyed handler and precedence tables
/// - expr: Pratt expression handlers
/// - stmt: Statement handlers
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
