//! Source syntax: verbs, the expression tree, and the parser
//!
//! ```text
//! primary := digit | letter | '(' expr ')'
//! expr    := verb expr
//!          | primary verb expr
//!          | letter '=' expr
//!          | primary
//! ```
//!
//! Whitespace between tokens is ignored. There is no precedence; every verb
//! takes the whole rest of the expression as its right operand.

mod ast;
mod parser;
mod verb;

pub use ast::Expr;
pub use parser::{parse, Parser};
pub use verb::{Valence, Verb};
