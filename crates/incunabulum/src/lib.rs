//! # Incunabulum
//!
//! An interpreter for a tiny array language in the APL/J tradition.
//!
//! Every value is an array of rank 0 to 3 holding integers or boxes. Five
//! verbs each have a monadic and a dyadic reading, picked by whether a left
//! operand is present:
//!
//! | Verb | Monadic | Dyadic |
//! |------|---------|--------|
//! | `+`  | identity | plus |
//! | `{`  | size | from |
//! | `~`  | iota | (not implemented) |
//! | `<`  | box | (not implemented) |
//! | `#`  | shape | reshape |
//! | `,`  | (not implemented) | catenate |
//!
//! Literals are single digits and variables are the letters `a` to `z`.
//! Evaluation runs right to left with no precedence: `3+4+5` is `3+(4+5)`.
//!
//! ## Architecture
//!
//! - **Syntax**: a line of text is parsed into an [`Expr`]
//! - **Eval**: [`Evaluate`] walks the tree against an [`Environment`]
//! - **Interpreter**: a session owning the variables, one line at a time
//! - **REPL**: reads lines, prints values via their `Display` rendering

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod interpreter;
pub mod repl;
pub mod syntax;
pub mod value;

// Re-export main types
pub use context::EvalContext;
pub use environment::Environment;
pub use error::{EvalError, InterpError, ParseError, Result};
pub use eval::{eval_expr, Evaluate};
pub use interpreter::Interpreter;
pub use syntax::{parse, Expr, Parser, Valence, Verb};
pub use value::{Data, Kind, Value, MAX_RANK};

/// Incunabulum version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
