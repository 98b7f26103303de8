//! Line-at-a-time interpreter state

use std::sync::Arc;

use crate::error::{ParseError, Result};
use crate::eval::Evaluate;
use crate::{Environment, EvalContext, Expr, Parser, Value};

/// An interpreter session: the variable table plus evaluation settings.
///
/// Each session is independent; nothing is global.
///
/// # Example
///
/// ```
/// use incunabulum::Interpreter;
///
/// let mut interp = Interpreter::new();
/// interp.eval_line("a=5,2").unwrap();
/// interp.eval_line("b=~6").unwrap();
/// let v = interp.eval_line("a,b").unwrap().unwrap();
/// assert_eq!(v.to_string(), "8 \n5 2 0 1 2 3 4 5 \n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    env: Environment,
    ctx: EvalContext,
}

impl Interpreter {
    /// Create a session with empty variables and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with the given settings.
    pub fn with_context(ctx: EvalContext) -> Self {
        Self {
            env: Environment::new(),
            ctx,
        }
    }

    /// The variable table
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// The evaluation settings
    pub fn ctx(&self) -> &EvalContext {
        &self.ctx
    }

    /// Parse `line` under this session's nesting limit.
    pub fn parse(&self, line: &str) -> std::result::Result<Expr, ParseError> {
        Parser::new(line, self.ctx.max_depth).parse()
    }

    /// Parse and evaluate one line.
    ///
    /// Blank lines produce `Ok(None)`. If evaluation fails, every variable is
    /// restored to what it held before the line ran.
    ///
    /// # Errors
    ///
    /// Returns the parse or evaluation error for the line.
    pub fn eval_line(&mut self, line: &str) -> Result<Option<Arc<Value>>> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let expr = self.parse(line)?;
        tracing::trace!(expr = %expr, "parsed");

        let snapshot = self.env.clone();
        match expr.eval(&mut self.env, &self.ctx) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                self.env = snapshot;
                Err(err.into())
            }
        }
    }
}
