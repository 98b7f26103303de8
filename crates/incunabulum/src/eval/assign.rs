//! Assignment expression evaluation

use std::sync::Arc;

use crate::{Environment, EvalContext, EvalError, Expr, Value};

use super::Evaluate;

/// Evaluate an assignment expression.
///
/// The right side is evaluated first, then stored under `name`. The whole
/// assignment evaluates to the stored value.
///
/// # Errors
///
/// Propagates any error from the right side; `InvalidVariable` if `name` is
/// not a lowercase letter.
pub fn eval_assign(
    name: char,
    value: &Expr,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Arc<Value>, EvalError> {
    let value = value.eval(env, ctx)?;
    env.assign(name, Arc::clone(&value))?;
    tracing::debug!(name = %name, rank = value.rank(), "assign");
    Ok(value)
}
