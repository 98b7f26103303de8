//! Expression evaluation

pub mod assign;
pub mod dyadic;
pub mod monadic;

use std::sync::Arc;

use crate::error::type_name;
use crate::{Environment, EvalContext, EvalError, Expr, Valence, Value};

/// Trait for evaluating AST nodes to values.
///
/// Results are shared: a variable reference hands back the stored value, and
/// monadic `+` hands back its operand, without copying.
pub trait Evaluate {
    /// Evaluate this node in the given environment.
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Arc<Value>, EvalError>;
}

impl Evaluate for Expr {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Arc<Value>, EvalError> {
        match self {
            Expr::Noun(digit) => Ok(Arc::new(Value::scalar(i64::from(*digit)))),

            Expr::Var(name) => env
                .get(*name)
                .cloned()
                .ok_or(EvalError::UndefinedVariable { name: *name }),

            Expr::Group(inner) => inner.eval(env, ctx),

            Expr::Monad { verb, right } => {
                let w = right.eval(env, ctx)?;
                tracing::debug!(
                    verb = verb.name(Valence::Monadic),
                    right = %type_name(&w),
                    "apply monad"
                );
                monadic::apply(*verb, &w)
            }

            // The right operand is evaluated first.
            Expr::Dyad { verb, left, right } => {
                let w = right.eval(env, ctx)?;
                let a = left.eval(env, ctx)?;
                tracing::debug!(
                    verb = verb.name(Valence::Dyadic),
                    left = %type_name(&a),
                    right = %type_name(&w),
                    "apply dyad"
                );
                dyadic::apply(*verb, &a, &w)
            }

            Expr::Assign { name, value } => assign::eval_assign(*name, value, env, ctx),
        }
    }
}

/// Evaluate an expression (convenience wrapper).
pub fn eval_expr(
    expr: &Expr,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Arc<Value>, EvalError> {
    expr.eval(env, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn eval_in(src: &str, env: &mut Environment) -> Result<Arc<Value>, EvalError> {
        parse(src).unwrap().eval(env, &EvalContext::default())
    }

    #[test]
    fn test_eval_noun() {
        let mut env = Environment::new();
        assert_eq!(*eval_in("4", &mut env).unwrap(), Value::scalar(4));
    }

    #[test]
    fn test_eval_var_is_shared() {
        let mut env = Environment::new();
        eval_in("v=~4", &mut env).unwrap();
        let first = eval_in("v", &mut env).unwrap();
        let second = eval_in("+v", &mut env).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, env.get('v').unwrap()));
    }

    #[test]
    fn test_eval_undefined_var() {
        let mut env = Environment::new();
        assert_eq!(
            eval_in("q", &mut env),
            Err(EvalError::UndefinedVariable { name: 'q' })
        );
    }

    #[test]
    fn test_eval_right_before_left() {
        // The right operand assigns `x` before the left operand reads it.
        let mut env = Environment::new();
        let v = eval_in("x,(x=3)", &mut env).unwrap();
        assert_eq!(*v, Value::vector(vec![3, 3]));
    }

    #[test]
    fn test_eval_right_associative_plus() {
        let mut env = Environment::new();
        assert_eq!(*eval_in("3+4+5", &mut env).unwrap(), Value::scalar(12));
    }
}
