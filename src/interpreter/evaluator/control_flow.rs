use std::slice;

use crate::{
    ast::{ElseBranch, Expr, IfStatement, OperatorStep, Statement, VariadicOperator},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator, Flow},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates an `if` statement and its `elif`/`else` chain.
    ///
    /// Guards are evaluated in the enclosing scope. The first branch whose
    /// guard holds runs in its own child scope; a `return` inside it
    /// propagates.
    ///
    /// # Parameters
    /// - `branch`: The `if` (or `elif`) to evaluate.
    /// - `env`: Enclosing scope.
    /// - `depth`: Number of enclosing function calls.
    pub(in crate::interpreter::evaluator) fn exec_if(&mut self,
                                                     branch: &IfStatement,
                                                     env: &Environment<'_>,
                                                     depth: usize)
                                                     -> EvalResult<Flow> {
        if self.check_condition(&branch.condition, env, depth, branch.line)? {
            return Ok(self.exec_scoped(&branch.then_block, env, depth));
        }

        match branch.alternative.as_deref() {
            Some(ElseBranch::Elif(elif)) => self.exec_if(elif, env, depth),
            Some(ElseBranch::Else { statements, .. }) => Ok(self.exec_scoped(statements, env, depth)),
            None => Ok(Flow::Normal(Vec::new())),
        }
    }

    /// Evaluates a `while` loop.
    ///
    /// The loop scope is opened once, before the first iteration, and shared
    /// by all iterations: a name defined in the body on one pass is visible on
    /// the next, and gone once the loop ends. The guard is evaluated in the
    /// enclosing scope, so it only observes state that lives there, such as
    /// array elements written from inside the body.
    ///
    /// # Parameters
    /// - `condition`: Loop guard.
    /// - `body`: Loop body.
    /// - `env`: Enclosing scope.
    /// - `depth`: Number of enclosing function calls.
    /// - `line`: Line of the `while` keyword.
    pub(in crate::interpreter::evaluator) fn exec_while(&mut self,
                                                        condition: &Expr,
                                                        body: &[Statement],
                                                        env: &Environment<'_>,
                                                        depth: usize,
                                                        line: usize)
                                                        -> EvalResult<Flow> {
        let mut scope = Environment::with_parent(env);
        let mut iterations = 0_u64;

        while self.check_condition(condition, env, depth, line)? {
            iterations += 1;
            if let Flow::Return(values) = self.exec_block(body, &mut scope, depth) {
                tracing::trace!(line, iterations, "loop left by return");
                return Ok(Flow::Return(values));
            }
        }

        tracing::trace!(line, iterations, "loop finished");
        Ok(Flow::Normal(Vec::new()))
    }

    /// Decides a guard by folding its values with `true` under `==`.
    ///
    /// This applies the same promotion as the equality operator: `1` is a
    /// true guard, `0.0` a false one, and a string is a type mismatch.
    ///
    /// # Errors
    /// - `MissingValue` if the guard produces no value.
    /// - Errors of the guard expression or of the comparison.
    pub(in crate::interpreter::evaluator) fn check_condition(&mut self,
                                                             condition: &Expr,
                                                             env: &Environment<'_>,
                                                             depth: usize,
                                                             line: usize)
                                                             -> EvalResult<bool> {
        let mut operands = self.eval_expression(condition, env, depth)?;
        if operands.is_empty() {
            return Err(RuntimeError::MissingValue { line });
        }
        operands.push(Value::Boolean(true));

        let equals = OperatorStep { op: VariadicOperator::Equal,
                                    arity: None,
                                    line };
        match Self::fold_chain(slice::from_ref(&equals), operands, line)? {
            Value::Boolean(holds) => Ok(holds),
            other => Err(RuntimeError::TypeMismatch { details: format!("guard evaluated to {}",
                                                                       other.kind_name()),
                                                      line }),
        }
    }
}
