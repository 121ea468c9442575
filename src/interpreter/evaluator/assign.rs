use crate::{
    ast::{AssignTarget, Expr, Identifier},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            array::as_array,
            core::{EvalResult, Evaluator},
        },
        value::core::Value,
    },
    util::num::checked_index,
};

impl Evaluator<'_> {
    /// Evaluates `values -> targets`.
    ///
    /// The right-hand side is evaluated first. Its values are then assigned
    /// to the targets pairwise, left to right. A plain name is defined in the
    /// current scope, shadowing any outer binding. An element target writes
    /// into the array the name is bound to, wherever that binding lives.
    ///
    /// # Parameters
    /// - `values`: Right-hand expressions.
    /// - `targets`: Assignment targets.
    /// - `env`: Current scope.
    /// - `depth`: Number of enclosing function calls.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if the number of values and targets differ.
    /// - Errors of element assignment; targets before the failing one keep
    ///   their new values.
    pub(in crate::interpreter::evaluator) fn exec_assign(&mut self,
                                                         values: &[Expr],
                                                         targets: &[AssignTarget],
                                                         env: &mut Environment<'_>,
                                                         depth: usize,
                                                         line: usize)
                                                         -> EvalResult<()> {
        let values = self.eval_expression_list(values, env, depth)?;

        if values.len() != targets.len() {
            return Err(RuntimeError::ArgumentCountMismatch { expected: targets.len(),
                                                             found: values.len(),
                                                             line });
        }

        for (target, value) in targets.iter().zip(values) {
            match target {
                AssignTarget::Variable(name) => env.define(name.clone(), value),
                AssignTarget::Element { name,
                                        indices,
                                        line, } => {
                    self.assign_element(name, indices, value, env, depth, *line)?;
                },
            }
        }

        Ok(())
    }

    /// Replaces one element of the array bound to `name`.
    fn assign_element(&mut self,
                      name: &Identifier,
                      indices: &[Expr],
                      value: Value,
                      env: &Environment<'_>,
                      depth: usize,
                      line: usize)
                      -> EvalResult<()> {
        let Some(base) = env.get(&name.name).cloned() else {
            return Err(RuntimeError::ArrayNotInstantiated { name: name.name.clone(),
                                                            line });
        };

        let positions = self.eval_indices(indices, env, depth, line)?;
        let Some((&last, path)) = positions.split_last() else {
            return Err(RuntimeError::MissingValue { line });
        };

        let level = path.iter()
                        .try_fold(base, |current, &index| Self::element_at(&current, index, line))?;
        let mut elements = as_array(&level, line)?.borrow_mut();
        let length = elements.len();
        let index = checked_index(last, length).ok_or(RuntimeError::IndexOutOfBounds { length,
                                                                                       index: last,
                                                                                       line })?;

        elements[index] = value;
        Ok(())
    }
}
