use std::rc::Rc;

use crate::{
    ast::{Expr, Identifier, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, Evaluator, Flow},
            utils::is_reserved_identifier,
        },
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Binds a function declaration in `env`.
    ///
    /// The body becomes an ordinary value bound under the function's name;
    /// the parameter list is attached to the key it is bound under.
    /// Redeclaring a name replaces both.
    ///
    /// # Errors
    /// `ReservedName` if the name is `print`. Nothing is bound in that case.
    pub(in crate::interpreter::evaluator) fn declare_function(env: &mut Environment<'_>,
                                                              name: &Identifier,
                                                              params: &Rc<[Identifier]>,
                                                              body: &Rc<[Statement]>,
                                                              line: usize)
                                                              -> EvalResult<()> {
        if is_reserved_identifier(&name.name) {
            return Err(RuntimeError::ReservedName { name: name.name.clone(),
                                                    line });
        }

        env.define(name.with_params(Rc::clone(params)),
                   Value::Function(Rc::clone(body)));
        Ok(())
    }

    /// Evaluates a function call.
    ///
    /// `print` is dispatched to the built-in without consulting any scope.
    /// Any other name must be bound to a function. Arguments are evaluated in
    /// the caller's scope, and the body runs in a new scope whose parent is
    /// the caller's scope, so the callee sees the caller's local names as
    /// well as its own parameters.
    ///
    /// # Parameters
    /// - `name`: The called name.
    /// - `arguments`: Argument expressions.
    /// - `env`: The caller's scope.
    /// - `depth`: Number of enclosing function calls at the call site.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The values of the `return` that ended the call, or no values if the
    /// body ran to its end.
    ///
    /// # Errors
    /// - `UndeclaredFunction` if the name is unbound.
    /// - `NotAFunction` if it is bound to something else.
    /// - `ArityMismatch` if the argument count differs from the parameter
    ///   count.
    #[tracing::instrument(level = "debug", skip_all, fields(function = %name.name, depth = depth))]
    pub(in crate::interpreter::evaluator) fn eval_function_call(&mut self,
                                                                name: &Identifier,
                                                                arguments: &[Expr],
                                                                env: &Environment<'_>,
                                                                depth: usize,
                                                                line: usize)
                                                                -> EvalResult<Vec<Value>> {
        if is_reserved_identifier(&name.name) {
            self.eval_print(arguments, env, depth, line)?;
            return Ok(Vec::new());
        }

        let body = match env.get(&name.name) {
            Some(Value::Function(body)) => Rc::clone(body),
            Some(_) => {
                return Err(RuntimeError::NotAFunction { name: name.name.clone(),
                                                        line });
            },
            None => {
                return Err(RuntimeError::UndeclaredFunction { name: name.name.clone(),
                                                              line });
            },
        };
        let params = env.resolve_key(&name.name)
                        .map_or(&[][..], Identifier::params);

        let args = self.eval_expression_list(arguments, env, depth)?;
        if args.len() != params.len() {
            return Err(RuntimeError::ArityMismatch { name: name.name.clone(),
                                                     expected: params.len(),
                                                     found: args.len(),
                                                     line });
        }

        let mut scope = Environment::with_parent(env);
        for (param, arg) in params.iter().zip(args) {
            scope.define(param.clone(), arg);
        }

        match self.exec_block(&body, &mut scope, depth + 1) {
            Flow::Return(values) => Ok(values),
            Flow::Normal(_) => Ok(Vec::new()),
        }
    }
}
