use std::io::Write;

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement, statement list or loop finished.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Evaluation ran to completion, producing these values.
    Normal(Vec<Value>),
    /// A `return` executed with these values; enclosing statement lists stop
    /// until the function call boundary is reached.
    Return(Vec<Value>),
}

/// The tree-walking interpreter.
///
/// One `Evaluator` is one evaluation session: it owns the output sink `print`
/// writes to and the diagnostics collected from failed statements. Scopes are
/// passed in explicitly, and function nesting depth travels down the call
/// stack by value, so nothing outlives the session.
///
/// ## Usage
///
/// ```
/// use forest::{
///     interpreter::{environment::Environment, evaluator::core::Evaluator, value::core::Value},
///     parse,
/// };
///
/// let program = parse("print(\"hi\"); +(1, 2);").unwrap();
/// let mut output = Vec::new();
/// let mut evaluator = Evaluator::new(&mut output);
///
/// let values = evaluator.eval_program(&program, &mut Environment::new());
/// assert_eq!(values, vec![Value::Integer(3)]);
/// assert!(evaluator.diagnostics().is_empty());
/// assert_eq!(output, b"hi\n");
/// ```
pub struct Evaluator<'out> {
    /// Where `print` writes.
    pub(in crate::interpreter::evaluator) output: &'out mut dyn Write,
    diagnostics: Vec<RuntimeError>,
}

impl<'out> Evaluator<'out> {
    /// Creates an evaluator whose `print` output goes to `output`.
    #[must_use]
    pub fn new(output: &'out mut dyn Write) -> Self {
        Self { output,
               diagnostics: Vec::new() }
    }

    /// Errors reported so far, in the order they occurred.
    #[must_use]
    pub fn diagnostics(&self) -> &[RuntimeError] {
        &self.diagnostics
    }

    /// Removes and returns the errors reported so far.
    pub fn take_diagnostics(&mut self) -> Vec<RuntimeError> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Evaluates every top-level statement of `program` in `env`.
    ///
    /// # Returns
    /// The values of all top-level statements, concatenated in order. A
    /// statement that fails contributes nothing; its error is recorded in
    /// [`diagnostics`](Self::diagnostics) and evaluation continues.
    pub fn eval_program(&mut self, program: &Program, env: &mut Environment<'_>) -> Vec<Value> {
        let mut results = Vec::new();

        for statement in &program.statements {
            match self.exec_statement(statement, env, 0) {
                Ok(Flow::Normal(values) | Flow::Return(values)) => results.extend(values),
                Err(e) => self.report(e),
            }
        }

        results
    }

    /// Runs a statement list in `env`.
    ///
    /// Stops at the first statement producing [`Flow::Return`] and passes it
    /// on. Failing statements are reported and skipped. Values of statements
    /// that complete normally are discarded, so a list that runs to its end
    /// yields `Flow::Normal` with no values.
    ///
    /// # Parameters
    /// - `statements`: The list to run.
    /// - `env`: Scope the statements define into.
    /// - `depth`: Number of enclosing function calls.
    pub fn exec_block(&mut self,
                      statements: &[Statement],
                      env: &mut Environment<'_>,
                      depth: usize)
                      -> Flow {
        for statement in statements {
            match self.exec_statement(statement, env, depth) {
                Ok(Flow::Return(values)) => {
                    tracing::trace!(line = statement.line_number(), depth, "return leaves block");
                    return Flow::Return(values);
                },
                Ok(Flow::Normal(_)) => {},
                Err(e) => self.report(e),
            }
        }

        Flow::Normal(Vec::new())
    }

    /// Evaluates a single statement.
    ///
    /// Expression statements yield their values; assignments, declarations
    /// and control flow yield none unless a `return` is propagating.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    /// - `env`: Current scope.
    /// - `depth`: Number of enclosing function calls; `return` requires at
    ///   least one.
    pub fn exec_statement(&mut self,
                          statement: &Statement,
                          env: &mut Environment<'_>,
                          depth: usize)
                          -> EvalResult<Flow> {
        match statement {
            Statement::Expression { exprs, .. } => {
                Ok(Flow::Normal(self.eval_expression_list(exprs, env, depth)?))
            },
            Statement::Assign { values,
                                targets,
                                line, } => {
                self.exec_assign(values, targets, env, depth, *line)?;
                Ok(Flow::Normal(Vec::new()))
            },
            Statement::Return { values, line } => {
                if depth == 0 {
                    return Err(RuntimeError::ReturnOutsideFunction { line: *line });
                }
                Ok(Flow::Return(self.eval_expression_list(values, env, depth)?))
            },
            Statement::FunctionDecl { name,
                                      params,
                                      body,
                                      line, } => {
                Self::declare_function(env, name, params, body, *line)?;
                Ok(Flow::Normal(Vec::new()))
            },
            Statement::If(branch) => self.exec_if(branch, env, depth),
            Statement::While { condition,
                               body,
                               line, } => self.exec_while(condition, body, env, depth, *line),
            Statement::Block { statements, .. } => Ok(self.exec_scoped(statements, env, depth)),
        }
    }

    /// Evaluates an expression and returns the values it produces.
    ///
    /// Literals, unary operations, variadic operations and array accesses
    /// produce exactly one value; variable chains produce one value per name;
    /// function calls produce whatever the callee returns.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Current scope. Expressions never define bindings.
    /// - `depth`: Number of enclosing function calls.
    pub fn eval_expression(&mut self,
                           expr: &Expr,
                           env: &Environment<'_>,
                           depth: usize)
                           -> EvalResult<Vec<Value>> {
        match expr {
            Expr::Literal { value, .. } => Ok(vec![Value::from(value)]),
            Expr::Variable { names, .. } => {
                names.iter().map(|name| env.lookup(name).cloned()).collect()
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => {
                self.eval_function_call(name, arguments, env, depth, *line)
            },
            Expr::Variadic { operators,
                             operands,
                             line, } => {
                let operands = self.eval_expression_list(operands, env, depth)?;
                Ok(vec![Self::fold_chain(operators, operands, *line)?])
            },
            Expr::UnaryOp { op, expr, line } => {
                Ok(vec![self.eval_unary_op(*op, expr, env, depth, *line)?])
            },
            Expr::ArrayAccess { array,
                                indices,
                                line, } => {
                Ok(vec![self.eval_array_access(array, indices, env, depth, *line)?])
            },
        }
    }

    /// Evaluates expressions in order and concatenates their values.
    pub fn eval_expression_list(&mut self,
                                exprs: &[Expr],
                                env: &Environment<'_>,
                                depth: usize)
                                -> EvalResult<Vec<Value>> {
        let mut values = Vec::with_capacity(exprs.len());
        for expr in exprs {
            values.extend(self.eval_expression(expr, env, depth)?);
        }
        Ok(values)
    }

    /// Runs `statements` in a fresh child scope of `env`.
    pub(in crate::interpreter::evaluator) fn exec_scoped(&mut self,
                                                         statements: &[Statement],
                                                         env: &Environment<'_>,
                                                         depth: usize)
                                                         -> Flow {
        tracing::trace!(depth, statements = statements.len(), "opened block scope");
        let mut scope = Environment::with_parent(env);
        self.exec_block(statements, &mut scope, depth)
    }

    /// Records a failed statement's error and moves on.
    fn report(&mut self, error: RuntimeError) {
        tracing::debug!(line = error.line_number(), %error, "statement failed");
        self.diagnostics.push(error);
    }
}
