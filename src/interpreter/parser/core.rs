use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            statement::parse_statement,
            unary::{parse_primary, parse_unary},
            variadic::{parse_variadic, variadic_operator},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole token stream into a [`Program`].
///
/// Grammar: `program := statement* EOF`
///
/// # Parameters
/// - `tokens`: The `(Token, line)` pairs produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The program's top-level statements in source order.
///
/// # Errors
/// The first grammar violation encountered. Errors raised at the end of input
/// report the line of the last token.
///
/// # Example
/// ```
/// use forest::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("1, 2 -> a_b;\nprint(a);").unwrap();
/// let program = parse_program(&tokens).unwrap();
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        match parse_statement(&mut iter) {
            Ok(statement) => statements.push(statement),
            Err(ParseError::UnexpectedEndOfInput { expected, .. }) => {
                return Err(ParseError::UnexpectedEndOfInput { expected,
                                                              line: last_line });
            },
            Err(e) => return Err(e),
        }
    }

    Ok(Program { statements })
}

/// Parses a single expression.
///
/// The first token decides the form: a variadic operator starts an operator
/// chain, `!` or `=` a unary operation, anything else a primary (literal,
/// variable chain, function call or array access).
///
/// Grammar:
/// ```text
/// expression := operator_chain "(" expression_list? ")"
///             | ("!" | "=") "(" expression ")"
///             | primary
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((tok, _)) if variadic_operator(tok).is_some() => parse_variadic(tokens),
        Some((Token::Bang | Token::Equals, _)) => parse_unary(tokens),
        _ => parse_primary(tokens),
    }
}

/// Parses one or more comma-separated expressions that are not enclosed by
/// delimiters, as found in expression statements, assignments and `return`.
///
/// Grammar: `expression_list := expression ("," expression)*`
pub fn parse_expression_list<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut exprs = vec![parse_expression(tokens)?];

    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        exprs.push(parse_expression(tokens)?);
    }

    Ok(exprs)
}
