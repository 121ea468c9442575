use std::iter::Peekable;

use crate::{
    ast::{Expr, Identifier, LiteralValue, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier, unexpected},
        },
    },
};

/// Parses a unary operation, `!(expression)` or `=(expression)`.
///
/// Arithmetic negation is not a unary operator; it is the single-operand
/// form of the variadic `-`.
///
/// Grammar: `unary := ("!" | "=") "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the operator.
///
/// # Returns
/// An `Expr::UnaryOp` node.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (op, line) = match tokens.next() {
        Some((Token::Bang, line)) => (UnaryOperator::Not, *line),
        Some((Token::Equals, line)) => (UnaryOperator::Identity, *line),
        other => return Err(unexpected(other, "'!' or '='")),
    };

    expect_token(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen)?;

    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line })
}

/// Parses a primary expression.
///
/// Primary expressions are:
/// - literals (integers, floats, booleans, strings and characters),
/// - function calls, `name(arguments)`,
/// - variable chains, `a` or `a_b_c`, optionally indexed as in `grid[1][2]`.
///
/// Grammar:
/// ```text
/// primary  := literal
///           | IDENT "(" (expression ("," expression)*)? ")"
///           | variable ("[" expression "]")*
/// variable := IDENT ("_" IDENT)*
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the primary.
///
/// # Returns
/// The parsed expression node.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let next = tokens.next();
    let (value, line) = match next {
        Some((Token::Integer(n), line)) => (LiteralValue::Integer(*n), *line),
        Some((Token::Float(x), line)) => (LiteralValue::Float(*x), *line),
        Some((Token::Bool(b), line)) => (LiteralValue::Boolean(*b), *line),
        Some((Token::Str(s), line)) => (LiteralValue::String(s.clone()), *line),
        Some((Token::Char(c), line)) => (LiteralValue::Character(*c), *line),
        Some((Token::Identifier(name), line)) => {
            let name = Identifier::new(name.as_str(), *line);
            return parse_name_expression(tokens, name);
        },
        other => return Err(unexpected(other, "expression")),
    };

    Ok(Expr::Literal { value, line })
}

/// Parses what follows an identifier: a call's argument list, further links
/// of a variable chain, and index brackets.
fn parse_name_expression<'a, I>(tokens: &mut Peekable<I>, name: Identifier) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = name.line;

    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        return Ok(Expr::FunctionCall { name,
                                       arguments,
                                       line });
    }

    let mut names = vec![name];
    while let Some((Token::Underscore, _)) = tokens.peek() {
        tokens.next();
        names.push(parse_identifier(tokens)?);
    }

    let variable = Expr::Variable { names, line };
    let indices = parse_indices(tokens)?;

    if indices.is_empty() {
        Ok(variable)
    } else {
        Ok(Expr::ArrayAccess { array: Box::new(variable),
                               indices,
                               line })
    }
}

/// Parses a possibly empty run of `[expression]` index brackets.
///
/// Grammar: `indices := ("[" expression "]")*`
pub(in crate::interpreter::parser) fn parse_indices<'a, I>(tokens: &mut Peekable<I>)
                                                           -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut indices = Vec::new();

    while let Some((Token::LBracket, _)) = tokens.peek() {
        tokens.next();
        indices.push(parse_expression(tokens)?);
        expect_token(tokens, &Token::RBracket)?;
    }

    Ok(indices)
}
