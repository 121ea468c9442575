use std::iter::Peekable;

use crate::{
    ast::{Expr, OperatorStep, VariadicOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, unexpected},
        },
    },
    util::num::annotation_to_arity,
};

/// Parses a variadic operation: an operator chain followed by a
/// parenthesized operand list.
///
/// Each operator may carry an integer annotation `N` (apply `N` times, so
/// consume `N + 1` operands). Operators are chained with `$`; the last one
/// consumes whatever operands remain.
///
/// Grammar:
/// ```text
/// variadic       := operator_chain "(" (expression ("," expression)*)? ")"
/// operator_chain := variadic_op INTEGER? ("$" operator_chain)?
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first operator.
///
/// # Returns
/// An `Expr::Variadic` node.
///
/// # Example
/// ```
/// use forest::{
///     ast::{Expr, Statement, VariadicOperator},
///     parse,
/// };
///
/// let program = parse("+ 1 $ * (1, 2, 3);").unwrap();
/// let Statement::Expression { exprs, .. } = &program.statements[0] else { panic!() };
/// let Expr::Variadic { operators, operands, .. } = &exprs[0] else { panic!() };
///
/// assert_eq!(operators[0].op, VariadicOperator::Plus);
/// assert_eq!(operators[0].arity, Some(2));
/// assert_eq!(operators[1].arity, None);
/// assert_eq!(operands.len(), 3);
/// ```
pub fn parse_variadic<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, line)| *line);
    let operators = parse_operator_chain(tokens)?;

    expect_token(tokens, &Token::LParen)?;
    let operands = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;

    Ok(Expr::Variadic { operators,
                        operands,
                        line })
}

/// Parses `op N $ op N $ ...` up to, but not including, the operand list.
fn parse_operator_chain<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<OperatorStep>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut operators = Vec::new();

    loop {
        let next = tokens.next();
        let Some((op, line)) =
            next.and_then(|(tok, line)| variadic_operator(tok).map(|op| (op, *line)))
        else {
            return Err(unexpected(next, "operator"));
        };

        let arity = match tokens.peek() {
            Some((Token::Integer(count), count_line)) => {
                let arity = annotation_to_arity(*count).ok_or(ParseError::LiteralTooLarge { line:
                                                                                            *count_line })?;
                tokens.next();
                Some(arity)
            },
            _ => None,
        };

        operators.push(OperatorStep { op, arity, line });

        match tokens.peek() {
            Some((Token::Dollar, _)) => {
                tokens.next();
            },
            _ => break,
        }
    }

    Ok(operators)
}

/// Maps a token to the variadic operator it spells, if any.
#[must_use]
pub fn variadic_operator(token: &Token) -> Option<VariadicOperator> {
    let op = match token {
        Token::Plus => VariadicOperator::Plus,
        Token::Minus => VariadicOperator::Minus,
        Token::Star => VariadicOperator::Times,
        Token::Slash => VariadicOperator::Divide,
        Token::DoubleStar => VariadicOperator::Power,
        Token::Less => VariadicOperator::Less,
        Token::Greater => VariadicOperator::Greater,
        Token::LessEqual => VariadicOperator::LessEqual,
        Token::GreaterEqual => VariadicOperator::GreaterEqual,
        Token::EqualEqual => VariadicOperator::Equal,
        Token::BangEqual => VariadicOperator::NotEqual,
        Token::DoubleAmpersand => VariadicOperator::And,
        Token::DoublePipe => VariadicOperator::Or,
        Token::ArrayCreate => VariadicOperator::ArrayCreate,
        _ => return None,
    };
    Some(op)
}
