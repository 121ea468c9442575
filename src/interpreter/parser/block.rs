use std::iter::Peekable;

use crate::{
    ast::{ElseBranch, Expr, IfStatement, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            statement::parse_statement,
            utils::{expect_token, unexpected},
        },
    },
};

/// Parses a statement list delimited by braces.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The block's statements and the line of the opening brace.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(Vec<Statement>, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::LBrace)?;
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(unexpected(None, "'}'")),
        }
    }

    Ok((statements, line))
}

/// Parses a parenthesized guard, `"(" expression ")"`.
fn parse_guard<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen)?;
    Ok(condition)
}

/// Parses a `while` loop.
///
/// Grammar: `while := "while" "(" expression ")" block`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `while` keyword.
///
/// # Returns
/// A `Statement::While` node.
pub fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::While)?;
    let condition = parse_guard(tokens)?;
    let (body, _) = parse_block(tokens)?;

    Ok(Statement::While { condition,
                          body,
                          line })
}

/// Parses an `if` statement with its optional `elif`/`else` chain.
///
/// Syntax:
/// ```text
///     if (<condition>) { ... }
///     elif (<condition>) { ... }
///     else { ... }
/// ```
/// The leading keyword may be either `if` or `elif`, which is how `elif`
/// branches are parsed recursively.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `if` or `elif` keyword.
///
/// # Returns
/// The parsed branch with its alternative attached.
///
/// # Errors
/// - `UnexpectedToken` if the keyword, parentheses or braces are missing.
/// - Propagates any errors from the guard or the block.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<IfStatement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::If | Token::Elif, line)) => *line,
        other => return Err(unexpected(other, "'if' or 'elif'")),
    };

    let condition = parse_guard(tokens)?;
    let (then_block, _) = parse_block(tokens)?;

    let alternative = match tokens.peek() {
        Some((Token::Elif, _)) => Some(Box::new(ElseBranch::Elif(parse_if(tokens)?))),
        Some((Token::Else, _)) => {
            tokens.next();
            let (statements, line) = parse_block(tokens)?;
            Some(Box::new(ElseBranch::Else { statements, line }))
        },
        _ => None,
    };

    Ok(IfStatement { condition,
                     then_block,
                     alternative,
                     line })
}
