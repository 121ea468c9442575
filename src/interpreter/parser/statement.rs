use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{AssignTarget, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            block::{parse_block, parse_if, parse_while},
            core::{ParseResult, parse_expression_list},
            unary::parse_indices,
            utils::{
                expect_token, parse_comma_separated, parse_identifier, skip_semicolon, unexpected,
            },
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - `return` with an optional expression list,
/// - a bare block,
/// - a `while` loop or an `if` chain,
/// - a function declaration,
/// - an expression list, optionally assigned with `->`.
///
/// The leading token decides which; anything not starting with a keyword or
/// `{` is an expression statement. Statements ending in a block may be
/// followed by a `;`, every other statement must be.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statement = match tokens.peek() {
        Some((Token::Return, _)) => return parse_return(tokens),
        Some((Token::LBrace, _)) => {
            let (statements, line) = parse_block(tokens)?;
            Statement::Block { statements, line }
        },
        Some((Token::While, _)) => parse_while(tokens)?,
        Some((Token::If, _)) => Statement::If(parse_if(tokens)?),
        Some((Token::Func, _)) => parse_function_declaration(tokens)?,
        Some(_) => return parse_expression_statement(tokens),
        None => return Err(unexpected(None, "statement")),
    };

    skip_semicolon(tokens);
    Ok(statement)
}

/// Parses `return expression_list? ;`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Return)?;

    let values = match tokens.peek() {
        Some((Token::Semicolon, _)) => Vec::new(),
        _ => parse_expression_list(tokens)?,
    };
    expect_token(tokens, &Token::Semicolon)?;

    Ok(Statement::Return { values, line })
}

/// Parses a function declaration.
///
/// Grammar: `func := "func" IDENT "(" (IDENT ("," IDENT)*)? ")" block`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `func`.
///
/// # Returns
/// A `Statement::FunctionDecl` whose body is shared by reference with every
/// binding of the function at runtime.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Func)?;
    let name = parse_identifier(tokens)?;

    expect_token(tokens, &Token::LParen)?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
    let (body, _) = parse_block(tokens)?;

    Ok(Statement::FunctionDecl { name,
                                 params: Rc::from(params),
                                 body: Rc::from(body),
                                 line })
}

/// Parses an expression statement or an assignment.
///
/// Grammar:
/// ```text
/// expression_statement := expression_list ("->" targets)? ";"
/// targets              := target ("_" target)*
/// target               := IDENT ("[" expression "]")*
/// ```
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, line)| *line);
    let exprs = parse_expression_list(tokens)?;

    let statement = if let Some((Token::Arrow, _)) = tokens.peek() {
        tokens.next();
        let targets = parse_targets(tokens)?;
        Statement::Assign { values: exprs,
                            targets,
                            line }
    } else {
        Statement::Expression { exprs, line }
    };

    expect_token(tokens, &Token::Semicolon)?;
    Ok(statement)
}

/// Parses the `_`-separated assignment targets after `->`.
fn parse_targets<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<AssignTarget>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut targets = vec![parse_target(tokens)?];

    while let Some((Token::Underscore, _)) = tokens.peek() {
        tokens.next();
        targets.push(parse_target(tokens)?);
    }

    Ok(targets)
}

fn parse_target<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AssignTarget>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens)?;
    let indices = parse_indices(tokens)?;

    if indices.is_empty() {
        Ok(AssignTarget::Variable(name))
    } else {
        let line = name.line;
        Ok(AssignTarget::Element { name,
                                   indices,
                                   line })
    }
}
