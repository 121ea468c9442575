use std::iter::Peekable;

use crate::{
    ast::Identifier,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by function argument lists, operand lists and
/// parameter lists. It repeatedly calls `parse_item` to parse one element,
/// expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            other => return Err(unexpected(other, &format!("',' or {closing:?}"))),
        }
    }
    Ok(items)
}

/// Parses a plain identifier.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// The identifier together with its line.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the input
/// ends.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<Identifier>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), line)) => Ok(Identifier::new(name.as_str(), *line)),
        other => Err(unexpected(other, "identifier")),
    }
}

/// Consumes `expected`, returning the line it was found on.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        other => Err(unexpected(other, &format!("{expected:?}"))),
    }
}

/// Consumes a `;` if one follows. Statements ending in a block may be
/// terminated by one but do not need it.
pub(in crate::interpreter::parser) fn skip_semicolon<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Builds the error for a token (or the end of input) that does not fit.
pub(in crate::interpreter::parser) fn unexpected(found: Option<&(Token, usize)>,
                                                 expected: &str)
                                                 -> ParseError {
    match found {
        Some((tok, line)) => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                           found:    format!("{tok:?}"),
                                                           line:     *line, },
        None => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                   line:     0, },
    }
}
