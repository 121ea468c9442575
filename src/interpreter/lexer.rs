use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// String literal tokens, such as `"tree"`. The payload excludes the
    /// quotes.
    #[token("\"", lex_string)]
    Str(String),
    /// Character literal tokens, such as `'a'` or `'\n'`.
    #[regex(r"'([^'\\\n]|\\[0ntr\\'])'", parse_char)]
    Char(char),
    /// `func`
    #[token("func")]
    Func,
    /// `return`
    #[token("return")]
    Return,
    /// `while`
    #[token("while")]
    While,
    /// `if`
    #[token("if")]
    If,
    /// `elif`
    #[token("elif")]
    Elif,
    /// `else`
    #[token("else")]
    Else,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[token("//", skip_line_comment)]
    Comment,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `[]`
    #[token("[]")]
    ArrayCreate,
    /// `_`
    #[token("_")]
    Underscore,
    /// `,`
    #[token(",")]
    Comma,
    /// `$`
    #[token("$")]
    Dollar,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `->`
    #[token("->")]
    Arrow,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `||`
    #[token("||")]
    DoublePipe,

    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Splits `source` into tokens paired with the line each token ends on.
///
/// # Parameters
/// - `source`: Forest source text.
///
/// # Returns
/// The token stream consumed by the parser.
///
/// # Errors
/// - `UnterminatedString` if a `"` is never closed.
/// - `LiteralTooLarge` if an integer literal does not fit `i64`.
/// - `UnexpectedCharacter` for any text that starts no token.
///
/// # Example
/// ```
/// use forest::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("+(1,\n2);").unwrap();
/// assert_eq!(tokens.first(), Some(&(Token::Plus, 1)));
/// assert_eq!(tokens.last(), Some(&(Token::Semicolon, 2)));
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(tok) => tokens.push((tok, line)),
            Err(()) => {
                let slice = lexer.slice();
                return Err(if slice.starts_with('"') {
                               ParseError::UnterminatedString { line }
                           } else if slice.starts_with(|c: char| c.is_ascii_digit()) {
                               ParseError::LiteralTooLarge { line }
                           } else {
                               ParseError::UnexpectedCharacter { text: slice.to_string(),
                                                                 line }
                           });
            },
        }
    }

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit into an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
/// Decodes a character literal, resolving the supported escapes.
fn parse_char(lex: &logos::Lexer<Token>) -> Option<char> {
    let slice = lex.slice();
    let mut chars = slice.get(1..slice.len() - 1)?.chars();

    match (chars.next()?, chars.next()) {
        ('\\', Some(escaped)) => match escaped {
            '0' => Some('\0'),
            'n' => Some('\n'),
            't' => Some('\t'),
            'r' => Some('\r'),
            '\\' => Some('\\'),
            '\'' => Some('\''),
            _ => None,
        },
        (c, None) => Some(c),
        _ => None,
    }
}
/// Consumes a string literal after its opening quote.
///
/// Strings have no escapes and may span lines; every newline inside advances
/// the line counter.
///
/// # Returns
/// - `Some(String)`: The literal's contents without quotes.
/// - `None`: If the closing quote is missing.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Option<String> {
    let remainder = lex.remainder();
    let end = remainder.find('"')?;
    let contents = remainder[..end].to_string();

    lex.extras.line += contents.matches('\n').count();
    lex.bump(end + 1);

    Some(contents)
}
/// Skips a `//` comment up to, but not including, the end of the line.
fn skip_line_comment(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    let remainder = lex.remainder();
    let len = remainder.find('\n').unwrap_or(remainder.len());
    lex.bump(len);

    logos::Skip
}
