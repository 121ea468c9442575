#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer met a character that starts no token.
    UnexpectedCharacter {
        /// The offending source text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was still open at the end of input.
    UnterminatedString {
        /// The source line the string started on.
        line: usize,
    },
    /// A numeric literal does not fit its type.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found a token the grammar does not allow at this point.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// The last line of the input.
        line:     usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { text, line } => {
                write!(f, "Error on line {line}: Unexpected character: {text}.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string literal.")
            },
            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => write!(f,
                                                      "Error on line {line}: Expected {expected}, found {found}."),
            Self::UnexpectedEndOfInput { expected, line } => write!(f,
                                                                    "Error on line {line}: Unexpected end of input, expected {expected}."),
        }
    }
}

impl std::error::Error for ParseError {}
