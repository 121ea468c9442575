use std::{
    borrow::Borrow,
    hash::{Hash, Hasher},
    rc::Rc,
};

/// Represents a literal value written directly in source code.
///
/// Array values never appear as literals; they are produced at runtime by the
/// `[]` operator.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal, such as `42`.
    Integer(i64),
    /// A 64-bit floating-point literal, such as `2.5`.
    Float(f64),
    /// A string literal, such as `"tree"`. The quotes are not part of the
    /// payload.
    String(String),
    /// A boolean literal value: `true` or `false`.
    Boolean(bool),
    /// A character literal, such as `'a'` or `'\0'`.
    Character(char),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<char> for LiteralValue {
    fn from(value: char) -> Self {
        Self::Character(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// A name occurring in source code.
///
/// Identifiers are both AST leaves and the keys of every
/// [`Environment`](crate::interpreter::environment::Environment). Equality and
/// hashing look at the name only, so two separately parsed occurrences of `x`
/// address the same binding. The line number and the attached parameter list
/// are carried along but never compared.
///
/// # Example
/// ```
/// use forest::ast::Identifier;
///
/// let declared = Identifier::new("square", 1);
/// let used = Identifier::new("square", 7);
/// assert_eq!(declared, used);
/// ```
#[derive(Debug, Clone)]
pub struct Identifier {
    /// The identifier text.
    pub name:   String,
    /// Line number in the source code.
    pub line:   usize,
    /// Formal parameters, present on the key a function is bound under.
    pub params: Option<Rc<[Self]>>,
}

impl Identifier {
    /// Creates an identifier without a parameter list.
    #[must_use]
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self { name: name.into(),
               line,
               params: None }
    }

    /// Returns a copy of this identifier carrying `params` as its parameter
    /// list. Used when binding a function under its name.
    #[must_use]
    pub fn with_params(&self, params: Rc<[Self]>) -> Self {
        Self { name:   self.name.clone(),
               line:   self.line,
               params: Some(params), }
    }

    /// The attached parameter list, empty when none was attached.
    #[must_use]
    pub fn params(&self) -> &[Self] {
        self.params.as_deref().unwrap_or_default()
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An abstract syntax tree node representing an expression.
///
/// Every expression evaluates to a sequence of zero or more values, which is
/// what lets comma lists and variable chains feed multi-assignment and
/// variadic operators uniformly.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A variable chain such as `a` or `a_b_c`, yielding one value per name.
    Variable {
        /// The chained names, in source order.
        names: Vec<Identifier>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `add(1, 2)`).
    FunctionCall {
        /// Name of the function being called.
        name:      Identifier,
        /// Argument expressions, evaluated in the caller's environment.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A chain of prefix operators applied to one operand list, such as
    /// `+ 2 $ * (1, 2, 3, 4)`.
    Variadic {
        /// The operator chain, applied left to right.
        operators: Vec<OperatorStep>,
        /// The operand expressions.
        operands:  Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A unary operation, `!(x)` or `=(x)`.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Indexing into an array, possibly through several dimensions
    /// (`grid[1][2]`).
    ArrayAccess {
        /// Expression producing the array.
        array:   Box<Self>,
        /// One index expression per dimension walked.
        indices: Vec<Self>,
        /// Line number in the source code.
        line:    usize,
    },
}

impl Expr {
    /// Returns the line number associated with this expression.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::Variadic { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::ArrayAccess { line, .. } => *line,
        }
    }
}

/// One operator of a variadic chain together with its arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorStep {
    /// The operator.
    pub op:    VariadicOperator,
    /// Number of operands consumed, when written explicitly. An annotation
    /// `N` in source (`+ 2`) applies the operator `N` times and is stored
    /// here as `N + 1`.
    pub arity: Option<usize>,
    /// Line number in the source code.
    pub line:  usize,
}

/// Operators usable in a variadic chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariadicOperator {
    /// `+`
    Plus,
    /// `-`, also negation when applied to a single operand.
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
    /// `**`
    Power,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `[]`, builds an array whose dimensions are the operands.
    ArrayCreate,
}

impl std::fmt::Display for VariadicOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Times => "*",
            Self::Divide => "/",
            Self::Power => "**",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&&",
            Self::Or => "||",
            Self::ArrayCreate => "[]",
        };
        write!(f, "{symbol}")
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical negation, `!`.
    Not,
    /// Identity, `=`.
    Identity,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
            Self::Identity => write!(f, "="),
        }
    }
}

/// The left-hand side of one assignment slot.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignTarget {
    /// A plain name, defined in the current scope.
    Variable(Identifier),
    /// An element of an existing array, such as `grid[1][2]`.
    Element {
        /// Name the array is bound under.
        name:    Identifier,
        /// One index expression per dimension walked.
        indices: Vec<Expr>,
        /// Line number in the source code.
        line:    usize,
    },
}

/// A statement in the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression list, such as `+(1, 2), "x";`.
    Expression {
        /// The expressions whose values the statement yields.
        exprs: Vec<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Assignment of values to targets, such as `1, 2 -> a_b;`.
    Assign {
        /// Right-hand expressions.
        values:  Vec<Expr>,
        /// Targets, assigned left to right.
        targets: Vec<AssignTarget>,
        /// Line number in the source code.
        line:    usize,
    },
    /// `return e1, e2;`
    Return {
        /// Returned expressions.
        values: Vec<Expr>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A function declaration, `func name(a, b) { ... }`.
    FunctionDecl {
        /// The function's name.
        name:   Identifier,
        /// Formal parameters.
        params: Rc<[Identifier]>,
        /// Body statements, shared with every binding of the function.
        body:   Rc<[Self]>,
        /// Line number in the source code.
        line:   usize,
    },
    /// An `if` statement with its optional `elif`/`else` chain.
    If(IfStatement),
    /// `while (guard) { ... }`
    While {
        /// Loop guard.
        condition: Expr,
        /// Loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A bare `{ ... }` block.
    Block {
        /// Block statements.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
}

impl Statement {
    /// Returns the line number associated with this statement.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Expression { line, .. }
            | Self::Assign { line, .. }
            | Self::Return { line, .. }
            | Self::FunctionDecl { line, .. }
            | Self::While { line, .. }
            | Self::Block { line, .. }
            | Self::If(IfStatement { line, .. }) => *line,
        }
    }
}

/// An `if` or `elif` branch.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    /// Branch guard.
    pub condition:   Expr,
    /// Statements run when the guard holds.
    pub then_block:  Vec<Statement>,
    /// The `elif` or `else` taken when the guard fails.
    pub alternative: Option<Box<ElseBranch>>,
    /// Line number in the source code.
    pub line:        usize,
}

/// What follows an `if` or `elif` block.
#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    /// `elif (guard) { ... }`
    Elif(IfStatement),
    /// `else { ... }`
    Else {
        /// Statements of the `else` block.
        statements: Vec<Statement>,
        /// Line number in the source code.
        line:       usize,
    },
}

/// A whole parsed source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}
