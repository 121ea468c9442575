use std::rc::Rc;

use forest::{
    ast::{Expr, Identifier, LiteralValue, OperatorStep, Program, Statement, VariadicOperator},
    error::{ParseError, RuntimeError},
    execute,
    interpreter::{
        environment::Environment,
        evaluator::core::Evaluator,
        lexer::{Token, tokenize},
        value::core::Value,
    },
    parse,
};
use pretty_assertions::assert_eq;

fn literal(value: impl Into<LiteralValue>) -> Expr {
    Expr::Literal { value: value.into(),
                    line:  1, }
}

#[test]
fn lexer_tracks_lines_and_skips_comments() {
    let tokens = tokenize("x -> y; // trailing\n  \"a b\", 'c'\n2.5").unwrap();

    assert_eq!(tokens,
               vec![(Token::Identifier("x".to_string()), 1),
                    (Token::Arrow, 1),
                    (Token::Identifier("y".to_string()), 1),
                    (Token::Semicolon, 1),
                    (Token::Str("a b".to_string()), 2),
                    (Token::Comma, 2),
                    (Token::Char('c'), 2),
                    (Token::Float(2.5), 3)]);
}

#[test]
fn lexer_prefers_longest_operator() {
    let tokens: Vec<Token> = tokenize("** != == <= >= && || [] -> $ _")
        .unwrap()
        .into_iter()
        .map(|(tok, _)| tok)
        .collect();

    assert_eq!(tokens,
               vec![Token::DoubleStar,
                    Token::BangEqual,
                    Token::EqualEqual,
                    Token::LessEqual,
                    Token::GreaterEqual,
                    Token::DoubleAmpersand,
                    Token::DoublePipe,
                    Token::ArrayCreate,
                    Token::Arrow,
                    Token::Dollar,
                    Token::Underscore]);
}

#[test]
fn lexer_keywords_and_escapes() {
    let tokens: Vec<Token> = tokenize("func while iffy true '\\n' \"tab\\t\"")
        .unwrap()
        .into_iter()
        .map(|(tok, _)| tok)
        .collect();

    assert_eq!(tokens,
               vec![Token::Func,
                    Token::While,
                    Token::Identifier("iffy".to_string()),
                    Token::Bool(true),
                    Token::Char('\n'),
                    Token::Str("tab\\t".to_string())]);
}

#[test]
fn lexer_errors_carry_lines() {
    assert_eq!(tokenize("1;\n\"open").unwrap_err(),
               ParseError::UnterminatedString { line: 2 });
    assert!(matches!(tokenize("1;\n\n@").unwrap_err(),
                     ParseError::UnexpectedCharacter { line: 3, .. }));
}

#[test]
fn environment_lookups_walk_outward() {
    let mut global = Environment::new();
    global.define(Identifier::new("x", 1), Value::Integer(1));

    let mut local = Environment::with_parent(&global);
    local.define(Identifier::new("x", 2), Value::Integer(2));

    assert_eq!(local.get("x"), Some(&Value::Integer(2)));
    assert_eq!(global.get("x"), Some(&Value::Integer(1)));
    assert_eq!(local.lookup(&Identifier::new("missing", 7)).unwrap_err(),
               RuntimeError::UndeclaredVariable { name: "missing".to_string(),
                                                  line: 7, });
}

#[test]
fn redefinition_replaces_key_and_value() {
    let params: Rc<[Identifier]> = Rc::from(vec![Identifier::new("a", 1)]);
    let mut env = Environment::new();

    env.define(Identifier::new("f", 1).with_params(params), Value::Integer(0));
    assert_eq!(env.resolve_key("f").map(|key| key.params().len()), Some(1));

    env.define(Identifier::new("f", 2), Value::Integer(1));
    let key = env.resolve_key("f").unwrap();
    assert!(key.params().is_empty());
    assert_eq!(key.line, 2);
    assert_eq!(env.get("f"), Some(&Value::Integer(1)));
}

#[test]
fn identifiers_compare_by_name() {
    let plain = Identifier::new("f", 1);
    let with_params = Identifier::new("f", 9).with_params(Rc::from(vec![plain.clone()]));

    assert_eq!(plain, with_params);
    assert_ne!(plain, Identifier::new("g", 1));
}

#[test]
fn values_render_as_program_output() {
    assert_eq!(Value::Float(3.0).to_string(), "3.0");
    assert_eq!(Value::Float(-0.25).to_string(), "-0.25");
    assert_eq!(Value::from('x').to_string(), "x");
    assert_eq!(Value::from(false).to_string(), "false");

    let grid = Evaluator::create_array(&[Value::Integer(2), Value::Integer(1)], 1).unwrap();
    assert_eq!(grid.to_string(), "[[0], [0]]");
}

#[test]
fn arrays_compare_by_contents_and_share_storage() {
    let a = Evaluator::create_array(&[Value::Integer(2)], 1).unwrap();
    let b = Evaluator::create_array(&[Value::Integer(2)], 1).unwrap();
    assert_eq!(a, b);

    let alias = a.clone();
    if let Value::Array(cells) = &alias {
        cells.borrow_mut()[0] = Value::Integer(5);
    }
    assert_eq!(a.to_string(), "[5, 0]");
    assert_ne!(a, b);
}

#[test]
fn chain_stops_at_array_creation() {
    let chain = [OperatorStep { op:    VariadicOperator::ArrayCreate,
                                arity: None,
                                line:  1, },
                 OperatorStep { op:    VariadicOperator::Plus,
                                arity: None,
                                line:  1, }];

    let grid = Evaluator::fold_chain(&chain, vec![Value::Integer(3)], 1).unwrap();
    assert_eq!(grid.to_string(), "[0, 0, 0]");
}

#[test]
fn hand_built_program_runs() {
    let square = Identifier::new("square", 1);
    let n = Identifier::new("n", 1);
    let body: Rc<[Statement]> =
        Rc::from(vec![Statement::Return { values: vec![Expr::Variadic {
                                                          operators: vec![OperatorStep {
                                                              op:    VariadicOperator::Times,
                                                              arity: None,
                                                              line:  1,
                                                          }],
                                                          operands:  vec![Expr::Variable {
                                                                              names: vec![n.clone()],
                                                                              line:  1,
                                                                          },
                                                                          Expr::Variable {
                                                                              names: vec![n.clone()],
                                                                              line:  1,
                                                                          }],
                                                          line:      1,
                                                      }],
                                          line:   1, }]);

    let program =
        Program { statements: vec![Statement::FunctionDecl { name: square.clone(),
                                                             params: Rc::from(vec![n]),
                                                             body,
                                                             line: 1 },
                                   Statement::Expression { exprs: vec![Expr::FunctionCall {
                                                               name:      square,
                                                               arguments: vec![literal(7_i64)],
                                                               line:      2,
                                                           }],
                                                           line:  2, }], };

    let mut output = Vec::new();
    let execution = execute(&program, &mut output);

    assert_eq!(execution.values, vec![Value::Integer(49)]);
    assert!(execution.diagnostics.is_empty());
    assert!(output.is_empty());
}

#[test]
fn diagnostics_render_with_line_numbers() {
    let error = RuntimeError::IndexOutOfBounds { length: 3,
                                                 index:  5,
                                                 line:   4, };
    assert!(error.to_string().starts_with("Error on line 4:"));
    assert_eq!(error.line_number(), 4);
}

#[test]
fn parsed_nodes_keep_their_lines() {
    let program = parse("// header\n\n+(1,\n  2);").unwrap();
    let statement = &program.statements[0];
    assert_eq!(statement.line_number(), 3);

    let Statement::Expression { exprs, .. } = statement else {
        panic!("expected an expression statement, got {statement:?}");
    };
    assert_eq!(exprs[0].line_number(), 3);
}
