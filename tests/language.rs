use std::fs;

use forest::{
    error::{ParseError, RuntimeError},
    interpreter::{evaluator::array::MAX_ARRAY_SLOTS, value::core::Value},
    run,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn demo_scripts_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "forest"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        let outcome = assert_success(&source);
        let mut stdout = outcome.output;
        for value in &outcome.values {
            stdout.push_str(&format!("{value}\n"));
        }

        assert_eq!(stdout, expected, "demo {path:?} printed unexpected output");
        count += 1;
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

struct Outcome {
    output:      String,
    values:      Vec<Value>,
    diagnostics: Vec<RuntimeError>,
}

fn run_script(src: &str) -> Outcome {
    let mut output = Vec::new();
    let execution = run(src, &mut output).unwrap_or_else(|e| panic!("Script failed to parse: {e}"));

    Outcome { output:      String::from_utf8(output).expect("print writes UTF-8"),
              values:      execution.values,
              diagnostics: execution.diagnostics, }
}

fn assert_success(src: &str) -> Outcome {
    let outcome = run_script(src);
    assert!(outcome.diagnostics.is_empty(),
            "Script reported errors: {:?}",
            outcome.diagnostics);
    outcome
}

fn assert_values(src: &str, expected: &[Value]) {
    assert_eq!(assert_success(src).values, expected);
}

fn assert_failure(src: &str) -> Vec<RuntimeError> {
    let outcome = run_script(src);
    assert!(!outcome.diagnostics.is_empty(),
            "Script succeeded but was expected to fail");
    outcome.diagnostics
}

fn assert_parse_error(src: &str) -> ParseError {
    let mut output = Vec::new();
    match run(src, &mut output) {
        Ok(_) => panic!("Script parsed but was expected not to"),
        Err(e) => e,
    }
}

#[test]
fn numeric_kinds_promote_implicitly() {
    assert_values("+(1, true);", &[Value::Integer(2)]);
    assert_values("+(1, 2.0);", &[Value::Float(3.0)]);
    assert_values("+('a', 1);", &[Value::Integer(98)]);
    assert_values("*(false, 7);", &[Value::Integer(0)]);
    assert_values("-(2.5, 'a');", &[Value::Float(-94.5)]);
}

#[test]
fn division_is_exact_or_float() {
    assert_values("/(7, 2);", &[Value::Float(3.5)]);
    assert_values("/(6, 2);", &[Value::Integer(3)]);
    assert_values("/(-(9), 3);", &[Value::Integer(-3)]);
    assert_values("/(1.0, 4);", &[Value::Float(0.25)]);
}

#[test]
fn division_by_any_zero_fails() {
    for src in ["/(5, 0);", "/(5, false);", "/(5, '\\0');", "/(5, 0.0);", "/(\"a\", 0);"] {
        let outcome = run_script(src);
        assert!(outcome.values.is_empty(), "{src}");
        assert_eq!(outcome.diagnostics, vec![RuntimeError::DivideByZero { line: 1 }], "{src}");
    }
}

#[test]
fn operator_chains_fold_left_to_right() {
    assert_values("+ $ + (1, 2, 3);", &[Value::Integer(6)]);
    assert_values("+ $ * (2, 3, 4);", &[Value::Integer(20)]);
    assert_values("* 2 $ - (2, 3, 4, 10);", &[Value::Integer(14)]);
    assert_values("+ $ - (1, 2);", &[Value::Integer(-3)]);
    assert_values("- 0 $ + (5, 3);", &[Value::Integer(-2)]);
    assert_values("+(1, 2, 3, 4);", &[Value::Integer(10)]);
    assert_values("+(5);", &[Value::Integer(5)]);
}

#[test]
fn arity_annotations_are_checked() {
    assert_values("+ 2 (1, 2, 3);", &[Value::Integer(6)]);

    let errors = assert_failure("+ 1 (1, 2, 3);");
    assert_eq!(errors,
               vec![RuntimeError::OperandCountMismatch { expected: 2,
                                                         found:    3,
                                                         line:     1, }]);

    let errors = assert_failure("+ 3 $ - (1, 2);");
    assert_eq!(errors,
               vec![RuntimeError::OperandCountMismatch { expected: 4,
                                                         found:    2,
                                                         line:     1, }]);

    let errors = assert_failure("+();");
    assert!(matches!(errors[0], RuntimeError::OperandCountMismatch { found: 0, .. }));
}

#[test]
fn single_operand_minus_negates() {
    assert_values("-(5);", &[Value::Integer(-5)]);
    assert_values("-(2.5);", &[Value::Float(-2.5)]);
    assert_values("-(true);", &[Value::Integer(-1)]);
    assert!(matches!(assert_failure("-(\"a\");")[0], RuntimeError::TypeMismatch { .. }));
}

#[test]
fn plus_concatenates_strings() {
    assert_values("+(\"a\", 1, 'b', true);", &[Value::from("a1btrue")]);
    assert_values("+(1, \"a\");", &[Value::from("1a")]);
    assert_values("+(1.0, \"x\");", &[Value::from("1.0x")]);
    assert!(matches!(assert_failure("[](2) -> a; +(\"a\", a);")[0],
                     RuntimeError::TypeMismatch { .. }));
}

#[test]
fn unsupported_kinds_are_type_mismatches() {
    for src in ["-(\"a\", 1);", "&&(true, 1);", "==(\"1\", 1);", "<(\"a\", \"b\");", "**(\"a\", 2);"] {
        let errors = assert_failure(src);
        assert!(matches!(errors[0], RuntimeError::TypeMismatch { line: 1, .. }), "{src}");
    }
}

#[test]
fn comparisons_and_equality() {
    assert_values("<(1, 2.5);", &[Value::Boolean(true)]);
    assert_values(">=(2, 2);", &[Value::Boolean(true)]);
    assert_values(">(1, 2);", &[Value::Boolean(false)]);
    assert_values("==('a', 97);", &[Value::Boolean(true)]);
    assert_values("==(1, true);", &[Value::Boolean(true)]);
    assert_values("==(\"ab\", \"ab\");", &[Value::Boolean(true)]);
    assert_values("!=(\"a\", \"b\");", &[Value::Boolean(true)]);
    assert_values("<(1, 2, 3);", &[Value::Boolean(true)]);
}

#[test]
fn boolean_logic() {
    assert_values("&&(true, false);", &[Value::Boolean(false)]);
    assert_values("||(false, true);", &[Value::Boolean(true)]);
    assert_values("|| $ && (false, true, false);", &[Value::Boolean(false)]);
    assert_values("!(true);", &[Value::Boolean(false)]);
    assert!(matches!(assert_failure("!(1);")[0], RuntimeError::TypeMismatch { .. }));
}

#[test]
fn power_operator() {
    assert_values("**(2, 10);", &[Value::Integer(1024)]);
    assert_values("**(2, -(1));", &[Value::Float(0.5)]);
    assert_values("**(4.0, 0.5);", &[Value::Float(2.0)]);
    assert_eq!(assert_failure("**(10, 100);"), vec![RuntimeError::Overflow { line: 1 }]);
}

#[test]
fn integer_overflow_is_reported() {
    assert_eq!(assert_failure("*(9223372036854775807, 2);"),
               vec![RuntimeError::Overflow { line: 1 }]);
    assert_eq!(assert_failure("+(9223372036854775807, 1);"),
               vec![RuntimeError::Overflow { line: 1 }]);
}

#[test]
fn unary_identity_and_operand_count() {
    assert_values("=(5);", &[Value::Integer(5)]);
    let errors = assert_failure("1, 2 -> a_b; =(a_b);");
    assert_eq!(errors,
               vec![RuntimeError::OperandCountMismatch { expected: 1,
                                                         found:    2,
                                                         line:     1, }]);
}

#[test]
fn print_joins_arguments_with_commas() {
    let outcome = assert_success("print(1, \"a\", true);");
    assert_eq!(outcome.output, "1,a,true\n");
    assert!(outcome.values.is_empty());

    assert_eq!(assert_success("print(2.0, 'c', 0.5);").output, "2.0,c,0.5\n");
    assert_eq!(assert_success("print();").output, "\n");
    assert_eq!(assert_success("1, 2 -> a_b; print(a_b, +(a, b));").output, "1,2,3\n");
}

#[test]
fn print_rejects_arrays_and_writes_nothing() {
    let outcome = run_script("[](2) -> a; print(1, a);");
    assert_eq!(outcome.output, "");
    assert!(matches!(outcome.diagnostics[0], RuntimeError::TypeMismatch { .. }));
}

#[test]
fn array_creation_assignment_and_access() {
    assert_values("[](3) -> arr; 5 -> arr[1]; arr[1];", &[Value::Integer(5)]);
    assert_values("[](3) -> arr; arr[2];", &[Value::Integer(0)]);

    let outcome = run_script("[](3) -> arr;\narr[5];");
    assert!(outcome.values.is_empty());
    assert_eq!(outcome.diagnostics,
               vec![RuntimeError::IndexOutOfBounds { length: 3,
                                                     index:  5,
                                                     line:   2, }]);
}

#[test]
fn nested_arrays_share_inner_levels() {
    assert_values("[](2, 3) -> grid; 7 -> grid[1][2]; grid[1][2], grid[0][2];",
                  &[Value::Integer(7), Value::Integer(0)]);
    assert_values("[](2, 2) -> grid; grid[1] -> row; 9 -> row[0]; grid[1][0];",
                  &[Value::Integer(9)]);
    assert_values("[](2) -> a; a -> b; 4 -> b[0]; a[0];", &[Value::Integer(4)]);

    let outcome = assert_success("+ $ [] (1, 1, 2);");
    assert_eq!(outcome.values.len(), 1);
    assert_eq!(outcome.values[0].to_string(), "[[0, 0], [0, 0]]");
}

#[test]
fn arrays_holding_themselves_render_and_compare() {
    let outcome = assert_success("[](1) -> a; a -> a[0]; [](1) -> b; b -> b[0]; a, b;");

    assert_eq!(outcome.values.len(), 2);
    assert_eq!(outcome.values[0].to_string(), "[[...]]");
    assert_eq!(outcome.values[0], outcome.values[1]);

    let outcome = assert_success("[](2) -> a; [](1) -> b; b -> a[1]; a -> b[0]; a, b;");
    assert_eq!(outcome.values[0].to_string(), "[0, [[...]]]");
    assert_eq!(outcome.values[1].to_string(), "[[0, [...]]]");
    assert_ne!(outcome.values[0], outcome.values[1]);
}

#[test]
fn oversized_arrays_are_reported() {
    for src in ["[](9223372036854775807);", "[](65536, 65536);", "[](9223372036854775807, 0);"] {
        let outcome = run_script(src);
        assert!(outcome.values.is_empty(), "{src}");
        assert_eq!(outcome.diagnostics,
                   vec![RuntimeError::ArrayTooLarge { limit: MAX_ARRAY_SLOTS,
                                                      line:  1, }],
                   "{src}");
    }

    let outcome = run_script("[](9223372036854775807);\nprint(\"next\");");
    assert_eq!(outcome.output, "next\n");
    assert_eq!(outcome.diagnostics.len(), 1);

    assert_eq!(assert_success("[](0, 9223372036854775807);").values[0].to_string(), "[]");
}

#[test]
fn array_errors() {
    assert!(matches!(assert_failure("5 -> missing[0];")[0],
                     RuntimeError::ArrayNotInstantiated { ref name, .. } if name == "missing"));
    assert!(matches!(assert_failure("1 -> x; 2 -> x[0];")[0],
                     RuntimeError::NotAnArray { found: "integer", .. }));
    assert!(matches!(assert_failure("1 -> x; x[0];")[0],
                     RuntimeError::NotAnArray { found: "integer", .. }));
    assert!(matches!(assert_failure("[](2) -> a; a[\"0\"];")[0],
                     RuntimeError::IndexNotInteger { .. }));
    assert!(matches!(assert_failure("[](2) -> a; a[-(1)];")[0],
                     RuntimeError::IndexOutOfBounds { index: -1, .. }));
    assert!(matches!(assert_failure("[](2) -> a; 1 -> a[0][0];")[0],
                     RuntimeError::NotAnArray { .. }));
    assert!(matches!(assert_failure("1, 2 -> a_b; a_b[0];")[0],
                     RuntimeError::NotASingleVariable { found: 2, .. }));
    assert!(matches!(assert_failure("[](-(1));")[0], RuntimeError::TypeMismatch { .. }));
    assert!(matches!(assert_failure("[](\"a\");")[0], RuntimeError::TypeMismatch { .. }));
}

#[test]
fn multi_assignment() {
    assert_values("1, 2 -> a_b; a_b;", &[Value::Integer(1), Value::Integer(2)]);
    assert_values("1, 2 -> a_b; b, a -> a_b; a_b;", &[Value::Integer(2), Value::Integer(1)]);

    assert_eq!(assert_failure("1 -> a_b;"),
               vec![RuntimeError::ArgumentCountMismatch { expected: 2,
                                                          found:    1,
                                                          line:     1, }]);
}

#[test]
fn functions_return_values() {
    assert_values("func add(a, b) { return +(a, b); } add(1, 2);", &[Value::Integer(3)]);
    assert_values("func pair() { return 1, 2; } pair() -> x_y; y;", &[Value::Integer(2)]);
    assert_values("func noop() { 1; } noop();", &[]);
    assert_values("func inner() { return 1; } func outer() { inner(); return 2; } outer();",
                  &[Value::Integer(2)]);
}

#[test]
fn recursion() {
    let src = "
        func fact(n) {
            if (<=(n, 1)) { return 1; }
            return *(n, fact(-(n, 1)));
        }
        fact(10);
    ";
    assert_values(src, &[Value::Integer(3_628_800)]);
}

#[test]
fn redeclaration_replaces_parameters() {
    assert_values("func f(a) { return a; } func f(a, b) { return +(a, b); } f(1, 2);",
                  &[Value::Integer(3)]);
}

#[test]
fn function_call_errors() {
    assert_eq!(assert_failure("nope(1);"),
               vec![RuntimeError::UndeclaredFunction { name: "nope".to_string(),
                                                       line: 1, }]);
    assert_eq!(assert_failure("1 -> f; f();"),
               vec![RuntimeError::NotAFunction { name: "f".to_string(),
                                                 line: 1, }]);
    assert_eq!(assert_failure("func f(a) { return a; } f(1, 2);"),
               vec![RuntimeError::ArityMismatch { name:     "f".to_string(),
                                                  expected: 1,
                                                  found:    2,
                                                  line:     1, }]);
}

#[test]
fn print_cannot_be_declared() {
    let outcome = run_script("func print(x) { return x; }\nprint;\nprint(\"ok\");");

    assert_eq!(outcome.output, "ok\n");
    assert_eq!(outcome.diagnostics,
               vec![RuntimeError::ReservedName { name: "print".to_string(),
                                                 line: 1, },
                    RuntimeError::UndeclaredVariable { name: "print".to_string(),
                                                       line: 2, }]);
}

#[test]
fn return_outside_function() {
    assert_eq!(assert_failure("return 1;"),
               vec![RuntimeError::ReturnOutsideFunction { line: 1 }]);

    let outcome = run_script("if (true) { return 1; } \"after\";");
    assert_eq!(outcome.values, vec![Value::from("after")]);
    assert_eq!(outcome.diagnostics,
               vec![RuntimeError::ReturnOutsideFunction { line: 1 }]);
}

#[test]
fn return_unwinds_nested_control_flow() {
    let src = "
        func find() {
            [](1) -> i;
            while (<(i[0], 10)) {
                +(i[0], 1) -> i[0];
                if (==(i[0], 4)) {
                    return i[0], \"found\";
                }
            }
            return -(1);
        }
        find();
        \"after\";
    ";
    assert_values(src,
                  &[Value::Integer(4), Value::from("found"), Value::from("after")]);
}

#[test]
fn callee_sees_caller_locals() {
    let src = "func show() { return secret; }\n\
               func caller() { 42 -> secret; return show(); }\n\
               caller();\n\
               show();";
    let outcome = run_script(src);

    assert_eq!(outcome.values, vec![Value::Integer(42)]);
    assert_eq!(outcome.diagnostics,
               vec![RuntimeError::UndeclaredVariable { name: "secret".to_string(),
                                                       line: 1, }]);
}

#[test]
fn while_scope_persists_across_iterations_only() {
    let src = "
        [](1) -> n;
        while (<(n[0], 3)) {
            +(n[0], 1) -> n[0];
            if (==(n[0], 1)) { print(\"first\"); } else { print(carried); }
            n[0] -> carried;
        }
        carried;
    ";
    let outcome = run_script(src);

    assert_eq!(outcome.output, "first\n1\n2\n");
    assert!(outcome.values.is_empty());
    assert!(matches!(&outcome.diagnostics[..],
                     [RuntimeError::UndeclaredVariable { name, .. }] if name == "carried"));
}

#[test]
fn while_guard_reads_enclosing_scope() {
    let src = "
        0 -> i;
        [](1) -> runs;
        while (<(runs[0], 2)) {
            +(runs[0], 1) -> runs[0];
            10 -> i;
        }
        i, runs[0];
    ";
    assert_values(src, &[Value::Integer(0), Value::Integer(2)]);
}

#[test]
fn conditions_use_equality_with_true() {
    assert_eq!(assert_success("if (1) { print(\"one\"); }").output, "one\n");
    assert_eq!(assert_success("if (0) { print(\"if\"); } elif (true) { print(\"elif\"); } else { print(\"else\"); }")
                   .output,
               "elif\n");
    assert_eq!(assert_success("if (false) { print(\"if\"); } elif (0.0) { print(\"elif\"); } else { print(\"else\"); }")
                   .output,
               "else\n");

    assert!(matches!(assert_failure("if (\"x\") { }")[0], RuntimeError::TypeMismatch { .. }));
    assert_eq!(assert_failure("func nothing() { } if (nothing()) { }"),
               vec![RuntimeError::MissingValue { line: 1 }]);
}

#[test]
fn branches_and_blocks_open_scopes() {
    assert!(matches!(&assert_failure("if (true) { 1 -> inner; } inner;")[..],
                     [RuntimeError::UndeclaredVariable { name, .. }] if name == "inner"));
    assert!(matches!(&assert_failure("{ 1 -> inner; } inner;")[..],
                     [RuntimeError::UndeclaredVariable { name, .. }] if name == "inner"));
    assert_values("1 -> x; { 2 -> x; } x;", &[Value::Integer(1)]);
    assert_values("[](1) -> a; { 2 -> a[0]; } a[0];", &[Value::Integer(2)]);
}

#[test]
fn failing_statements_do_not_stop_the_program() {
    let outcome = run_script("print(1);\n+(x, 1);\nprint(2);");

    assert_eq!(outcome.output, "1\n2\n");
    assert_eq!(outcome.diagnostics,
               vec![RuntimeError::UndeclaredVariable { name: "x".to_string(),
                                                       line: 2, }]);
}

#[test]
fn errors_report_source_lines() {
    let errors = assert_failure("// comment\n+(1,\n  x);");
    assert_eq!(errors,
               vec![RuntimeError::UndeclaredVariable { name: "x".to_string(),
                                                       line: 3, }]);
}

#[test]
fn parse_errors() {
    assert!(matches!(assert_parse_error("+(1, 2)"),
                     ParseError::UnexpectedEndOfInput { line: 1, .. }));
    assert_eq!(assert_parse_error("\"abc"), ParseError::UnterminatedString { line: 1 });
    assert!(matches!(assert_parse_error("#;"), ParseError::UnexpectedCharacter { .. }));
    assert_eq!(assert_parse_error("99999999999999999999;"),
               ParseError::LiteralTooLarge { line: 1 });
    assert!(matches!(assert_parse_error("1 -> ;"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_parse_error("func (a) { }"), ParseError::UnexpectedToken { .. }));
}
