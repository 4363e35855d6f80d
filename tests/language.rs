use std::fs;

use terracalc::Calculator;
use walkdir::WalkDir;

/// Every `.calc` file under `tests/scripts` is one session. Each line is
/// `input => expected output`; blank lines and `#` comments are skipped.
#[test]
fn session_transcripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let mut calculator = Calculator::new();

        for (i, (input, expected)) in extract_transcript(&content).into_iter().enumerate() {
            count += 1;
            let output = calculator.evaluate(&input);
            assert_eq!(output,
                       expected,
                       "line {} of {:?}: `{}` gave `{}`, expected `{}`",
                       i + 1,
                       path,
                       input,
                       output,
                       expected);
        }
    }

    assert!(count > 0, "No transcript lines found in tests/scripts");
}

fn extract_transcript(content: &str) -> Vec<(String, String)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .map(|line| {
               let (input, expected) = line.split_once("=>")
                                           .unwrap_or_else(|| panic!("Missing '=>' in `{line}`"));
               (input.trim().to_string(), expected.trim().to_string())
           })
           .collect()
}

fn assert_output(calculator: &mut Calculator, src: &str, expected: &str) {
    assert_eq!(calculator.evaluate(src), expected, "evaluating `{src}`");
}

#[test]
fn precedence_and_associativity() {
    let mut calculator = Calculator::new();
    assert_output(&mut calculator, "2+3*4", "14");
    assert_output(&mut calculator, "2^3^2", "512");
    assert_output(&mut calculator, "(2^3)^2", "64");
}

#[test]
fn declarations_and_assignments_have_no_output() {
    let mut calculator = Calculator::new();
    assert_output(&mut calculator, "x = 5", "");
    assert!(!calculator.has_result());
    assert_output(&mut calculator, "sq(v) = v * v", "");
    assert!(!calculator.has_result());
    assert_output(&mut calculator, "sq(x)", "25");
    assert!(calculator.has_result());
    assert_eq!(calculator.result(), Some(25.0));
}

#[test]
fn empty_line_produces_nothing() {
    let mut calculator = Calculator::new();
    assert_output(&mut calculator, "", "");
    assert_output(&mut calculator, " \t ", "");
    assert!(!calculator.has_result());
}

#[test]
fn failure_clears_has_result() {
    let mut calculator = Calculator::new();
    assert_output(&mut calculator, "1 + 1", "2");
    assert!(calculator.has_result());
    assert_output(&mut calculator, "1 +", "Syntax Error!");
    assert!(!calculator.has_result());
    assert_output(&mut calculator, "R", "2");
    assert!(calculator.has_result());
}

#[test]
fn last_result_chains() {
    let mut calculator = Calculator::new();
    assert_output(&mut calculator, "6 * 7", "42");
    assert_output(&mut calculator, "R", "42");
    assert_output(&mut calculator, "R + 1", "43");
    assert_output(&mut calculator, "R / 43", "1");
}

#[test]
fn derived_functions_work() {
    let mut calculator = Calculator::new();
    let sqrt = calculator.try_evaluate("sqrt(9)").unwrap().unwrap();
    assert!((sqrt - 3.0).abs() < 1e-12);
    let log = calculator.try_evaluate("log(2, 8)").unwrap().unwrap();
    assert!((log - 3.0).abs() < 1e-12);
    let root = calculator.try_evaluate("root(27, 3)").unwrap().unwrap();
    assert!((root - 3.0).abs() < 1e-12);
}

#[test]
fn unicode_pi_matches_ascii_alias() {
    let mut calculator = Calculator::new();
    let unicode = calculator.try_evaluate("π").unwrap();
    let ascii = calculator.try_evaluate("pi").unwrap();
    assert_eq!(unicode, ascii);
    assert_eq!(ascii, Some(std::f64::consts::PI));
}

#[test]
fn error_messages_are_fixed() {
    let mut calculator = Calculator::new();
    assert_output(&mut calculator, "1 / 0", "Value Error! Division by zero is undefined.");
    assert_output(&mut calculator, "foo", "Undefined name 'foo'!");
    assert_output(&mut calculator, "2 ? 2", "Syntax Error!");
    assert_output(&mut calculator, "f(x) = f(x)", "");
    assert_output(&mut calculator, "f(0)", "Recursion Error!");
    assert_output(&mut calculator, "sin(1, 2)", "Value Error! Invalid arity for function call.");
}

#[test]
fn trig_natives_are_installed() {
    let mut calculator = Calculator::new();
    assert_output(&mut calculator, "sin(0)", "0");
    assert_output(&mut calculator, "cos(0)", "1");
    assert_output(&mut calculator, "tanh(0)", "0");
    assert_output(&mut calculator, "ln(1)", "0");
    assert_output(&mut calculator, "abs(-2.5)", "2.5");
    assert_output(&mut calculator, "atan(0) + asin(0) + sinh(0)", "0");
    assert_output(&mut calculator, "acos(1) + tan(0) + cosh(0)", "1");
}
