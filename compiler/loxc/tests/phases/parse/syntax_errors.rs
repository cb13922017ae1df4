use pretty_assertions::assert_eq;

use crate::common::run;

#[test]
fn missing_expression_reports_at_token() {
    let outcome = run("print ;");
    assert_eq!(
        outcome.diagnostics,
        vec!["[line 1] error[E1002] at ';': Expect expression.".to_owned()]
    );
    assert!(outcome.had_error);
    assert_eq!(outcome.exit_code, Some(65));
}

#[test]
fn missing_semicolon_at_end_of_input() {
    let outcome = run("print 1");
    assert_eq!(
        outcome.diagnostics,
        vec!["[line 1] error[E1001] at end: Expect ';' after value.".to_owned()]
    );
}

#[test]
fn invalid_assignment_target() {
    let outcome = run("var a; var b;\na + b = 3;");
    assert_eq!(
        outcome.diagnostics,
        vec!["[line 2] error[E1003] at '=': Invalid assignment target.".to_owned()]
    );
}

#[test]
fn lex_errors_are_reported_with_line_only() {
    let outcome = run("print 1;\n@\nprint 2;");
    assert_eq!(
        outcome.diagnostics,
        vec!["[line 2] error[E0002]: Unexpected character '@'.".to_owned()]
    );
    assert!(outcome.had_error);
}

#[test]
fn unterminated_string_reports_its_start_line() {
    let outcome = run("print 1;\n\"never\nclosed");
    assert_eq!(
        outcome.diagnostics,
        vec!["[line 2] error[E0001]: Unterminated string.".to_owned()]
    );
}

#[test]
fn nothing_runs_when_any_statement_fails_to_parse() {
    let outcome = run("print \"before\";\nprint ;\nprint \"after\";");
    assert_eq!(outcome.stdout, "");
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(!outcome.had_runtime_error);
}

#[test]
fn recovery_reports_each_broken_statement() {
    let outcome = run("var = 1;\nprint (;\nvar ok = 2;\nfun (a) {}");
    assert_eq!(
        outcome.diagnostics,
        vec![
            "[line 1] error[E1001] at '=': Expect variable name.".to_owned(),
            "[line 2] error[E1002] at ';': Expect expression.".to_owned(),
            "[line 4] error[E1001] at '(': Expect function name.".to_owned(),
        ]
    );
}

#[test]
fn lex_and_parse_errors_are_reported_together() {
    let outcome = run("#\nprint ;");
    assert_eq!(
        outcome.diagnostics,
        vec![
            "[line 1] error[E0002]: Unexpected character '#'.".to_owned(),
            "[line 2] error[E1002] at ';': Expect expression.".to_owned(),
        ]
    );
}
