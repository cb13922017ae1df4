use pretty_assertions::assert_eq;

use crate::common::{run, stdout_of};

#[test]
fn fibonacci_loop() {
    let source = "
        var a = 0;
        var b = 1;
        for (var i = 0; i < 8; i = i + 1) {
            print a;
            var next = a + b;
            a = b;
            b = next;
        }
    ";
    assert_eq!(stdout_of(source), "0\n1\n1\n2\n3\n5\n8\n13\n");
}

#[test]
fn closures_make_independent_counters() {
    let source = "
        fun make_counter() {
            var count = 0;
            fun counter() { count = count + 1; return count; }
            return counter;
        }
        var first = make_counter();
        var second = make_counter();
        print first();
        print first();
        print second();
    ";
    assert_eq!(stdout_of(source), "1\n2\n1\n");
}

#[test]
fn deep_recursion_completes() {
    let source = "
        fun depth(n) { if (n == 0) return 0; return 1 + depth(n - 1); }
        print depth(5000);
    ";
    assert_eq!(stdout_of(source), "5000\n");
}

#[test]
fn string_building() {
    assert_eq!(
        stdout_of("var s = \"\"; for (var i = 0; i < 3; i = i + 1) s = s + i; print s;"),
        "012\n"
    );
}

#[test]
fn runtime_error_is_line_tagged_and_stops_the_run() {
    let outcome = run("print \"start\";\nprint 1 / 0;\nprint \"unreached\";");
    assert_eq!(outcome.stdout, "start\n");
    assert_eq!(
        outcome.diagnostics,
        vec!["[line 2] error[E6002]: Division by zero.".to_owned()]
    );
    assert!(outcome.had_runtime_error);
    assert!(!outcome.had_error);
    assert_eq!(outcome.exit_code, Some(70));
}

#[test]
fn undefined_variable_names_the_variable() {
    let outcome = run("print missing;");
    assert_eq!(
        outcome.diagnostics,
        vec!["[line 1] error[E6003]: Undefined variable 'missing'.".to_owned()]
    );
}

#[test]
fn arity_mismatch_reports_counts() {
    let outcome = run("fun pair(a, b) {}\npair(1, 2, 3);");
    assert_eq!(
        outcome.diagnostics,
        vec!["[line 2] error[E6005]: Expected 2 arguments but got 3.".to_owned()]
    );
}

#[test]
fn escaped_return_surfaces_as_internal_error() {
    let outcome = run("return 1;");
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(outcome.diagnostics[0].starts_with("[line 1] error[E9001]"));
    assert_eq!(outcome.exit_code, Some(70));
}

#[test]
fn clean_run_has_no_exit_code() {
    let outcome = run("print clock() > 0;");
    assert_eq!(outcome.stdout, "true\n");
    assert_eq!(outcome.exit_code, None);
}
