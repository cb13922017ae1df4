use pretty_assertions::assert_eq;

use crate::common::{run_in, session};

#[test]
fn declarations_accumulate_across_runs() {
    let mut session = session();
    run_in(&mut session, "var greeting = \"hi\";");
    run_in(&mut session, "fun greet(name) { return greeting + \" \" + name; }");
    let outcome = run_in(&mut session, "print greet(\"lox\");");
    assert_eq!(outcome.stdout, "hi lox\n");
}

#[test]
fn a_syntax_error_line_does_not_poison_the_next_after_reset() {
    let mut session = session();
    let bad = run_in(&mut session, "print ;");
    assert!(bad.had_error);
    session.reset_compile_error();

    let good = run_in(&mut session, "print 1;");
    assert_eq!(good.stdout, "1\n");
    assert!(!good.had_error);
}

#[test]
fn reset_keeps_runtime_flag() {
    let mut session = session();
    run_in(&mut session, "print -nil;");
    session.reset_compile_error();
    assert!(session.had_runtime_error());
}

#[test]
fn globals_survive_a_runtime_error() {
    let mut session = session();
    let failed = run_in(&mut session, "var kept = 1; print undefined_name;");
    assert!(failed.had_runtime_error);
    let outcome = run_in(&mut session, "print kept;");
    assert_eq!(outcome.stdout, "1\n");
}

#[test]
fn diagnostics_are_taken_once() {
    let mut session = session();
    session.run("print ;");
    assert_eq!(session.take_diagnostics().len(), 1);
    assert!(session.take_diagnostics().is_empty());
}
