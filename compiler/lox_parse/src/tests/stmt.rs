use lox_ir::{Expr, Literal, Stmt};
use pretty_assertions::assert_eq;

use super::{errors, parse_source, render};

#[test]
fn print_and_expression_statements() {
    assert_eq!(
        render("print 1; x;"),
        vec!["(print 1)", "(; x)"]
    );
}

#[test]
fn var_with_and_without_initializer() {
    assert_eq!(render("var a; var b = 2;"), vec!["(var a)", "(var b 2)"]);
}

#[test]
fn block_and_nested_block() {
    assert_eq!(
        render("{ var a = 1; { print a; } }"),
        vec!["(block (var a 1) (block (print a)))"]
    );
}

#[test]
fn if_else_binds_to_nearest_if() {
    assert_eq!(
        render("if (a) if (b) print 1; else print 2;"),
        vec!["(if a (if b (print 1) (print 2)))"]
    );
}

#[test]
fn while_loop() {
    assert_eq!(
        render("while (i < 3) i = i + 1;"),
        vec!["(while (< i 3) (; (= i (+ i 1))))"]
    );
}

#[test]
fn for_loop_desugars_into_while_in_block() {
    assert_eq!(
        render("for (var i = 0; i < 3; i = i + 1) print i;"),
        vec!["(block (var i 0) (while (< i 3) (block (print i) (; (= i (+ i 1))))))"]
    );
}

#[test]
fn for_loop_with_all_clauses_omitted() {
    let out = parse_source("for (;;) print 1;");
    assert!(out.errors.is_empty());
    assert_eq!(out.statements.len(), 1);
    match &out.statements[0] {
        Stmt::While { condition, .. } => {
            assert_eq!(condition, &Expr::Literal(Literal::Bool(true)));
        }
        other => panic!("expected bare while, got {other:?}"),
    }
}

#[test]
fn for_loop_with_expression_initializer() {
    assert_eq!(
        render("for (i = 0; i < 1;) print i;"),
        vec!["(block (; (= i 0)) (while (< i 1) (print i)))"]
    );
}

#[test]
fn function_declaration_and_return() {
    assert_eq!(
        render("fun add(a, b) { return a + b; } fun nothing() { return; }"),
        vec!["(fun add (a b) (return (+ a b)))", "(fun nothing () (return))"]
    );
}

#[test]
fn function_declaration_errors() {
    assert_eq!(errors("fun (a) {}"), vec![(1, "Expect function name.".to_owned())]);
    assert_eq!(
        errors("fun f a) {}"),
        vec![(1, "Expect '(' after function name.".to_owned())]
    );
    assert_eq!(errors("fun f(1) {}"), vec![(1, "Expect parameter name.".to_owned())]);
    assert_eq!(
        errors("fun f(a {}"),
        vec![(1, "Expect ')' after parameters.".to_owned())]
    );
    assert_eq!(
        errors("fun f(a) print a;"),
        vec![(1, "Expect '{' before function body.".to_owned())]
    );
}

#[test]
fn missing_semicolons() {
    assert_eq!(errors("print 1"), vec![(1, "Expect ';' after value.".to_owned())]);
    assert_eq!(
        errors("var a = 1"),
        vec![(1, "Expect ';' after variable declaration.".to_owned())]
    );
    assert_eq!(errors("a"), vec![(1, "Expect ';' after expression.".to_owned())]);
    assert_eq!(
        errors("fun f() { return 1 }"),
        vec![
            (1, "Expect ';' after return value.".to_owned()),
            (1, "Expect '}' after block.".to_owned()),
        ]
    );
}

#[test]
fn missing_variable_name() {
    assert_eq!(errors("var 1 = 2;"), vec![(1, "Expect variable name.".to_owned())]);
}

#[test]
fn unclosed_block() {
    assert_eq!(errors("{ print 1;"), vec![(1, "Expect '}' after block.".to_owned())]);
}
