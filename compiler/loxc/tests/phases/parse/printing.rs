use lox_ir::printer::{AstPrinter, RpnPrinter};
use pretty_assertions::assert_eq;

fn statements(source: &str) -> Vec<lox_ir::Stmt> {
    let lexed = lox_lexer::lex(source);
    assert!(lexed.errors.is_empty());
    let parsed = lox_parse::parse(lexed.tokens);
    assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
    parsed.statements
}

fn prefix(source: &str) -> Vec<String> {
    statements(source).iter().map(|s| AstPrinter.stmt(s)).collect()
}

fn rpn(source: &str) -> Vec<String> {
    statements(source).iter().map(|s| RpnPrinter.stmt(s)).collect()
}

#[test]
fn prefix_form_of_nested_expression() {
    assert_eq!(
        prefix("-123 * (45.67);"),
        vec!["(; (* (- 123) (group 45.67)))".to_owned()]
    );
}

#[test]
fn rpn_form_of_arithmetic() {
    assert_eq!(rpn("(1 + 2) * (4 - 3);"), vec!["1 2 + 4 3 - *".to_owned()]);
    assert_eq!(rpn("print -2;"), vec!["2 - print".to_owned()]);
}

#[test]
fn precedence_is_visible_in_the_tree() {
    assert_eq!(
        prefix("1 + 2 * 3 == 7 and !false;"),
        vec!["(; (and (== (+ 1 (* 2 3)) 7) (! false)))".to_owned()]
    );
}

#[test]
fn for_loop_desugars_to_while_in_a_block() {
    assert_eq!(
        prefix("for (var i = 0; i < 2; i = i + 1) print i;"),
        vec![
            "(block (var i 0) (while (< i 2) (block (print i) (; (= i (+ i 1))))))".to_owned()
        ]
    );
}

#[test]
fn function_declaration_shape() {
    assert_eq!(
        prefix("fun add(a, b) { return a + b; }"),
        vec!["(fun add (a b) (return (+ a b)))".to_owned()]
    );
}
