use pretty_assertions::assert_eq;

use super::{errors, parse_source};

#[test]
fn keeps_finding_errors_after_synchronizing() {
    let source = "print 1;\nvar = 2;\nprint (3;\nprint 4;\nvar x = ;\n";
    assert_eq!(
        errors(source),
        vec![
            (2, "Expect variable name.".to_owned()),
            (3, "Expect ')' after expression.".to_owned()),
            (5, "Expect expression.".to_owned()),
        ]
    );
}

#[test]
fn good_statements_survive_around_errors() {
    let out = parse_source("print 1;\nprint ;\nprint 2;");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.statements.len(), 2);
}

#[test]
fn stops_before_statement_keyword() {
    // No `;` after the bad expression: recovery resumes at `print`.
    let out = parse_source("1 + + 2\nprint 3;");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.statements.len(), 1);
}

#[test]
fn errors_inside_blocks_are_recovered_locally() {
    let out = parse_source("{ print ; print 1; }\nprint 2;");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.statements.len(), 2);
}

#[test]
fn error_at_end_of_input() {
    let out = parse_source("print");
    assert_eq!(out.errors.len(), 1);
    let diag = out.diagnostics().next().map(|d| d.to_string());
    assert_eq!(
        diag.as_deref(),
        Some("[line 1] error[E1002] at end: Expect expression.")
    );
}

#[test]
fn terminates_on_garbage() {
    let out = parse_source(") ) ) ; } } else");
    assert!(out.has_errors());
    assert!(out.statements.is_empty());
}
