//! Front-end phase tests: diagnostics from the lexer and parser, recovery,
//! and the AST printers behind `lox parse`.

mod printing;
mod syntax_errors;
