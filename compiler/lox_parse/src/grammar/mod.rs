//! Grammar productions, split by node category.

mod expr;
mod stmt;
