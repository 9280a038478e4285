//! Recursive-descent evaluator for property value expressions.
//!
//! Parsing is evaluation: each grammar level returns the value of the
//! sub-expression it consumed, so there is no expression tree.

/// The parser itself.
pub mod parser;

pub use parser::{ExpressionParser, parse};
