//! Tokenizer for property value expressions.
//!
//! The parser pulls tokens one at a time; nothing is buffered. Unit
//! names are matched case-sensitively and sign characters are always
//! separate operator tokens, never part of a number.

/// Token types produced by the expression tokenizer.
pub mod token;
/// The pull-based tokenizer itself.
pub mod tokenizer;

pub use token::ExprToken;
pub use tokenizer::ExpressionTokenizer;
