//! Property value expression language for the Folio XSL-FO formatter.
//!
//! # Scope
//!
//! This crate implements
//! [XSL 1.1 § 5.9 Expressions](https://www.w3.org/TR/xsl11/):
//! - **Tokenizer**: identifiers, literal strings, integers, floats,
//!   percentages, numbers with units, hex color specs, booleans,
//!   `url(...)`, `content-type:`, operators, parentheses, and the
//!   `inherit`/`auto`/`none` keywords.
//! - **Parser/evaluator**: a single-pass recursive-descent evaluator
//!   with one token of lookahead. Parsing an expression directly
//!   produces its value; there is no intermediate tree.
//! - **Function library**
//!   ([§ 5.10 Core Function Library](https://www.w3.org/TR/xsl11/)):
//!   rounding, min/max, color functions, and the property-value lookup
//!   functions, dispatched through an immutable registry.
//! - **Evaluation context**: the collaborator supplying the percent
//!   base, current font size, and by-name property resolution
//!   ([§ 5.10.4 Property Value Functions](https://www.w3.org/TR/xsl11/)).
//!
//! # Not Implemented Here
//!
//! - Layout-dependent functions (`from-table-column`,
//!   `proportional-column-width`, `label-end`, `body-start`,
//!   `merge-property-values`) parse and dispatch but report themselves
//!   unsupported
//! - Resolution of deferred percentage lengths
//! - Property-specific validation of evaluated values

/// The evaluation context collaborator and a map-backed implementation.
pub mod context;
/// The built-in function registry per [XSL 1.1 § 5.10 Core Function Library](https://www.w3.org/TR/xsl11/).
pub mod function;
/// The recursive-descent expression evaluator per [XSL 1.1 § 5.9 Expressions](https://www.w3.org/TR/xsl11/).
pub mod parser;
/// The expression tokenizer per [XSL 1.1 § 5.9 Expressions](https://www.w3.org/TR/xsl11/).
pub mod tokenizer;

// Re-exports for convenience
pub use context::{EvaluationContext, StaticContext};
pub use function::{FunctionDef, FunctionRegistry};
pub use parser::{ExpressionParser, parse};
pub use tokenizer::{ExprToken, ExpressionTokenizer};
