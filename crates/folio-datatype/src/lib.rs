//! Property value model for the Folio XSL-FO formatter.
//!
//! # Scope
//!
//! This crate implements the datatypes produced by evaluating property
//! value expressions ([XSL 1.1 § 5.9 Expressions](https://www.w3.org/TR/xsl11/)):
//! - **Property values**: numbers, lengths (fixed and deferred
//!   percentages), times, frequencies, colors, strings, identifiers,
//!   booleans, URIs, mime types, and flat value lists.
//! - **Units**: the measurement vocabulary the expression language
//!   accepts (`em`, `cm`, `mm`, `in`, `pt`, `pc`, `px`, `s`, `ms`,
//!   `Hz`, `kHz`), matched case-sensitively.
//! - **Numerics**: dimension-checked arithmetic per
//!   [XSL 1.1 § 5.9.6 Absolute Numerics](https://www.w3.org/TR/xsl11/)
//!   (addition demands equal unit powers, multiplication demands a
//!   dimensionless operand, and so on).
//! - **Colors**: hex and named system colors, and the `rgb()` component
//!   form.
//!
//! # Not Implemented Here
//!
//! - Resolution of deferred percentage lengths against a layout base
//! - Conversion tables between absolute units
//! - Property-specific validation of evaluated values

/// Color values: hex parsing, named system colors, rgb components.
pub mod color;
/// The diagnostic type reported by tokenizing, parsing, and evaluation.
pub mod error;
/// Dimension tags and dimension-checked arithmetic over property values.
pub mod numeric;
/// The evaluated property value model.
pub mod property;
/// Measurement units accepted by the expression language.
pub mod units;

// Re-exports for convenience
pub use color::ColorValue;
pub use error::PropertyError;
pub use numeric::{Dimension, Numeric};
pub use property::{Length, PercentBase, Property};
pub use units::{AbsoluteUnit, FrequencyUnit, TimeUnit, Unit};
